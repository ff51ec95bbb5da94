//! Crossterm-backed implementation of the console capability.

use std::io::{stdin, stdout, Write};

use crossterm::cursor::{MoveTo, MoveToPreviousLine};
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::style::{Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::{execute, queue};

use termkit_core::console::{ClearUnit, Console};
use termkit_core::error::Result;
use termkit_core::style::StyledText;

use crate::colors::StylePalette;

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
    }
}

/// The real terminal console.
pub struct Terminal {
    palette: StylePalette,
}

impl Terminal {
    pub fn new(palette: StylePalette) -> Self {
        Self { palette }
    }

    fn read_line_echoed(&self) -> Result<Option<String>> {
        let mut line = String::new();
        let bytes_read = stdin().read_line(&mut line)?;

        // Zero bytes is end-of-stream; an empty line still carries its newline.
        if bytes_read == 0 {
            return Ok(None);
        }

        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }

        Ok(Some(line))
    }

    fn read_line_secure(&self) -> Result<Option<String>> {
        let entry = {
            enable_raw_mode()?;
            let _raw_mode_guard = RawModeGuard; // When this goes out of scope, raw mode is disabled
            read_keys_without_echo()?
        };

        // Enter is swallowed in raw mode; complete the line ourselves.
        execute!(stdout(), Print("\r\n"))?;

        Ok(entry)
    }
}

fn read_keys_without_echo() -> Result<Option<String>> {
    let mut line = String::new();

    loop {
        if let Event::Key(key_event) = event::read()? {
            match key_event.code {
                KeyCode::Enter => return Ok(Some(line)),
                KeyCode::Backspace => {
                    line.pop();
                }
                KeyCode::Char('d') if key_event.modifiers == KeyModifiers::CONTROL => {
                    if line.is_empty() {
                        return Ok(None);
                    }
                }
                KeyCode::Char(c) if key_event.modifiers.is_empty() || key_event.modifiers == KeyModifiers::SHIFT => {
                    line.push(c);
                }
                _ => {}
            }
        }
    }
}

impl Console for Terminal {
    fn input(&self, secure: bool) -> Result<Option<String>> {
        if secure {
            self.read_line_secure()
        } else {
            self.read_line_echoed()
        }
    }

    fn output(&self, text: &StyledText, new_line: bool) -> Result<()> {
        let mut stdout = stdout();

        for fragment in text.fragments() {
            match self.palette.color_for(&fragment.style)? {
                Some(color) => queue!(
                    stdout,
                    SetForegroundColor(color),
                    Print(&fragment.text),
                    ResetColor
                )?,
                None => queue!(stdout, Print(&fragment.text))?,
            }
        }

        if new_line {
            queue!(stdout, Print("\n"))?;
        }

        stdout.flush()?;
        Ok(())
    }

    fn report_error(&self, message: &str, new_line: bool) -> Result<()> {
        let mut stderr = std::io::stderr();
        stderr.write_all(message.as_bytes())?;

        if new_line {
            stderr.write_all(b"\n")?;
        }

        stderr.flush()?;
        Ok(())
    }

    fn clear(&self, unit: ClearUnit) -> Result<()> {
        let mut stdout = stdout();

        match unit {
            ClearUnit::Line => execute!(stdout, MoveToPreviousLine(1), Clear(ClearType::CurrentLine))?,
            ClearUnit::Screen => execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?,
        }

        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }
}

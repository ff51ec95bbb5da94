//! Adapter between the `log` facade and a console.
//!
//! Each record is rendered as `"[ LEVEL ] message (file:line)"`, styled by
//! level, and handed straight to the console's output primitive. There is no
//! buffering; the only filter is the minimum-level gate fixed at
//! construction.

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::console::Console;
use crate::error::{Error, Result};
use crate::style::{Style, StyledText};

pub struct ConsoleLogger<C> {
    console: C,
    min_level: LevelFilter,
}

impl<C: Console> ConsoleLogger<C> {
    pub fn new(console: C, min_level: LevelFilter) -> Self {
        Self { console, min_level }
    }
}

impl<C: Console + Send + Sync + 'static> ConsoleLogger<C> {
    /// Installs this logger as the global `log` backend.
    ///
    /// # Errors
    ///
    /// Fails when a global logger was already installed.
    pub fn install(self) -> Result<()> {
        log::set_max_level(self.min_level);
        log::set_boxed_logger(Box::new(self)).map_err(Error::LoggerInstall)
    }
}

fn style_for(level: Level) -> Style {
    match level {
        Level::Trace | Level::Debug => Style::Plain,
        Level::Info => Style::Info,
        Level::Warn => Style::Warning,
        Level::Error => Style::Error,
    }
}

fn render(record: &Record) -> String {
    format!(
        "[ {} ] {} ({}:{})",
        record.level(),
        record.args(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0)
    )
}

impl<C: Console + Send + Sync> Log for ConsoleLogger<C> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = StyledText::styled(render(record), style_for(record.level()));
        // A console that cannot be written to has nowhere to report it.
        let _ = self.console.output(&line, true);
    }

    fn flush(&self) {}
}

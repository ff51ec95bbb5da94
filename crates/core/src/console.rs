//! The console capability every other component depends on.

use crate::error::Result;
use crate::style::StyledText;

/// The unit of prior output a [`Console::clear`] call removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearUnit {
    /// The most recently completed line.
    Line,
    /// The entire screen.
    Screen,
}

/// Minimal read/write/clear/size surface a terminal backend or test double
/// must satisfy.
///
/// Methods take `&self`; backends that record state use interior mutability.
/// All calls are blocking from the caller's point of view.
pub trait Console {
    /// Reads one line of input, without the trailing newline.
    ///
    /// `secure` suppresses echo (password-style input). `Ok(None)` means the
    /// input stream is exhausted, which is distinct from an empty line
    /// (`Ok(Some(""))`).
    fn input(&self, secure: bool) -> Result<Option<String>>;

    /// Writes styled text, optionally followed by a newline.
    fn output(&self, text: &StyledText, new_line: bool) -> Result<()>;

    /// Writes an out-of-band error message to the error channel.
    fn report_error(&self, message: &str, new_line: bool) -> Result<()>;

    /// Removes one unit of prior output.
    fn clear(&self, unit: ClearUnit) -> Result<()>;

    /// Current terminal dimensions as `(width, height)`.
    fn size(&self) -> Result<(u16, u16)>;
}

impl<C: Console + ?Sized> Console for &C {
    fn input(&self, secure: bool) -> Result<Option<String>> {
        (**self).input(secure)
    }

    fn output(&self, text: &StyledText, new_line: bool) -> Result<()> {
        (**self).output(text, new_line)
    }

    fn report_error(&self, message: &str, new_line: bool) -> Result<()> {
        (**self).report_error(message, new_line)
    }

    fn clear(&self, unit: ClearUnit) -> Result<()> {
        (**self).clear(unit)
    }

    fn size(&self) -> Result<(u16, u16)> {
        (**self).size()
    }
}

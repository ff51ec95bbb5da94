//! Conversion from the core color and style model to crossterm colors.

use crossterm::style::Color;
use termkit_core::error::{Error, Result};
use termkit_core::style::{ColorDefinition, Style};
use termkit_core::theme::ThemeDefinition;

/// Trait for converting color definitions to terminal colors
pub trait AsTermColor {
    fn as_crossterm_color(&self) -> Result<Option<Color>>;
}

impl AsTermColor for ColorDefinition {
    fn as_crossterm_color(&self) -> Result<Option<Color>> {
        let defined = usize::from(self.rgb.is_some())
            + usize::from(self.ansi.is_some())
            + usize::from(self.name.is_some());

        if defined > 1 {
            return Err(Error::MultipleColorTypes);
        }

        if let Some((r, g, b)) = self.rgb {
            return Ok(Some(Color::Rgb { r, g, b }));
        }

        if let Some(ansi) = self.ansi {
            return Ok(Some(Color::AnsiValue(ansi)));
        }

        match &self.name {
            Some(name) => named_color(name).map(Some),
            None => Ok(None),
        }
    }
}

fn named_color(name: &str) -> Result<Color> {
    let color = match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "grey" => Color::Grey,
        "darkgrey" => Color::DarkGrey,
        "red" => Color::Red,
        "darkred" => Color::DarkRed,
        "green" => Color::Green,
        "darkgreen" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "darkyellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "darkblue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "darkmagenta" => Color::DarkMagenta,
        "cyan" => Color::Cyan,
        "darkcyan" => Color::DarkCyan,
        "white" => Color::White,
        _ => return Err(Error::UnknownColorName(name.to_string())),
    };

    Ok(color)
}

/// Terminal colors resolved for each semantic style.
///
/// Built once from the loaded theme; styles the theme leaves unset use the
/// built-in palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylePalette {
    pub info: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for StylePalette {
    fn default() -> Self {
        Self {
            info: Color::DarkCyan,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }
}

impl StylePalette {
    /// Resolves the theme's color overrides against the built-in palette.
    ///
    /// # Errors
    ///
    /// Returns an error for a theme color with more than one of `rgb`,
    /// `ansi` or `name` set, or with an unknown color name.
    pub fn from_theme(theme: &ThemeDefinition) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            info: resolve(&theme.info)?.unwrap_or(defaults.info),
            warning: resolve(&theme.warning)?.unwrap_or(defaults.warning),
            error: resolve(&theme.error)?.unwrap_or(defaults.error),
        })
    }

    /// The foreground color for a fragment style; `None` means unstyled.
    pub fn color_for(&self, style: &Style) -> Result<Option<Color>> {
        match style {
            Style::Plain => Ok(None),
            Style::Info => Ok(Some(self.info)),
            Style::Warning => Ok(Some(self.warning)),
            Style::Error => Ok(Some(self.error)),
            Style::Custom(color) => color.as_crossterm_color(),
        }
    }
}

fn resolve(definition: &Option<ColorDefinition>) -> Result<Option<Color>> {
    match definition {
        None => Ok(None),
        Some(definition) => definition.as_crossterm_color(),
    }
}

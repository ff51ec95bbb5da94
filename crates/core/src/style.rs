//! Styled text model.
//!
//! A [`StyledText`] is an ordered sequence of string fragments, each tagged
//! with a [`Style`]. Values are built once and consumed by a single output
//! call; concatenation keeps fragments separate rather than merging them, so
//! a console backend can render each fragment independently.

use std::fmt::{Display, Formatter};
use std::ops::Add;

use serde::Deserialize;

/// A color described by exactly one of `rgb`, `ansi` or `name`.
///
/// Validation of the "exactly one" rule happens when a backend converts the
/// definition to a concrete terminal color, not at construction time, so
/// deserialized values can be reported with a proper error.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ColorDefinition {
    pub rgb: Option<(u8, u8, u8)>,
    pub ansi: Option<u8>,
    pub name: Option<String>,
}

impl ColorDefinition {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            rgb: None,
            ansi: None,
            name: Some(name.into()),
        }
    }
}

/// Semantic rendering category for a text fragment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Plain,
    Info,
    Warning,
    Error,
    Custom(ColorDefinition),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledFragment {
    pub text: String,
    pub style: Style,
}

/// An immutable sequence of styled fragments.
///
/// An empty value is valid and renders as nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledText {
    fragments: Vec<StyledFragment>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single fragment rendered with the given style.
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            fragments: vec![StyledFragment {
                text: text.into(),
                style,
            }],
        }
    }

    /// A single unstyled fragment.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, Style::Plain)
    }

    /// Appends another styled text, preserving fragment order on both sides.
    #[must_use]
    pub fn append(mut self, other: StyledText) -> Self {
        self.fragments.extend(other.fragments);
        self
    }

    pub fn fragments(&self) -> &[StyledFragment] {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// The concatenated fragment text with all styling stripped.
    pub fn unstyled(&self) -> String {
        self.fragments
            .iter()
            .map(|fragment| fragment.text.as_str())
            .collect()
    }
}

impl Add for StyledText {
    type Output = StyledText;

    fn add(self, other: StyledText) -> StyledText {
        self.append(other)
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        StyledText::plain(text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        StyledText::plain(text)
    }
}

impl Display for StyledText {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.unstyled())
    }
}

//! Theme configuration: per-style color overrides.
//!
//! A theme maps the semantic styles to concrete colors. It is loaded from a
//! YAML file; a missing file is not an error, the backend's built-in colors
//! apply. Keys not present in the file fall back the same way.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::style::ColorDefinition;

/// Color overrides for the semantic styles, keyed by style name.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeDefinition {
    pub info: Option<ColorDefinition>,
    pub warning: Option<ColorDefinition>,
    pub error: Option<ColorDefinition>,
}

/// Loads the theme from `path`.
///
/// Returns the default (empty) theme when the file does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, or holds YAML
/// that does not match the theme structure.
pub fn load_theme(path: &str) -> Result<ThemeDefinition> {
    if !Path::new(path).exists() {
        return Ok(ThemeDefinition::default());
    }

    let reader = File::open(path)
        .map_err(|e| Error::io_error("theme".to_string(), path.to_string(), e))?;

    let parsed: serde_yaml::Result<ThemeDefinition> = serde_yaml::from_reader(reader);

    match parsed {
        Ok(theme) => Ok(theme),
        Err(e) => Err(Error::yaml_error(
            "reading".to_string(),
            "theme".to_string(),
            path.to_string(),
            e,
        )),
    }
}

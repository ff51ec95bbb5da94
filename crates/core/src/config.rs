//! Configuration path utilities.
//!
//! Resolves the theme configuration file path and expands shell variables
//! like `~` in user-supplied paths.

/// Default path for the theme configuration file
const DEFAULT_THEME_PATH: &str = "~/.termkit/theme.yml";

/// Resolves the theme file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// theme path. Shell expansions like `~` are resolved.
pub fn get_theme_path(theme_path_arg: &Option<String>) -> String {
    let theme_path = match theme_path_arg {
        Some(theme_path) => theme_path,
        None => DEFAULT_THEME_PATH,
    };

    shellexpand::tilde(theme_path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_theme_path_with_custom_path() {
        let custom_path = Some("/custom/path/theme.yml".to_string());
        let result = get_theme_path(&custom_path);
        assert_eq!(result, "/custom/path/theme.yml");
    }

    #[test]
    fn test_get_theme_path_with_none() {
        let result = get_theme_path(&None);
        // Should expand the tilde in the default path
        assert!(result.contains("theme.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_theme_path_with_tilde() {
        let tilde_path = Some("~/my-theme.yml".to_string());
        let result = get_theme_path(&tilde_path);
        // Should expand the tilde
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-theme.yml"));
    }
}

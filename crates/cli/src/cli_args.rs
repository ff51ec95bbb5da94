//! Command-line argument parsing for the `tk` binary.
//!
//! Only the bootstrap concerns live here (theme location, log verbosity);
//! everything after them is raw tokens for the command dispatcher.

use clap::Parser;
use log::LevelFilter;

/// Command-line arguments for the termkit demonstration binary.
#[derive(Parser, Debug)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the theme definition YAML.
    ///
    /// If not provided, defaults to `~/.termkit/theme.yml`.
    #[arg(long, short = 'c')]
    pub theme_path: Option<String>,

    /// Increase log verbosity.
    ///
    /// The default level is warn; `-v` enables info, `-vv` debug, `-vvv` trace.
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Raw tokens handed to the command dispatcher, program name stripped.
    ///
    /// The first token selects a command (or descends into a group); the
    /// rest are that command's arguments and options.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

impl Args {
    /// The minimum log level selected by the repeated `-v` flag.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["tk"]);

        assert!(args.theme_path.is_none());
        assert_eq!(args.verbose, 0);
        assert!(args.tokens.is_empty());
        assert_eq!(args.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn test_args_theme_path_short_and_long() {
        let args = Args::parse_from(["tk", "-c", "/custom/theme.yml"]);
        assert_eq!(args.theme_path, Some("/custom/theme.yml".to_string()));

        let args = Args::parse_from(["tk", "--theme-path", "/custom/theme.yml"]);
        assert_eq!(args.theme_path, Some("/custom/theme.yml".to_string()));
    }

    #[test]
    fn test_args_verbosity_levels() {
        assert_eq!(Args::parse_from(["tk", "-v"]).log_level(), LevelFilter::Info);
        assert_eq!(
            Args::parse_from(["tk", "-vv"]).log_level(),
            LevelFilter::Debug
        );
        assert_eq!(
            Args::parse_from(["tk", "-vvv"]).log_level(),
            LevelFilter::Trace
        );
    }

    #[test]
    fn test_args_trailing_tokens_keep_hyphen_values() {
        let args = Args::parse_from(["tk", "greet", "world", "-g", "Howdy"]);

        assert_eq!(args.tokens, ["greet", "world", "-g", "Howdy"]);
    }

    #[test]
    fn test_args_bootstrap_flags_before_tokens() {
        let args = Args::parse_from(["tk", "-v", "-c", "theme.yml", "sub", "test", "foo"]);

        assert_eq!(args.theme_path, Some("theme.yml".to_string()));
        assert_eq!(args.verbose, 1);
        assert_eq!(args.tokens, ["sub", "test", "foo"]);
    }
}

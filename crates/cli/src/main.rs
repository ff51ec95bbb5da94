use std::process::ExitCode;

use clap::Parser;
use log::debug;

use termkit_cli::cli_args::Args;
use termkit_cli::colors::StylePalette;
use termkit_cli::commands;
use termkit_cli::terminal::Terminal;
use termkit_core::config;
use termkit_core::dispatch::dispatch;
use termkit_core::error::Result;
use termkit_core::logging::ConsoleLogger;
use termkit_core::theme;

fn execute(args: Args) -> Result<()> {
    let theme_path = config::get_theme_path(&args.theme_path);
    let theme = theme::load_theme(&theme_path)?;
    let palette = StylePalette::from_theme(&theme)?;

    ConsoleLogger::new(Terminal::new(palette), args.log_level()).install()?;
    debug!("Theme path: `{}`", theme_path);

    let terminal = Terminal::new(palette);
    let root = commands::build_root(theme);

    dispatch(&root, &terminal, args.tokens)
}

fn main() -> ExitCode {
    let args = Args::parse();

    match execute(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

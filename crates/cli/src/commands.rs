//! The demonstration command tree wired by the `tk` binary.
//!
//! These are ordinary leaf nodes built on the toolkit; the engine itself
//! lives in `termkit-core`.

use itertools::Itertools;
use log::debug;

use termkit_core::command_definitions::{
    ArgumentDefinition, Command, CommandGroup, CommandNode, OptionDefinition,
};
use termkit_core::context::CommandContext;
use termkit_core::error::Result;
use termkit_core::select::choose;
use termkit_core::style::{ColorDefinition, Style, StyledText};
use termkit_core::theme::ThemeDefinition;

/// Builds the root group: `greet`, `pick` and `theme show`.
pub fn build_root(theme: ThemeDefinition) -> CommandNode {
    CommandGroup::new()
        .help("Termkit demonstration commands.")
        .command("greet", greet())
        .command("pick", pick())
        .command(
            "theme",
            CommandGroup::new()
                .help("Theme inspection.")
                .command("show", theme_show(theme)),
        )
        .into()
}

fn greet() -> Command {
    Command::new(|context: &CommandContext<'_>| {
        let name = context.argument("name")?;
        let greeting = context.require_option("greeting")?;
        let punctuation = context.require_option("punctuation")?;

        debug!("Greeting `{}`", name);

        let line = StyledText::plain(format!("{greeting}, "))
            + StyledText::styled(name, Style::Info)
            + StyledText::plain(punctuation);
        context.console().output(&line, true)
    })
    .help("Greets somebody by name.")
    .argument(ArgumentDefinition::new("name").help("Who to greet."))
    .option(
        OptionDefinition::new("greeting")
            .short('g')
            .default("Hello")
            .help("Greeting word."),
    )
    .option(
        OptionDefinition::new("punctuation")
            .short('p')
            .default("!")
            .help("Trailing punctuation."),
    )
}

fn pick() -> Command {
    Command::new(|context: &CommandContext<'_>| {
        let colors = ["red", "green", "blue", "yellow", "magenta", "cyan"];

        let picked = choose(
            context.console(),
            &StyledText::plain("Which color?"),
            &colors,
            |color| StyledText::styled(*color, Style::Custom(ColorDefinition::named(*color))),
        )?;

        let line = StyledText::plain("You chose: ")
            + StyledText::styled(*picked, Style::Custom(ColorDefinition::named(*picked)));
        context.console().output(&line, true)
    })
    .help("Interactively picks a color.")
}

fn theme_show(theme: ThemeDefinition) -> Command {
    Command::new(move |context: &CommandContext<'_>| -> Result<()> {
        let entries = [
            ("error", &theme.error),
            ("info", &theme.info),
            ("warning", &theme.warning),
        ];

        for (name, definition) in entries.iter().sorted_by_key(|(name, _)| *name) {
            let value = match definition {
                Some(color) => describe_color(color),
                None => "default".to_string(),
            };

            let line = StyledText::styled(format!("{name}: "), Style::Info)
                + StyledText::plain(value);
            context.console().output(&line, true)?;
        }

        Ok(())
    })
    .help("Prints the resolved theme colors.")
}

fn describe_color(color: &ColorDefinition) -> String {
    match (&color.rgb, &color.ansi, &color.name) {
        (Some((r, g, b)), _, _) => format!("rgb({r}, {g}, {b})"),
        (_, Some(ansi), _) => format!("ansi({ansi})"),
        (_, _, Some(name)) => name.clone(),
        _ => "default".to_string(),
    }
}

//! Styled help rendering for command tree nodes.

use crate::command_definitions::{CommandNode, OptionDefinition};
use crate::console::Console;
use crate::error::Result;
use crate::style::{Style, StyledText};

/// Renders a node's help text and declaration summary to the console.
///
/// `path` is the sequence of child names consumed to reach the node; it
/// prefixes the usage line. Groups list their children in declaration
/// order; leaves list their arguments.
pub fn print_help(console: &dyn Console, node: &CommandNode, path: &[String]) -> Result<()> {
    if let Some(help) = node.help() {
        console.output(&StyledText::plain(help), true)?;
    }

    console.output(&usage_line(node, path), true)?;

    match node {
        CommandNode::Command(command) => {
            if !command.arguments.is_empty() {
                console.output(&StyledText::plain("Arguments:"), true)?;
                for argument in &command.arguments {
                    let line = StyledText::plain("  ")
                        + StyledText::styled(format!("<{}>", argument.name), Style::Info)
                        + help_suffix(argument.help.as_deref());
                    console.output(&line, true)?;
                }
            }
        }
        CommandNode::Group(group) => {
            if !group.children.is_empty() {
                console.output(&StyledText::plain("Commands:"), true)?;
                for (name, child) in &group.children {
                    let line = StyledText::plain("  ")
                        + StyledText::styled(name.as_str(), Style::Info)
                        + help_suffix(child.help());
                    console.output(&line, true)?;
                }
            }
        }
    }

    let options = node.options();
    if !options.is_empty() {
        console.output(&StyledText::plain("Options:"), true)?;
        for option in options {
            console.output(&option_line(option), true)?;
        }
    }

    Ok(())
}

fn usage_line(node: &CommandNode, path: &[String]) -> StyledText {
    let mut usage = String::from("Usage:");

    for name in path {
        usage.push(' ');
        usage.push_str(name);
    }

    match node {
        CommandNode::Command(command) => {
            for argument in &command.arguments {
                usage.push_str(&format!(" <{}>", argument.name));
            }
        }
        CommandNode::Group(group) => {
            if !group.children.is_empty() {
                usage.push_str(" <command>");
            }
        }
    }

    if !node.options().is_empty() {
        usage.push_str(" [options]");
    }

    StyledText::plain(usage)
}

fn option_line(option: &OptionDefinition) -> StyledText {
    StyledText::plain("  ")
        + StyledText::styled(option.to_string(), Style::Info)
        + help_suffix(option.help.as_deref())
}

fn help_suffix(help: Option<&str>) -> StyledText {
    match help {
        Some(text) => StyledText::plain(format!("  {text}")),
        None => StyledText::new(),
    }
}

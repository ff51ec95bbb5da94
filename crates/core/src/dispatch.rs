//! Command tree resolution and dispatch.
//!
//! One dispatch peels leading tokens to descend into nested groups, parses
//! the terminal node's declared options and arguments from whatever remains,
//! and invokes that node's runner with the resulting context. Any parse
//! failure aborts the dispatch and surfaces unmodified; runner failures
//! propagate unmodified as well.

use indexmap::IndexMap;
use log::debug;

use crate::command_definitions::{ArgumentDefinition, CommandNode, OptionDefinition};
use crate::console::Console;
use crate::context::CommandContext;
use crate::error::{Error, Result};
use crate::help;
use crate::input::CommandInput;

/// Resolves `tokens` against the tree rooted at `root` and runs the match.
///
/// Resolution consumes a leading token whenever the current node is a group
/// and the token names one of its children, case-sensitively. It stops at a
/// leaf, or at a group whose children do not match the next token; that
/// node's own declarations are then parsed against the remaining tokens.
/// A group reached with no runner renders its help instead.
pub fn dispatch(root: &CommandNode, console: &dyn Console, tokens: Vec<String>) -> Result<()> {
    let mut input = CommandInput::new(tokens);
    let mut current = root;
    let mut path: Vec<String> = Vec::new();

    loop {
        let CommandNode::Group(group) = current else {
            break;
        };

        let child = input.peek().and_then(|token| group.children.get(token));

        let Some(child) = child else {
            break;
        };

        if let Some(name) = input.advance() {
            path.push(name);
        }
        current = child;
    }

    debug!("Resolved command path: `{}`", path.join(" "));

    match current {
        CommandNode::Command(command) => {
            let options = parse_options(&mut input, &command.options);
            let arguments = parse_arguments(&mut input, &command.arguments)?;
            ensure_consumed(input)?;

            let context = CommandContext::new(console, arguments, options);
            command.runner.run(&context)
        }
        CommandNode::Group(group) => {
            let options = parse_options(&mut input, &group.options);
            ensure_consumed(input)?;

            let context = CommandContext::new(console, IndexMap::new(), options);
            match &group.runner {
                Some(runner) => runner.run(&context),
                None => help::print_help(console, current, &path),
            }
        }
    }
}

/// Extracts a value for each declared option, falling back to its default.
///
/// An option with neither a token nor a default stays absent; required-ness
/// is enforced later by `CommandContext::require_option`.
fn parse_options(
    input: &mut CommandInput,
    options: &[OptionDefinition],
) -> IndexMap<String, String> {
    let mut values = IndexMap::new();

    for option in options {
        if let Some(value) = input.extract_option(option) {
            values.insert(option.name.clone(), value);
        } else if let Some(default) = &option.default {
            values.insert(option.name.clone(), default.clone());
        }
    }

    values
}

/// Consumes declared arguments in order from the remaining tokens.
fn parse_arguments(
    input: &mut CommandInput,
    arguments: &[ArgumentDefinition],
) -> Result<IndexMap<String, String>> {
    let mut values = IndexMap::new();

    for argument in arguments {
        let Some(token) = input.advance() else {
            return Err(Error::ArgumentRequired(argument.name.clone()));
        };

        values.insert(argument.name.clone(), token);
    }

    Ok(values)
}

fn ensure_consumed(input: CommandInput) -> Result<()> {
    if input.is_empty() {
        Ok(())
    } else {
        Err(Error::ExcessInput(input.into_remaining()))
    }
}

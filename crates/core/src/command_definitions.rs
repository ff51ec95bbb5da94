//! Declarative model for commands, groups and their parameters.
//!
//! A command tree is a [`CommandNode`]: either an executable [`Command`]
//! leaf or a [`CommandGroup`] routing to named children. Declarations are
//! built once and stay immutable; parsing and dispatch read them.

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;

use crate::context::CommandContext;
use crate::error::Result;

/// A required positional parameter of a leaf command.
#[derive(Debug, Clone)]
pub struct ArgumentDefinition {
    pub name: String,
    pub help: Option<String>,
}

impl ArgumentDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            help: None,
        }
    }

    #[must_use]
    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help = Some(text.into());
        self
    }
}

impl Display for ArgumentDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<{}>", self.name)?;

        if let Some(help) = &self.help {
            write!(formatter, " ({help})")?;
        }

        Ok(())
    }
}

/// A named parameter, optionally with a short alias and a default value.
///
/// An option with a default is satisfied even when absent from input.
#[derive(Debug, Clone)]
pub struct OptionDefinition {
    pub name: String,
    pub short: Option<char>,
    pub default: Option<String>,
    pub help: Option<String>,
}

impl OptionDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short: None,
            default: None,
            help: None,
        }
    }

    #[must_use]
    pub fn short(mut self, alias: char) -> Self {
        self.short = Some(alias);
        self
    }

    #[must_use]
    pub fn default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    #[must_use]
    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help = Some(text.into());
        self
    }
}

impl Display for OptionDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "--{}", self.name)?;

        if let Some(short) = self.short {
            write!(formatter, ", -{short}")?;
        }

        if let Some(default) = &self.default {
            write!(formatter, " (default: {default})")?;
        }

        Ok(())
    }
}

/// The executable contract of a resolved command.
///
/// Implemented for free by any matching closure, so handlers can be declared
/// inline when building a tree.
pub trait Runnable {
    /// Runs the command against a fully parsed context.
    ///
    /// The dispatcher waits for completion; failures propagate to the
    /// dispatcher's caller unmodified.
    fn run(&self, context: &CommandContext<'_>) -> Result<()>;
}

impl<F> Runnable for F
where
    F: Fn(&CommandContext<'_>) -> Result<()>,
{
    fn run(&self, context: &CommandContext<'_>) -> Result<()> {
        self(context)
    }
}

/// An executable leaf of the command tree.
pub struct Command {
    pub arguments: Vec<ArgumentDefinition>,
    pub options: Vec<OptionDefinition>,
    pub help: Option<String>,
    pub runner: Box<dyn Runnable>,
}

impl Command {
    pub fn new(runner: impl Runnable + 'static) -> Self {
        Self {
            arguments: Vec::new(),
            options: Vec::new(),
            help: None,
            runner: Box::new(runner),
        }
    }

    #[must_use]
    pub fn argument(mut self, argument: ArgumentDefinition) -> Self {
        self.arguments.push(argument);
        self
    }

    #[must_use]
    pub fn option(mut self, option: OptionDefinition) -> Self {
        self.options.push(option);
        self
    }

    #[must_use]
    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help = Some(text.into());
        self
    }
}

/// A routing node with named children.
///
/// The group's own runner only executes when resolution terminates at the
/// group, i.e. no remaining leading token names a child. A group without a
/// runner renders its help instead.
#[derive(Default)]
pub struct CommandGroup {
    pub options: Vec<OptionDefinition>,
    pub help: Option<String>,
    pub runner: Option<Box<dyn Runnable>>,
    pub children: IndexMap<String, CommandNode>,
}

impl CommandGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a child under `name`. Names are case-sensitive and unique;
    /// re-using a name replaces the earlier child.
    #[must_use]
    pub fn command(mut self, name: impl Into<String>, node: impl Into<CommandNode>) -> Self {
        self.children.insert(name.into(), node.into());
        self
    }

    #[must_use]
    pub fn option(mut self, option: OptionDefinition) -> Self {
        self.options.push(option);
        self
    }

    #[must_use]
    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help = Some(text.into());
        self
    }

    #[must_use]
    pub fn runner(mut self, runner: impl Runnable + 'static) -> Self {
        self.runner = Some(Box::new(runner));
        self
    }
}

/// A node of the command tree: leaf or group.
pub enum CommandNode {
    Command(Command),
    Group(CommandGroup),
}

impl CommandNode {
    /// The options this node itself declares.
    pub fn options(&self) -> &[OptionDefinition] {
        match self {
            Self::Command(command) => &command.options,
            Self::Group(group) => &group.options,
        }
    }

    pub fn help(&self) -> Option<&str> {
        match self {
            Self::Command(command) => command.help.as_deref(),
            Self::Group(group) => group.help.as_deref(),
        }
    }
}

impl From<Command> for CommandNode {
    fn from(command: Command) -> Self {
        Self::Command(command)
    }
}

impl From<CommandGroup> for CommandNode {
    fn from(group: CommandGroup) -> Self {
        Self::Group(group)
    }
}

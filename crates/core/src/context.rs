//! Execution context handed to a resolved command's runner.

use indexmap::IndexMap;

use crate::console::Console;
use crate::error::{Error, Result};

/// The validated result of parsing one resolved command.
///
/// Built once by the dispatcher and passed by reference to the runner.
/// Arguments hold every declared positional; options hold every option that
/// received a value, from input or from its declared default.
pub struct CommandContext<'a> {
    console: &'a dyn Console,
    arguments: IndexMap<String, String>,
    options: IndexMap<String, String>,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        console: &'a dyn Console,
        arguments: IndexMap<String, String>,
        options: IndexMap<String, String>,
    ) -> Self {
        Self {
            console,
            arguments,
            options,
        }
    }

    /// The console capability for further user interaction.
    pub fn console(&self) -> &dyn Console {
        self.console
    }

    /// The value of a declared positional argument.
    ///
    /// Parsing populates every declared argument before a runner executes,
    /// so a miss means the name was never declared on this command.
    pub fn argument(&self, name: &str) -> Result<&str> {
        self.arguments
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| Error::ArgumentRequired(name.to_string()))
    }

    /// The value of an option that must be present.
    ///
    /// Fails with `optionRequired` when the option was absent from input
    /// and declared no default.
    pub fn require_option(&self, name: &str) -> Result<&str> {
        self.options
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| Error::OptionRequired(name.to_string()))
    }

    /// The value of an option, if it has one.
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    pub fn arguments(&self) -> &IndexMap<String, String> {
        &self.arguments
    }

    pub fn options(&self) -> &IndexMap<String, String> {
        &self.options
    }
}

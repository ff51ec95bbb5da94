//! Termkit Core Library
//!
//! This crate provides the terminal-independent half of termkit, a toolkit
//! for terminal interaction and command dispatch: styled text, the console
//! capability trait, the interactive selection protocol, and a recursive
//! command tree with token parsing and dispatch.
//!
//! # Key Features
//!
//! - **Styled Text**: Composable fragment sequences with semantic styles
//! - **Console Capability**: The read/write/clear/size seam every component
//!   talks through, with a transcript-recording test double
//! - **Interactive Selection**: Numbered "choose one of N" prompting that
//!   restores the terminal afterwards
//! - **Command Trees**: Declarative commands and groups with positional
//!   arguments, named options and default values
//! - **Dispatch**: Token resolution against nested groups with typed
//!   structured failures
//!
//! # Examples
//!
//! Declaring and dispatching a command tree:
//!
//! ```
//! use termkit_core::command_definitions::{
//!     ArgumentDefinition, Command, CommandGroup, CommandNode, OptionDefinition,
//! };
//! use termkit_core::dispatch::dispatch;
//! use termkit_core::style::StyledText;
//! use termkit_core::testing::FakeConsole;
//!
//! let root: CommandNode = CommandGroup::new()
//!     .command(
//!         "greet",
//!         Command::new(|context: &termkit_core::context::CommandContext<'_>| {
//!             let name = context.argument("name")?;
//!             context
//!                 .console()
//!                 .output(&StyledText::plain(format!("Hello, {name}!")), true)
//!         })
//!         .argument(ArgumentDefinition::new("name"))
//!         .option(OptionDefinition::new("greeting").short('g').default("Hello")),
//!     )
//!     .into();
//!
//! let console = FakeConsole::new(Vec::<String>::new());
//! dispatch(&root, &console, vec!["greet".to_string(), "world".to_string()])?;
//! assert_eq!(console.output_lines(), ["Hello, world!"]);
//! # Ok::<(), termkit_core::error::Error>(())
//! ```

pub mod command_definitions;
pub mod config;
pub mod console;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod help;
pub mod input;
pub mod logging;
pub mod select;
pub mod style;
pub mod testing;
pub mod theme;

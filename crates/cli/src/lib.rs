//! Termkit CLI Library
//!
//! The terminal-facing half of termkit: a crossterm-backed implementation
//! of the console capability, theme-to-terminal color resolution, and the
//! bootstrap surface of the `tk` demonstration binary.
//!
//! # Architecture
//!
//! - [`cli_args`]: Bootstrap argument parsing (theme path, verbosity, raw
//!   dispatch tokens)
//! - [`terminal`]: The real terminal console (line input, secure input,
//!   styled output, line/screen clearing)
//! - [`colors`]: Mapping color definitions and styles to crossterm colors
//! - [`commands`]: The demonstration command tree

pub mod cli_args;
pub mod colors;
pub mod commands;
pub mod terminal;

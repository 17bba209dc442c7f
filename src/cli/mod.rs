//! Command-line interface for bootcheck.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, ConfigArgs, RunArgs};
pub use commands::{Command, CommandDispatcher, CommandResult, ConfigSource};

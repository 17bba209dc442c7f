//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, RunArgs};
use crate::config::ConfigOverrides;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Where a command finds its configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigSource {
    /// Project root; git runs here and `.bootcheck.yml` is looked up here.
    pub project_root: PathBuf,
    /// Explicit config file from `--config`.
    pub config_path: Option<PathBuf>,
    /// Command-line and environment overrides.
    pub overrides: ConfigOverrides,
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    source: ConfigSource,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            source: ConfigSource {
                project_root,
                ..Default::default()
            },
        }
    }

    /// Take the config path and overrides from parsed arguments.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        self.source.config_path = cli.config.clone();
        self.source.overrides = cli.overrides();
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.source.project_root
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Run(args)) => {
                let cmd = super::run::RunCommand::new(self.source.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Config(args)) => {
                let cmd = super::config::ConfigCommand::new(self.source.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to run command with default args
                let cmd = super::run::RunCommand::new(self.source.clone(), RunArgs::default());
                cmd.execute(ui)
            }
        }
    }
}

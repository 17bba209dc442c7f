//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::{parse_flag_arg, ConfigOverrides};

/// bootcheck - Toolchain preflight and git bootstrap for new projects.
#[derive(Debug, Parser)]
#[command(name = "bootcheck")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .bootcheck.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Interpreter version to select with pyenv
    #[arg(long, global = true, env = "BOOTCHECK_PYTHON_VERSION", value_name = "VERSION")]
    pub python_version: Option<String>,

    /// Exact poetry version required
    #[arg(long, global = true, env = "BOOTCHECK_POETRY_VERSION", value_name = "VERSION")]
    pub poetry_version: Option<String>,

    /// Run `git init` (true) or require an existing repository (false)
    #[arg(
        long,
        global = true,
        env = "BOOTCHECK_INIT_GIT",
        value_name = "BOOL",
        value_parser = parse_flag_arg
    )]
    pub init_git: Option<bool>,

    /// Project name shown in the final status
    #[arg(long, global = true, env = "BOOTCHECK_PROJECT_NAME", value_name = "NAME")]
    pub project_name: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Configuration values given on the command line or environment.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            project_name: self.project_name.clone(),
            python_version: self.python_version.clone(),
            poetry_version: self.poetry_version.clone(),
            init_git: self.init_git,
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the toolchain and bootstrap git (default if no command specified)
    Run(RunArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Plain line output, no spinners
    #[arg(long)]
    pub non_interactive: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

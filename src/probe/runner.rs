//! Process runner seam.
//!
//! Probes never spawn processes directly; they go through a
//! [`CommandRunner`] so tests can script tool behavior with
//! [`MockRunner`](super::MockRunner).

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::shell::{execute, CommandOptions, CommandResult};

/// Runs an argv and captures its output.
pub trait CommandRunner {
    /// Run `argv` to completion.
    ///
    /// Returns `Err` when the process could not be spawned; a non-zero
    /// exit is an `Ok` result with `success == false`.
    fn run(&self, argv: &[String]) -> Result<CommandResult>;
}

/// Runner that spawns real child processes.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    cwd: Option<PathBuf>,
}

impl SystemRunner {
    /// Run commands in the current working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run commands in `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            cwd: Some(dir.to_path_buf()),
        }
    }

    /// The working directory commands run in, if overridden.
    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[String]) -> Result<CommandResult> {
        execute(argv, &CommandOptions::captured(self.cwd.as_deref()))
    }
}

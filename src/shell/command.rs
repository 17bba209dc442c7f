//! Child process execution.
//!
//! Commands are given as argv and spawned directly, never through a shell,
//! so version strings and paths reach the tool exactly as configured.

use crate::error::{BootcheckError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            success: false,
        }
    }

    /// Captured stdout followed by stderr, trimmed.
    pub fn combined_output(&self) -> String {
        let stdout = self.stdout.trim();
        let stderr = self.stderr.trim();
        match (stdout.is_empty(), stderr.is_empty()) {
            (false, false) => format!("{}\n{}", stdout, stderr),
            (false, true) => stdout.to_string(),
            (true, _) => stderr.to_string(),
        }
    }
}

/// Options for command execution. Both output streams are always captured.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,
}

impl CommandOptions {
    /// Run in `cwd`, or the current directory when `None`.
    pub fn captured(cwd: Option<&Path>) -> Self {
        Self {
            cwd: cwd.map(|p| p.to_path_buf()),
        }
    }
}

/// Render argv as a single display string.
pub fn display_command(argv: &[String]) -> String {
    argv.join(" ")
}

/// Execute a command given as argv.
///
/// Returns `Err` only when the process could not be spawned. A non-zero
/// exit is reported through [`CommandResult::success`].
pub fn execute(argv: &[String], options: &CommandOptions) -> Result<CommandResult> {
    let Some((program, args)) = argv.split_first() else {
        return Err(BootcheckError::SpawnFailed {
            command: String::new(),
            message: "empty command".to_string(),
        });
    };

    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd.stdin(Stdio::null());

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let output = cmd.output().map_err(|e| BootcheckError::SpawnFailed {
        command: display_command(argv),
        message: e.to_string(),
    })?;

    tracing::debug!(
        command = %display_command(argv),
        code = ?output.status.code(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "command finished"
    );

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr))
    } else {
        Ok(CommandResult::failure(output.status.code(), stdout, stderr))
    }
}

//! Mock command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] with scripted responses keyed
//! by program name, and records every argv it was asked to run.
//!
//! # Example
//!
//! ```
//! use bootcheck::probe::{MockRunner, ToolProbe, ToolSpec};
//!
//! let runner = MockRunner::new();
//! runner.succeed("poetry", "Poetry version 1.0.0");
//!
//! let probe = ToolProbe::new(&runner);
//! let outcome = probe.probe(&ToolSpec::new("poetry", "poetry", ["--version"]).expecting_version("9.9.9"));
//!
//! assert!(!outcome.success);
//! assert!(runner.was_invoked("poetry"));
//! assert!(!runner.was_invoked("pyenv"));
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{BootcheckError, Result};
use crate::shell::{display_command, CommandResult};

use super::runner::CommandRunner;

/// A scripted response for one program.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Exit 0 with the given output.
    Success {
        /// Captured stdout.
        stdout: String,
        /// Captured stderr.
        stderr: String,
    },
    /// Exit with a non-zero code.
    Exit {
        /// Exit code.
        code: i32,
        /// Captured stderr.
        stderr: String,
    },
    /// The process could not be spawned.
    SpawnError(String),
}

/// Mock runner implementation for testing.
///
/// Programs without a scripted response behave as if they were not
/// installed (spawn error).
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: RefCell<HashMap<String, MockResponse>>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl MockRunner {
    /// Create a runner with no scripted programs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a response for `program`.
    pub fn respond(&self, program: &str, response: MockResponse) {
        self.responses
            .borrow_mut()
            .insert(program.to_string(), response);
    }

    /// Script `program` to exit 0 printing `stdout`.
    pub fn succeed(&self, program: &str, stdout: &str) {
        self.succeed_with_stderr(program, stdout, "");
    }

    /// Script `program` to exit 0 printing to both streams.
    pub fn succeed_with_stderr(&self, program: &str, stdout: &str, stderr: &str) {
        self.respond(
            program,
            MockResponse::Success {
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            },
        );
    }

    /// Script `program` to exit with `code`.
    pub fn exit(&self, program: &str, code: i32, stderr: &str) {
        self.respond(
            program,
            MockResponse::Exit {
                code,
                stderr: stderr.to_string(),
            },
        );
    }

    /// Script `program` to fail to spawn.
    pub fn spawn_error(&self, program: &str, message: &str) {
        self.respond(program, MockResponse::SpawnError(message.to_string()));
    }

    /// Every argv run so far, in order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    /// Whether any call spawned `program`.
    pub fn was_invoked(&self, program: &str) -> bool {
        self.calls
            .borrow()
            .iter()
            .any(|argv| argv.first().is_some_and(|p| p == program))
    }

    /// Programs in the order they were spawned.
    pub fn programs(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|argv| argv.first().cloned())
            .collect()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, argv: &[String]) -> Result<CommandResult> {
        self.calls.borrow_mut().push(argv.to_vec());

        let program = argv.first().map(String::as_str).unwrap_or_default();
        let response = self.responses.borrow().get(program).cloned();

        match response {
            Some(MockResponse::Success { stdout, stderr }) => {
                Ok(CommandResult::success(stdout, stderr))
            }
            Some(MockResponse::Exit { code, stderr }) => {
                Ok(CommandResult::failure(Some(code), String::new(), stderr))
            }
            Some(MockResponse::SpawnError(message)) => Err(BootcheckError::SpawnFailed {
                command: display_command(argv),
                message,
            }),
            None => Err(BootcheckError::SpawnFailed {
                command: display_command(argv),
                message: format!("{}: command not found", program),
            }),
        }
    }
}

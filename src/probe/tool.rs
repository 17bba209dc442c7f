//! The external tool probe.

use super::outcome::{CheckOutcome, ProbeFailure};
use super::runner::CommandRunner;
use super::spec::ToolSpec;
use super::version::{extract_semver_match, version_matches};

/// Invokes a [`ToolSpec`] and classifies the result.
///
/// This is the only place process failures become outcome data: spawn
/// errors and non-zero exits both yield `success == false`, and nothing
/// is retried.
pub struct ToolProbe<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> ToolProbe<'a> {
    /// Create a probe that spawns through `runner`.
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// Run one probe. Spawns exactly one child process.
    pub fn probe(&self, spec: &ToolSpec) -> CheckOutcome {
        tracing::debug!(tool = spec.name(), command = %spec.command_line(), "probing tool");

        let result = match self.runner.run(spec.invocation()) {
            Ok(result) => result,
            Err(e) => {
                return CheckOutcome::failed(ProbeFailure::ToolMissingOrFailed {
                    command: spec.command_line(),
                    message: e.to_string(),
                });
            }
        };

        let output = result.combined_output();

        if !result.success {
            let code = result
                .exit_code
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string());
            let message = if output.is_empty() {
                format!("`{}` exited with {}", spec.command_line(), code)
            } else {
                format!("`{}` exited with {}: {}", spec.command_line(), code, output)
            };
            return CheckOutcome::failed(ProbeFailure::ToolMissingOrFailed {
                command: spec.command_line(),
                message,
            });
        }

        if let Some(requested) = spec.expected_version() {
            match extract_semver_match(&output) {
                Some((found, found_text)) => {
                    if !version_matches(requested, &found, found_text) {
                        tracing::debug!(
                            tool = spec.name(),
                            requested,
                            found = found_text,
                            "version mismatch"
                        );
                        return CheckOutcome::failed(ProbeFailure::VersionMismatch {
                            tool: spec.name().to_string(),
                            requested: requested.to_string(),
                            found: found_text.to_string(),
                        });
                    }
                }
                None => {
                    tracing::debug!(
                        tool = spec.name(),
                        "no version in output, accepting tool as present"
                    );
                }
            }
        }

        CheckOutcome::found(output)
    }
}

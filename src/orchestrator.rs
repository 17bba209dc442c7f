//! Top-level preflight sequencing.
//!
//! Mandatory checks, then optional checks, then the git bootstrap. The
//! sequence is linear: a mandatory failure skips everything after it, and
//! a bootstrap failure ends the run.

use crate::bootstrap::{BootstrapFailure, GitBootstrap};
use crate::checks::{standard_checks, CheckRunner};
use crate::config::Configuration;
use crate::events::{Event, Reporter, Stage};
use crate::probe::{CommandRunner, ToolProbe};

/// Message reported when every step passed.
pub const SUCCESS_MESSAGE: &str = "Project created successfully";

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every mandatory check passed and the bootstrap succeeded.
    Success {
        /// Labels of optional checks that failed.
        optional_failures: Vec<String>,
    },
    /// A mandatory check failed; nothing after it ran.
    MandatoryCheckFailed {
        /// Label of the failing check.
        check: String,
        /// Failure detail.
        detail: String,
    },
    /// The bootstrap step failed.
    BootstrapFailed(BootstrapFailure),
}

impl RunOutcome {
    /// Whether the run succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    fn reason(&self) -> Option<String> {
        match self {
            Self::Success { .. } => None,
            Self::MandatoryCheckFailed { check, detail } => {
                Some(format!("{} check failed: {}", check, detail))
            }
            Self::BootstrapFailed(failure) => Some(failure.to_string()),
        }
    }
}

/// Drives one preflight run.
pub struct Orchestrator<'a> {
    config: &'a Configuration,
    runner: &'a dyn CommandRunner,
    checks: CheckRunner,
}

impl<'a> Orchestrator<'a> {
    /// Create an orchestrator with the standard checks for `config`.
    pub fn new(config: &'a Configuration, runner: &'a dyn CommandRunner) -> Self {
        Self {
            config,
            runner,
            checks: standard_checks(config),
        }
    }

    /// Replace the check list.
    pub fn with_checks(mut self, checks: CheckRunner) -> Self {
        self.checks = checks;
        self
    }

    /// Run the preflight, reporting progress to `reporter`.
    pub fn run(&self, reporter: &mut dyn Reporter) -> RunOutcome {
        let probe = ToolProbe::new(self.runner);
        let outcome = self.run_stages(&probe, reporter);

        match &outcome {
            RunOutcome::Success { optional_failures } => {
                tracing::debug!(?optional_failures, "preflight succeeded");
            }
            other => tracing::debug!(outcome = ?other, "preflight failed"),
        }

        reporter.report(Event::Finished {
            success: outcome.is_success(),
            project: self.config.project_name.clone(),
            reason: outcome.reason(),
        });
        outcome
    }

    fn run_stages(&self, probe: &ToolProbe<'_>, reporter: &mut dyn Reporter) -> RunOutcome {
        reporter.report(Event::StageStarted(Stage::MandatoryChecks));
        if let Err(failed) = self.checks.run_mandatory(probe, reporter) {
            return RunOutcome::MandatoryCheckFailed {
                check: failed.check,
                detail: failed.outcome.detail,
            };
        }

        reporter.report(Event::StageStarted(Stage::OptionalChecks));
        let optional_failures = self
            .checks
            .run_optional(probe, reporter)
            .into_iter()
            .filter(|report| !report.outcome.success)
            .map(|report| report.check)
            .collect();

        let bootstrap = GitBootstrap::new(self.config.bootstrap);
        reporter.report(Event::StageStarted(Stage::Bootstrap(bootstrap.mode())));
        if let Err(failure) = bootstrap.run(probe, reporter) {
            return RunOutcome::BootstrapFailed(failure);
        }

        RunOutcome::Success { optional_failures }
    }
}

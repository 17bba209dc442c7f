//! Version control bootstrap.
//!
//! After the toolchain checks, the project either gets a fresh repository
//! (`Init`) or must already live inside one (`Verify`). The mode is picked
//! once from configuration; nothing switches it mid-run.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::checks::Check;
use crate::events::Reporter;
use crate::probe::{ToolProbe, ToolSpec};

/// Whether to create a repository or require an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BootstrapMode {
    /// Run `git init` in the working directory.
    Init,
    /// Require the working directory to be inside a work tree.
    Verify,
}

impl BootstrapMode {
    /// Resolve the mode from the `init_git` flag.
    pub fn from_init_git(init_git: bool) -> Self {
        if init_git {
            Self::Init
        } else {
            Self::Verify
        }
    }
}

impl fmt::Display for BootstrapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init => write!(f, "init"),
            Self::Verify => write!(f, "verify"),
        }
    }
}

/// Repository state errors. Both are fatal to the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BootstrapFailure {
    /// `git init` could not run or was rejected.
    #[error("Could not initialize a git repository: {reason}")]
    InitFailed {
        /// Probe failure detail.
        reason: String,
    },

    /// Not inside a work tree (or git is missing).
    #[error(
        "No git repository found: either run this inside a git repository or set init_git to true ({reason})"
    )]
    NotARepository {
        /// Probe failure detail.
        reason: String,
    },
}

/// Runs the bootstrap step for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GitBootstrap {
    mode: BootstrapMode,
}

impl GitBootstrap {
    /// Create a bootstrap step for `mode`.
    pub fn new(mode: BootstrapMode) -> Self {
        Self { mode }
    }

    /// The resolved mode.
    pub fn mode(&self) -> BootstrapMode {
        self.mode
    }

    /// The git invocation for this mode.
    pub fn spec(&self) -> ToolSpec {
        match self.mode {
            BootstrapMode::Init => ToolSpec::new("git", "git", ["init"]),
            BootstrapMode::Verify => {
                ToolSpec::new("git", "git", ["rev-parse", "--is-inside-work-tree"])
            }
        }
    }

    fn check(&self) -> Check {
        match self.mode {
            BootstrapMode::Init => Check::mandatory("git init", self.spec())
                .with_summary("repository initialized"),
            BootstrapMode::Verify => Check::mandatory("git repository", self.spec())
                .with_hint("Run inside an existing git repository or set init_git to true"),
        }
    }

    /// Run the single git command for this mode.
    pub fn run(
        &self,
        probe: &ToolProbe<'_>,
        reporter: &mut dyn Reporter,
    ) -> Result<(), BootstrapFailure> {
        let outcome = self.check().run(probe, reporter);
        if outcome.success {
            tracing::debug!(mode = %self.mode, "bootstrap succeeded");
            return Ok(());
        }

        let reason = outcome.detail;
        Err(match self.mode {
            BootstrapMode::Init => BootstrapFailure::InitFailed { reason },
            BootstrapMode::Verify => BootstrapFailure::NotARepository { reason },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{check_events, Event, Phase};
    use crate::probe::MockRunner;

    #[test]
    fn mode_from_flag() {
        assert_eq!(BootstrapMode::from_init_git(true), BootstrapMode::Init);
        assert_eq!(BootstrapMode::from_init_git(false), BootstrapMode::Verify);
    }

    #[test]
    fn mode_displays_lowercase() {
        assert_eq!(BootstrapMode::Init.to_string(), "init");
        assert_eq!(BootstrapMode::Verify.to_string(), "verify");
    }

    #[test]
    fn init_runs_git_init() {
        let runner = MockRunner::new();
        runner.succeed("git", "Initialized empty Git repository in /tmp/x/.git/");
        let probe = ToolProbe::new(&runner);
        let mut events: Vec<Event> = Vec::new();

        let result = GitBootstrap::new(BootstrapMode::Init).run(&probe, &mut events);

        assert!(result.is_ok());
        assert_eq!(runner.calls(), vec![vec!["git", "init"]]);
    }

    #[test]
    fn init_failure_is_fatal() {
        let runner = MockRunner::new();
        runner.spawn_error("git", "No such file or directory");
        let probe = ToolProbe::new(&runner);
        let mut events: Vec<Event> = Vec::new();

        let err = GitBootstrap::new(BootstrapMode::Init)
            .run(&probe, &mut events)
            .unwrap_err();

        assert!(matches!(err, BootstrapFailure::InitFailed { .. }));
        assert!(err.to_string().contains("No such file or directory"));
    }

    #[test]
    fn verify_runs_rev_parse_and_leaves_repo_untouched() {
        let runner = MockRunner::new();
        runner.succeed("git", "true");
        let probe = ToolProbe::new(&runner);
        let mut events: Vec<Event> = Vec::new();

        let result = GitBootstrap::new(BootstrapMode::Verify).run(&probe, &mut events);

        assert!(result.is_ok());
        assert_eq!(
            runner.calls(),
            vec![vec!["git", "rev-parse", "--is-inside-work-tree"]]
        );
        assert!(!runner.calls().iter().any(|argv| argv.contains(&"init".to_string())));
    }

    #[test]
    fn verify_outside_repo_instructs_operator() {
        let runner = MockRunner::new();
        runner.exit(
            "git",
            128,
            "fatal: not a git repository (or any of the parent directories): .git",
        );
        let probe = ToolProbe::new(&runner);
        let mut events: Vec<Event> = Vec::new();

        let err = GitBootstrap::new(BootstrapMode::Verify)
            .run(&probe, &mut events)
            .unwrap_err();

        assert!(matches!(err, BootstrapFailure::NotARepository { .. }));
        let msg = err.to_string();
        assert!(msg.contains("run this inside a git repository"));
        assert!(msg.contains("init_git"));

        let failed = check_events(&events).last().unwrap();
        assert_eq!(failed.phase, Phase::Failed);
        assert!(failed.hint.is_some());
    }

    #[test]
    fn exactly_one_git_command_per_run() {
        for mode in [BootstrapMode::Init, BootstrapMode::Verify] {
            let runner = MockRunner::new();
            runner.exit("git", 1, "");
            let probe = ToolProbe::new(&runner);
            let mut events: Vec<Event> = Vec::new();

            let _ = GitBootstrap::new(mode).run(&probe, &mut events);

            assert_eq!(runner.calls().len(), 1);
        }
    }

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&BootstrapMode::Init).unwrap(),
            "\"init\""
        );
    }
}

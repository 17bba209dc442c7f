//! Structured status events.
//!
//! The check engine never prints. It emits [`Event`]s through a
//! [`Reporter`], and the presentation layer ([`crate::ui::UiReporter`])
//! decides how they look. A `Vec<Event>` is itself a reporter, which is
//! how tests observe the engine.

use crate::bootstrap::BootstrapMode;

/// Where a single check is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The probe is about to run.
    Pending,
    /// The tool was found (at the right version).
    Found,
    /// The probe failed.
    Failed,
}

/// A top-level stage of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Mandatory tool checks.
    MandatoryChecks,
    /// Optional tool checks.
    OptionalChecks,
    /// Repository initialization or verification.
    Bootstrap(BootstrapMode),
}

/// Status of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckEvent {
    /// Human-facing check label.
    pub check: String,
    /// Lifecycle phase.
    pub phase: Phase,
    /// Whether a failure halts the run.
    pub mandatory: bool,
    /// Banner, version or failure cause (absent for `Pending`).
    pub detail: Option<String>,
    /// Remediation hint, only on `Failed`.
    pub hint: Option<String>,
}

/// Everything the engine reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A stage started.
    StageStarted(Stage),
    /// A check changed phase.
    Check(CheckEvent),
    /// The run ended.
    Finished {
        /// Whether the run succeeded.
        success: bool,
        /// Project name, if configured.
        project: Option<String>,
        /// Why the run failed.
        reason: Option<String>,
    },
}

/// Receives engine events.
pub trait Reporter {
    /// Handle one event.
    fn report(&mut self, event: Event);
}

impl Reporter for Vec<Event> {
    fn report(&mut self, event: Event) {
        self.push(event);
    }
}

/// Check events from a recorded event list.
pub fn check_events(events: &[Event]) -> impl Iterator<Item = &CheckEvent> {
    events.iter().filter_map(|e| match e {
        Event::Check(check) => Some(check),
        _ => None,
    })
}

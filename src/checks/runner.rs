//! Ordered check execution.
//!
//! Mandatory checks are fail-fast: the first failure stops the phase.
//! Optional checks are fail-soft: every one runs and failures are only
//! reported. List order is the only dependency mechanism, so a later
//! check may assume every earlier mandatory check passed.

use crate::events::Reporter;
use crate::probe::{CheckOutcome, ToolProbe};

use super::check::Check;

/// The outcome of one check, tagged with its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Check label.
    pub check: String,
    /// Whether the check was mandatory.
    pub mandatory: bool,
    /// Probe outcome.
    pub outcome: CheckOutcome,
}

impl CheckReport {
    fn new(check: &Check, outcome: CheckOutcome) -> Self {
        Self {
            check: check.label().to_string(),
            mandatory: check.is_mandatory(),
            outcome,
        }
    }
}

/// Runs mandatory then optional checks.
#[derive(Debug, Clone, Default)]
pub struct CheckRunner {
    mandatory: Vec<Check>,
    optional: Vec<Check>,
}

impl CheckRunner {
    /// Create a runner; each list keeps its order.
    pub fn new(mandatory: Vec<Check>, optional: Vec<Check>) -> Self {
        Self {
            mandatory,
            optional,
        }
    }

    /// Mandatory checks in run order.
    pub fn mandatory(&self) -> &[Check] {
        &self.mandatory
    }

    /// Optional checks in run order.
    pub fn optional(&self) -> &[Check] {
        &self.optional
    }

    /// Run mandatory checks in order, stopping at the first failure.
    ///
    /// Returns the passing reports, or the first failing report.
    pub fn run_mandatory(
        &self,
        probe: &ToolProbe<'_>,
        reporter: &mut dyn Reporter,
    ) -> Result<Vec<CheckReport>, CheckReport> {
        let mut passed = Vec::with_capacity(self.mandatory.len());
        for check in &self.mandatory {
            let report = CheckReport::new(check, check.run(probe, reporter));
            if !report.outcome.success {
                tracing::debug!(check = %report.check, "mandatory check failed, stopping");
                return Err(report);
            }
            passed.push(report);
        }
        Ok(passed)
    }

    /// Run every optional check regardless of outcomes.
    pub fn run_optional(
        &self,
        probe: &ToolProbe<'_>,
        reporter: &mut dyn Reporter,
    ) -> Vec<CheckReport> {
        self.optional
            .iter()
            .map(|check| CheckReport::new(check, check.run(probe, reporter)))
            .collect()
    }
}

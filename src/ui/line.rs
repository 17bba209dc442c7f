//! Finished check lines.

use std::fmt;

use crate::events::{CheckEvent, Phase};

/// How a finished check is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// The tool was found.
    Found,
    /// A mandatory check failed; the run stops.
    Failed,
    /// An optional check failed; the run continues.
    Warning,
}

impl CheckStatus {
    /// The word every check line starts with.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Found => "Found",
            Self::Failed | Self::Warning => "Failed",
        }
    }
}

/// One finished check: `Found python: 3.8.0`, `Failed docker: ...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckLine {
    /// Presentation status.
    pub status: CheckStatus,
    /// Check label.
    pub check: String,
    /// Tool banner or failure description.
    pub detail: Option<String>,
}

impl CheckLine {
    /// The line for a finished event; `None` while the check is pending.
    pub fn from_event(event: &CheckEvent) -> Option<Self> {
        let status = match event.phase {
            Phase::Pending => return None,
            Phase::Found => CheckStatus::Found,
            Phase::Failed if event.mandatory => CheckStatus::Failed,
            Phase::Failed => CheckStatus::Warning,
        };
        Some(Self {
            status,
            check: event.check.clone(),
            detail: event.detail.clone().filter(|d| !d.is_empty()),
        })
    }
}

impl fmt::Display for CheckLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status.marker(), self.check)?;
        if let Some(detail) = &self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(phase: Phase, mandatory: bool, detail: Option<&str>) -> CheckEvent {
        CheckEvent {
            check: "docker".to_string(),
            phase,
            mandatory,
            detail: detail.map(str::to_string),
            hint: None,
        }
    }

    #[test]
    fn pending_has_no_line() {
        assert_eq!(CheckLine::from_event(&event(Phase::Pending, false, None)), None);
    }

    #[test]
    fn optional_failure_is_a_warning_with_failed_marker() {
        let line = CheckLine::from_event(&event(Phase::Failed, false, Some("not found"))).unwrap();
        assert_eq!(line.status, CheckStatus::Warning);
        assert_eq!(line.to_string(), "Failed docker: not found");
    }

    #[test]
    fn mandatory_failure_is_failed() {
        let line = CheckLine::from_event(&event(Phase::Failed, true, None)).unwrap();
        assert_eq!(line.status, CheckStatus::Failed);
        assert_eq!(line.to_string(), "Failed docker");
    }

    #[test]
    fn empty_detail_is_dropped() {
        let line = CheckLine::from_event(&event(Phase::Found, false, Some(""))).unwrap();
        assert_eq!(line.to_string(), "Found docker");
    }
}

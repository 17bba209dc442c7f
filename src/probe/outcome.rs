//! Probe outcome types.
//!
//! Every probe produces a [`CheckOutcome`]. Failures are values here, they
//! never escape as errors.

use thiserror::Error;

/// Why a probe failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeFailure {
    /// The process could not be spawned or exited non-zero.
    #[error("{message}")]
    ToolMissingOrFailed {
        /// Rendered invocation.
        command: String,
        /// Captured error description.
        message: String,
    },

    /// The tool ran but reported a different version than requested.
    #[error("{tool} version `{requested}` is not installed. Found: `{found}`")]
    VersionMismatch {
        /// Tool name.
        tool: String,
        /// The configured version.
        requested: String,
        /// The version the tool reported.
        found: String,
    },
}

/// The result of running one probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Whether the tool is present (and at the right version).
    pub success: bool,
    /// Banner/version on success, failure cause otherwise.
    pub detail: String,
    /// Set exactly when `success` is false.
    pub failure: Option<ProbeFailure>,
}

impl CheckOutcome {
    /// Create a successful outcome.
    pub fn found(detail: impl Into<String>) -> Self {
        Self {
            success: true,
            detail: detail.into(),
            failure: None,
        }
    }

    /// Create a failed outcome; the detail is the failure's message.
    pub fn failed(failure: ProbeFailure) -> Self {
        Self {
            success: false,
            detail: failure.to_string(),
            failure: Some(failure),
        }
    }

    /// Whether this failure was a version mismatch.
    pub fn is_version_mismatch(&self) -> bool {
        matches!(self.failure, Some(ProbeFailure::VersionMismatch { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_is_success() {
        let outcome = CheckOutcome::found("Docker version 24.0.7");
        assert!(outcome.success);
        assert!(outcome.failure.is_none());
        assert_eq!(outcome.detail, "Docker version 24.0.7");
    }

    #[test]
    fn failed_uses_failure_message_as_detail() {
        let outcome = CheckOutcome::failed(ProbeFailure::ToolMissingOrFailed {
            command: "make --version".to_string(),
            message: "`make` could not be started".to_string(),
        });
        assert!(!outcome.success);
        assert_eq!(outcome.detail, "`make` could not be started");
        assert!(!outcome.is_version_mismatch());
    }

    #[test]
    fn version_mismatch_names_both_versions() {
        let outcome = CheckOutcome::failed(ProbeFailure::VersionMismatch {
            tool: "poetry".to_string(),
            requested: "9.9.9".to_string(),
            found: "1.0.0".to_string(),
        });
        assert!(outcome.is_version_mismatch());
        assert_eq!(
            outcome.detail,
            "poetry version `9.9.9` is not installed. Found: `1.0.0`"
        );
    }
}

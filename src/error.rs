//! Error types for bootcheck operations.
//!
//! This module defines [`BootcheckError`], the error type used by the
//! configuration and command plumbing, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - Probe and bootstrap failures are *outcomes*, not errors: they are
//!   carried by [`crate::probe::CheckOutcome`] and
//!   [`crate::bootstrap::BootstrapFailure`] and never propagate with `?`
//! - Use `BootcheckError` for faults that abort a command before any check runs
//! - Use `anyhow::Error` (via `BootcheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for bootcheck operations.
#[derive(Debug, Error)]
pub enum BootcheckError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A child process could not be started.
    #[error("Could not start `{command}`: {message}")]
    SpawnFailed { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for bootcheck operations.
pub type Result<T> = std::result::Result<T, BootcheckError>;

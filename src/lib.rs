//! bootcheck - Toolchain preflight and git bootstrap for freshly generated
//! projects.
//!
//! A run checks the mandatory tools (the interpreter through pyenv, then
//! poetry at an exact version), reports on the optional ones (make,
//! docker), and finally either initializes a git repository or verifies
//! that the project already lives inside one.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`probe`] - External tool probes and version extraction
//! - [`checks`] - Mandatory/optional checks and their runner
//! - [`bootstrap`] - Git repository initialization or verification
//! - [`orchestrator`] - The linear preflight sequence
//! - [`events`] - Structured status events and the [`events::Reporter`] seam
//! - [`shell`] - Child process execution
//! - [`ui`] - Spinners and terminal output
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use bootcheck::probe::extract_semver;
//!
//! let version = extract_semver("Poetry (version 1.8.3)").unwrap();
//! assert_eq!(version.to_string(), "1.8.3");
//! ```

pub mod bootstrap;
pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod orchestrator;
pub mod probe;
pub mod shell;
pub mod ui;

pub use error::{BootcheckError, Result};

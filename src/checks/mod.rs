//! Named environment checks and their ordered execution.
//!
//! # Modules
//!
//! - [`check`] - [`Check`], one probe with a mandatory/optional flag
//! - [`runner`] - [`CheckRunner`], fail-fast then fail-soft execution
//! - [`catalog`] - The standard interpreter/package-manager/helper checks

pub mod catalog;
pub mod check;
pub mod runner;

pub use catalog::standard_checks;
pub use check::Check;
pub use runner::{CheckReport, CheckRunner};

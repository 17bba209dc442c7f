//! External tool probing.
//!
//! A probe runs one external command and turns whatever happens into a
//! [`CheckOutcome`]. Process faults never cross this boundary as errors.
//!
//! # Modules
//!
//! - [`spec`] - [`ToolSpec`], the argv and expected version of one tool
//! - [`outcome`] - [`CheckOutcome`] and the [`ProbeFailure`] taxonomy
//! - [`version`] - First-match semantic version extraction
//! - [`runner`] - The [`CommandRunner`] seam and the real [`SystemRunner`]
//! - [`tool`] - [`ToolProbe`], which ties them together
//! - [`mock`] - [`MockRunner`] for scripted tests

pub mod mock;
pub mod outcome;
pub mod runner;
pub mod spec;
pub mod tool;
pub mod version;

pub use mock::{MockResponse, MockRunner};
pub use outcome::{CheckOutcome, ProbeFailure};
pub use runner::{CommandRunner, SystemRunner};
pub use spec::ToolSpec;
pub use tool::ToolProbe;
pub use version::{extract_semver, SemVer};

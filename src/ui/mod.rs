//! Terminal presentation.
//!
//! The engine reports [`crate::events::Event`]s; [`UiReporter`] turns them
//! into calls on a [`UserInterface`]:
//! - [`TerminalUI`] animates a spinner per check on a TTY
//! - [`NonInteractiveUI`] prints plain lines for CI and pipes
//! - [`MockUI`] records everything for tests
//!
//! # Example
//!
//! ```
//! use bootcheck::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("my-service");
//! ui.success("Project created successfully");
//! ```

pub mod line;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod report;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use line::{CheckLine, CheckStatus};
pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use report::UiReporter;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, BootcheckTheme};

/// Where a run is drawn.
///
/// Check lines, hints and the final success go to stdout. Errors go to
/// stderr in every implementation.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Print a plain line.
    fn message(&mut self, msg: &str);

    /// Show the run banner for a project.
    fn show_header(&mut self, project: &str);

    /// Show a stage heading (verbose only).
    fn show_stage(&mut self, title: &str);

    /// Start the pending indicator for a check.
    fn start_check(&mut self, check: &str) -> Box<dyn CheckProgress>;

    /// Show a remediation hint after a failed check.
    fn show_hint(&mut self, hint: &str);

    /// Show the final success line.
    fn success(&mut self, msg: &str);

    /// Show an error. Always goes to stderr.
    fn error(&mut self, msg: &str);
}

/// A check whose pending indicator is on screen.
pub trait CheckProgress {
    /// Replace the indicator with the finished line.
    fn finish(self: Box<Self>, line: &CheckLine);
}

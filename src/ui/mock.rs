//! Recording UI for tests.
//!
//! # Example
//!
//! ```
//! use bootcheck::ui::{CheckLine, CheckStatus, MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.start_check("python").finish(&CheckLine {
//!     status: CheckStatus::Found,
//!     check: "python".to_string(),
//!     detail: Some("3.8.0".to_string()),
//! });
//! ui.success("Project created successfully");
//!
//! assert_eq!(ui.started(), ["python".to_string()]);
//! assert_eq!(ui.finished_lines(), ["Found python: 3.8.0".to_string()]);
//! assert!(ui.has_success("Project created"));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::line::CheckLine;
use super::{CheckProgress, OutputMode, UserInterface};

type FinishLog = Rc<RefCell<Vec<CheckLine>>>;

/// Records every call, regardless of output mode.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    headers: Vec<String>,
    stages: Vec<String>,
    started: Vec<String>,
    hints: Vec<String>,
    successes: Vec<String>,
    errors: Vec<String>,
    finished: FinishLog,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn stages(&self) -> &[String] {
        &self.stages
    }

    /// Labels of the checks started, in order.
    pub fn started(&self) -> &[String] {
        &self.started
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Every finished check, in order.
    pub fn finished(&self) -> Vec<CheckLine> {
        self.finished.borrow().clone()
    }

    /// Finished checks rendered without icons.
    pub fn finished_lines(&self) -> Vec<String> {
        self.finished.borrow().iter().map(ToString::to_string).collect()
    }

    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn show_header(&mut self, project: &str) {
        self.headers.push(project.to_string());
    }

    fn show_stage(&mut self, title: &str) {
        self.stages.push(title.to_string());
    }

    fn start_check(&mut self, check: &str) -> Box<dyn CheckProgress> {
        self.started.push(check.to_string());
        Box::new(RecordedCheck {
            log: Rc::clone(&self.finished),
        })
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}

struct RecordedCheck {
    log: FinishLog,
}

impl CheckProgress for RecordedCheck {
    fn finish(self: Box<Self>, line: &CheckLine) {
        self.log.borrow_mut().push(line.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::CheckStatus;

    fn line(status: CheckStatus, check: &str) -> CheckLine {
        CheckLine {
            status,
            check: check.to_string(),
            detail: None,
        }
    }

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::new();
        ui.message("Hello");
        ui.success("Done");
        ui.error("Oops");
        ui.show_hint("Try again");
        ui.show_stage("Required tools");

        assert!(ui.has_message("Hello"));
        assert!(ui.has_success("Done"));
        assert!(ui.has_error("Oops"));
        assert!(ui.has_hint("Try again"));
        assert_eq!(ui.stages(), ["Required tools".to_string()]);
    }

    #[test]
    fn mock_ui_records_finishes_in_order() {
        let mut ui = MockUI::new();
        ui.start_check("a").finish(&line(CheckStatus::Found, "a"));
        ui.start_check("b").finish(&line(CheckStatus::Failed, "b"));
        ui.start_check("c").finish(&line(CheckStatus::Warning, "c"));

        let statuses: Vec<CheckStatus> = ui.finished().iter().map(|l| l.status).collect();
        assert_eq!(
            statuses,
            vec![CheckStatus::Found, CheckStatus::Failed, CheckStatus::Warning]
        );
        assert_eq!(ui.finished_lines(), ["Found a", "Failed b", "Failed c"]);
    }

    #[test]
    fn mock_ui_keeps_mode() {
        let ui = MockUI::with_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}

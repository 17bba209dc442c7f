//! A single named check.

use crate::events::{CheckEvent, Event, Phase, Reporter};
use crate::probe::{CheckOutcome, ToolProbe, ToolSpec};

/// One probe with a mandatory/optional classification.
///
/// The classification is fixed at construction; there is no way to
/// reclassify a check afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    label: String,
    spec: ToolSpec,
    mandatory: bool,
    hint: Option<String>,
    summary: Option<String>,
}

impl Check {
    /// A check whose failure halts the run.
    pub fn mandatory(label: &str, spec: ToolSpec) -> Self {
        Self::new(label, spec, true)
    }

    /// A check whose failure is only reported.
    pub fn optional(label: &str, spec: ToolSpec) -> Self {
        Self::new(label, spec, false)
    }

    fn new(label: &str, spec: ToolSpec, mandatory: bool) -> Self {
        Self {
            label: label.to_string(),
            spec,
            mandatory,
            hint: None,
            summary: None,
        }
    }

    /// Remediation shown when the check fails.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Text shown on success when the tool prints nothing.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Human-facing label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The probed tool.
    pub fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    /// Whether a failure halts the run.
    pub fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    /// Remediation hint, if any.
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Probe the tool, reporting `Pending` then `Found` or `Failed`.
    pub fn run(&self, probe: &ToolProbe<'_>, reporter: &mut dyn Reporter) -> CheckOutcome {
        reporter.report(self.event(Phase::Pending, None));

        let outcome = probe.probe(&self.spec);

        if outcome.success {
            let detail = match (&self.summary, outcome.detail.is_empty()) {
                (Some(summary), true) => summary.clone(),
                _ => first_line(&outcome.detail).to_string(),
            };
            reporter.report(self.event(Phase::Found, Some(detail)));
        } else {
            tracing::debug!(check = %self.label, detail = %outcome.detail, "check failed");
            reporter.report(self.event(Phase::Failed, Some(outcome.detail.clone())));
        }

        outcome
    }

    fn event(&self, phase: Phase, detail: Option<String>) -> Event {
        Event::Check(CheckEvent {
            check: self.label.clone(),
            phase,
            mandatory: self.mandatory,
            detail,
            hint: match phase {
                Phase::Failed => self.hint.clone(),
                _ => None,
            },
        })
    }
}

/// Tool banners can be long (`make --version` prints a license); the first
/// line carries the name and version.
fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default().trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::check_events;
    use crate::probe::MockRunner;

    #[test]
    fn classification_is_fixed_by_constructor() {
        let spec = ToolSpec::new("make", "make", ["--version"]);
        assert!(Check::mandatory("make", spec.clone()).is_mandatory());
        assert!(!Check::optional("make", spec).is_mandatory());
    }

    #[test]
    fn run_reports_pending_then_found() {
        let runner = MockRunner::new();
        runner.succeed("docker", "Docker version 24.0.7, build afdd53b\n");
        let probe = ToolProbe::new(&runner);
        let check = Check::optional("docker", ToolSpec::new("docker", "docker", ["--version"]));
        let mut events: Vec<Event> = Vec::new();

        let outcome = check.run(&probe, &mut events);

        assert!(outcome.success);
        let phases: Vec<_> = check_events(&events).map(|e| e.phase).collect();
        assert_eq!(phases, vec![Phase::Pending, Phase::Found]);
        let found = check_events(&events).last().unwrap();
        assert_eq!(
            found.detail.as_deref(),
            Some("Docker version 24.0.7, build afdd53b")
        );
        assert!(!found.mandatory);
    }

    #[test]
    fn found_detail_is_first_banner_line() {
        let runner = MockRunner::new();
        runner.succeed("make", "GNU Make 4.3\nCopyright (C) 1988-2020\n");
        let probe = ToolProbe::new(&runner);
        let check = Check::optional("make", ToolSpec::new("make", "make", ["--version"]));
        let mut events: Vec<Event> = Vec::new();

        check.run(&probe, &mut events);

        let found = check_events(&events).last().unwrap();
        assert_eq!(found.detail.as_deref(), Some("GNU Make 4.3"));
    }

    #[test]
    fn summary_replaces_empty_banner() {
        let runner = MockRunner::new();
        runner.succeed("pyenv", "");
        let probe = ToolProbe::new(&runner);
        let check = Check::mandatory(
            "python",
            ToolSpec::new("python", "pyenv", ["local", "3.8.0"]),
        )
        .with_summary("3.8.0");
        let mut events: Vec<Event> = Vec::new();

        check.run(&probe, &mut events);

        let found = check_events(&events).last().unwrap();
        assert_eq!(found.phase, Phase::Found);
        assert_eq!(found.detail.as_deref(), Some("3.8.0"));
    }

    #[test]
    fn failure_carries_hint() {
        let runner = MockRunner::new();
        runner.spawn_error("pyenv", "No such file or directory");
        let probe = ToolProbe::new(&runner);
        let check = Check::mandatory(
            "python",
            ToolSpec::new("python", "pyenv", ["local", "3.8.0"]),
        )
        .with_hint("pyenv install 3.8.0");
        let mut events: Vec<Event> = Vec::new();

        let outcome = check.run(&probe, &mut events);

        assert!(!outcome.success);
        let failed = check_events(&events).last().unwrap();
        assert_eq!(failed.phase, Phase::Failed);
        assert!(failed.mandatory);
        assert_eq!(failed.hint.as_deref(), Some("pyenv install 3.8.0"));
        assert!(failed
            .detail
            .as_deref()
            .unwrap()
            .contains("No such file or directory"));
    }

    #[test]
    fn mismatch_never_reports_found() {
        let runner = MockRunner::new();
        runner.succeed("poetry", "Poetry version 1.0.0");
        let probe = ToolProbe::new(&runner);
        let check = Check::mandatory(
            "poetry",
            ToolSpec::new("poetry", "poetry", ["--version"]).expecting_version("9.9.9"),
        );
        let mut events: Vec<Event> = Vec::new();

        check.run(&probe, &mut events);

        assert!(check_events(&events).all(|e| e.phase != Phase::Found));
    }

    #[test]
    fn pending_has_no_hint_or_detail() {
        let runner = MockRunner::new();
        let probe = ToolProbe::new(&runner);
        let check =
            Check::optional("make", ToolSpec::new("make", "make", ["--version"])).with_hint("x");
        let mut events: Vec<Event> = Vec::new();

        check.run(&probe, &mut events);

        let pending = check_events(&events).next().unwrap();
        assert_eq!(pending.phase, Phase::Pending);
        assert!(pending.detail.is_none());
        assert!(pending.hint.is_none());
    }
}

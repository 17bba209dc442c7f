//! Colors and icons for check lines.

use console::Style;

use super::line::{CheckLine, CheckStatus};

/// Styles for the preflight output.
#[derive(Debug, Clone)]
pub struct BootcheckTheme {
    /// Found tools and the final success (green).
    pub found: Style,
    /// Optional tools that failed (orange).
    pub warning: Style,
    /// Mandatory failures and errors (red bold).
    pub failed: Style,
    /// Stage headings and the spinner (magenta).
    pub stage: Style,
    /// Project name in the header (bold).
    pub project: Style,
    /// The `bootcheck` banner word (magenta bold).
    pub header: Style,
    /// Remediation hints (magenta dim).
    pub hint: Style,
}

impl Default for BootcheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl BootcheckTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            found: Style::new().green(),
            warning: Style::new().color256(208),
            failed: Style::new().red().bold(),
            stage: Style::new().magenta(),
            project: Style::new().bold(),
            header: Style::new().bold().magenta(),
            hint: Style::new().magenta().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            found: Style::new(),
            warning: Style::new(),
            failed: Style::new(),
            stage: Style::new(),
            project: Style::new(),
            header: Style::new(),
            hint: Style::new(),
        }
    }

    /// Colored when [`should_use_colors`] allows it, plain otherwise.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Icon and color for a finished check.
    pub fn format_check(&self, line: &CheckLine) -> String {
        let (icon, style) = match line.status {
            CheckStatus::Found => ("✓", &self.found),
            CheckStatus::Failed => ("✗", &self.failed),
            CheckStatus::Warning => ("⚠", &self.warning),
        };
        format!("{}", style.apply_to(format!("{} {}", icon, line)))
    }

    /// The final success line.
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.found.apply_to(format!("✓ {}", msg)))
    }

    /// An error line.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.failed.apply_to(format!("✗ {}", msg)))
    }

    pub fn format_stage(&self, title: &str) -> String {
        format!("{}", self.stage.apply_to(format!("◆ {}", title)))
    }

    pub fn format_hint(&self, hint: &str) -> String {
        format!("  {}", self.hint.apply_to(hint))
    }

    /// `bootcheck <project>`.
    pub fn format_header(&self, project: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("bootcheck"),
            self.project.apply_to(project)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(status: CheckStatus, check: &str, detail: Option<&str>) -> CheckLine {
        CheckLine {
            status,
            check: check.to_string(),
            detail: detail.map(str::to_string),
        }
    }

    #[test]
    fn found_check_gets_tick() {
        let theme = BootcheckTheme::plain();
        let out = theme.format_check(&line(CheckStatus::Found, "python", Some("3.8.0")));
        assert_eq!(out, "✓ Found python: 3.8.0");
    }

    #[test]
    fn optional_failure_gets_warning_icon() {
        let theme = BootcheckTheme::plain();
        let out = theme.format_check(&line(CheckStatus::Warning, "docker", None));
        assert_eq!(out, "⚠ Failed docker");
    }

    #[test]
    fn mandatory_failure_gets_cross() {
        let theme = BootcheckTheme::plain();
        let out = theme.format_check(&line(CheckStatus::Failed, "poetry", Some("missing")));
        assert_eq!(out, "✗ Failed poetry: missing");
    }

    #[test]
    fn stage_and_hint_formatting() {
        let theme = BootcheckTheme::plain();
        assert_eq!(theme.format_stage("Required tools"), "◆ Required tools");
        assert_eq!(theme.format_hint("pyenv install 3.8.0"), "  pyenv install 3.8.0");
    }

    #[test]
    fn header_names_project() {
        assert_eq!(
            BootcheckTheme::plain().format_header("my-service"),
            "bootcheck my-service"
        );
    }
}

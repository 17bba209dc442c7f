//! Animated indicator for a running check.

use console::Term;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

use super::line::CheckLine;
use super::theme::BootcheckTheme;
use super::CheckProgress;

/// Spinner shown on stdout while a probe runs.
///
/// Finishing clears the spinner and writes the themed check line in its
/// place, so the line lands on stdout with or without animation.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: BootcheckTheme,
    out: Term,
}

impl ProgressSpinner {
    /// Start animating `Checking <check>`.
    pub fn new(check: &str, theme: BootcheckTheme) -> Self {
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
        let style = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.magenta} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message(pending_message(check));
        bar.enable_steady_tick(Duration::from_millis(80));

        Self {
            bar,
            theme,
            out: Term::stdout(),
        }
    }

    /// No animation; only the finished line is written (quiet mode).
    pub fn hidden(theme: BootcheckTheme) -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme,
            out: Term::stdout(),
        }
    }
}

impl CheckProgress for ProgressSpinner {
    fn finish(self: Box<Self>, line: &CheckLine) {
        self.bar.finish_and_clear();
        self.out.write_line(&self.theme.format_check(line)).ok();
    }
}

fn pending_message(check: &str) -> String {
    format!("Checking {}", check)
}

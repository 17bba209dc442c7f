//! Plain line output for CI and pipes.

use super::line::CheckLine;
use super::theme::BootcheckTheme;
use super::{CheckProgress, OutputMode, UserInterface};

/// One uncolored line per finished check on stdout; errors on stderr.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: BootcheckTheme,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: BootcheckTheme::plain(),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn show_header(&mut self, project: &str) {
        if self.mode.shows_header() {
            println!("\n{}\n", self.theme.format_header(project));
        }
    }

    fn show_stage(&mut self, title: &str) {
        if self.mode.shows_stages() {
            println!("{}", self.theme.format_stage(title));
        }
    }

    fn start_check(&mut self, check: &str) -> Box<dyn CheckProgress> {
        if self.mode.shows_stages() {
            println!("  Checking {}", check);
        }
        Box::new(PlainCheck {
            theme: self.theme.clone(),
        })
    }

    fn show_hint(&mut self, hint: &str) {
        println!("{}", self.theme.format_hint(hint));
    }

    fn success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }
}

/// Prints nothing until the check finishes.
struct PlainCheck {
    theme: BootcheckTheme,
}

impl CheckProgress for PlainCheck {
    fn finish(self: Box<Self>, line: &CheckLine) {
        println!("{}", self.theme.format_check(line));
    }
}

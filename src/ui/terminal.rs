//! Interactive terminal UI.

use console::Term;

use super::{
    BootcheckTheme, CheckProgress, NonInteractiveUI, OutputMode, ProgressSpinner, UserInterface,
};

/// Spinners and colors on a TTY.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: BootcheckTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme: BootcheckTheme::detect(),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.out.write_line(msg).ok();
    }

    fn show_header(&mut self, project: &str) {
        if self.mode.shows_header() {
            let banner = self.theme.format_header(project);
            self.out.write_line(&format!("\n{}\n", banner)).ok();
        }
    }

    fn show_stage(&mut self, title: &str) {
        if self.mode.shows_stages() {
            self.out.write_line(&self.theme.format_stage(title)).ok();
        }
    }

    fn start_check(&mut self, check: &str) -> Box<dyn CheckProgress> {
        let theme = self.theme.clone();
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(check, theme))
        } else {
            Box::new(ProgressSpinner::hidden(theme))
        }
    }

    fn show_hint(&mut self, hint: &str) {
        self.out.write_line(&self.theme.format_hint(hint)).ok();
    }

    fn success(&mut self, msg: &str) {
        self.out.write_line(&self.theme.format_success(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        self.err.write_line(&self.theme.format_error(msg)).ok();
    }
}

/// Spinners on a TTY, plain lines everywhere else.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_output_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn create_ui_respects_mode() {
        let ui = create_ui(false, OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}

//! Rendering engine events.

use crate::bootstrap::BootstrapMode;
use crate::events::{CheckEvent, Event, Phase, Reporter, Stage};
use crate::orchestrator::SUCCESS_MESSAGE;

use super::line::CheckLine;
use super::{CheckProgress, UserInterface};

/// A [`Reporter`] that draws events on a [`UserInterface`].
///
/// A `Pending` check starts the UI's indicator; the matching `Found` or
/// `Failed` finishes it with a [`CheckLine`].
pub struct UiReporter<'a> {
    ui: &'a mut dyn UserInterface,
    pending: Option<Box<dyn CheckProgress>>,
}

impl<'a> UiReporter<'a> {
    /// Wrap a UI.
    pub fn new(ui: &'a mut dyn UserInterface) -> Self {
        Self { ui, pending: None }
    }

    fn stage(&mut self, stage: Stage) {
        let title = match stage {
            Stage::MandatoryChecks => "Required tools",
            Stage::OptionalChecks => "Optional tools",
            Stage::Bootstrap(BootstrapMode::Init) => "Initializing git repository",
            Stage::Bootstrap(BootstrapMode::Verify) => "Verifying git repository",
        };
        self.ui.show_stage(title);
    }

    fn check(&mut self, event: CheckEvent) {
        let Some(line) = CheckLine::from_event(&event) else {
            self.pending = Some(self.ui.start_check(&event.check));
            return;
        };

        let progress = match self.pending.take() {
            Some(progress) => progress,
            None => self.ui.start_check(&event.check),
        };
        progress.finish(&line);

        if event.phase == Phase::Failed {
            if let Some(hint) = &event.hint {
                self.ui.show_hint(hint);
            }
        }
    }

    fn finished(&mut self, success: bool, project: Option<String>, reason: Option<String>) {
        if success {
            match project {
                Some(name) => self
                    .ui
                    .success(&format!("{} ({})", SUCCESS_MESSAGE, name)),
                None => self.ui.success(SUCCESS_MESSAGE),
            }
        } else {
            let reason = reason.unwrap_or_else(|| "Preflight failed".to_string());
            self.ui.error(&reason);
        }
    }
}

impl Reporter for UiReporter<'_> {
    fn report(&mut self, event: Event) {
        match event {
            Event::StageStarted(stage) => self.stage(stage),
            Event::Check(check) => self.check(check),
            Event::Finished {
                success,
                project,
                reason,
            } => self.finished(success, project, reason),
        }
    }
}

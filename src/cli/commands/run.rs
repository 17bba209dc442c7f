//! Run command implementation.
//!
//! The `bootcheck run` command checks the toolchain and bootstraps git.

use crate::cli::args::RunArgs;
use crate::config::Configuration;
use crate::error::Result;
use crate::orchestrator::Orchestrator;
use crate::probe::{CommandRunner, SystemRunner};
use crate::ui::{UiReporter, UserInterface};

use super::dispatcher::{Command, CommandResult, ConfigSource};

/// Exit code for configuration errors.
pub const CONFIG_ERROR_EXIT_CODE: i32 = 2;

/// The run command implementation.
pub struct RunCommand {
    source: ConfigSource,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(source: ConfigSource, args: RunArgs) -> Self {
        Self { source, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }

    /// Run the preflight with an explicit process runner.
    pub fn execute_with(
        &self,
        ui: &mut dyn UserInterface,
        runner: &dyn CommandRunner,
    ) -> Result<CommandResult> {
        let config = match Configuration::load(
            &self.source.project_root,
            self.source.config_path.as_deref(),
            self.source.overrides.clone(),
        ) {
            Ok(config) => config,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(CONFIG_ERROR_EXIT_CODE));
            }
        };

        let title = config.project_name.clone().unwrap_or_else(|| {
            self.source
                .project_root
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default()
        });
        ui.show_header(&title);

        let outcome = {
            let mut reporter = UiReporter::new(ui);
            Orchestrator::new(&config, runner).run(&mut reporter)
        };

        if outcome.is_success() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(outcome.exit_code()))
        }
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let runner = SystemRunner::in_dir(&self.source.project_root);
        self.execute_with(ui, &runner)
    }
}

//! Config command implementation.
//!
//! The `bootcheck config` command shows the resolved configuration.

use crate::cli::args::ConfigArgs;
use crate::config::{default_config_path, Configuration};
use crate::error::{BootcheckError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ConfigSource};
use super::run::CONFIG_ERROR_EXIT_CODE;

/// The config command implementation.
pub struct ConfigCommand {
    source: ConfigSource,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(source: ConfigSource, args: ConfigArgs) -> Self {
        Self { source, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ConfigArgs {
        &self.args
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match Configuration::load(
            &self.source.project_root,
            self.source.config_path.as_deref(),
            self.source.overrides.clone(),
        ) {
            Ok(c) => c,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(CONFIG_ERROR_EXIT_CODE));
            }
        };

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&config).map_err(|e| BootcheckError::Other(e.into()))?;
            ui.message(&json);
        } else {
            let path = self
                .source
                .config_path
                .clone()
                .unwrap_or_else(|| default_config_path(&self.source.project_root));
            if path.exists() {
                ui.message(&format!("# {}", path.display()));
            }
            let yaml =
                serde_yaml::to_string(&config).map_err(|e| BootcheckError::Other(e.into()))?;
            ui.message(yaml.trim_end());
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigOverrides;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".bootcheck.yml"), config).unwrap();
        temp
    }

    fn source(temp: &TempDir) -> ConfigSource {
        ConfigSource {
            project_root: temp.path().to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn config_no_versions() {
        let temp = TempDir::new().unwrap();
        let cmd = ConfigCommand::new(source(&temp), ConfigArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("python_version"));
    }

    #[test]
    fn config_shows_yaml_with_path() {
        let temp = setup_project("python_version: \"3.8.0\"\npoetry_version: \"1.8.3\"\n");
        let cmd = ConfigCommand::new(source(&temp), ConfigArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.messages().iter().any(|m| m.contains(".bootcheck.yml")));
        assert!(ui.has_message("poetry_version"));
        assert!(ui.has_message("1.8.3"));
        assert!(ui.has_message("bootstrap: verify"));
    }

    #[test]
    fn config_json_output() {
        let temp = TempDir::new().unwrap();
        let mut src = source(&temp);
        src.overrides = ConfigOverrides {
            python_version: Some("3.8.0".to_string()),
            poetry_version: Some("1.8.3".to_string()),
            init_git: Some(true),
            ..Default::default()
        };
        let cmd = ConfigCommand::new(src, ConfigArgs { json: true });
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let json: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(json["python_version"], "3.8.0");
        assert_eq!(json["bootstrap"], "init");
        assert!(json["project_name"].is_null());
    }
}

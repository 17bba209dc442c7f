//! Resolution of the run configuration.
//!
//! The config file and command-line overrides are merged and validated
//! exactly once, producing an immutable [`Configuration`] that is passed
//! by reference to everything downstream.

use serde::Serialize;
use std::path::Path;

use crate::bootstrap::BootstrapMode;
use crate::config::loader::load_config;
use crate::config::schema::{parse_flag, ConfigFile, InitGit};
use crate::error::{BootcheckError, Result};
use crate::probe::SemVer;

/// Values supplied on the command line or through `BOOTCHECK_*` variables.
/// Each one wins over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Project name override.
    pub project_name: Option<String>,
    /// Interpreter version override.
    pub python_version: Option<String>,
    /// Poetry version override.
    pub poetry_version: Option<String>,
    /// `init_git` override.
    pub init_git: Option<bool>,
}

/// The resolved, read-only configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    /// Project name, if known.
    pub project_name: Option<String>,
    /// Interpreter version handed to `pyenv local`.
    pub python_version: String,
    /// Exact poetry version required.
    pub poetry_version: String,
    /// Repository bootstrap mode.
    pub bootstrap: BootstrapMode,
}

impl Configuration {
    /// Load the project's config file and resolve it against `overrides`.
    pub fn load(
        project_root: &Path,
        explicit: Option<&Path>,
        overrides: ConfigOverrides,
    ) -> Result<Self> {
        let file = load_config(project_root, explicit)?;
        Self::resolve(file, overrides)
    }

    /// Merge the file with overrides and validate the result.
    ///
    /// A missing `init_git` resolves to [`BootstrapMode::Verify`], which
    /// never modifies the working directory.
    pub fn resolve(file: ConfigFile, overrides: ConfigOverrides) -> Result<Self> {
        let python_version = required(
            "python_version",
            "--python-version",
            overrides.python_version.or(file.python_version),
        )?;
        let poetry_version = required(
            "poetry_version",
            "--poetry-version",
            overrides.poetry_version.or(file.poetry_version),
        )?;

        check_rendered("python_version", &python_version)?;
        check_rendered("poetry_version", &poetry_version)?;

        if python_version.chars().any(char::is_whitespace) {
            return Err(invalid(format!(
                "python_version '{}' must not contain whitespace",
                python_version
            )));
        }
        if let Err(e) = python_version.parse::<SemVer>() {
            // pyenv also accepts prefixes like `3.11`; let it decide
            tracing::warn!(python_version = %python_version, reason = %e, "interpreter version is not a full release");
        }
        poetry_version
            .parse::<SemVer>()
            .map_err(|e| invalid(format!("poetry_version: {}", e)))?;

        let init_git = match (overrides.init_git, file.init_git) {
            (Some(flag), _) => Some(flag),
            (None, Some(value)) => {
                if let InitGit::Text(text) = &value {
                    check_rendered("init_git", text)?;
                }
                Some(value.as_bool().ok_or_else(|| {
                    invalid(format!(
                        "init_git '{}' is not a boolean (expected true/false)",
                        value
                    ))
                })?)
            }
            (None, None) => None,
        };

        let bootstrap = match init_git {
            Some(flag) => BootstrapMode::from_init_git(flag),
            None => {
                tracing::debug!("init_git not set, verifying existing repository");
                BootstrapMode::Verify
            }
        };

        let project_name = overrides
            .project_name
            .or(file.project_name)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        let config = Self {
            project_name,
            python_version,
            poetry_version,
            bootstrap,
        };
        tracing::debug!(?config, "resolved configuration");
        Ok(config)
    }
}

/// Parse an `--init-git` style argument.
pub fn parse_flag_arg(value: &str) -> std::result::Result<bool, String> {
    parse_flag(value).ok_or_else(|| format!("'{}' is not a boolean (expected true/false)", value))
}

fn required(key: &str, flag: &str, value: Option<String>) -> Result<String> {
    let value = value.map(|v| v.trim().to_string()).unwrap_or_default();
    if value.is_empty() {
        return Err(invalid(format!(
            "{} is not set (use {} or set it in .bootcheck.yml)",
            key, flag
        )));
    }
    Ok(value)
}

/// Reject values the template engine never substituted.
fn check_rendered(key: &str, value: &str) -> Result<()> {
    if value.contains("{{") || value.contains("}}") {
        return Err(invalid(format!(
            "{} still contains a template placeholder: '{}'",
            key, value
        )));
    }
    Ok(())
}

fn invalid(message: String) -> BootcheckError {
    BootcheckError::ConfigValidationError { message }
}

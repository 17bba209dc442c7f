//! Configuration file discovery and loading.

use crate::config::schema::ConfigFile;
use crate::error::{BootcheckError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = ".bootcheck.yml";

/// Default config location for a project root.
pub fn default_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE_NAME)
}

/// Load the configuration file for a project.
///
/// An explicit path must exist. Without one, a missing
/// `<project_root>/.bootcheck.yml` yields an empty [`ConfigFile`] so that
/// every value can come from flags or the environment.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(BootcheckError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            load_config_file(path)
        }
        None => {
            let path = default_config_path(project_root);
            if path.exists() {
                load_config_file(&path)
            } else {
                tracing::debug!(path = %path.display(), "no config file, using flags only");
                Ok(ConfigFile::default())
            }
        }
    }
}

/// Load and parse a single configuration file.
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Parse configuration text. `path` is only used in error messages.
pub fn parse_config(content: &str, path: &Path) -> Result<ConfigFile> {
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    serde_yaml::from_str(content).map_err(|e| BootcheckError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

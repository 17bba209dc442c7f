//! Configuration file schema.
//!
//! `.bootcheck.yml` is usually written by the project template, so values
//! arrive as rendered text: `init_git: "True"` is as common as
//! `init_git: true`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw contents of `.bootcheck.yml`. Every key is optional here; required
/// values are enforced when the configuration is resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Project name, used in the final banner.
    pub project_name: Option<String>,

    /// Interpreter version handed to `pyenv local`.
    pub python_version: Option<String>,

    /// Exact poetry version required.
    pub poetry_version: Option<String>,

    /// Whether to run `git init` (true) or require an existing repository.
    pub init_git: Option<InitGit>,
}

/// The `init_git` value, as a YAML boolean or rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InitGit {
    /// A YAML boolean.
    Bool(bool),
    /// An unquoted `1` or `0`.
    Int(i64),
    /// Text such as `"True"` or `"no"`.
    Text(String),
}

impl InitGit {
    /// Interpret the value, or `None` if the text is not a recognized flag.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Int(1) => Some(true),
            Self::Int(0) => Some(false),
            Self::Int(_) => None,
            Self::Text(s) => parse_flag(s),
        }
    }
}

impl fmt::Display for InitGit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Parse a boolean flag the way template engines render them.
///
/// Accepts `true/false`, `yes/no`, `y/n`, `on/off`, `1/0`, ignoring case
/// and surrounding whitespace.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "y" | "on" | "1" => Some(true),
        "false" | "no" | "n" | "off" | "0" => Some(false),
        _ => None,
    }
}

//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Merging with overrides and validation in [`resolver`]
//!
//! # Example
//!
//! ```
//! use bootcheck::config::{load_config, ConfigOverrides, Configuration};
//! use bootcheck::bootstrap::BootstrapMode;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join(".bootcheck.yml"),
//!     "python_version: \"3.8.0\"\npoetry_version: \"1.8.3\"\ninit_git: \"True\"\n",
//! )
//! .unwrap();
//!
//! let file = load_config(temp.path(), None).unwrap();
//! let config = Configuration::resolve(file, ConfigOverrides::default()).unwrap();
//! assert_eq!(config.bootstrap, BootstrapMode::Init);
//! ```
//!
//! Values on the command line (or in `BOOTCHECK_*` variables) take
//! precedence over `.bootcheck.yml`.

pub mod loader;
pub mod resolver;
pub mod schema;

pub use loader::{default_config_path, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use resolver::{parse_flag_arg, ConfigOverrides, Configuration};
pub use schema::{parse_flag, ConfigFile, InitGit};

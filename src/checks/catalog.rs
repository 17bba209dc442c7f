//! The fixed set of checks a generated project needs.
//!
//! Mandatory: the interpreter (through pyenv) then poetry. The poetry
//! check assumes the interpreter check already passed.
//! Optional: make and docker.

use crate::config::Configuration;
use crate::probe::ToolSpec;

use super::check::Check;
use super::runner::CheckRunner;

/// Interpreter check: `pyenv local <version>`.
pub fn python_check(version: &str) -> Check {
    Check::mandatory(
        "python",
        ToolSpec::new("python", "pyenv", ["local", version]),
    )
    .with_summary(version)
    .with_hint(format!(
        "Install python with pyenv: `pyenv install {}`",
        version
    ))
}

/// Package manager check: `poetry --version`, pinned to `version`.
pub fn poetry_check(version: &str) -> Check {
    Check::mandatory(
        "poetry",
        ToolSpec::new("poetry", "poetry", ["--version"]).expecting_version(version),
    )
    .with_hint(format!(
        "Install poetry {0}, e.g. `pipx install poetry=={0}`",
        version
    ))
}

/// Build helper check: `make --version`.
pub fn make_check() -> Check {
    Check::optional("make", ToolSpec::new("make", "make", ["--version"]))
}

/// Container runtime check: `docker --version`.
pub fn docker_check() -> Check {
    Check::optional("docker", ToolSpec::new("docker", "docker", ["--version"]))
}

/// The standard runner for a resolved configuration.
pub fn standard_checks(config: &Configuration) -> CheckRunner {
    CheckRunner::new(
        vec![
            python_check(&config.python_version),
            poetry_check(&config.poetry_version),
        ],
        vec![make_check(), docker_check()],
    )
}

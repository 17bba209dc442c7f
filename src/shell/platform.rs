//! Platform detection helpers.

/// Environment variables that indicate a CI runner.
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    is_ci_with_env(|key| std::env::var(key))
}

/// Check for CI markers with a custom env var lookup function.
///
/// This allows testing without modifying actual environment variables.
pub fn is_ci_with_env<F>(env_fn: F) -> bool
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    CI_VARS.iter().any(|var| env_fn(var).is_ok())
}

//! Tool specifications.

use crate::shell::display_command;

/// One external dependency to probe.
///
/// The invocation always has at least the program name; the constructor
/// takes the program separately so an empty argv cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSpec {
    name: String,
    invocation: Vec<String>,
    expected_version: Option<String>,
}

impl ToolSpec {
    /// Create a spec that runs `program` with `args`.
    pub fn new<I, S>(name: &str, program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut invocation = vec![program.to_string()];
        invocation.extend(args.into_iter().map(Into::into));
        Self {
            name: name.to_string(),
            invocation,
            expected_version: None,
        }
    }

    /// Require the tool to report exactly this version.
    pub fn expecting_version(mut self, version: &str) -> Self {
        self.expected_version = Some(version.to_string());
        self
    }

    /// Tool name used in outcome details.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full argv, program first.
    pub fn invocation(&self) -> &[String] {
        &self.invocation
    }

    /// The program to spawn.
    pub fn program(&self) -> &str {
        &self.invocation[0]
    }

    /// The version the tool must report, if any.
    pub fn expected_version(&self) -> Option<&str> {
        self.expected_version.as_deref()
    }

    /// Invocation rendered for display.
    pub fn command_line(&self) -> String {
        display_command(&self.invocation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_builds_argv_with_program_first() {
        let spec = ToolSpec::new("python", "pyenv", ["local", "3.8.0"]);
        assert_eq!(spec.invocation(), &["pyenv", "local", "3.8.0"]);
        assert_eq!(spec.program(), "pyenv");
        assert_eq!(spec.name(), "python");
        assert!(spec.expected_version().is_none());
    }

    #[test]
    fn no_args_still_has_program() {
        let spec = ToolSpec::new("thing", "thing", Vec::<String>::new());
        assert_eq!(spec.invocation(), &["thing"]);
    }

    #[test]
    fn expecting_version_sets_expectation() {
        let spec = ToolSpec::new("poetry", "poetry", ["--version"]).expecting_version("1.8.3");
        assert_eq!(spec.expected_version(), Some("1.8.3"));
    }

    #[test]
    fn command_line_is_space_joined() {
        let spec = ToolSpec::new("git", "git", ["rev-parse", "--is-inside-work-tree"]);
        assert_eq!(spec.command_line(), "git rev-parse --is-inside-work-tree");
    }
}

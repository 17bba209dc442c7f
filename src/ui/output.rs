//! Output verbosity.

/// Output verbosity mode, from `--verbose` / `--quiet`.
///
/// Check lines, hints and the final status are shown in every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also show stage headings and each check as it starts.
    Verbose,
    /// Header plus animated checks.
    #[default]
    Normal,
    /// No header and no animation.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows stage headings.
    pub fn shows_stages(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows the run header.
    pub fn shows_header(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode animates pending checks.
    pub fn shows_spinners(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_verbose_shows_stages() {
        assert!(OutputMode::Verbose.shows_stages());
        assert!(!OutputMode::Normal.shows_stages());
        assert!(!OutputMode::Quiet.shows_stages());
    }

    #[test]
    fn quiet_hides_header_and_spinners() {
        assert!(OutputMode::Normal.shows_header());
        assert!(OutputMode::Verbose.shows_spinners());
        assert!(!OutputMode::Quiet.shows_header());
        assert!(!OutputMode::Quiet.shows_spinners());
    }

    #[test]
    fn output_mode_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }
}

//! Semantic version extraction from tool banners.
//!
//! Tools print their version in wildly different shapes
//! (`Poetry (version 1.8.3)`, `Docker version 24.0.7, build afdd53b`,
//! `GNU Make 4.3`). Only the first `major.minor.patch` triple is considered.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static RE_SEMVER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.(\d+)\.(\d+)").unwrap());

/// A `major.minor.patch` version triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SemVer {
    /// Major component.
    pub major: u64,
    /// Minor component.
    pub minor: u64,
    /// Patch component.
    pub patch: u64,
}

impl SemVer {
    /// Create a version from its components.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SemVer {
    type Err = String;

    /// Parse an exact `x.y.z` string. Surrounding text is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('.').collect();
        if parts.len() != 3 {
            return Err(format!("expected major.minor.patch, got '{}'", s));
        }
        let component = |p: &str| {
            if p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()) {
                return Err(format!("invalid version component '{}' in '{}'", p, s));
            }
            p.parse::<u64>()
                .map_err(|e| format!("invalid version component '{}': {}", p, e))
        };
        Ok(Self::new(
            component(parts[0])?,
            component(parts[1])?,
            component(parts[2])?,
        ))
    }
}

/// Extract the first `major.minor.patch` version found in `text`.
///
/// First match wins: `"Docker version 24.0.7, build 1.2.3"` yields `24.0.7`.
/// Returns `None` when no triple is present or a component overflows `u64`.
pub fn extract_semver(text: &str) -> Option<SemVer> {
    extract_semver_match(text).map(|(version, _)| version)
}

/// Like [`extract_semver`], also returning the matched text.
pub fn extract_semver_match(text: &str) -> Option<(SemVer, &str)> {
    let caps = RE_SEMVER.captures(text)?;
    let matched = caps.get(0)?.as_str();
    let component = |i: usize| caps.get(i)?.as_str().parse::<u64>().ok();
    Some((
        SemVer::new(component(1)?, component(2)?, component(3)?),
        matched,
    ))
}

/// Compare a discovered version against the requested one.
///
/// When `requested` is itself a valid `x.y.z` the comparison is numeric
/// (`1.08.0` equals `1.8.0`), otherwise the matched text must equal it.
pub fn version_matches(requested: &str, found: &SemVer, found_text: &str) -> bool {
    match requested.parse::<SemVer>() {
        Ok(wanted) => wanted == *found,
        Err(_) => requested.trim() == found_text,
    }
}

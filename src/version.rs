//! Release version parsing
//!
//! Versions come from hand-edited files and CLI flags, so minor and patch are
//! optional (`1`, `1.31`, `v1.31.2`). Only major.minor drives branch and track
//! names; the patch is kept for display.

use std::fmt;
use std::str::FromStr;

use crate::error::{CheckError, CheckResult};

/// A parsed `major[.minor[.patch]]` version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReleaseVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: Option<u64>,
}

impl ReleaseVersion {
    /// Parse a version string, ignoring surrounding whitespace and a leading `v`.
    ///
    /// Missing minor/patch components are accepted; a missing minor counts as
    /// `0`. Pre-release and build suffixes are validated and then dropped.
    pub fn parse(input: &str) -> CheckResult<Self> {
        let trimmed = input.trim();
        let text = trimmed.strip_prefix('v').unwrap_or(trimmed);

        let invalid = |reason: &str| CheckError::InvalidVersion {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let core_end = text.find(['-', '+']).unwrap_or(text.len());
        let (core, suffix) = text.split_at(core_end);
        let parts = core.split('.').count();
        if core.is_empty() || parts > 3 {
            return Err(invalid("expected major[.minor[.patch]]"));
        }

        let padded = match parts {
            1 => format!("{core}.0.0{suffix}"),
            2 => format!("{core}.0{suffix}"),
            _ => text.to_string(),
        };
        let parsed = semver::Version::parse(&padded).map_err(|e| invalid(&e.to_string()))?;

        Ok(Self {
            major: parsed.major,
            minor: parsed.minor,
            patch: (parts == 3).then_some(parsed.patch),
        })
    }

    /// The `major.minor` track identifier, e.g. `1.31`.
    pub fn track(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }

    pub fn same_minor(&self, other: &ReleaseVersion) -> bool {
        self.major == other.major && self.minor == other.minor
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

impl FromStr for ReleaseVersion {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

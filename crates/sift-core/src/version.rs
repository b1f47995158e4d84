//! Semantic package versions.

use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// A parsed package version ordered by semantic-versioning precedence.
///
/// Parsing is slightly more lenient than strict semver: a leading `v` is
/// dropped and missing minor/patch components are filled with `0`, so `1.2`
/// parses as `1.2.0`. A fourth numeric component is kept as a revision that
/// orders after patch (`1.0.0.1 > 1.0.0`); a zero revision is the same
/// version as none.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageVersion {
    version: semver::Version,
    revision: u64,
}

impl PackageVersion {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let trimmed = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);

        let split_at = trimmed.find(['-', '+']).unwrap_or(trimmed.len());
        let (core, suffix) = trimmed.split_at(split_at);

        let mut parts = core.splitn(4, '.');
        let mut padded = parts.by_ref().take(3).collect::<Vec<_>>().join(".");
        for _ in padded.matches('.').count()..2 {
            padded.push_str(".0");
        }
        padded.push_str(suffix);

        let revision = match parts.next() {
            Some(revision) => {
                revision
                    .parse::<u64>()
                    .map_err(|source| CoreError::InvalidRevision {
                        version: input.to_string(),
                        source,
                    })?
            }
            None => 0,
        };

        let version =
            semver::Version::parse(&padded).map_err(|source| CoreError::InvalidVersion {
                version: input.to_string(),
                source,
            })?;

        Ok(Self { version, revision })
    }

    /// Whether the version carries a prerelease label (`1.0.0-beta`).
    pub fn is_prerelease(&self) -> bool {
        !self.version.pre.is_empty()
    }

    /// The fourth numeric component, `0` when absent.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn as_semver(&self) -> &semver::Version {
        &self.version
    }
}

impl Ord for PackageVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (&self.version, &other.version);
        (a.major, a.minor, a.patch)
            .cmp(&(b.major, b.minor, b.patch))
            .then_with(|| self.revision.cmp(&other.revision))
            .then_with(|| a.pre.cmp(&b.pre))
            .then_with(|| a.build.cmp(&b.build))
    }
}

impl PartialOrd for PackageVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for PackageVersion {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PackageVersion {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<PackageVersion> for String {
    fn from(value: PackageVersion) -> Self {
        value.to_string()
    }
}

impl From<semver::Version> for PackageVersion {
    fn from(version: semver::Version) -> Self {
        Self {
            version,
            revision: 0,
        }
    }
}

impl fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = &self.version;
        write!(f, "{}.{}.{}", v.major, v.minor, v.patch)?;
        if self.revision > 0 {
            write!(f, ".{}", self.revision)?;
        }
        if !v.pre.is_empty() {
            write!(f, "-{}", v.pre)?;
        }
        if !v.build.is_empty() {
            write!(f, "+{}", v.build)?;
        }
        Ok(())
    }
}

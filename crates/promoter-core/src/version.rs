use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::CoreError;

const MAJOR: usize = 0;
const MINOR: usize = 1;
const PATCH: usize = 2;

/// A package version made of numeric segments.
///
/// Missing trailing segments behave as zero, so `2`, `2.0` and `2.0.0` compare
/// equal and hash identically. The segments are kept as written for display.
#[derive(Debug, Clone)]
pub struct Version {
    segments: Vec<u64>,
}

impl Version {
    #[must_use]
    pub fn segments(&self) -> &[u64] {
        &self.segments
    }

    #[must_use]
    pub fn segment(&self, index: usize) -> u64 {
        self.segments.get(index).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn major(&self) -> u64 {
        self.segment(MAJOR)
    }

    #[must_use]
    pub fn minor(&self) -> u64 {
        self.segment(MINOR)
    }

    #[must_use]
    pub fn patch(&self) -> u64 {
        self.segment(PATCH)
    }

    fn significant(&self) -> &[u64] {
        let len = self
            .segments
            .iter()
            .rposition(|&s| s != 0)
            .map_or(0, |idx| idx + 1);
        &self.segments[..len]
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        (0..len)
            .map(|idx| self.segment(idx).cmp(&other.segment(idx)))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(CoreError::InvalidVersion {
                input: s.to_string(),
                reason: "version is empty",
            });
        }

        let segments = input
            .split('.')
            .map(|part| {
                if part.is_empty() {
                    return Err(CoreError::InvalidVersion {
                        input: s.to_string(),
                        reason: "empty segment",
                    });
                }
                part.parse::<u64>().map_err(|_| CoreError::InvalidVersion {
                    input: s.to_string(),
                    reason: "segments must be non-negative integers",
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { segments })
    }
}

impl From<&semver::Version> for Version {
    fn from(version: &semver::Version) -> Self {
        Self {
            segments: vec![version.major, version.minor, version.patch],
        }
    }
}

impl From<semver::Version> for Version {
    fn from(version: semver::Version) -> Self {
        Self::from(&version)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

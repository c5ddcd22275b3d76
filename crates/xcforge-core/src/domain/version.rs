//! OS version values.
//!
//! Deployment targets and simulator runtimes are written the way Apple
//! writes them (`"17"`, `"17.2"`, `"16.4.1"`), which is not strict semver.
//! They are parsed leniently into `semver::Version`, padding missing
//! components with zero, so that ordering is the usual semver ordering.

use thiserror::Error;

/// A parsed OS version.
pub type Version = semver::Version;

/// Returned when a string cannot be read as an OS version.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid OS version '{input}': {reason}")]
pub struct VersionParseError {
    pub input: String,
    pub reason: String,
}

/// Parse an Apple-style OS version such as `"17"`, `"17.2"` or `"16.4.1"`.
pub fn parse_os_version(s: &str) -> Result<Version, VersionParseError> {
    let trimmed = s.trim();
    let fail = |reason: &str| VersionParseError {
        input: s.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(fail("empty string"));
    }

    let mut components = [0_u64; 3];
    let mut count = 0;
    for part in trimmed.split('.') {
        if count == components.len() {
            return Err(fail("more than three components"));
        }
        components[count] = part
            .parse::<u64>()
            .map_err(|_| fail("components must be non-negative integers"))?;
        count += 1;
    }

    Ok(Version::new(components[0], components[1], components[2]))
}

/// Serde adapter for fields holding an OS version written in Apple style.
///
/// Serializes as `major.minor.patch`; accepts any form `parse_os_version`
/// accepts.
pub mod serde_os_version {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{Version, parse_os_version};

    pub fn serialize<S: Serializer>(version: &Version, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(version)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Version, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_os_version(&raw).map_err(serde::de::Error::custom)
    }
}

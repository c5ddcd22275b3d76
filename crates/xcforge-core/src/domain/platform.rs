//! Apple platform families a target can be built for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Platform a target declares.
///
/// Every variant except [`Platform::MacOs`] runs on a simulator when built
/// for testing; macOS targets run directly on the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "iOS")]
    Ios,
    #[serde(rename = "tvOS")]
    TvOs,
    #[serde(rename = "watchOS")]
    WatchOs,
    #[serde(rename = "visionOS")]
    VisionOs,
    #[serde(rename = "macOS")]
    MacOs,
}

impl Platform {
    /// All platforms, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Ios,
        Self::TvOs,
        Self::WatchOs,
        Self::VisionOs,
        Self::MacOs,
    ];

    /// Apple's spelling of the platform name.
    ///
    /// This is also the first word of a simulator runtime name
    /// (`"iOS 17.2"`, `"watchOS 10.0"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ios => "iOS",
            Self::TvOs => "tvOS",
            Self::WatchOs => "watchOS",
            Self::VisionOs => "visionOS",
            Self::MacOs => "macOS",
        }
    }

    /// Whether build/test actions for this platform need a simulator device.
    #[must_use]
    pub const fn is_simulated(self) -> bool {
        !matches!(self, Self::MacOs)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known platform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown platform '{0}' (expected one of iOS, tvOS, watchOS, visionOS, macOS)")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownPlatform(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_macos_is_not_simulated() {
        let simulated: Vec<_> = Platform::ALL
            .into_iter()
            .filter(|p| p.is_simulated())
            .collect();
        assert_eq!(
            simulated,
            vec![
                Platform::Ios,
                Platform::TvOs,
                Platform::WatchOs,
                Platform::VisionOs
            ]
        );
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("ios".parse::<Platform>().unwrap(), Platform::Ios);
        assert_eq!(" visionOS ".parse::<Platform>().unwrap(), Platform::VisionOs);
        assert_eq!("MACOS".parse::<Platform>().unwrap(), Platform::MacOs);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "android".parse::<Platform>().unwrap_err();
        assert_eq!(err, UnknownPlatform("android".to_string()));
    }

    #[test]
    fn serializes_with_apple_casing() {
        let json = serde_json::to_string(&Platform::TvOs).unwrap();
        assert_eq!(json, "\"tvOS\"");
        let back: Platform = serde_json::from_str("\"watchOS\"").unwrap();
        assert_eq!(back, Platform::WatchOs);
    }
}

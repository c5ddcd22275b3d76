//! Concrete execution destinations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a build or test action runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "udid")]
pub enum Destination {
    /// A simulator device, identified by its UDID.
    Device(String),
    /// The host Mac.
    Mac,
}

/// Renders the value passed to `xcodebuild -destination`.
impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Device(udid) => write!(f, "id={udid}"),
            Self::Mac => f.write_str("platform=macOS"),
        }
    }
}

//! Device finder port definition.
//!
//! This port abstracts the simulator device registry. Implementations
//! match an available device/runtime pair against a [`DeviceQuery`];
//! the registry itself (how devices are enumerated) is not the core's
//! concern.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Platform, SimulatorDeviceAndRuntime, Version};

/// Constraints a device must satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceQuery {
    pub platform: Platform,
    /// Exact runtime version requested by the caller.
    pub version: Option<Version>,
    /// Lower bound on the runtime version.
    pub min_version: Option<Version>,
    /// Exact device name requested by the caller.
    pub device_name: Option<String>,
}

impl DeviceQuery {
    /// Query with no constraints beyond the platform.
    pub const fn new(platform: Platform) -> Self {
        Self {
            platform,
            version: None,
            min_version: None,
            device_name: None,
        }
    }

    /// Human-readable list of the constraints that were supplied.
    pub fn describe_constraints(&self) -> String {
        let mut parts = Vec::new();
        if let Some(version) = &self.version {
            parts.push(format!("version {version}"));
        }
        if let Some(min) = &self.min_version {
            parts.push(format!("minimum version {min}"));
        }
        if let Some(name) = &self.device_name {
            parts.push(format!("name '{name}'"));
        }

        if parts.is_empty() {
            String::new()
        } else {
            format!(" matching {}", parts.join(", "))
        }
    }
}

/// Errors that can occur while looking up a device.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceFinderError {
    /// No available device satisfies the query.
    #[error("Could not find an available {} simulator device{}", .0.platform, .0.describe_constraints())]
    DeviceNotFound(DeviceQuery),

    /// The device registry could not be queried.
    #[error("Device registry unavailable: {0}")]
    Unavailable(String),

    /// The registry returned a device without a UDID.
    #[error("Simulator device '{0}' has no UDID")]
    MissingUdid(String),
}

/// Port for finding an available simulator device.
///
/// Lookups may suspend on the registry's own I/O, so the method is async.
/// Implementations prefer the most specific match and fail with
/// [`DeviceFinderError::DeviceNotFound`] when nothing matches.
#[async_trait]
pub trait DeviceFinder: Send + Sync {
    async fn find_available_device(
        &self,
        query: &DeviceQuery,
    ) -> Result<SimulatorDeviceAndRuntime, DeviceFinderError>;
}

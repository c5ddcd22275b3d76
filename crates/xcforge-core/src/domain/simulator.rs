//! Simulator devices and runtimes as reported by a device registry.

use serde::{Deserialize, Serialize};

use super::platform::Platform;
use super::version::{Version, serde_os_version};

/// Boot state of a simulator device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceState {
    Booted,
    Shutdown,
    #[serde(other)]
    Other,
}

/// A simulator device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatorDevice {
    pub udid: String,
    pub name: String,
    pub state: DeviceState,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

impl SimulatorDevice {
    pub const fn is_booted(&self) -> bool {
        matches!(self.state, DeviceState::Booted)
    }
}

/// A simulator runtime (an OS image a device boots).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatorRuntime {
    pub identifier: String,
    /// Display name, e.g. `"iOS 17.2"`.
    pub name: String,
    #[serde(with = "serde_os_version")]
    pub version: Version,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

impl SimulatorRuntime {
    /// Platform named by the first word of the runtime name.
    pub fn platform(&self) -> Option<Platform> {
        self.name.split_whitespace().next()?.parse().ok()
    }
}

/// A device together with the runtime it boots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatorDeviceAndRuntime {
    pub device: SimulatorDevice,
    pub runtime: SimulatorRuntime,
}

const fn default_true() -> bool {
    true
}

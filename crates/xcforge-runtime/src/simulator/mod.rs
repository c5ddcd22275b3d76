//! Inventory-backed simulator device finder.
//!
//! `InventoryDeviceFinder` implements the `DeviceFinder` port by matching
//! a query against a list of device/runtime pairs supplied up front
//! (typically a JSON snapshot exported from the simulator registry).

use std::cmp::Reverse;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, warn};
use xcforge_core::{
    DeviceFinder, DeviceFinderError, DeviceQuery, SimulatorDeviceAndRuntime, Version,
};

/// Errors while loading a device inventory.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Failed to read device inventory {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid device inventory: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Device finder over a fixed inventory.
#[derive(Debug, Clone, Default)]
pub struct InventoryDeviceFinder {
    entries: Vec<SimulatorDeviceAndRuntime>,
}

impl InventoryDeviceFinder {
    pub const fn new(entries: Vec<SimulatorDeviceAndRuntime>) -> Self {
        Self { entries }
    }

    /// Parse an inventory from a JSON array of `{ "device": .., "runtime": .. }`.
    pub fn from_json(json: &str) -> Result<Self, InventoryError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Read and parse an inventory file.
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, InventoryError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| InventoryError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let finder = Self::from_json(&raw)?;
        debug!(path = %path.display(), entries = finder.entries.len(), "Loaded device inventory");
        Ok(finder)
    }

    /// Best entry for `query`, if any.
    ///
    /// Booted devices win, then newer runtimes, then device name order.
    pub fn best_match(&self, query: &DeviceQuery) -> Option<&SimulatorDeviceAndRuntime> {
        self.entries
            .iter()
            .filter(|entry| matches_query(entry, query))
            .min_by(|a, b| preference(a).cmp(&preference(b)))
    }
}

fn preference(entry: &SimulatorDeviceAndRuntime) -> (bool, Reverse<&Version>, &str) {
    (
        !entry.device.is_booted(),
        Reverse(&entry.runtime.version),
        &entry.device.name,
    )
}

fn matches_query(entry: &SimulatorDeviceAndRuntime, query: &DeviceQuery) -> bool {
    let SimulatorDeviceAndRuntime { device, runtime } = entry;

    if !device.is_available || !runtime.is_available {
        return false;
    }
    if device.udid.trim().is_empty() {
        warn!(device = %device.name, "Skipping simulator device without a UDID");
        return false;
    }
    if runtime.platform() != Some(query.platform) {
        return false;
    }

    let version_ok = match (&query.version, &query.min_version) {
        (Some(exact), _) => runtime.version == *exact,
        (None, Some(min)) => runtime.version >= *min,
        (None, None) => true,
    };
    if !version_ok {
        return false;
    }

    query
        .device_name
        .as_ref()
        .is_none_or(|name| device.name == *name)
}

#[async_trait]
impl DeviceFinder for InventoryDeviceFinder {
    async fn find_available_device(
        &self,
        query: &DeviceQuery,
    ) -> Result<SimulatorDeviceAndRuntime, DeviceFinderError> {
        let Some(found) = self.best_match(query) else {
            debug!(platform = %query.platform, candidates = self.entries.len(), "No device matched");
            return Err(DeviceFinderError::DeviceNotFound(query.clone()));
        };

        info!(
            device = %found.device.name,
            runtime = %found.runtime.name,
            "Selected simulator device"
        );
        Ok(found.clone())
    }
}

#[cfg(test)]
mod tests {
    use xcforge_core::{DeviceState, Platform, SimulatorDevice, SimulatorRuntime};

    use super::*;

    fn entry(
        udid: &str,
        name: &str,
        state: DeviceState,
        runtime: &str,
        version: Version,
    ) -> SimulatorDeviceAndRuntime {
        SimulatorDeviceAndRuntime {
            device: SimulatorDevice {
                udid: udid.to_string(),
                name: name.to_string(),
                state,
                is_available: true,
            },
            runtime: SimulatorRuntime {
                identifier: format!("com.apple.CoreSimulator.SimRuntime.{udid}"),
                name: runtime.to_string(),
                version,
                is_available: true,
            },
        }
    }

    fn inventory() -> InventoryDeviceFinder {
        InventoryDeviceFinder::new(vec![
            entry("IPHONE-16", "iPhone 14", DeviceState::Shutdown, "iOS 16.4", Version::new(16, 4, 0)),
            entry("IPHONE-17B", "iPhone 15 Pro", DeviceState::Shutdown, "iOS 17.2", Version::new(17, 2, 0)),
            entry("IPHONE-17A", "iPhone 15", DeviceState::Shutdown, "iOS 17.2", Version::new(17, 2, 0)),
            entry("TV-17", "Apple TV", DeviceState::Booted, "tvOS 17.2", Version::new(17, 2, 0)),
        ])
    }

    #[tokio::test]
    async fn newest_runtime_then_name_is_preferred() {
        let found = inventory()
            .find_available_device(&DeviceQuery::new(Platform::Ios))
            .await
            .unwrap();
        assert_eq!(found.device.udid, "IPHONE-17A");
    }

    #[tokio::test]
    async fn booted_device_beats_newer_runtime() {
        let mut finder = inventory();
        finder.entries[0].device.state = DeviceState::Booted;

        let found = finder
            .find_available_device(&DeviceQuery::new(Platform::Ios))
            .await
            .unwrap();
        assert_eq!(found.device.udid, "IPHONE-16");
    }

    #[tokio::test]
    async fn exact_version_and_name_must_match() {
        let query = DeviceQuery {
            version: Some(Version::new(16, 4, 0)),
            device_name: Some("iPhone 14".to_string()),
            ..DeviceQuery::new(Platform::Ios)
        };
        let found = inventory().find_available_device(&query).await.unwrap();
        assert_eq!(found.device.udid, "IPHONE-16");

        let query = DeviceQuery {
            version: Some(Version::new(16, 4, 0)),
            device_name: Some("iPhone 15".to_string()),
            ..DeviceQuery::new(Platform::Ios)
        };
        let err = inventory().find_available_device(&query).await.unwrap_err();
        assert_eq!(err, DeviceFinderError::DeviceNotFound(query));
    }

    #[tokio::test]
    async fn minimum_version_filters_older_runtimes() {
        let query = DeviceQuery {
            min_version: Some(Version::new(17, 0, 0)),
            device_name: Some("iPhone 14".to_string()),
            ..DeviceQuery::new(Platform::Ios)
        };
        assert!(inventory().find_available_device(&query).await.is_err());
    }

    #[tokio::test]
    async fn devices_without_udid_are_skipped() {
        let mut finder = inventory();
        finder.entries[2].device.udid = String::new();

        let found = finder
            .find_available_device(&DeviceQuery::new(Platform::Ios))
            .await
            .unwrap();
        assert_eq!(found.device.udid, "IPHONE-17B");

        finder.entries[3].device.udid = " ".to_string();
        let err = finder
            .find_available_device(&DeviceQuery::new(Platform::TvOs))
            .await
            .unwrap_err();
        assert!(matches!(err, DeviceFinderError::DeviceNotFound(_)));
    }

    #[tokio::test]
    async fn missing_file_message_names_the_path_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("devices.json");
        let err = InventoryDeviceFinder::from_json_file(&path).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("Failed to read device inventory {}", path.display())
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[tokio::test]
    async fn unavailable_entries_are_skipped() {
        let mut finder = inventory();
        finder.entries[3].runtime.is_available = false;

        let err = finder
            .find_available_device(&DeviceQuery::new(Platform::TvOs))
            .await
            .unwrap_err();
        assert!(matches!(err, DeviceFinderError::DeviceNotFound(_)));
    }

    #[test]
    fn parses_json_inventory() {
        let json = r#"[
            {
                "device": { "udid": "W1", "name": "Apple Watch Series 9", "state": "Shutdown" },
                "runtime": {
                    "identifier": "com.apple.CoreSimulator.SimRuntime.watchOS-10-2",
                    "name": "watchOS 10.2",
                    "version": "10.2"
                }
            }
        ]"#;
        let finder = InventoryDeviceFinder::from_json(json).unwrap();
        let query = DeviceQuery::new(Platform::WatchOs);
        assert_eq!(finder.best_match(&query).map(|e| e.device.udid.as_str()), Some("W1"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            InventoryDeviceFinder::from_json("{"),
            Err(InventoryError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = InventoryDeviceFinder::from_json_file(dir.path().join("devices.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::Io { .. }));
    }
}

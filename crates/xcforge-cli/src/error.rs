//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from CoreError to exit codes and user-facing messages.

use thiserror::Error;
use xcforge_core::{CoreError, DeviceFinderError, LoadError};
use xcforge_runtime::InventoryError;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid arguments or references to things that don't exist.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// An input file was read but its contents are malformed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Requested input was not found.
    #[error("{0}")]
    NotFound(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An external tool or registry failed.
    #[error("{0}")]
    Unavailable(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,     // EX_USAGE
            Self::InvalidInput(_) => 65, // EX_DATAERR
            Self::NotFound(_) => 66,     // EX_NOINPUT
            Self::Unavailable(_) => 69,  // EX_UNAVAILABLE
            Self::Io(_) => 74,           // EX_IOERR
            Self::Config(_) => 78,       // EX_CONFIG
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Device(DeviceFinderError::DeviceNotFound(query)) => {
                Self::NotFound(DeviceFinderError::DeviceNotFound(query).to_string())
            }
            CoreError::Device(registry_err) => Self::Unavailable(registry_err.to_string()),
            CoreError::Load(LoadError::BundleNotFound(path)) => {
                Self::NotFound(LoadError::BundleNotFound(path).to_string())
            }
            CoreError::Load(LoadError::Metadata(metadata_err)) => {
                Self::Unavailable(metadata_err.to_string())
            }
            CoreError::Settings(settings_err) => Self::Config(settings_err.to_string()),
            CoreError::Validation(msg) => Self::Arguments(msg),
        }
    }
}

impl From<InventoryError> for CliError {
    fn from(err: InventoryError) -> Self {
        match &err {
            InventoryError::Io { source, .. } => Self::Io(format!("{err}: {source}")),
            InventoryError::Parse(_) => Self::InvalidInput(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use xcforge_core::{DeviceQuery, Platform, SettingsError};

    use super::*;

    #[test]
    fn missing_bundle_is_no_input() {
        let err = CliError::from(CoreError::from(LoadError::BundleNotFound(PathBuf::from(
            "/Build/Gone.framework",
        ))));
        assert_eq!(err.exit_code(), 66);
        assert_eq!(err.to_string(), "Couldn't find framework at /Build/Gone.framework");
    }

    #[test]
    fn missing_device_is_no_input() {
        let err = CliError::from(CoreError::from(DeviceFinderError::DeviceNotFound(
            DeviceQuery::new(Platform::Ios),
        )));
        assert_eq!(err.exit_code(), 66);
    }

    #[test]
    fn device_without_udid_is_unavailable() {
        let err = CliError::from(CoreError::from(DeviceFinderError::MissingUdid(
            "iPhone 15".to_string(),
        )));
        assert_eq!(err.exit_code(), 69);
    }

    #[test]
    fn settings_errors_are_config_errors() {
        let err = CliError::from(CoreError::from(SettingsError::EmptyDeviceName));
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn validation_errors_are_usage_errors() {
        let err = CliError::from(CoreError::Validation("bad version".to_string()));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn inventory_errors_split_into_io_and_data() {
        let io = CliError::from(InventoryError::Io {
            path: PathBuf::from("/tmp/devices.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
        assert_eq!(io.exit_code(), 74);
        assert!(io.to_string().contains("/tmp/devices.json"));

        let parse = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        assert_eq!(CliError::from(InventoryError::Parse(parse)).exit_code(), 65);
    }
}

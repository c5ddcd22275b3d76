//! Settings domain types and validation.
//!
//! This module contains the core settings types used across the application.
//! These are pure domain types with no infrastructure dependencies; adapters
//! decide where settings are read from.

use serde::{Deserialize, Serialize};

use crate::domain::{Version, parse_os_version};

/// Default `lipo` invocation (resolved through `PATH`).
pub const DEFAULT_LIPO: &str = "lipo";

/// Default `file` invocation.
pub const DEFAULT_FILE: &str = "file";

/// Default `dwarfdump` invocation.
pub const DEFAULT_DWARFDUMP: &str = "dwarfdump";

/// Application settings structure.
///
/// All fields are optional to support partial updates and graceful defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Path or name of the `lipo` tool.
    pub lipo_path: Option<String>,

    /// Path or name of the `file` tool.
    pub file_path: Option<String>,

    /// Path or name of the `dwarfdump` tool.
    pub dwarfdump_path: Option<String>,

    /// Device name used for iOS targets when the caller does not request one.
    pub default_device_name: Option<String>,

    /// OS version used for iOS targets when the caller does not request one
    /// (e.g. `"17.2"`).
    pub default_os_version: Option<String>,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            lipo_path: Some(DEFAULT_LIPO.to_string()),
            file_path: Some(DEFAULT_FILE.to_string()),
            dwarfdump_path: Some(DEFAULT_DWARFDUMP.to_string()),
            default_device_name: None,
            default_os_version: None,
        }
    }

    /// Effective `lipo` tool (with default fallback).
    #[must_use]
    pub fn effective_lipo(&self) -> &str {
        self.lipo_path.as_deref().unwrap_or(DEFAULT_LIPO)
    }

    /// Effective `file` tool (with default fallback).
    #[must_use]
    pub fn effective_file(&self) -> &str {
        self.file_path.as_deref().unwrap_or(DEFAULT_FILE)
    }

    /// Effective `dwarfdump` tool (with default fallback).
    #[must_use]
    pub fn effective_dwarfdump(&self) -> &str {
        self.dwarfdump_path.as_deref().unwrap_or(DEFAULT_DWARFDUMP)
    }

    /// Parsed default OS version, if one is configured and valid.
    pub fn default_os_version(&self) -> Option<Version> {
        self.default_os_version
            .as_deref()
            .and_then(|v| parse_os_version(v).ok())
    }

    /// Merge another settings into this one, only updating fields that are Some.
    pub fn merge(&mut self, other: &SettingsUpdate) {
        if let Some(ref path) = other.lipo_path {
            self.lipo_path.clone_from(path);
        }
        if let Some(ref path) = other.file_path {
            self.file_path.clone_from(path);
        }
        if let Some(ref path) = other.dwarfdump_path {
            self.dwarfdump_path.clone_from(path);
        }
        if let Some(ref name) = other.default_device_name {
            self.default_device_name.clone_from(name);
        }
        if let Some(ref version) = other.default_os_version {
            self.default_os_version.clone_from(version);
        }
    }
}

/// Partial settings update.
///
/// Each field is `Option<Option<T>>`:
/// - `None` = don't change this field
/// - `Some(None)` = set field to None/null
/// - `Some(Some(value))` = set field to value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub lipo_path: Option<Option<String>>,
    pub file_path: Option<Option<String>>,
    pub dwarfdump_path: Option<Option<String>>,
    pub default_device_name: Option<Option<String>>,
    pub default_os_version: Option<Option<String>>,
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Tool path for {0} cannot be empty")]
    EmptyToolPath(&'static str),

    #[error("Default device name cannot be empty")]
    EmptyDeviceName,

    #[error("Default OS version '{0}' is not a valid version")]
    InvalidOsVersion(String),
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    let tools = [
        ("lipo", &settings.lipo_path),
        ("file", &settings.file_path),
        ("dwarfdump", &settings.dwarfdump_path),
    ];
    for (tool, path) in tools {
        if path.as_ref().is_some_and(|p| p.trim().is_empty()) {
            return Err(SettingsError::EmptyToolPath(tool));
        }
    }

    if settings
        .default_device_name
        .as_ref()
        .is_some_and(|n| n.trim().is_empty())
    {
        return Err(SettingsError::EmptyDeviceName);
    }

    if let Some(ref version) = settings.default_os_version {
        if parse_os_version(version).is_err() {
            return Err(SettingsError::InvalidOsVersion(version.clone()));
        }
    }

    Ok(())
}

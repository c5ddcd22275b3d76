//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. All concrete implementations are instantiated here:
//! - Settings (defaults, settings file, environment, flags)
//! - Toolchain metadata provider (via xcforge-runtime)
//! - Device inventory and project graph (loaded per command)
//! - Core services (via xcforge-core)

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;
use xcforge_core::{
    BinaryMetadataLoader, BinaryMetadataProvider, CoreError, DestinationResolver,
    FileExistenceChecker, FsFileExistenceChecker, InMemoryGraph, Settings, SettingsUpdate,
    validate_settings,
};
use xcforge_runtime::{InventoryDeviceFinder, ToolPaths, ToolchainMetadataProvider};

use crate::error::CliError;

/// Environment variables that override individual settings.
pub const ENV_LIPO: &str = "XCFORGE_LIPO";
pub const ENV_FILE: &str = "XCFORGE_FILE";
pub const ENV_DWARFDUMP: &str = "XCFORGE_DWARFDUMP";
pub const ENV_DEFAULT_DEVICE: &str = "XCFORGE_DEFAULT_DEVICE";

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Optional JSON settings file.
    pub settings_file: Option<PathBuf>,
    /// Overrides applied after the settings file.
    pub overrides: SettingsUpdate,
}

impl CliConfig {
    /// Config reading overrides from the process environment.
    pub fn from_env(settings_file: Option<PathBuf>) -> Self {
        Self {
            settings_file,
            overrides: env_overrides(|key| std::env::var(key).ok()),
        }
    }
}

/// Settings overrides from environment variables.
///
/// `lookup` abstracts the environment so callers (and tests) control it.
/// Empty values are treated as unset.
pub fn env_overrides(lookup: impl Fn(&str) -> Option<String>) -> SettingsUpdate {
    let read = |key: &str| {
        lookup(key)
            .filter(|value| !value.trim().is_empty())
            .map(Some)
    };

    SettingsUpdate {
        lipo_path: read(ENV_LIPO),
        file_path: read(ENV_FILE),
        dwarfdump_path: read(ENV_DWARFDUMP),
        default_device_name: read(ENV_DEFAULT_DEVICE),
        default_os_version: None,
    }
}

/// Treat every field a settings file sets as an update.
fn file_update(file: Settings) -> SettingsUpdate {
    SettingsUpdate {
        lipo_path: file.lipo_path.map(Some),
        file_path: file.file_path.map(Some),
        dwarfdump_path: file.dwarfdump_path.map(Some),
        default_device_name: file.default_device_name.map(Some),
        default_os_version: file.default_os_version.map(Some),
    }
}

/// Resolve the effective settings for `config`.
pub async fn load_settings(config: &CliConfig) -> Result<Settings> {
    let mut settings = Settings::with_defaults();

    if let Some(path) = &config.settings_file {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            CliError::Io(format!("Failed to read settings file {}: {e}", path.display()))
        })?;
        let file: Settings = serde_json::from_str(&raw).map_err(|e| {
            CliError::Config(format!("Invalid settings file {}: {e}", path.display()))
        })?;
        settings.merge(&file_update(file));
    }

    settings.merge(&config.overrides);
    validate_settings(&settings).map_err(|e| CliError::from(CoreError::from(e)))?;

    debug!(?settings, "Resolved settings");
    Ok(settings)
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Effective settings.
    pub settings: Settings,
    /// File existence checks for bundle loading.
    pub files: Arc<dyn FileExistenceChecker>,
    /// Binary metadata provider for bundle loading.
    pub metadata: Arc<dyn BinaryMetadataProvider>,
}

impl CliContext {
    /// Access the effective settings.
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Loader for prebuilt framework bundles.
    pub fn binary_loader(&self) -> BinaryMetadataLoader {
        BinaryMetadataLoader::new(self.files.clone(), self.metadata.clone())
    }

    /// Destination resolver over a project graph and a device inventory.
    pub async fn destination_resolver(
        &self,
        graph: Arc<InMemoryGraph>,
        devices: &Path,
    ) -> Result<DestinationResolver, CliError> {
        let finder = InventoryDeviceFinder::from_json_file(devices).await?;
        Ok(DestinationResolver::new(graph, Arc::new(finder)))
    }
}

/// Bootstrap the CLI application.
///
/// Resolves settings and builds the toolchain-backed adapters.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let settings = load_settings(&config).await?;
    Ok(bootstrap_with(settings))
}

/// Bootstrap from already-resolved settings.
pub fn bootstrap_with(settings: Settings) -> CliContext {
    let files: Arc<dyn FileExistenceChecker> = Arc::new(FsFileExistenceChecker);
    let metadata: Arc<dyn BinaryMetadataProvider> = Arc::new(
        ToolchainMetadataProvider::with_file_checker(
            ToolPaths::from_settings(&settings),
            files.clone(),
        ),
    );

    CliContext {
        settings,
        files,
        metadata,
    }
}

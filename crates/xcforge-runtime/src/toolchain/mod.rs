//! Toolchain-backed binary metadata provider.
//!
//! This module provides `ToolchainMetadataProvider`, which implements
//! `BinaryMetadataProvider` from xcforge-core by running the Xcode
//! command-line tools (`lipo`, `file`, `dwarfdump`) and interpreting their
//! text output. Binary formats are never parsed here.

mod commands;
mod parse;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};
use xcforge_core::settings::Settings;
use xcforge_core::{
    BinaryArchitecture, BinaryLinking, BinaryMetadata, BinaryMetadataError, BinaryMetadataProvider,
    FileExistenceChecker, FsFileExistenceChecker,
};

pub use commands::run_tool;
pub use parse::{parse_dwarfdump_uuids, parse_file_linking, parse_lipo_info};

/// Tools the provider runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    pub lipo: String,
    pub file: String,
    pub dwarfdump: String,
}

impl ToolPaths {
    /// Tool paths from settings, falling back to the defaults on `PATH`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            lipo: settings.effective_lipo().to_string(),
            file: settings.effective_file().to_string(),
            dwarfdump: settings.effective_dwarfdump().to_string(),
        }
    }
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Default implementation of `BinaryMetadataProvider`.
///
/// # Example
///
/// ```ignore
/// use xcforge_runtime::ToolchainMetadataProvider;
///
/// let provider = ToolchainMetadataProvider::new(ToolPaths::default());
/// let archs = provider.architectures(Path::new("Core.framework/Core"))?;
/// ```
pub struct ToolchainMetadataProvider {
    tools: ToolPaths,
    files: Arc<dyn FileExistenceChecker>,
}

impl ToolchainMetadataProvider {
    /// Create a provider that checks companion files on the local filesystem.
    pub fn new(tools: ToolPaths) -> Self {
        Self::with_file_checker(tools, Arc::new(FsFileExistenceChecker))
    }

    /// Create a provider with a custom file existence checker.
    pub fn with_file_checker(tools: ToolPaths, files: Arc<dyn FileExistenceChecker>) -> Self {
        Self { tools, files }
    }
}

impl BinaryMetadataProvider for ToolchainMetadataProvider {
    fn dsym_path(&self, bundle_path: &Path) -> Option<PathBuf> {
        let mut name = bundle_path.file_name()?.to_os_string();
        name.push(".dSYM");
        let candidate = bundle_path.with_file_name(name);

        if self.files.exists(&candidate) {
            Some(candidate)
        } else {
            debug!(bundle = %bundle_path.display(), "No dSYM next to bundle");
            None
        }
    }

    fn bcsymbolmap_paths(
        &self,
        bundle_path: &Path,
    ) -> Result<BTreeSet<PathBuf>, BinaryMetadataError> {
        let binary = BinaryMetadata::binary_path(bundle_path);
        let output = run_tool(&self.tools.dwarfdump, &["--uuid", &binary.to_string_lossy()])?;
        let uuids = parse_dwarfdump_uuids(&output)?;

        let directory = bundle_path.parent().unwrap_or_else(|| Path::new(""));
        let paths = uuids
            .into_iter()
            .map(|uuid| directory.join(format!("{uuid}.bcsymbolmap")))
            .filter(|path| self.files.exists(path))
            .collect();

        Ok(paths)
    }

    fn linking(&self, binary_path: &Path) -> Result<BinaryLinking, BinaryMetadataError> {
        let output = run_tool(&self.tools.file, &[&binary_path.to_string_lossy()])?;
        Ok(parse_file_linking(&output))
    }

    fn architectures(
        &self,
        binary_path: &Path,
    ) -> Result<BTreeSet<BinaryArchitecture>, BinaryMetadataError> {
        let output = run_tool(&self.tools.lipo, &["-info", &binary_path.to_string_lossy()])?;
        let architectures = parse_lipo_info(&output)?;

        if architectures.is_empty() {
            warn!(binary = %binary_path.display(), "lipo reported no architectures");
            return Err(BinaryMetadataError::NoArchitectures(binary_path.to_path_buf()));
        }

        Ok(architectures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_paths_follow_settings() {
        let settings = Settings {
            lipo_path: Some("/opt/xcode/lipo".to_string()),
            ..Settings::default()
        };
        let tools = ToolPaths::from_settings(&settings);
        assert_eq!(tools.lipo, "/opt/xcode/lipo");
        assert_eq!(tools.file, "file");
        assert_eq!(tools.dwarfdump, "dwarfdump");
    }

    #[test]
    fn dsym_is_a_sibling_of_the_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = dir.path().join("Core.framework");
        std::fs::create_dir(&bundle).unwrap();
        let provider = ToolchainMetadataProvider::new(ToolPaths::default());

        assert_eq!(provider.dsym_path(&bundle), None);

        let dsym = dir.path().join("Core.framework.dSYM");
        std::fs::create_dir(&dsym).unwrap();
        assert_eq!(provider.dsym_path(&bundle), Some(dsym));
    }

    #[test]
    fn dsym_lookup_ignores_a_trailing_slash() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("Core.framework")).unwrap();
        let dsym = dir.path().join("Core.framework.dSYM");
        std::fs::create_dir(&dsym).unwrap();
        let provider = ToolchainMetadataProvider::new(ToolPaths::default());

        let bundle = PathBuf::from(format!("{}/", dir.path().join("Core.framework").display()));
        assert_eq!(provider.dsym_path(&bundle), Some(dsym));
    }

    #[test]
    fn missing_lipo_is_reported_as_unavailable() {
        let tools = ToolPaths {
            lipo: "xcforge-missing-lipo".to_string(),
            ..ToolPaths::default()
        };
        let provider = ToolchainMetadataProvider::new(tools);

        let err = provider
            .architectures(Path::new("/Build/Core.framework/Core"))
            .unwrap_err();
        assert!(matches!(err, BinaryMetadataError::ToolUnavailable { .. }));
    }
}

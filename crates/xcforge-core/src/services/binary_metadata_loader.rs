//! Binary metadata loader.
//!
//! Reads an existing bundle from disk and returns its in-memory
//! representation, using the `FileExistenceChecker` and
//! `BinaryMetadataProvider` ports.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::domain::BinaryMetadata;
use crate::ports::{BinaryMetadataError, BinaryMetadataProvider, FileExistenceChecker};

/// Errors that can occur while loading a bundle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Nothing exists at the bundle path.
    #[error("Couldn't find framework at {}", .0.display())]
    BundleNotFound(PathBuf),

    /// The metadata provider failed.
    #[error(transparent)]
    Metadata(#[from] BinaryMetadataError),
}

/// Loads `BinaryMetadata` for bundles on disk.
pub struct BinaryMetadataLoader {
    files: Arc<dyn FileExistenceChecker>,
    provider: Arc<dyn BinaryMetadataProvider>,
}

impl BinaryMetadataLoader {
    pub fn new(
        files: Arc<dyn FileExistenceChecker>,
        provider: Arc<dyn BinaryMetadataProvider>,
    ) -> Self {
        Self { files, provider }
    }

    /// Read the bundle at `path`.
    ///
    /// Fails with [`LoadError::BundleNotFound`] before querying the provider
    /// if the path does not exist. Provider failures abort the load.
    pub fn load(&self, path: &Path) -> Result<BinaryMetadata, LoadError> {
        if !self.files.exists(path) {
            return Err(LoadError::BundleNotFound(path.to_path_buf()));
        }

        let dsym_path = self.provider.dsym_path(path);
        let bcsymbolmap_paths = self.provider.bcsymbolmap_paths(path)?;
        let binary_path = BinaryMetadata::binary_path(path);
        let linking = self.provider.linking(&binary_path)?;
        let architectures = self.provider.architectures(&binary_path)?;

        debug!(
            path = %path.display(),
            %linking,
            architectures = architectures.len(),
            symbol_maps = bcsymbolmap_paths.len(),
            has_dsym = dsym_path.is_some(),
            "Loaded binary metadata"
        );

        Ok(BinaryMetadata {
            path: path.to_path_buf(),
            dsym_path,
            bcsymbolmap_paths,
            linking,
            architectures,
        })
    }
}

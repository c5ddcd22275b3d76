//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No process or filesystem implementation details in signatures
//! - Ports are `Send + Sync` and injected as `Arc<dyn Port>`
//! - Only the device finder is async; everything else is a plain read

pub mod binary_metadata;
pub mod device_finder;
pub mod file_system;
pub mod graph_traverser;

use thiserror::Error;

pub use binary_metadata::{BinaryMetadataError, BinaryMetadataProvider};
pub use device_finder::{DeviceFinder, DeviceFinderError, DeviceQuery};
pub use file_system::{FileExistenceChecker, FsFileExistenceChecker};
pub use graph_traverser::GraphTraverser;

/// Core error type for semantic domain errors.
///
/// Adapters should map this to their own error types (CLI exit codes,
/// serialized errors).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Destination resolution failed.
    #[error(transparent)]
    Device(#[from] DeviceFinderError),

    /// Loading a binary bundle failed.
    #[error(transparent)]
    Load(#[from] crate::services::LoadError),

    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),
}

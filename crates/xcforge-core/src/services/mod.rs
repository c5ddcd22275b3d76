//! Core services - the resolution logic layer.
//!
//! Services here are pure orchestrators over ports (trait interfaces);
//! they don't know about concrete implementations.

mod binary_metadata_loader;
mod destination_resolver;

pub use binary_metadata_loader::{BinaryMetadataLoader, LoadError};
pub use destination_resolver::DestinationResolver;

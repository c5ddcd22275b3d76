//! Host adapters for xcforge-core ports.
//!
//! - [`toolchain::ToolchainMetadataProvider`] answers
//!   `BinaryMetadataProvider` queries by running `lipo`, `file` and
//!   `dwarfdump`.
//! - [`simulator::InventoryDeviceFinder`] answers `DeviceFinder` queries
//!   from a device/runtime inventory.
#![deny(unused_crate_dependencies)]

pub mod simulator;
pub mod toolchain;

pub use simulator::{InventoryDeviceFinder, InventoryError};
pub use toolchain::{ToolPaths, ToolchainMetadataProvider};

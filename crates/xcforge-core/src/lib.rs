//! Core domain types, ports and resolution services for xcforge.
//!
//! - [`services::DestinationResolver`] picks the simulator device or host
//!   Mac a build/test action runs on.
//! - [`services::BinaryMetadataLoader`] reads a compiled bundle's debug
//!   symbol companions, link mode and architectures.
//!
//! Both are orchestrators over the port traits in [`ports`]; concrete
//! adapters live in `xcforge-runtime`.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod graph;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    BinaryArchitecture, BinaryLinking, BinaryMetadata, DeploymentTargets, Destination,
    DeviceState, GraphTarget, Platform, Scheme, SimulatorDevice, SimulatorDeviceAndRuntime,
    SimulatorRuntime, Target, TargetReference, Version, parse_os_version,
};
pub use graph::{GraphSnapshot, InMemoryGraph};
pub use ports::{
    BinaryMetadataError, BinaryMetadataProvider, CoreError, DeviceFinder, DeviceFinderError,
    DeviceQuery, FileExistenceChecker, FsFileExistenceChecker, GraphTraverser,
};
pub use services::{BinaryMetadataLoader, DestinationResolver, LoadError};
pub use settings::{Settings, SettingsError, SettingsUpdate, validate_settings};


//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (toolchain processes, simulator registries, etc.).
//!
//! # Structure
//!
//! - `platform` - Apple platform families
//! - `version` - lenient OS version parsing
//! - `target` / `scheme` - target metadata and scheme actions
//! - `destination` - where build/test actions run
//! - `simulator` - simulator devices and runtimes
//! - `binary` - compiled bundle metadata

pub mod binary;
pub mod destination;
pub mod platform;
pub mod scheme;
pub mod simulator;
pub mod target;
pub mod version;

pub use binary::{BinaryArchitecture, BinaryLinking, BinaryMetadata};
pub use destination::Destination;
pub use platform::{Platform, UnknownPlatform};
pub use scheme::{BuildAction, Scheme, TestAction};
pub use simulator::{DeviceState, SimulatorDevice, SimulatorDeviceAndRuntime, SimulatorRuntime};
pub use target::{DeploymentTargets, GraphTarget, Target, TargetReference};
pub use version::{Version, VersionParseError, parse_os_version};

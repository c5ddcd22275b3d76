//! Destination resolution service.
//!
//! Picks where a build or test action for a target runs: the host Mac for
//! macOS targets, otherwise a simulator device chosen by the
//! `DeviceFinder` port.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{Destination, Platform, Scheme, Target, Version};
use crate::ports::{DeviceFinder, DeviceFinderError, DeviceQuery, GraphTraverser};

/// Resolves a target to a concrete execution destination.
///
/// This service composes over `GraphTraverser` for dependency metadata and
/// `DeviceFinder` for device lookup.
pub struct DestinationResolver {
    /// Read-only dependency graph queries.
    graph: Arc<dyn GraphTraverser>,
    /// Simulator device lookup.
    devices: Arc<dyn DeviceFinder>,
}

impl DestinationResolver {
    /// Create a new destination resolver.
    ///
    /// # Arguments
    ///
    /// * `graph` - Graph traverser used to infer a minimum OS version
    /// * `devices` - Device finder used for simulator platforms
    pub fn new(graph: Arc<dyn GraphTraverser>, devices: Arc<dyn DeviceFinder>) -> Self {
        Self { graph, devices }
    }

    /// Resolve the destination for `target` built through `scheme`.
    ///
    /// `version` and `device_name` are the caller's explicit requests and
    /// are forwarded to the device finder untouched. Device finder errors
    /// are returned as-is; a found device with a blank UDID is rejected
    /// with [`DeviceFinderError::MissingUdid`].
    pub async fn resolve(
        &self,
        target: &Target,
        scheme: &Scheme,
        version: Option<&Version>,
        device_name: Option<&str>,
    ) -> Result<Destination, DeviceFinderError> {
        match target.platform {
            Platform::MacOs => {
                debug!(target = %target.name, "macOS target runs on the host");
                Ok(Destination::Mac)
            }
            Platform::Ios | Platform::TvOs | Platform::WatchOs | Platform::VisionOs => {
                let query = DeviceQuery {
                    platform: target.platform,
                    version: version.cloned(),
                    min_version: self.minimum_os_version(target, scheme),
                    device_name: device_name.map(str::to_string),
                };

                let found = self.devices.find_available_device(&query).await?;
                if found.device.udid.trim().is_empty() {
                    return Err(DeviceFinderError::MissingUdid(found.device.name));
                }
                info!(
                    target = %target.name,
                    device = %found.device.name,
                    runtime = %found.runtime.name,
                    udid = %found.device.udid,
                    "Resolved simulator destination"
                );
                Ok(Destination::Device(found.device.udid))
            }
        }
    }

    /// Minimum OS version a destination for `target` must run.
    ///
    /// The target's own deployment target wins. Without one, the smallest
    /// deployment target (for the target's platform) among the direct local
    /// dependencies of each scheme target is used. Only one level of the
    /// graph is inspected.
    pub fn minimum_os_version(&self, target: &Target, scheme: &Scheme) -> Option<Version> {
        if let Some(declared) = target.own_deployment_target() {
            debug!(target = %target.name, version = %declared, "Using declared deployment target");
            return Some(declared.clone());
        }

        let platform = target.platform;
        let inferred = scheme
            .target_dependencies()
            .iter()
            .flat_map(|reference| {
                self.graph
                    .direct_local_target_dependencies(&reference.project_path, &reference.name)
            })
            .filter_map(|dependency| dependency.target.deployment_targets.get(platform).cloned())
            .min();

        match &inferred {
            Some(version) => {
                debug!(target = %target.name, version = %version, "Inferred deployment target from dependencies");
            }
            None => debug!(target = %target.name, "No deployment target constraint"),
        }

        inferred
    }
}

//! Targets, target references and deployment targets.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::platform::Platform;
use super::version::{Version, VersionParseError, parse_os_version};

/// Minimum OS version a target declares per platform.
///
/// Holds at most one version per platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<Platform, String>",
    into = "BTreeMap<Platform, String>"
)]
pub struct DeploymentTargets(BTreeMap<Platform, Version>);

impl DeploymentTargets {
    /// No deployment targets.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Set the deployment target for a platform, replacing any previous one.
    #[must_use]
    pub fn with(mut self, platform: Platform, version: Version) -> Self {
        self.0.insert(platform, version);
        self
    }

    /// Deployment target declared for `platform`, if any.
    #[must_use]
    pub fn get(&self, platform: Platform) -> Option<&Version> {
        self.0.get(&platform)
    }
}

impl TryFrom<BTreeMap<Platform, String>> for DeploymentTargets {
    type Error = VersionParseError;

    fn try_from(raw: BTreeMap<Platform, String>) -> Result<Self, Self::Error> {
        raw.into_iter()
            .map(|(platform, version)| Ok((platform, parse_os_version(&version)?)))
            .collect::<Result<BTreeMap<_, _>, _>>()
            .map(Self)
    }
}

impl From<DeploymentTargets> for BTreeMap<Platform, String> {
    fn from(targets: DeploymentTargets) -> Self {
        targets
            .0
            .into_iter()
            .map(|(platform, version)| (platform, version.to_string()))
            .collect()
    }
}

/// A buildable target as far as destination resolution is concerned.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Target {
    pub name: String,
    pub platform: Platform,
    #[serde(default)]
    pub deployment_targets: DeploymentTargets,
}

impl Target {
    pub fn new(name: impl Into<String>, platform: Platform) -> Self {
        Self {
            name: name.into(),
            platform,
            deployment_targets: DeploymentTargets::new(),
        }
    }

    #[must_use]
    pub fn with_deployment_targets(mut self, deployment_targets: DeploymentTargets) -> Self {
        self.deployment_targets = deployment_targets;
        self
    }

    /// Deployment target this target declares for its own platform.
    #[must_use]
    pub fn own_deployment_target(&self) -> Option<&Version> {
        self.deployment_targets.get(self.platform)
    }
}

/// Points at a target by the project that defines it and its name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TargetReference {
    pub project_path: PathBuf,
    pub name: String,
}

impl TargetReference {
    pub fn new(project_path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            project_path: project_path.into(),
            name: name.into(),
        }
    }
}

/// A target together with the project it lives in, as returned by graph queries.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GraphTarget {
    pub path: PathBuf,
    pub target: Target,
}

impl GraphTarget {
    pub fn new(path: impl Into<PathBuf>, target: Target) -> Self {
        Self {
            path: path.into(),
            target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_deployment_target_uses_target_platform() {
        let target = Target::new("App", Platform::Ios).with_deployment_targets(
            DeploymentTargets::new()
                .with(Platform::MacOs, Version::new(13, 0, 0))
                .with(Platform::Ios, Version::new(16, 0, 0)),
        );
        assert_eq!(target.own_deployment_target(), Some(&Version::new(16, 0, 0)));
    }

    #[test]
    fn missing_own_deployment_target_is_none() {
        let target = Target::new("Watch", Platform::WatchOs).with_deployment_targets(
            DeploymentTargets::new().with(Platform::Ios, Version::new(16, 0, 0)),
        );
        assert!(target.own_deployment_target().is_none());
    }

    #[test]
    fn deployment_targets_deserialize_apple_style_versions() {
        let json = r#"{ "iOS": "15", "macOS": "13.5" }"#;
        let targets: DeploymentTargets = serde_json::from_str(json).unwrap();
        assert_eq!(targets.get(Platform::Ios), Some(&Version::new(15, 0, 0)));
        assert_eq!(targets.get(Platform::MacOs), Some(&Version::new(13, 5, 0)));
        assert!(targets.get(Platform::TvOs).is_none());
    }

    #[test]
    fn deployment_targets_reject_bad_versions() {
        let json = r#"{ "iOS": "fifteen" }"#;
        assert!(serde_json::from_str::<DeploymentTargets>(json).is_err());
    }

    #[test]
    fn target_without_deployment_targets_deserializes() {
        let json = r#"{ "name": "Core", "platform": "iOS" }"#;
        let target: Target = serde_json::from_str(json).unwrap();
        assert_eq!(target, Target::new("Core", Platform::Ios));
    }
}

//! Schemes and the targets their actions reference.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::target::TargetReference;

/// Build action: the targets a scheme builds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildAction {
    pub targets: Vec<TargetReference>,
}

/// Test action: testable targets and the targets gathering code coverage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestAction {
    pub targets: Vec<TargetReference>,
    pub code_coverage_targets: Vec<TargetReference>,
}

/// A named collection of actions over targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scheme {
    pub name: String,
    pub build_action: Option<BuildAction>,
    pub test_action: Option<TestAction>,
    pub run_executable: Option<TargetReference>,
    pub profile_executable: Option<TargetReference>,
    pub archive_executable: Option<TargetReference>,
}

impl Scheme {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_build_targets(mut self, targets: Vec<TargetReference>) -> Self {
        self.build_action = Some(BuildAction { targets });
        self
    }

    #[must_use]
    pub fn with_test_targets(mut self, targets: Vec<TargetReference>) -> Self {
        self.test_action
            .get_or_insert_with(TestAction::default)
            .targets = targets;
        self
    }

    #[must_use]
    pub fn with_run_executable(mut self, executable: TargetReference) -> Self {
        self.run_executable = Some(executable);
        self
    }

    /// Every target referenced by any action, without duplicates, ordered by
    /// name (then project path).
    pub fn target_dependencies(&self) -> Vec<TargetReference> {
        let build = self.build_action.iter().flat_map(|a| a.targets.iter());
        let test = self
            .test_action
            .iter()
            .flat_map(|a| a.targets.iter().chain(a.code_coverage_targets.iter()));
        let executables = [
            &self.run_executable,
            &self.profile_executable,
            &self.archive_executable,
        ]
        .into_iter()
        .flatten();

        let unique: BTreeSet<(&str, &TargetReference)> = build
            .chain(test)
            .chain(executables)
            .map(|r| (r.name.as_str(), r))
            .collect();

        unique.into_iter().map(|(_, r)| r.clone()).collect()
    }
}

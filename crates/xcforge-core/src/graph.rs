//! In-memory dependency graph.
//!
//! A small adjacency map implementing `GraphTraverser`, loadable from a
//! JSON snapshot. It is what the CLI and tests feed the destination
//! resolver; it does not try to model everything a project graph holds.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{GraphTarget, Scheme, Target, TargetReference};
use crate::ports::GraphTraverser;

/// Serialized form of a project in a graph snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSnapshot {
    pub path: PathBuf,
    pub targets: Vec<Target>,
    pub schemes: Vec<Scheme>,
}

/// Serialized dependency edges of one target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencySnapshot {
    pub from: TargetReference,
    pub to: Vec<TargetReference>,
}

/// Serialized graph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphSnapshot {
    pub projects: Vec<ProjectSnapshot>,
    pub dependencies: Vec<DependencySnapshot>,
}

/// Dependency graph held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGraph {
    targets: BTreeMap<TargetReference, Target>,
    schemes: BTreeMap<PathBuf, Vec<Scheme>>,
    edges: BTreeMap<TargetReference, BTreeSet<TargetReference>>,
}

impl InMemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON graph snapshot.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let snapshot: GraphSnapshot = serde_json::from_str(json)?;
        Ok(Self::from(snapshot))
    }

    /// Register a target defined in the project at `project_path`.
    pub fn add_target(&mut self, project_path: impl Into<PathBuf>, target: Target) {
        let reference = TargetReference::new(project_path, target.name.clone());
        self.targets.insert(reference, target);
    }

    /// Register a scheme defined in the project at `project_path`.
    pub fn add_scheme(&mut self, project_path: impl Into<PathBuf>, scheme: Scheme) {
        self.schemes
            .entry(project_path.into())
            .or_default()
            .push(scheme);
    }

    /// Record that `from` depends directly on `to`.
    pub fn add_dependency(&mut self, from: TargetReference, to: TargetReference) {
        self.edges.entry(from).or_default().insert(to);
    }

    pub fn target(&self, reference: &TargetReference) -> Option<&Target> {
        self.targets.get(reference)
    }

    /// Scheme named `name` in the project at `project_path`.
    pub fn scheme(&self, project_path: &Path, name: &str) -> Option<&Scheme> {
        self.schemes
            .get(project_path)?
            .iter()
            .find(|scheme| scheme.name == name)
    }
}

impl From<GraphSnapshot> for InMemoryGraph {
    fn from(snapshot: GraphSnapshot) -> Self {
        let mut graph = Self::new();
        for project in snapshot.projects {
            for target in project.targets {
                graph.add_target(project.path.clone(), target);
            }
            for scheme in project.schemes {
                graph.add_scheme(project.path.clone(), scheme);
            }
        }
        for edge in snapshot.dependencies {
            for to in edge.to {
                graph.add_dependency(edge.from.clone(), to);
            }
        }
        graph
    }
}

impl GraphTraverser for InMemoryGraph {
    fn direct_local_target_dependencies(
        &self,
        project_path: &Path,
        name: &str,
    ) -> BTreeSet<GraphTarget> {
        let from = TargetReference::new(project_path, name);
        let Some(dependencies) = self.edges.get(&from) else {
            return BTreeSet::new();
        };

        dependencies
            .iter()
            .filter_map(|reference| match self.targets.get(reference) {
                Some(target) => Some(GraphTarget::new(
                    reference.project_path.clone(),
                    target.clone(),
                )),
                None => {
                    warn!(
                        project = %reference.project_path.display(),
                        target = %reference.name,
                        "Dependency is not a local target, skipping"
                    );
                    None
                }
            })
            .collect()
    }
}

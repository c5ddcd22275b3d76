//! Graph traverser port definition.
//!
//! Read-only queries over the project dependency graph. The core only
//! needs to know a target's direct local dependencies; graph loading and
//! modelling live elsewhere.

use std::collections::BTreeSet;
use std::path::Path;

use crate::domain::GraphTarget;

/// Port for querying the dependency graph.
#[cfg_attr(test, mockall::automock)]
pub trait GraphTraverser: Send + Sync {
    /// Targets defined in local projects that the target `name` in
    /// `project_path` depends on directly.
    ///
    /// Returns an empty set for unknown targets.
    fn direct_local_target_dependencies(
        &self,
        project_path: &Path,
        name: &str,
    ) -> BTreeSet<GraphTarget>;
}

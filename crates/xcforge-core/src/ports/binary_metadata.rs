//! Binary metadata provider port definition.
//!
//! This port abstracts binary introspection: locating debug-symbol
//! companions and reading link mode and architecture slices. It allows
//! different implementations (toolchain-backed, fixtures, mocks).
//!
//! # Design
//!
//! - Domain types (`BinaryLinking`, `BinaryArchitecture`) live in `domain::binary`
//! - This port only defines the trait and error type
//! - The toolchain-backed implementation lives in `xcforge-runtime`

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::{BinaryArchitecture, BinaryLinking};

/// Errors that can occur while reading binary metadata.
///
/// This is the domain-facing error type; adapters convert their own
/// failures into it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BinaryMetadataError {
    /// A required tool could not be launched.
    #[error("Failed to run {tool}: {reason}")]
    ToolUnavailable { tool: String, reason: String },

    /// A tool ran but exited unsuccessfully.
    #[error("{tool} exited unsuccessfully (code {code:?}): {stderr}")]
    ToolFailed {
        tool: String,
        code: Option<i32>,
        stderr: String,
    },

    /// A tool's output could not be interpreted.
    #[error("Unrecognized {tool} output: {output}")]
    UnrecognizedOutput { tool: String, output: String },

    /// The binary contains no architecture slices.
    #[error("No architectures found in {}", .0.display())]
    NoArchitectures(PathBuf),
}

/// Port for reading metadata out of a compiled bundle.
///
/// `bundle_path` arguments point at the bundle directory
/// (`Foo.framework`); `binary_path` arguments point at the embedded
/// binary (`Foo.framework/Foo`).
#[cfg_attr(test, mockall::automock)]
pub trait BinaryMetadataProvider: Send + Sync {
    /// Companion `.dSYM` bundle, if present.
    fn dsym_path(&self, bundle_path: &Path) -> Option<PathBuf>;

    /// Companion `.bcsymbolmap` files.
    fn bcsymbolmap_paths(&self, bundle_path: &Path) -> Result<BTreeSet<PathBuf>, BinaryMetadataError>;

    /// Whether the binary is statically or dynamically linked.
    fn linking(&self, binary_path: &Path) -> Result<BinaryLinking, BinaryMetadataError>;

    /// Architecture slices contained in the binary.
    fn architectures(
        &self,
        binary_path: &Path,
    ) -> Result<BTreeSet<BinaryArchitecture>, BinaryMetadataError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_carry_diagnostic_context() {
        let err = BinaryMetadataError::ToolFailed {
            tool: "lipo".to_string(),
            code: Some(1),
            stderr: "can't open input file".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "lipo exited unsuccessfully (code Some(1)): can't open input file"
        );

        let err = BinaryMetadataError::NoArchitectures(PathBuf::from("/A.framework/A"));
        assert_eq!(err.to_string(), "No architectures found in /A.framework/A");
    }
}

//! Compiled binary bundles and their metadata.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a binary is linked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryLinking {
    Static,
    Dynamic,
}

impl fmt::Display for BinaryLinking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static => f.write_str("static"),
            Self::Dynamic => f.write_str("dynamic"),
        }
    }
}

/// Instruction-set architecture slice found in a binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BinaryArchitecture {
    #[serde(rename = "x86_64")]
    X8664,
    #[serde(rename = "i386")]
    I386,
    #[serde(rename = "armv7")]
    Armv7,
    #[serde(rename = "armv7s")]
    Armv7s,
    #[serde(rename = "arm64")]
    Arm64,
    #[serde(rename = "armv7k")]
    Armv7k,
    #[serde(rename = "arm64_32")]
    Arm6432,
    #[serde(rename = "arm64e")]
    Arm64e,
}

impl BinaryArchitecture {
    pub const ALL: [Self; 8] = [
        Self::X8664,
        Self::I386,
        Self::Armv7,
        Self::Armv7s,
        Self::Arm64,
        Self::Armv7k,
        Self::Arm6432,
        Self::Arm64e,
    ];

    /// Name used by `lipo` and the linker.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X8664 => "x86_64",
            Self::I386 => "i386",
            Self::Armv7 => "armv7",
            Self::Armv7s => "armv7s",
            Self::Arm64 => "arm64",
            Self::Armv7k => "armv7k",
            Self::Arm6432 => "arm64_32",
            Self::Arm64e => "arm64e",
        }
    }
}

impl fmt::Display for BinaryArchitecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BinaryArchitecture {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|arch| arch.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// In-memory description of a compiled binary bundle (a `.framework`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryMetadata {
    /// Path to the bundle, exactly as requested.
    pub path: PathBuf,
    /// Companion `.dSYM` bundle, if one exists.
    pub dsym_path: Option<PathBuf>,
    /// Companion `.bcsymbolmap` files.
    pub bcsymbolmap_paths: BTreeSet<PathBuf>,
    pub linking: BinaryLinking,
    pub architectures: BTreeSet<BinaryArchitecture>,
}

impl BinaryMetadata {
    /// Path of the binary embedded in a bundle: `Foo.framework/Foo`.
    pub fn binary_path(bundle_path: &Path) -> PathBuf {
        bundle_path
            .file_stem()
            .map_or_else(|| bundle_path.to_path_buf(), |stem| bundle_path.join(stem))
    }

    /// Whether the binary contains a slice for `arch`.
    pub fn supports(&self, arch: BinaryArchitecture) -> bool {
        self.architectures.contains(&arch)
    }
}

//! Drives `ToolchainMetadataProvider` against stand-in tool scripts.
//!
//! Every script is written before any of them runs; keep this a single test
//! so no other thread forks while a script file is still open for writing.
#![cfg(unix)]

use std::collections::BTreeSet;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use xcforge_core::{
    BinaryArchitecture, BinaryLinking, BinaryMetadataError, BinaryMetadataLoader,
    FsFileExistenceChecker, LoadError,
};
use xcforge_runtime::{ToolPaths, ToolchainMetadataProvider};

fn script(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn loads_a_framework_through_the_toolchain() {
    let tools_dir = tempfile::tempdir().unwrap();
    let build = tempfile::tempdir().unwrap();

    let bundle = build.path().join("Core.framework");
    fs::create_dir(&bundle).unwrap();
    fs::write(bundle.join("Core"), b"").unwrap();
    fs::create_dir(build.path().join("Core.framework.dSYM")).unwrap();
    fs::write(build.path().join("AAAA-1111.bcsymbolmap"), b"").unwrap();

    let good = ToolPaths {
        lipo: script(
            tools_dir.path(),
            "lipo",
            r#"echo "Architectures in the fat file: $2 are: x86_64 arm64""#,
        ),
        file: script(
            tools_dir.path(),
            "file",
            r#"echo "$1: Mach-O 64-bit dynamically linked shared library arm64""#,
        ),
        dwarfdump: script(
            tools_dir.path(),
            "dwarfdump",
            "echo \"UUID: AAAA-1111 (arm64) $2\"\necho \"UUID: BBBB-2222 (x86_64) $2\"",
        ),
    };
    let broken = ToolPaths {
        lipo: script(
            tools_dir.path(),
            "lipo-broken",
            "echo \"fatal error: can't map input file\" >&2\nexit 1",
        ),
        ..good.clone()
    };
    let unknown_only = ToolPaths {
        lipo: script(
            tools_dir.path(),
            "lipo-unknown",
            r#"echo "Non-fat file: $2 is architecture: x86_64h""#,
        ),
        ..good.clone()
    };

    // Full description of an existing bundle.
    let loader = BinaryMetadataLoader::new(
        Arc::new(FsFileExistenceChecker),
        Arc::new(ToolchainMetadataProvider::new(good)),
    );
    let metadata = loader.load(&bundle).unwrap();

    assert_eq!(metadata.path, bundle);
    assert_eq!(
        metadata.dsym_path,
        Some(build.path().join("Core.framework.dSYM"))
    );
    assert_eq!(
        metadata.bcsymbolmap_paths,
        BTreeSet::from([build.path().join("AAAA-1111.bcsymbolmap")])
    );
    assert_eq!(metadata.linking, BinaryLinking::Dynamic);
    assert_eq!(
        metadata.architectures,
        BTreeSet::from([BinaryArchitecture::X8664, BinaryArchitecture::Arm64])
    );

    // A failing tool surfaces unchanged.
    let loader = BinaryMetadataLoader::new(
        Arc::new(FsFileExistenceChecker),
        Arc::new(ToolchainMetadataProvider::new(broken)),
    );
    assert!(matches!(
        loader.load(&bundle),
        Err(LoadError::Metadata(BinaryMetadataError::ToolFailed { code: Some(1), .. }))
    ));

    // Only unmodelled slices leaves nothing to describe.
    let loader = BinaryMetadataLoader::new(
        Arc::new(FsFileExistenceChecker),
        Arc::new(ToolchainMetadataProvider::new(unknown_only)),
    );
    assert_eq!(
        loader.load(&bundle),
        Err(LoadError::Metadata(BinaryMetadataError::NoArchitectures(
            PathBuf::from(&bundle).join("Core")
        )))
    );
}

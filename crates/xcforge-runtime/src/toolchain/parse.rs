//! Interpreting `lipo`, `file` and `dwarfdump` output.

use std::collections::BTreeSet;

use tracing::warn;
use xcforge_core::{BinaryArchitecture, BinaryLinking, BinaryMetadataError};

/// Architectures listed by `lipo -info`.
///
/// Handles both forms:
/// - `Non-fat file: /path/Foo is architecture: arm64`
/// - `Architectures in the fat file: /path/Foo are: x86_64 arm64`
///
/// Slice names we don't model (e.g. `x86_64h`) are skipped. An empty result
/// is returned as-is; callers decide whether that is an error.
pub fn parse_lipo_info(output: &str) -> Result<BTreeSet<BinaryArchitecture>, BinaryMetadataError> {
    let line = output.trim();
    let names = line
        .rsplit_once(" is architecture:")
        .or_else(|| line.rsplit_once(" are:"))
        .map(|(_, names)| names)
        .ok_or_else(|| BinaryMetadataError::UnrecognizedOutput {
            tool: "lipo".to_string(),
            output: line.to_string(),
        })?;

    let architectures = names
        .split_whitespace()
        .filter_map(|name| match name.parse::<BinaryArchitecture>() {
            Ok(arch) => Some(arch),
            Err(unknown) => {
                warn!(architecture = %unknown, "Skipping unknown architecture slice");
                None
            }
        })
        .collect();

    Ok(architectures)
}

/// Link mode according to `file`: dynamic if it reports a dynamically linked
/// binary, static otherwise.
pub fn parse_file_linking(output: &str) -> BinaryLinking {
    if output.contains("dynamically linked") {
        BinaryLinking::Dynamic
    } else {
        BinaryLinking::Static
    }
}

/// UUIDs reported by `dwarfdump --uuid`, in output order.
///
/// Lines look like `UUID: 3C9F...-... (arm64) /path/Foo.framework/Foo`.
pub fn parse_dwarfdump_uuids(output: &str) -> Result<Vec<String>, BinaryMetadataError> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.strip_prefix("UUID: ")
                .and_then(|rest| rest.split_whitespace().next())
                .map(str::to_string)
                .ok_or_else(|| BinaryMetadataError::UnrecognizedOutput {
                    tool: "dwarfdump".to_string(),
                    output: line.to_string(),
                })
        })
        .collect()
}

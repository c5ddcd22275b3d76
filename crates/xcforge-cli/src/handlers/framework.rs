//! Framework command handler.
//!
//! Loads a prebuilt framework bundle and prints its binary metadata.

use std::path::Path;

use anyhow::Result;
use xcforge_core::{BinaryMetadata, CoreError};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{format_list, format_optional, print_row, print_separator};

const LABEL_WIDTH: usize = 16;

/// Execute the framework command.
///
/// # Errors
///
/// Returns a [`CliError`] if the bundle does not exist or a toolchain query
/// fails.
pub fn execute(ctx: &CliContext, path: &Path, json: bool) -> Result<()> {
    let metadata = load(ctx, path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&metadata)?);
    } else {
        display(&metadata);
    }
    Ok(())
}

/// Load metadata for the bundle at `path`.
pub fn load(ctx: &CliContext, path: &Path) -> Result<BinaryMetadata, CliError> {
    ctx.binary_loader()
        .load(path)
        .map_err(|e| CliError::from(CoreError::from(e)))
}

fn display(metadata: &BinaryMetadata) {
    println!("{}", metadata.path.display());
    print_separator(60);
    print_row("Linking:", &metadata.linking.to_string(), LABEL_WIDTH);
    print_row(
        "Architectures:",
        &format_list(&metadata.architectures, "--"),
        LABEL_WIDTH,
    );
    print_row(
        "dSYM:",
        &format_optional(metadata.dsym_path.as_ref().map(|p| p.display()), "none"),
        LABEL_WIDTH,
    );
    print_row(
        "Symbol maps:",
        &format_list(metadata.bcsymbolmap_paths.iter().map(|p| p.display()), "none"),
        LABEL_WIDTH,
    );
}

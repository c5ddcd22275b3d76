//! Destination command handler.
//!
//! Resolves where a target's build or test action runs and prints the
//! matching `xcodebuild -destination` argument.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use xcforge_core::{
    CoreError, Destination, InMemoryGraph, Platform, TargetReference, Version, parse_os_version,
};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Arguments for the destination command.
#[derive(Debug, Clone)]
pub struct DestinationArgs {
    pub graph: PathBuf,
    pub devices: PathBuf,
    pub project: PathBuf,
    pub target: String,
    pub scheme: String,
    pub os_version: Option<String>,
    pub device_name: Option<String>,
}

/// Execute the destination command.
///
/// Explicit `--os`/`--device` values win over the configured defaults,
/// which only apply to iOS targets.
///
/// # Errors
///
/// Returns an error if the graph or inventory cannot be read, the target
/// or scheme is unknown, or no device satisfies the constraints.
pub async fn execute(ctx: &CliContext, args: DestinationArgs) -> Result<()> {
    let destination = resolve(ctx, args).await?;
    println!("{destination}");
    Ok(())
}

/// Resolve the destination without printing it.
pub async fn resolve(ctx: &CliContext, args: DestinationArgs) -> Result<Destination> {
    let raw = tokio::fs::read_to_string(&args.graph).await.map_err(|e| {
        CliError::Io(format!(
            "Failed to read project graph {}: {e}",
            args.graph.display()
        ))
    })?;
    let graph = InMemoryGraph::from_json(&raw).map_err(|e| {
        CliError::InvalidInput(format!(
            "Invalid project graph {}: {e}",
            args.graph.display()
        ))
    })?;

    let reference = TargetReference::new(&args.project, &args.target);
    let target = graph.target(&reference).cloned().ok_or_else(|| {
        CliError::Arguments(format!(
            "Target '{}' not found in project {}",
            args.target,
            args.project.display()
        ))
    })?;
    let scheme = graph
        .scheme(&args.project, &args.scheme)
        .cloned()
        .ok_or_else(|| {
            CliError::Arguments(format!(
                "Scheme '{}' not found in project {}",
                args.scheme,
                args.project.display()
            ))
        })?;

    let use_defaults = target.platform == Platform::Ios;
    let version = requested_version(ctx, args.os_version.as_deref(), use_defaults)?;
    let device_name = args.device_name.or_else(|| {
        use_defaults
            .then(|| ctx.settings().default_device_name.clone())
            .flatten()
    });

    let resolver = ctx
        .destination_resolver(Arc::new(graph), &args.devices)
        .await?;
    let destination = resolver
        .resolve(&target, &scheme, version.as_ref(), device_name.as_deref())
        .await
        .map_err(|e| CliError::from(CoreError::from(e)))?;

    Ok(destination)
}

fn requested_version(
    ctx: &CliContext,
    flag: Option<&str>,
    use_default: bool,
) -> Result<Option<Version>, CliError> {
    match flag {
        Some(raw) => parse_os_version(raw)
            .map(Some)
            .map_err(|e| CliError::from(CoreError::Validation(e.to_string()))),
        None if use_default => Ok(ctx.settings().default_os_version()),
        None => Ok(None),
    }
}

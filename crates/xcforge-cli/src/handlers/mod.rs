//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call core services
//!   3. Format output for the terminal
//!
//! Handlers should NOT contain resolution logic of their own.

pub mod destination;
pub mod framework;

//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for resolving build destinations and inspecting
/// prebuilt frameworks.
#[derive(Parser)]
#[command(name = "xcforge")]
#[command(about = "Resolve Xcode build destinations and inspect binary frameworks")]
#[command(version)]
pub struct Cli {
    /// JSON settings file applied on top of the defaults
    #[arg(long = "settings", global = true, env = "XCFORGE_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "xcforge",
            "--verbose",
            "--settings",
            "/tmp/xcforge.json",
            "framework",
            "Core.framework",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.settings, Some(PathBuf::from("/tmp/xcforge.json")));
        assert!(matches!(cli.command, Some(Commands::Framework { .. })));
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from(["xcforge", "framework", "Core.framework", "-v"]);
        assert!(cli.verbose);
    }
}

//! Available subcommands.

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Print the `xcodebuild -destination` argument for a target
    Destination {
        /// Project graph snapshot (JSON)
        #[arg(long)]
        graph: PathBuf,
        /// Simulator device inventory (JSON)
        #[arg(long)]
        devices: PathBuf,
        /// Project the target and scheme belong to
        #[arg(long)]
        project: PathBuf,
        /// Target to resolve a destination for
        #[arg(long)]
        target: String,
        /// Scheme the target is built through
        #[arg(long)]
        scheme: String,
        /// Exact simulator OS version (e.g. "17.2")
        #[arg(long = "os")]
        os_version: Option<String>,
        /// Exact simulator device name (e.g. "iPhone 15")
        #[arg(long = "device")]
        device_name: Option<String>,
    },

    /// Describe a prebuilt framework bundle
    Framework {
        /// Path to the .framework bundle
        path: PathBuf,
        /// Print the description as JSON
        #[arg(long)]
        json: bool,
    },
}

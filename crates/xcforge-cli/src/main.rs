//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via bootstrap.
//! Command dispatch routes to handlers which delegate to core services.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use xcforge_cli::handlers::destination::DestinationArgs;
use xcforge_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

/// `RUST_LOG` wins; otherwise `--verbose` selects debug output.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    // Bootstrap the CLI context (composition root)
    let ctx = bootstrap(CliConfig::from_env(cli.settings)).await?;

    match command {
        Commands::Destination {
            graph,
            devices,
            project,
            target,
            scheme,
            os_version,
            device_name,
        } => {
            let args = DestinationArgs {
                graph,
                devices,
                project,
                target,
                scheme,
                os_version,
                device_name,
            };
            handlers::destination::execute(&ctx, args).await?;
        }
        Commands::Framework { path, json } => {
            handlers::framework::execute(&ctx, &path, json)?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        eprintln!("Error: {err:#}");
        std::process::exit(code);
    }

    Ok(())
}

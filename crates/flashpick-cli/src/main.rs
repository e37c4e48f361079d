//! CLI entry point.
//!
//! Loads `.env`, parses arguments, installs logging, bootstraps the context
//! and dispatches. Errors are printed once and mapped to an exit code.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use flashpick_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

// ANSI color codes
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Install a stderr subscriber; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = CliConfig::from_cli(&cli);
    let ctx = bootstrap(&config);

    match cli.command {
        Commands::Plan(args) => handlers::plan::execute(&ctx, &args).await,
        Commands::Install(args) => handlers::install::execute(&ctx, &args).await,
        Commands::Uninstall => {
            handlers::uninstall::execute(&ctx);
            Ok(())
        }
        Commands::Doctor => handlers::doctor::execute(&ctx),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before parsing so env fallbacks see them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    if let Err(err) = run(cli).await {
        eprintln!("{RED}error:{RESET} {err}");
        std::process::exit(err.exit_code());
    }
    Ok(())
}

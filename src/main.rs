//! eggsample - Main entry point
//!
//! Cooks a plate, shuffles it, and prints the serving report to stdout.
//! Logs go to stderr so the report stays clean.

use anyhow::Result;
use std::io::stdout;
use tracing::{debug, error, info};

use eggsample::cli::{Cli, Commands};
use eggsample::config::KitchenConfig;
use eggsample::kitchen;

/// Initialize tracing; RUST_LOG overrides the default level
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    debug!("eggsample starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed: {:?}", cli);

    match &cli.command {
        Some(Commands::Validate { path }) => {
            info!("Validating kitchen configuration: {:?}", path);
            let config = KitchenConfig::load_from_file(path)?;
            if let Err(e) = config.validate() {
                error!("Kitchen configuration validation failed: {}", e);
                return Err(e.into());
            }
            println!("Kitchen configuration is valid: {}", path.display());
            Ok(())
        }
        Some(Commands::Serve) | None => serve(&cli),
    }
}

/// Build the effective configuration and serve to stdout
fn serve(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading kitchen configuration from: {:?}", path);
            KitchenConfig::load_from_file(path)?
        }
        None => KitchenConfig::default(),
    };

    // Command line flags win over the file
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some(servings) = cli.servings {
        config.servings = servings;
    }

    let mut rng = kitchen::shuffle_rng(config.seed);
    let mut out = stdout().lock();
    let tray = kitchen::run(&config, &mut rng, &mut out).inspect_err(|e| {
        error!("Kitchen failed: {}", e);
    })?;

    info!("Done; tray holds {} condiments", tray.len());
    Ok(())
}

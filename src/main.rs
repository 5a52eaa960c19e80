use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod collab;

use cli::{cmd_run, cmd_sample, cmd_validate, RunArgs, SampleArgs, ValidateArgs};

/// Boxbench - capture box-layout benchmarks and score layout predictions
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Enable debug mode
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Capture a benchmark from a page snapshot across sampled viewports
    Sample(SampleArgs),

    /// Check a persisted benchmark for structural consistency
    Validate(ValidateArgs),

    /// Evaluate a synthesis/solving collaborator against a benchmark
    Run(RunArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_level, cli.debug)?;
    info!("Starting boxbench v{}", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Commands::Sample(args) => cmd_sample(args).await,
        Commands::Validate(args) => cmd_validate(args).await,
        Commands::Run(args) => cmd_run(args).await,
    };

    match result {
        Ok(()) => {
            info!("Command completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("Command failed: {e:#}");
            std::process::exit(1);
        }
    }
}

fn init_logging(level: &str, debug: bool) -> Result<()> {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        level.parse().context("Invalid log level")?
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.to_string())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    Ok(())
}

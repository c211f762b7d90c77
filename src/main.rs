// ABOUTME: Entry point for the lsdvol CLI application.
// ABOUTME: Parses flags, runs discovery, and renders the volume listing.

mod cli;

use clap::Parser;
use cli::Cli;
use lsdvol::config::EngineConfig;
use lsdvol::engine;
use lsdvol::error::Result;
use lsdvol::output::{self, OutputMode};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = EngineConfig::default();
    let volumes = engine::discover(&config, &cli.socket, cli.container.as_deref()).await?;

    // -l wins when both formatting flags are given
    let mode = if cli.long {
        OutputMode::Detailed
    } else if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Plain
    };

    let listing = output::render(&volumes, mode);
    if !listing.is_empty() {
        println!("{listing}");
    }

    Ok(())
}

//! Morpion - terminal tic-tac-toe.

use anyhow::{Context, Result};
use clap::Parser;
use morpion::{App, Cli, MorpionConfig};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(&cli.log_file)?;

    let mut config = MorpionConfig::load(&cli.config)?;
    if let Some(size) = cli.size {
        info!(size, "Overriding board size");
        config = config.with_board_size(size);
    }

    let game = config.build_game().context("Invalid game configuration")?;
    morpion::run(App::new(game))
}

/// Logs to a file so the UI keeps the terminal to itself.
#[instrument]
fn initialize_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,morpion=debug,morpion_engine=debug")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Tracing initialized");
    Ok(())
}

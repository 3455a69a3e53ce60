//! Command-line interface for morpion.

use clap::Parser;
use std::path::PathBuf;

/// Morpion - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "morpion")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "morpion.toml")]
    pub config: PathBuf,

    /// Board size, overriding the config file
    #[arg(short, long)]
    pub size: Option<usize>,

    /// File that receives the logs while the UI owns the terminal
    #[arg(long, default_value = "morpion.log")]
    pub log_file: PathBuf,
}

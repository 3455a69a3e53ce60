//! Morpion - tic-tac-toe in the terminal.
//!
//! The game rules live in [`morpion_engine`]; this crate is the
//! presentation shell around one engine instance.
//!
//! # Architecture
//!
//! - **Config**: TOML file + CLI flags describing players and board size
//! - **TUI**: ratatui front-end forwarding clicks and keys to the engine
//!
//! # Example
//!
//! ```
//! use morpion::{App, MorpionConfig, TurnOutcome};
//! use morpion_engine::Coord;
//!
//! # fn example() -> anyhow::Result<()> {
//! let game = MorpionConfig::default().build_game()?;
//! let mut app = App::new(game);
//! assert_eq!(app.play(Coord::new(1, 1)), TurnOutcome::Continue);
//! assert_eq!(app.status().text(), "O to play.");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
pub mod tui;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - Configuration
pub use config::{ConfigError, MorpionConfig};

// Crate-level exports - Terminal UI
pub use tui::{App, MenuAction, Status, TurnOutcome, run};

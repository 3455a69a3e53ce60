//! Morpion engine - pure tic-tac-toe game logic.
//!
//! The engine owns the board, the player rotation and the winning
//! combinations. It knows nothing about rendering: a front-end builds
//! [`Move`]s from user input, asks [`Game::is_valid_move`], applies them
//! with [`Game::process_move`] and reads back the outcome.
//!
//! # Example
//!
//! ```
//! use morpion_engine::{Game, GameStatus, Move};
//!
//! let mut game = Game::default();
//! let mv = Move::new(1, 1, game.current_player().label().as_str());
//! assert!(game.is_valid_move(&mv));
//! assert_eq!(game.process_move(mv).unwrap(), GameStatus::InProgress);
//! game.toggle_player();
//! assert_eq!(game.current_player().label(), "O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
pub mod rules;
mod types;

pub use board::Board;
pub use error::{EngineError, MoveError};
pub use game::{DEFAULT_BOARD_SIZE, Game, GameState, GameStatus, default_players};
pub use types::{Color, Combination, Coord, Move, Player};

//! Error types for engine construction and move handling.

use crate::types::Coord;

/// Error raised when a game cannot be constructed from its configuration.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Fewer than two players were supplied.
    #[display("At least 2 players are required, got {count}")]
    TooFewPlayers {
        /// Number of players supplied.
        count: usize,
    },

    /// A player was configured with an empty label.
    #[display("Player #{index} has an empty label")]
    EmptyLabel {
        /// Position of the player in the rotation.
        index: usize,
    },

    /// Two players share the same label.
    #[display("Player label {label:?} is used more than once")]
    DuplicateLabel {
        /// The colliding label.
        label: String,
    },

    /// The board size is not positive.
    #[display("Board size must be at least 1, got {size}")]
    InvalidSize {
        /// The rejected size.
        size: usize,
    },
}

impl std::error::Error for EngineError {}

/// Reason a move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A winner has already been declared.
    #[display("Game is already over")]
    GameOver,

    /// The coordinates fall outside the board.
    #[display("Cell {coord} is outside the {size}x{size} board")]
    OutOfBounds {
        /// The requested cell.
        coord: Coord,
        /// Board dimension.
        size: usize,
    },

    /// The cell already holds a label.
    #[display("Cell {_0} is already occupied")]
    Occupied(Coord),
}

impl std::error::Error for MoveError {}

//! The morpion game engine.

use crate::board::Board;
use crate::error::{EngineError, MoveError};
use crate::rules;
use crate::types::{Color, Combination, Coord, Move, Player};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, instrument};

/// Board dimension used when none is configured.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Returns the default rotation: X in blue, then O in green.
pub fn default_players() -> Vec<Player> {
    vec![Player::new("X", Color::Blue), Player::new("O", Color::Green)]
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// A combination has been completed.
    Won,
    /// The board is full without a winner.
    Tied,
}

/// Mutable state of a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Index of the player to move in the rotation.
    current: usize,
    /// Combination completed by the winner, if any.
    winning_combination: Option<Combination>,
}

impl GameState {
    fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            current: 0,
            winning_combination: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the rotation index of the player to move.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Returns the winning combination, empty until a win.
    pub fn winning_combination(&self) -> &[Coord] {
        self.winning_combination.as_deref().unwrap_or_default()
    }

    /// Returns true once a combination has been completed.
    pub fn has_winner(&self) -> bool {
        self.winning_combination.is_some()
    }

    /// Returns true if the board is full and nobody has won.
    pub fn is_tied(&self) -> bool {
        rules::is_tied(&self.board, self.has_winner())
    }

    /// Returns the game status derived from the state.
    pub fn status(&self) -> GameStatus {
        if self.has_winner() {
            GameStatus::Won
        } else if self.is_tied() {
            GameStatus::Tied
        } else {
            GameStatus::InProgress
        }
    }
}

/// Morpion game engine.
///
/// Owns the player rotation, the precomputed winning combinations and the
/// round state. Callers validate with [`Game::is_valid_move`] before
/// [`Game::process_move`], which overwrites unconditionally.
#[derive(Debug, Clone)]
pub struct Game {
    players: Vec<Player>,
    combinations: Vec<Combination>,
    state: GameState,
}

impl Game {
    /// Creates a game for `players` on a `size`×`size` board.
    ///
    /// The first player in the list moves first.
    ///
    /// # Errors
    ///
    /// Fails if there are fewer than two players, a label is empty or
    /// repeated, or `size` is zero.
    #[instrument(skip(players), fields(player_count = players.len()))]
    pub fn new(players: Vec<Player>, size: usize) -> Result<Self, EngineError> {
        if players.len() < 2 {
            return Err(EngineError::TooFewPlayers {
                count: players.len(),
            });
        }
        if size == 0 {
            return Err(EngineError::InvalidSize { size });
        }

        let mut seen = HashSet::new();
        for (index, player) in players.iter().enumerate() {
            if player.label().is_empty() {
                return Err(EngineError::EmptyLabel { index });
            }
            if !seen.insert(player.label().as_str()) {
                return Err(EngineError::DuplicateLabel {
                    label: player.label().clone(),
                });
            }
        }

        info!(size, "Creating game");
        Ok(Self::build(players, size))
    }

    fn build(players: Vec<Player>, size: usize) -> Self {
        Self {
            players,
            combinations: rules::winning_combinations(size),
            state: GameState::new(size),
        }
    }

    /// Returns the round state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the board dimension.
    pub fn size(&self) -> usize {
        self.state.board.size()
    }

    /// Returns the player rotation.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> &Player {
        &self.players[self.state.current]
    }

    /// Returns every winning combination, in evaluation order.
    pub fn winning_combinations(&self) -> &[Combination] {
        &self.combinations
    }

    /// Returns the combination completed by the winner, empty until a win.
    pub fn winning_combination(&self) -> &[Coord] {
        self.state.winning_combination()
    }

    /// Returns the player whose label fills the winning combination.
    pub fn winner(&self) -> Option<&Player> {
        let first = *self.winning_combination().first()?;
        let label = self.board().label_at(first)?;
        self.players.iter().find(|p| p.label() == label)
    }

    /// Returns true once a winner has been declared.
    pub fn has_winner(&self) -> bool {
        self.state.has_winner()
    }

    /// Returns true if every cell is played and nobody has won.
    pub fn is_tied(&self) -> bool {
        self.state.is_tied()
    }

    /// Returns the current status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Checks whether `mv` may be played, reporting why not.
    ///
    /// The label of `mv` is not checked against the current player.
    #[instrument(skip(self), fields(mv = %mv))]
    pub fn validate_move(&self, mv: &Move) -> Result<(), MoveError> {
        if self.has_winner() {
            return Err(MoveError::GameOver);
        }
        let coord = mv.coord();
        if !self.board().contains(coord) {
            return Err(MoveError::OutOfBounds {
                coord,
                size: self.size(),
            });
        }
        if !self.board().is_empty(coord) {
            return Err(MoveError::Occupied(coord));
        }
        Ok(())
    }

    /// Returns true if no winner exists and the target cell is on the board
    /// and empty.
    pub fn is_valid_move(&self, mv: &Move) -> bool {
        self.validate_move(mv).is_ok()
    }

    /// Writes `mv` to the board and looks for a completed combination.
    ///
    /// Overwrites whatever the cell held; call [`Game::is_valid_move`]
    /// first. The first winning combination in evaluation order is recorded.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] and leaves the state untouched if
    /// the coordinates are off the board.
    #[instrument(skip(self), fields(mv = %mv))]
    pub fn process_move(&mut self, mv: Move) -> Result<GameStatus, MoveError> {
        self.state.board.place(mv)?;

        if let Some(combination) =
            rules::find_winning_combination(&self.state.board, &self.combinations)
        {
            debug!(?combination, "Winning combination completed");
            self.state.winning_combination = Some(combination.clone());
        }

        let status = self.status();
        debug!(?status, "Move processed");
        Ok(status)
    }

    /// Passes the turn to the next player, wrapping after the last.
    #[instrument(skip(self))]
    pub fn toggle_player(&mut self) {
        self.state.current = (self.state.current + 1) % self.players.len();
        debug!(player = %self.current_player(), "Turn passed");
    }

    /// Clears the board and the winner for a new round.
    ///
    /// The player to move is kept as is.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.state.board.clear();
        self.state.winning_combination = None;
        info!(player = %self.current_player(), "Game reset");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::build(default_players(), DEFAULT_BOARD_SIZE)
    }
}

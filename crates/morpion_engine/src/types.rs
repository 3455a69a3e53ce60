//! Core domain types for the morpion engine.

use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Display color attached to a player.
///
/// Parsed case-insensitively from its name (`"blue"`, `"Green"`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(try_from = "String", into = "String")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Color {
    /// Neutral foreground, used for status messages.
    #[default]
    Black,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Blue.
    Blue,
    /// Magenta.
    Magenta,
    /// Cyan.
    Cyan,
    /// Gray.
    Gray,
    /// White.
    White,
}

impl TryFrom<String> for Color {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_str(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// A participant in the rotation.
///
/// Players are compared by value; the engine requires labels to be
/// unique within one game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, Display)]
#[display("{label}")]
pub struct Player {
    /// Mark written into cells ("X", "O").
    label: String,
    /// Color the shell draws this player's mark in.
    color: Color,
}

impl Player {
    /// Creates a new player.
    #[instrument(skip(label))]
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

/// A cell coordinate on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// An ordered list of cells that wins the game when uniformly labeled.
pub type Combination = Vec<Coord>;

/// A move: a label assigned to a cell.
///
/// A move with an empty label is an unplayed cell, which is how the board
/// represents empty squares.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    row: usize,
    col: usize,
    label: String,
}

impl Move {
    /// Creates a move placing `label` at (`row`, `col`).
    pub fn new(row: usize, col: usize, label: impl Into<String>) -> Self {
        Self {
            row,
            col,
            label: label.into(),
        }
    }

    /// Creates the unplayed move for a cell.
    pub fn empty(row: usize, col: usize) -> Self {
        Self::new(row, col, "")
    }

    /// Returns the row index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column index.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns the label; empty when unplayed.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the targeted cell.
    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }

    /// Returns true if a player's label occupies this move.
    pub fn is_played(&self) -> bool {
        !self.label.is_empty()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_played() {
            write!(f, "{} -> {}", self.label, self.coord())
        } else {
            write!(f, "empty {}", self.coord())
        }
    }
}

//! Square grid of moves.

use crate::error::MoveError;
use crate::types::{Coord, Move};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// N×N board indexed `[row][col]`.
///
/// Every cell stores a [`Move`] whose coordinates match its position; an
/// empty label marks an unplayed cell. The dimension is fixed at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Vec<Move>>,
}

impl Board {
    /// Creates an empty board of `size`×`size` cells.
    #[instrument]
    pub fn new(size: usize) -> Self {
        let cells = (0..size)
            .map(|row| (0..size).map(|col| Move::empty(row, col)).collect())
            .collect();
        Self { size, cells }
    }

    /// Returns the board dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if `coord` lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Gets the move stored at `coord`.
    pub fn get(&self, coord: Coord) -> Option<&Move> {
        self.cells.get(coord.row)?.get(coord.col)
    }

    /// Gets the label stored at `coord`.
    pub fn label_at(&self, coord: Coord) -> Option<&str> {
        self.get(coord).map(Move::label)
    }

    /// Checks if the cell at `coord` is unplayed.
    ///
    /// Out-of-range coordinates are not empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(|mv| !mv.is_played())
    }

    /// Writes `mv` at its own coordinates, overwriting the previous move.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn place(&mut self, mv: Move) -> Result<(), MoveError> {
        let coord = mv.coord();
        let size = self.size;
        let cell = self
            .cells
            .get_mut(coord.row)
            .and_then(|row| row.get_mut(coord.col))
            .ok_or(MoveError::OutOfBounds { coord, size })?;
        *cell = mv;
        Ok(())
    }

    /// Resets every cell to its unplayed move.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        for (row, cells) in self.cells.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = Move::empty(row, col);
            }
        }
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[Vec<Move>] {
        &self.cells
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Move> {
        self.cells.iter().flatten()
    }

    /// Formats the board as a human-readable grid, `.` for empty cells.
    pub fn display(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|mv| if mv.is_played() { mv.label() } else { "." })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_cells_match_positions() {
        let board = Board::new(4);
        for (row, cells) in board.rows().iter().enumerate() {
            for (col, mv) in cells.iter().enumerate() {
                assert_eq!(*mv, Move::empty(row, col));
            }
        }
        assert_eq!(board.cells().count(), 16);
    }

    #[test]
    fn test_place_out_of_bounds() {
        let mut board = Board::new(3);
        let result = board.place(Move::new(3, 0, "X"));
        assert_eq!(
            result,
            Err(MoveError::OutOfBounds {
                coord: Coord::new(3, 0),
                size: 3
            })
        );
        assert!(board.cells().all(|mv| !mv.is_played()));
    }

    #[test]
    fn test_clear_restores_empty_cells() {
        let mut board = Board::new(3);
        board.place(Move::new(1, 2, "O")).unwrap();
        assert!(!board.is_empty(Coord::new(1, 2)));

        board.clear();
        assert_eq!(board, Board::new(3));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(2);
        board.place(Move::new(0, 1, "X")).unwrap();
        assert_eq!(board.display(), ".|X\n.|.");
    }
}

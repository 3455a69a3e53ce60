//! Tie detection logic.

use crate::board::Board;
use tracing::instrument;

/// Checks if every cell holds a label.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|mv| mv.is_played())
}

/// A full board is tied only when nobody has won.
pub fn is_tied(board: &Board, has_winner: bool) -> bool {
    !has_winner && is_full(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Move;

    fn fill(board: &mut Board, rows: &[&str]) {
        for (row, line) in rows.iter().enumerate() {
            for (col, label) in line.split(' ').enumerate() {
                board.place(Move::new(row, col, label)).unwrap();
            }
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new(3)));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(3);
        board.place(Move::new(1, 1, "X")).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board_tied() {
        let mut board = Board::new(3);
        fill(&mut board, &["X O X", "X O O", "O X X"]);
        assert!(is_full(&board));
        assert!(is_tied(&board, false));
    }

    #[test]
    fn test_not_tied_if_winner() {
        let mut board = Board::new(3);
        fill(&mut board, &["X X X", "O O X", "X O O"]);
        assert!(is_full(&board));
        assert!(!is_tied(&board, true));
    }
}

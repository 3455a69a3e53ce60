//! Win detection logic.

use crate::board::Board;
use crate::types::{Combination, Coord};
use std::collections::HashSet;
use tracing::instrument;

/// Lists every winning combination for a `size`×`size` board.
///
/// Order: rows top to bottom, columns left to right, the main diagonal,
/// then the anti-diagonal. Always `2 * size + 2` entries.
#[instrument]
pub fn winning_combinations(size: usize) -> Vec<Combination> {
    let rows = (0..size).map(|row| {
        (0..size)
            .map(|col| Coord::new(row, col))
            .collect::<Combination>()
    });
    let cols = (0..size).map(|col| {
        (0..size)
            .map(|row| Coord::new(row, col))
            .collect::<Combination>()
    });
    let main_diagonal: Combination = (0..size).map(|i| Coord::new(i, i)).collect();
    let anti_diagonal: Combination = (0..size).map(|i| Coord::new(i, size - 1 - i)).collect();

    rows.chain(cols)
        .chain([main_diagonal, anti_diagonal])
        .collect()
}

/// Returns true if every cell of `combination` holds the same non-empty label.
pub fn is_winning(board: &Board, combination: &[Coord]) -> bool {
    let labels: HashSet<&str> = combination
        .iter()
        .filter_map(|coord| board.label_at(*coord))
        .collect();
    labels.len() == 1 && !labels.contains("")
}

/// Returns the first combination, in list order, that is winning on `board`.
#[instrument(skip_all)]
pub fn find_winning_combination<'a>(
    board: &Board,
    combinations: &'a [Combination],
) -> Option<&'a Combination> {
    combinations
        .iter()
        .find(|combination| is_winning(board, combination))
}

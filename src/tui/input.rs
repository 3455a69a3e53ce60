//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use morpion_engine::Coord;

/// Moves cursor based on arrow keys, staying on a `size`×`size` board.
pub fn move_cursor(cursor: Coord, key: KeyCode, size: usize) -> Coord {
    let last = size.saturating_sub(1);
    let Coord { row, col } = cursor;

    match key {
        KeyCode::Up => Coord::new(row.saturating_sub(1), col),
        KeyCode::Down => Coord::new((row + 1).min(last), col),
        KeyCode::Left => Coord::new(row, col.saturating_sub(1)),
        KeyCode::Right => Coord::new(row, (col + 1).min(last)),
        // No change for other keys
        _ => cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_board() {
        let center = Coord::new(1, 1);
        assert_eq!(move_cursor(center, KeyCode::Up, 3), Coord::new(0, 1));
        assert_eq!(move_cursor(center, KeyCode::Down, 3), Coord::new(2, 1));
        assert_eq!(move_cursor(center, KeyCode::Left, 3), Coord::new(1, 0));
        assert_eq!(move_cursor(center, KeyCode::Right, 3), Coord::new(1, 2));
    }

    #[test]
    fn test_clamps_at_edges() {
        assert_eq!(move_cursor(Coord::new(0, 0), KeyCode::Up, 3), Coord::new(0, 0));
        assert_eq!(move_cursor(Coord::new(0, 0), KeyCode::Left, 3), Coord::new(0, 0));
        assert_eq!(move_cursor(Coord::new(3, 3), KeyCode::Down, 4), Coord::new(3, 3));
        assert_eq!(move_cursor(Coord::new(3, 3), KeyCode::Right, 4), Coord::new(3, 3));
    }

    #[test]
    fn test_other_keys_ignored() {
        let cursor = Coord::new(2, 0);
        assert_eq!(move_cursor(cursor, KeyCode::Char('x'), 3), cursor);
    }
}

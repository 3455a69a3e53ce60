//! Game rules for morpion.
//!
//! Pure functions evaluating a board. Rules are kept apart from the board
//! storage and from the engine's turn bookkeeping.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tied};
pub use win::{find_winning_combination, is_winning, winning_combinations};

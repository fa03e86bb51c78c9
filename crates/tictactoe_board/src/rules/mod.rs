//! Game rules for tic-tac-toe.
//!
//! Pure functions over board contents. Rules are kept apart from board
//! storage so the board's own predicates and the tests share one source.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, check_winner, has_won};

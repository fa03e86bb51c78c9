//! Tic-tac-toe board library.
//!
//! The [`Board`] owns the nine cells and every rule of the game: move
//! validation, win detection and terminal detection. Turn order belongs to
//! whoever drives the game.
//!
//! # Example
//!
//! ```
//! use tictactoe_board::{Board, Player};
//!
//! let mut board = Board::new();
//! assert!(board.make_move(Player::X, 4));
//! assert!(!board.make_move(Player::O, 4));
//! assert!(!board.make_move("Z", 0));
//! assert_eq!(board.render(), "* * *\n* X *\n* * *");
//! assert!(!board.is_terminal());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveRejection};
pub use board::Board;
pub use position::Position;
pub use types::{Cell, InvalidPlayerTag, Outcome, Player};

/// Alias for clarity where a player is used as a cell occupant.
pub type Mark = Player;

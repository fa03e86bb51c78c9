//! Player trait and implementations.

mod human;

pub use human::HumanPlayer;

use crate::{Console, PlayError};
use tictactoe_board::{Board, Mark};

/// Trait for anything that can choose moves.
pub trait Player {
    /// Gets a move for `mark` on the current `board`.
    ///
    /// Returns the raw position index; the board decides whether it is
    /// legal, so out-of-range values are passed through unchanged.
    fn get_move(
        &mut self,
        mark: Mark,
        board: &Board,
        console: &mut Console<'_>,
    ) -> Result<i64, PlayError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

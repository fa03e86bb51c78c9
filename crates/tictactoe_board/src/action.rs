//! Move and move-rejection types.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why the board refused a move.
///
/// Variants are listed in the order the checks run: the first failing
/// check decides the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The player tag was neither X nor O.
    #[display("player must be X or O")]
    InvalidPlayer,

    /// The position is outside 0-8.
    #[display("position {} is out of range (must be 0-8)", _0)]
    OutOfRange(i64),

    /// The cell at the position is already taken.
    #[display("{} is already occupied", _0)]
    Occupied(Position),
}

impl std::error::Error for MoveRejection {}

//! The 3x3 board: sole owner of cell state and of rule enforcement.

use super::action::{Move, MoveRejection};
#[cfg(debug_assertions)]
use super::invariants::{MonotonicBoard, TransitionInvariant};
use super::types::{Cell, Outcome, Player};
use super::{Position, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// Cells only change through [`Board::try_move`] (or [`Board::make_move`])
/// and [`Board::reset`]. Turn order is not tracked here; callers decide
/// whose move it is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Renders the grid as three lines of space-separated symbols.
    ///
    /// Empty cells are `*`. No trailing newline.
    pub fn render(&self) -> String {
        self.cells
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.symbol().to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Places `player`'s mark at `position`, reporting why a move was refused.
    ///
    /// Checks run in order: player tag, position range, occupancy. A
    /// refused move leaves the board untouched.
    #[instrument(skip(self, player))]
    pub fn try_move<P>(&mut self, player: P, position: i64) -> Result<Move, MoveRejection>
    where
        P: TryInto<Player>,
    {
        let player = player.try_into().map_err(|_| {
            debug!("Rejected move: invalid player tag");
            MoveRejection::InvalidPlayer
        })?;

        let Some(pos) = Position::from_signed(position) else {
            debug!(%player, "Rejected move: position out of range");
            return Err(MoveRejection::OutOfRange(position));
        };

        if !self.cell(pos).is_empty() {
            debug!(%player, %pos, "Rejected move: cell occupied");
            return Err(MoveRejection::Occupied(pos));
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.cells[pos.to_index()] = Cell::from(player);

        #[cfg(debug_assertions)]
        debug_assert!(
            MonotonicBoard::holds(&before, self),
            "{}",
            MonotonicBoard::description()
        );

        let mov = Move::new(player, pos);
        debug!(%mov, "Move applied");
        Ok(mov)
    }

    /// Places `player`'s mark at `position`; `false` if the move was refused.
    pub fn make_move<P>(&mut self, player: P, position: i64) -> bool
    where
        P: TryInto<Player>,
    {
        self.try_move(player, position).is_ok()
    }

    /// Checks if `player` holds any winning line.
    pub fn has_won(&self, player: Player) -> bool {
        rules::has_won(self, player)
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Game over: either player has won or the board is full.
    pub fn is_terminal(&self) -> bool {
        self.has_won(Player::X) || self.has_won(Player::O) || self.is_full()
    }

    /// Returns the winner, X checked first.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Returns how the game ended, or `None` while it is still open.
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(player) = self.winner() {
            Some(Outcome::Winner(player))
        } else if self.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Positions still available to play.
    pub fn open_positions(&self) -> Vec<Position> {
        Position::open_positions(self)
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
        debug!("Board reset");
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Player, Position};
use tracing::instrument;

/// The eight winning triples: three rows, three columns, two diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if `player` holds all three cells of any winning line.
#[instrument(skip(board))]
pub fn has_won(board: &Board, player: Player) -> bool {
    let mark = Cell::from(player);
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.cell(pos) == mark))
}

/// Returns the winner, checking X before O.
///
/// Both players can only hold a line at once if moves were applied out of
/// turn; X is reported in that case.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    Player::ALL
        .into_iter()
        .find(|&player| has_won(board, player))
}

//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (no empty cell left).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

/// A full board with no winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::Player;
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.make_move(Player::X, 4);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // X O X / O X X / O X O
        for (player, pos) in [
            (Player::X, 0),
            (Player::O, 1),
            (Player::X, 2),
            (Player::O, 3),
            (Player::X, 4),
            (Player::X, 5),
            (Player::O, 6),
            (Player::X, 7),
            (Player::O, 8),
        ] {
            assert!(board.make_move(player, pos));
        }
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        // X wins top row, remaining cells filled without another line
        for (player, pos) in [
            (Player::X, 0),
            (Player::X, 1),
            (Player::X, 2),
            (Player::O, 3),
            (Player::O, 4),
            (Player::X, 5),
            (Player::X, 6),
            (Player::O, 7),
            (Player::O, 8),
        ] {
            board.make_move(player, pos);
        }
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}

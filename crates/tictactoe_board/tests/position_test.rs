//! Tests for the position enum.

use strum::IntoEnumIterator;
use tictactoe_board::{Board, Cell, Player, Position};

#[test]
fn test_every_label_and_number_names_its_cell() {
    for pos in Position::ALL {
        let number = pos.to_index().to_string();
        assert_eq!(Position::from_label_or_number(&number), Some(pos));
        assert_eq!(Position::from_label_or_number(pos.label()), Some(pos));
        assert_eq!(Position::from_label_or_number(&pos.to_string().to_uppercase()), Some(pos));
    }
}

#[test]
fn test_iteration_order_matches_all() {
    let iterated: Vec<Position> = Position::iter().collect();
    assert_eq!(iterated, Position::ALL.to_vec());
}

#[test]
fn test_parsed_label_addresses_the_moved_cell() {
    for pos in Position::ALL {
        let mut board = Board::new();
        assert!(board.make_move(Player::O, pos.to_index() as i64));

        let parsed = Position::from_label_or_number(pos.label()).expect("label parses");
        assert_eq!(board.cell(parsed), Cell::O);

        let rendered = board.render();
        let row = rendered.lines().nth(parsed.row()).expect("three rows");
        assert_eq!(row.split(' ').nth(parsed.col()), Some("O"));
    }
}

#[test]
fn test_open_positions_empty_board() {
    let board = Board::new();
    assert_eq!(Position::open_positions(&board), Position::ALL.to_vec());
}

#[test]
fn test_open_positions_filters_occupied() {
    let mut board = Board::new();
    board.make_move(Player::X, 0);
    board.make_move(Player::O, 4);

    let open = board.open_positions();
    assert_eq!(open.len(), 7);
    assert!(!open.contains(&Position::TopLeft));
    assert!(!open.contains(&Position::Center));
    assert!(open.contains(&Position::BottomRight));
}

//! Tests for the 1-9 square numbering.

use std::collections::HashSet;

use noughts_and_crosses::{Board, Mark, Position};

#[test]
fn test_choice_to_row_col() {
    let top_left = Position::from_choice(1).unwrap();
    assert_eq!((top_left.row(), top_left.col()), (0, 0));

    let center = Position::from_choice(5).unwrap();
    assert_eq!(center, Position::CENTER);

    let middle_right = Position::from_choice(6).unwrap();
    assert_eq!((middle_right.row(), middle_right.col()), (1, 2));

    let bottom_right = Position::from_choice(9).unwrap();
    assert_eq!((bottom_right.row(), bottom_right.col()), (2, 2));
}

#[test]
fn test_choices_cover_board_exactly_once() {
    let positions: Vec<Position> = (1..=9).filter_map(Position::from_choice).collect();
    assert_eq!(positions.len(), 9);

    let unique: HashSet<Position> = positions.iter().copied().collect();
    assert_eq!(unique.len(), 9);
    assert_eq!(positions, Position::ALL.to_vec());

    for n in 1..=9 {
        let pos = Position::from_choice(n).unwrap();
        assert_eq!(pos.row(), ((n - 1) / 3) as usize);
        assert_eq!(pos.col(), ((n - 1) % 3) as usize);
        assert_eq!(pos.choice(), n);
    }
}

#[test]
fn test_choice_out_of_range() {
    assert_eq!(Position::from_choice(0), None);
    assert_eq!(Position::from_choice(10), None);
    assert_eq!(Position::from_choice(u32::MAX), None);
    assert_eq!(Position::new(3, 0), None);
    assert_eq!(Position::new(0, 3), None);
}

#[test]
fn test_empty_positions_filters_occupied() {
    let mut board = Board::new();
    board.place(Position::from_choice(1).unwrap(), Mark::X).unwrap();
    board.place(Position::CENTER, Mark::O).unwrap();

    let empty = board.empty_positions();
    assert_eq!(empty.len(), 7);
    assert!(!empty.contains(&Position::from_choice(1).unwrap()));
    assert!(!empty.contains(&Position::CENTER));
    assert!(empty.contains(&Position::from_choice(9).unwrap()));
    assert_eq!(board.marks_placed(), 2);
}

//! Tests for the human and computer move providers.

use noughts_and_crosses::{
    Board, ComputerPlayer, Console, GameError, Mark, Player, PlayerMove, Position, RetryReason,
    Square, parse_move,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

const X: Square = Square::Occupied(Mark::X);
const O: Square = Square::Occupied(Mark::O);
const E: Square = Square::Empty;

fn choice(n: u32) -> Position {
    Position::from_choice(n).unwrap()
}

#[test]
fn test_parse_valid_choice() {
    let board = Board::new();
    assert_eq!(parse_move("1", &board), PlayerMove::Place(choice(1)));
    assert_eq!(parse_move(" 9 ", &board), PlayerMove::Place(choice(9)));
}

#[test]
fn test_parse_rejects_non_numbers() {
    let board = Board::new();
    for input in ["abc", "", "   ", "-1", "+5", "4.0", "five"] {
        assert_eq!(
            parse_move(input, &board),
            PlayerMove::Retry(RetryReason::NotANumber),
            "input {input:?}"
        );
    }
}

#[test]
fn test_parse_rejects_out_of_range() {
    let board = Board::new();
    assert_eq!(
        parse_move("0", &board),
        PlayerMove::Retry(RetryReason::OutOfRange(0))
    );
    assert_eq!(
        parse_move("10", &board),
        PlayerMove::Retry(RetryReason::OutOfRange(10))
    );
    assert!(matches!(
        parse_move("99999999999999999999", &board),
        PlayerMove::Retry(RetryReason::OutOfRange(_))
    ));
}

#[test]
fn test_parse_rejects_occupied_square() {
    let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, E]]);
    assert_eq!(
        parse_move("1", &board),
        PlayerMove::Retry(RetryReason::Occupied(choice(1)))
    );
    assert_eq!(
        parse_move("5", &board),
        PlayerMove::Retry(RetryReason::Occupied(Position::CENTER))
    );
    assert_eq!(parse_move("2", &board), PlayerMove::Place(choice(2)));
}

#[test]
fn test_human_player_reports_rejection() {
    let board = Board::from_rows([[X, E, E], [E, E, E], [E, E, E]]);
    let mut console = Console::new(&b"abc\n1\n12\n3\n"[..], Vec::new());
    let mut human = noughts_and_crosses::HumanPlayer::new("Tester");

    let mut moves = Vec::new();
    for _ in 0..4 {
        moves.push(human.request_move(&board, &mut console).unwrap());
    }
    assert_eq!(
        moves,
        vec![
            PlayerMove::Retry(RetryReason::NotANumber),
            PlayerMove::Retry(RetryReason::Occupied(choice(1))),
            PlayerMove::Retry(RetryReason::OutOfRange(12)),
            PlayerMove::Place(choice(3)),
        ]
    );

    let output = String::from_utf8(console.into_parts().1).unwrap();
    assert!(output.contains("Choose your square"));
    assert!(output.contains("Invalid Input. Enter a Number."));
    assert!(output.contains("Please choose an empty space."));
    assert!(output.contains("Invalid Input. Please enter number between (1-9)"));
}

#[test]
fn test_human_player_input_closed() {
    let board = Board::new();
    let mut console = Console::new(&b""[..], Vec::new());
    let mut human = noughts_and_crosses::HumanPlayer::new("Tester");
    let result = human.request_move(&board, &mut console);
    assert!(matches!(result, Err(GameError::InputClosed)));
}

#[test]
fn test_computer_takes_only_empty_square() {
    let board = Board::from_rows([[X, O, X], [O, E, X], [O, X, O]]);
    for seed in 0..20 {
        let mut computer = ComputerPlayer::new("Computer", StdRng::seed_from_u64(seed));
        assert_eq!(computer.choose_move(&board), Some(Position::CENTER));
    }
}

#[test]
fn test_computer_always_picks_empty_square() {
    let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, X]]);
    let mut computer = ComputerPlayer::new("Computer", StdRng::seed_from_u64(42));
    for _ in 0..100 {
        let pos = computer.choose_move(&board).unwrap();
        assert!(board.is_empty(pos), "picked occupied {pos}");
    }
}

#[test]
fn test_computer_reaches_every_empty_square() {
    let board = Board::new();
    let mut computer = ComputerPlayer::new("Computer", StdRng::seed_from_u64(7));
    let mut seen = std::collections::HashSet::new();
    for _ in 0..500 {
        seen.insert(computer.choose_move(&board).unwrap());
    }
    assert_eq!(seen.len(), 9);
}

#[test]
fn test_computer_full_board() {
    let board = Board::from_rows([[X, O, X], [O, X, X], [O, X, O]]);
    let mut computer = ComputerPlayer::new("Computer", StdRng::seed_from_u64(1));
    assert_eq!(computer.choose_move(&board), None);

    let mut console = Console::new(&b""[..], Vec::new());
    let result = computer.request_move(&board, &mut console);
    assert!(matches!(result, Err(GameError::NoMovesLeft)));
}

#[test]
fn test_computer_same_seed_same_moves() {
    let board = Board::new();
    let mut a = ComputerPlayer::new("A", StdRng::seed_from_u64(99));
    let mut b = ComputerPlayer::new("B", StdRng::seed_from_u64(99));
    for _ in 0..10 {
        assert_eq!(a.choose_move(&board), b.choose_move(&board));
    }
}

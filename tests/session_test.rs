//! End-to-end tests for the interactive menu.

use std::fs;

use noughts_and_crosses::{Console, LeaderboardStore, Session};
use rand::rngs::mock::StepRng;
use tempfile::TempDir;

/// Runs a session over scripted input. The computer always takes the first
/// empty square. Returns the console output.
fn run_session(store: LeaderboardStore, input: &str) -> String {
    let mut session = Session::new(store, StepRng::new(0, 0));
    let mut console = Console::new(input.as_bytes(), Vec::new());
    session.run(&mut console).expect("Session failed");
    String::from_utf8(console.into_parts().1).unwrap()
}

fn setup_store() -> (TempDir, LeaderboardStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = LeaderboardStore::new(dir.path().join("leaderboard.txt"));
    (dir, store)
}

#[test]
fn test_play_save_and_display() {
    let (_dir, store) = setup_store();
    // Win: X 1 4 7 against O 2 3. Loss: X 9 8 4 against O 1 2 3.
    let input = "1\n1\n4\n7\n2\n  Ann \n1\n9\n8\n4\n2\nann\n3\nq\n";
    let output = run_session(store.clone(), input);

    assert!(output.contains("Congratulation, You won."));
    assert!(output.contains("Sorry you lost."));
    assert_eq!(output.matches("Saved Successfully.").count(), 2);
    assert!(output.contains("LEADERBOARD"));
    assert_eq!(fs::read_to_string(store.path()).unwrap(), r#"{"ann": 0}"#);
}

#[test]
fn test_invalid_menu_choice_reprompts() {
    let (_dir, store) = setup_store();
    let output = run_session(store, "x\n4\n\nQ\n");
    assert_eq!(output.matches("Please select valid options").count(), 3);
}

#[test]
fn test_save_before_playing() {
    let (_dir, store) = setup_store();
    let output = run_session(store.clone(), "2\nq\n");
    assert!(output.contains("Play a game first"));
    assert!(!store.path().exists());
}

#[test]
fn test_result_saved_only_once() {
    let (_dir, store) = setup_store();
    let output = run_session(store.clone(), "1\n1\n4\n7\n2\nann\n2\nq\n");
    assert_eq!(output.matches("Saved Successfully.").count(), 1);
    assert!(output.contains("Play a game first"));
    assert_eq!(fs::read_to_string(store.path()).unwrap(), r#"{"ann": 1}"#);
}

#[test]
fn test_blank_name_reprompts() {
    let (_dir, store) = setup_store();
    let output = run_session(store.clone(), "1\n1\n4\n7\n2\n\n   \nbob\nq\n");
    assert_eq!(output.matches("Please enter a name.").count(), 2);
    assert_eq!(fs::read_to_string(store.path()).unwrap(), r#"{"bob": 1}"#);
}

#[test]
fn test_display_empty_leaderboard() {
    let (_dir, store) = setup_store();
    let output = run_session(store.clone(), "3\nq\n");
    assert!(output.contains("Leaderboard does not exist."));
    assert!(output.contains("No leaders in board yet"));
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "{}");
}

#[test]
fn test_input_ends_mid_game() {
    let (_dir, store) = setup_store();
    let output = run_session(store, "1\n1\n");
    assert!(output.contains("Welcome"));
    assert!(!output.contains("Congratulation"));
}

#[test]
fn test_input_ends_at_menu() {
    let (_dir, store) = setup_store();
    let output = run_session(store, "");
    assert!(output.contains("1, 2, 3, or q"));
}

#[test]
fn test_overflowing_save_is_reported_and_session_continues() {
    let (_dir, store) = setup_store();
    let text = r#"{"ann": 9223372036854775807}"#;
    fs::write(store.path(), text).unwrap();

    let output = run_session(store.clone(), "1\n1\n4\n7\n2\nann\n3\nq\n");
    assert!(output.contains("Could not save score: Score for 'ann' is too large"));
    assert!(!output.contains("Saved Successfully."));
    assert!(output.contains("9223372036854775807"));
    assert_eq!(fs::read_to_string(store.path()).unwrap(), text);
}

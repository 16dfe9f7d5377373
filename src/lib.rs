//! Noughts and Crosses library - a terminal game against a random opponent
//!
//! # Architecture
//!
//! - **Games**: board, win/draw rules and the match state machine
//! - **Players**: console-driven human and random computer move providers
//! - **Leaderboard**: cumulative scores persisted as one JSON object file
//! - **Session**: the interactive menu
//!
//! # Example
//!
//! ```no_run
//! use noughts_and_crosses::{Console, LeaderboardStore, Session};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! # fn example() -> std::io::Result<()> {
//! let store = LeaderboardStore::new("leaderboard.txt");
//! let mut session = Session::new(store, StdRng::seed_from_u64(7));
//! session.run(&mut Console::stdio())?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod console;
mod games;
mod leaderboard;
mod players;
mod session;

// Crate-level exports - Console I/O
pub use console::Console;

// Crate-level exports - Game types
pub use games::tictactoe::{
    Board, COMPUTER_MARK, Game, GameError, Mark, MatchResult, MoveError, PLAYER_MARK, Position,
    Square, TurnPhase, rules,
};

// Crate-level exports - Players
pub use players::{
    ComputerPlayer, HUMAN_PROMPT, HumanPlayer, Player, PlayerMove, RetryReason, parse_move,
};

// Crate-level exports - Leaderboard
pub use leaderboard::{
    DEFAULT_LEADERBOARD_PATH, Leaderboard, LeaderboardEntry, LeaderboardError,
    LeaderboardErrorKind, LeaderboardStore, LoadNotice, Loaded,
};

// Crate-level exports - Session
pub use session::{MenuChoice, Session};

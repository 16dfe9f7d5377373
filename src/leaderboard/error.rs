//! Leaderboard error types.

use derive_more::{Display, Error};
use std::path::Path;
use tracing::instrument;

/// Which step of handling the leaderboard file failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LeaderboardErrorKind {
    /// The file exists but could not be read.
    #[display("read")]
    Read,
    /// The file was read but is not a JSON object of scores.
    #[display("parse")]
    Parse,
    /// The file could not be encoded or written.
    #[display("write")]
    Write,
    /// Adding a score would leave the signed 64-bit range.
    #[display("score")]
    ScoreOverflow,
}

/// Leaderboard error with the kind of failure and where it was raised.
#[derive(Debug, Clone, Display, Error)]
#[display("Leaderboard {} error: {} at {}:{}", kind, message, file, line)]
pub struct LeaderboardError {
    /// Which step failed.
    pub kind: LeaderboardErrorKind,
    /// Message shown to the player.
    pub message: String,
    /// Line number where error was created
    pub line: u32,
    /// Source file where error was created
    pub file: &'static str,
}

impl LeaderboardError {
    /// Creates an error recording the caller's location.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(kind: LeaderboardErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// The file at `path` could not be written.
    #[track_caller]
    pub fn write(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::new(
            LeaderboardErrorKind::Write,
            format!("Failed to write '{}': {}", path.display(), err),
        )
    }

    /// Adding `score` to `name`'s `total` does not fit in an `i64`.
    #[track_caller]
    pub fn score_overflow(name: &str, total: i64, score: i64) -> Self {
        Self::new(
            LeaderboardErrorKind::ScoreOverflow,
            format!("Score for '{}' is too large to add {} to {}", name, score, total),
        )
    }
}

impl From<std::io::Error> for LeaderboardError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(LeaderboardErrorKind::Read, err.to_string())
    }
}

impl From<serde_json::Error> for LeaderboardError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(
            LeaderboardErrorKind::Parse,
            format!("Invalid JSON at line {}, column {}", err.line(), err.column()),
        )
    }
}

impl From<std::string::FromUtf8Error> for LeaderboardError {
    #[track_caller]
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::new(
            LeaderboardErrorKind::Parse,
            format!(
                "Not UTF-8 text after byte {}",
                err.utf8_error().valid_up_to()
            ),
        )
    }
}

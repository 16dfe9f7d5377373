//! File-backed leaderboard of cumulative scores per player.

mod error;
mod models;
mod store;

pub use error::{LeaderboardError, LeaderboardErrorKind};
pub use models::{Leaderboard, LeaderboardEntry, LoadNotice, Loaded};
pub use store::{DEFAULT_LEADERBOARD_PATH, LeaderboardStore};

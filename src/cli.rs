//! Command-line interface for noughts_and_crosses.

use clap::Parser;
use std::path::PathBuf;

use noughts_and_crosses::DEFAULT_LEADERBOARD_PATH;

/// Noughts and Crosses - play against a random computer opponent
#[derive(Parser, Debug)]
#[command(name = "noughts_and_crosses")]
#[command(about = "Terminal noughts and crosses with a persistent leaderboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Leaderboard file (created if it doesn't exist)
    #[arg(long, default_value = DEFAULT_LEADERBOARD_PATH)]
    pub leaderboard: PathBuf,

    /// Seed for the computer's moves (random if not provided)
    #[arg(long)]
    pub seed: Option<u64>,
}

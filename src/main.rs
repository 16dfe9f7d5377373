//! Noughts and Crosses - terminal game entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use noughts_and_crosses::{Console, LeaderboardStore, Session};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let rng = match cli.seed {
        Some(seed) => {
            info!(seed, "Using seeded computer opponent");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let store = LeaderboardStore::new(&cli.leaderboard);
    let mut session = Session::new(store, rng);
    session.run(&mut Console::stdio())?;

    Ok(())
}

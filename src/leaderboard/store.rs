//! Leaderboard persistence against a single JSON file.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::leaderboard::{Leaderboard, LeaderboardError, LoadNotice, Loaded};

/// File used when no other path is configured.
pub const DEFAULT_LEADERBOARD_PATH: &str = "leaderboard.txt";

/// Reads and rewrites the leaderboard file.
///
/// The file is read in full on every load and rewritten in full on every
/// save. Nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct LeaderboardStore {
    path: PathBuf,
}

impl LeaderboardStore {
    /// Creates a store backed by the file at `path`. The file is not touched yet.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        info!("Creating LeaderboardStore");
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the leaderboard.
    ///
    /// A missing file is created holding `{}`. Content that is not UTF-8 or
    /// not a JSON object is overwritten with `{}`. Entries whose score is not
    /// an `i64` are left out and reported with [`LoadNotice::Skipped`]. Never
    /// fails: I/O problems are logged and produce an empty leaderboard with a
    /// [`LoadNotice::Unavailable`] notice.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Loaded {
        match self.try_load() {
            Ok(loaded) => loaded,
            Err(e) => {
                warn!(error = %e, "Leaderboard unavailable, using empty board");
                Loaded::new(Leaderboard::new(), Some(LoadNotice::Unavailable(e.message)))
            }
        }
    }

    fn try_load(&self) -> Result<Loaded, LeaderboardError> {
        let mut notice = None;
        if !self.path.exists() {
            info!("Leaderboard file missing, creating it");
            self.write(&Leaderboard::new())?;
            notice = Some(LoadNotice::Created);
        }

        let bytes = std::fs::read(&self.path)?;
        match Self::parse(bytes) {
            Ok((leaderboard, skipped)) => {
                debug!(
                    players = leaderboard.len(),
                    skipped = skipped.len(),
                    "Leaderboard loaded"
                );
                if !skipped.is_empty() {
                    notice = Some(LoadNotice::Skipped(skipped));
                }
                Ok(Loaded::new(leaderboard, notice))
            }
            Err(e) => {
                warn!(error = %e, "Leaderboard file corrupt, resetting");
                let leaderboard = Leaderboard::new();
                self.write(&leaderboard)?;
                Ok(Loaded::new(leaderboard, Some(LoadNotice::Reset)))
            }
        }
    }

    fn parse(bytes: Vec<u8>) -> Result<(Leaderboard, Vec<String>), LeaderboardError> {
        let text = String::from_utf8(bytes)?;
        Leaderboard::from_json(&text)
    }

    /// Adds `score` to `name`'s total and rewrites the whole file.
    ///
    /// The name is trimmed and lowercased before lookup. Returns the
    /// leaderboard as written.
    ///
    /// # Errors
    ///
    /// Returns [`LeaderboardError`] if the new total does not fit in an
    /// `i64`, leaving the file untouched, or if the file cannot be written.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn save(&self, name: &str, score: i64) -> Result<Leaderboard, LeaderboardError> {
        let mut leaderboard = self.load().into_leaderboard();
        let total = leaderboard.record(name, score)?;
        self.write(&leaderboard)?;
        info!(
            player = %Leaderboard::normalize_name(name),
            score,
            total,
            "Score saved"
        );
        Ok(leaderboard)
    }

    fn write(&self, leaderboard: &Leaderboard) -> Result<(), LeaderboardError> {
        let json = leaderboard.to_json()?;
        std::fs::write(&self.path, json).map_err(|e| LeaderboardError::write(&self.path, e))
    }
}

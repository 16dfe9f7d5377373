//! Leaderboard data types.

use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;
use serde_json::{Map, Value};
use std::io;
use tracing::{instrument, warn};

use crate::leaderboard::{LeaderboardError, LeaderboardErrorKind};

/// One player's cumulative score.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct LeaderboardEntry {
    name: String,
    score: i64,
}

/// Player name to cumulative score, in first-insertion order.
///
/// Names are unique and scores fit in an `i64`. Serialized as a single JSON
/// object, e.g. `{"ann": 8, "bob": -1}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Creates an empty leaderboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes a player name: surrounding whitespace trimmed, lowercased.
    pub fn normalize_name(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Adds `score` to the player's total, inserting them if new.
    ///
    /// The name is normalized first. Returns the new total.
    ///
    /// # Errors
    ///
    /// Returns a [`LeaderboardErrorKind::ScoreOverflow`] error, leaving the
    /// total unchanged, if the sum does not fit in an `i64`.
    #[instrument(skip(self))]
    pub fn record(&mut self, name: &str, score: i64) -> Result<i64, LeaderboardError> {
        let name = Self::normalize_name(name);
        match self.entries.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => {
                let total = entry.score;
                entry.score = total
                    .checked_add(score)
                    .ok_or_else(|| LeaderboardError::score_overflow(&name, total, score))?;
                Ok(entry.score)
            }
            None => {
                self.entries.push(LeaderboardEntry::new(name, score));
                Ok(score)
            }
        }
    }

    /// Looks up a player's score by (normalized) name.
    pub fn score(&self, name: &str) -> Option<i64> {
        let name = Self::normalize_name(name);
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.score)
    }

    /// Entries in stored order.
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nobody has saved a score yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parses the JSON object stored in the leaderboard file.
    ///
    /// Entries whose value is not an integer in `i64` range are left out and
    /// their names returned alongside the leaderboard; the rest are kept.
    ///
    /// # Errors
    ///
    /// Returns a [`LeaderboardErrorKind::Parse`] error unless the text is a
    /// JSON object.
    #[instrument(skip(text))]
    pub fn from_json(text: &str) -> Result<(Self, Vec<String>), LeaderboardError> {
        let object: Map<String, Value> = serde_json::from_str(text)?;
        let mut entries = Vec::with_capacity(object.len());
        let mut skipped = Vec::new();
        for (name, value) in object {
            match value.as_i64() {
                Some(score) => entries.push(LeaderboardEntry::new(name, score)),
                None => {
                    warn!(player = %name, value = %value, "Skipping score that is not an i64");
                    skipped.push(name);
                }
            }
        }
        Ok((Self { entries }, skipped))
    }

    /// Serializes to the JSON object stored in the leaderboard file, spaced
    /// as `{"ann": 8, "bob": -1}` with non-ASCII names written as `\uXXXX`.
    ///
    /// # Errors
    ///
    /// Returns a [`LeaderboardErrorKind::Write`] error if encoding fails.
    pub fn to_json(&self) -> Result<String, LeaderboardError> {
        let object: Map<String, Value> = self
            .entries
            .iter()
            .map(|entry| (entry.name.clone(), Value::from(entry.score)))
            .collect();
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, SpacedAsciiFormatter);
        object.serialize(&mut serializer).map_err(|e| {
            LeaderboardError::new(
                LeaderboardErrorKind::Write,
                format!("Could not encode leaderboard: {}", e),
            )
        })?;
        // The formatter only emits ASCII.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// JSON layout with `", "` between items, `": "` after keys and only ASCII
/// output, so files match those written by other tools using those defaults.
struct SpacedAsciiFormatter;

impl serde_json::ser::Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if c.is_ascii() {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const RULE: &str = "--------------------";
        writeln!(f)?;
        writeln!(f, "LEADERBOARD")?;
        writeln!(f, "{:<10} {:<10}", "Name", "Score")?;
        writeln!(f, "{RULE}")?;
        if self.entries.is_empty() {
            writeln!(f, "No leaders in board yet")?;
        } else {
            for entry in &self.entries {
                writeln!(f, "{:<10} {:<10}", entry.name, entry.score)?;
            }
        }
        write!(f, "{RULE}")
    }
}

/// Something the user should be told about how the leaderboard was loaded.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum LoadNotice {
    /// The file did not exist and an empty one was written.
    #[display("Leaderboard does not exist. Creating a new leaderboard.")]
    Created,
    /// The file could not be parsed and was reset to empty.
    #[display("Leaderboard was unreadable and has been reset.")]
    Reset,
    /// The file could not be read or written at all.
    #[display("Leaderboard is unavailable: {}", _0)]
    Unavailable(String),
    /// Some scores were not whole numbers in range and were left out. They
    /// are dropped from the file on the next save.
    #[display("Ignored unreadable scores for: {}", _0.join(", "))]
    Skipped(Vec<String>),
}

/// Result of loading the leaderboard file.
#[derive(Debug, Clone, Getters, new)]
pub struct Loaded {
    leaderboard: Leaderboard,
    notice: Option<LoadNotice>,
}

impl Loaded {
    /// Returns the leaderboard, dropping any notice.
    pub fn into_leaderboard(self) -> Leaderboard {
        self.leaderboard
    }
}

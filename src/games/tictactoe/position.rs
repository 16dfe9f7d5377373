//! Board coordinates and the 1-9 numbering shown to the player.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A (row, column) coordinate on the board, both in `0..3`.
///
/// Players refer to squares by number, counting left to right and top to
/// bottom:
///
/// ```text
/// 1  2  3
/// 4  5  6
/// 7  8  9
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Centre square (choice 5).
    pub const CENTER: Position = Position { row: 1, col: 1 };

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ];

    /// Creates a position from row and column, `None` if either is out of range.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self { row, col })
    }

    /// Maps a player's 1-9 choice onto the board.
    #[instrument]
    pub fn from_choice(choice: u32) -> Option<Self> {
        if !(1..=9).contains(&choice) {
            return None;
        }
        let index = (choice - 1) as usize;
        Some(Self {
            row: index / 3,
            col: index % 3,
        })
    }

    /// The 1-9 number a player types to pick this square.
    pub fn choice(self) -> u32 {
        (self.row * 3 + self.col + 1) as u32
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (row {}, col {})", self.choice(), self.row, self.col)
    }
}

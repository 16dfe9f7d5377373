//! Core domain types for noughts and crosses.

use super::action::MoveError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// Crosses, played by the human (moves first).
    X,
    /// Noughts, played by the computer.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Square holds a mark. Never changes afterwards.
    Occupied(Mark),
}

impl Square {
    /// Single character used when drawing the board.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(Mark::X) => 'X',
            Square::Occupied(Mark::O) => 'O',
        }
    }
}

/// 3x3 board, indexed by row then column.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    rows: [[Square; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from rows of squares.
    pub fn from_rows(rows: [[Square; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.rows[pos.row()][pos.col()]
    }

    /// Places a mark on an empty square.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the square already holds a mark.
    #[instrument(skip(self), fields(position = %pos))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        let square = &mut self.rows[pos.row()][pos.col()];
        if *square != Square::Empty {
            return Err(MoveError::SquareOccupied(pos));
        }
        *square = Square::Occupied(mark);
        Ok(())
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Square; 3]; 3] {
        &self.rows
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Number of marks placed so far.
    pub fn marks_placed(&self) -> usize {
        9 - self.empty_positions().len()
    }
}

const BORDER: &str = "-------------";

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{BORDER}")?;
        for row in &self.rows {
            write!(f, "| ")?;
            for square in row {
                write!(f, "{} | ", square.symbol())?;
            }
            writeln!(f)?;
            writeln!(f, "{BORDER}")?;
        }
        Ok(())
    }
}

//! Win detection logic.

use super::super::{Board, Mark, Position, Square};
use tracing::instrument;

/// Every line of three, as (row, col) pairs: rows, columns, then diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks whether `mark` fills any row, column or diagonal.
#[instrument(skip(board))]
pub fn check_win(board: &Board, mark: Mark) -> bool {
    let rows = board.rows();
    LINES.iter().any(|line| {
        line.iter()
            .all(|&(row, col)| rows[row][col] == Square::Occupied(mark))
    })
}

/// Positions of the first complete line held by `mark`.
pub fn winning_line(board: &Board, mark: Mark) -> Option<[Position; 3]> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line.map(|(row, col)| Position::new(row, col));
        let positions = [a?, b?, c?];
        positions
            .iter()
            .all(|pos| board.get(*pos) == Square::Occupied(mark))
            .then_some(positions)
    })
}

//! Draw detection logic.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (no empty squares).
///
/// This does not look for a winner. A full board can also hold a winning
/// line, so callers check [`check_win`](super::check_win) first.
#[instrument(skip(board))]
pub fn check_draw(board: &Board) -> bool {
    board
        .rows()
        .iter()
        .flatten()
        .all(|square| *square != Square::Empty)
}

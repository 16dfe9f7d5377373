//! Move providers for the two sides of a match.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::{HUMAN_PROMPT, HumanPlayer, RetryReason, parse_move};

use crate::console::Console;
use crate::games::tictactoe::{Board, GameError, Position};
use std::io::{BufRead, Write};

/// Outcome of asking a player for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMove {
    /// An empty square to play on.
    Place(Position),
    /// The input was unusable; ask again without using up the turn.
    Retry(RetryReason),
}

/// Trait for anything that can pick squares on a board.
pub trait Player {
    /// Asks the player for their next move.
    ///
    /// A returned [`PlayerMove::Place`] always names an empty square.
    fn request_move<R: BufRead, W: Write>(
        &mut self,
        board: &Board,
        console: &mut Console<R, W>,
    ) -> Result<PlayerMove, GameError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

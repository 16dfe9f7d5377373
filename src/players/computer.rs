//! Computer opponent that plays a uniformly random empty square.

use super::{Player, PlayerMove};
use crate::console::Console;
use crate::games::tictactoe::{Board, GameError, Position};
use rand::Rng;
use rand::seq::SliceRandom;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Random computer opponent.
///
/// The generator is owned by the player so games can be replayed from a
/// seed.
#[derive(Debug)]
pub struct ComputerPlayer<G> {
    name: String,
    rng: G,
}

impl<G: Rng> ComputerPlayer<G> {
    /// Creates a computer player drawing from `rng`.
    pub fn new(name: impl Into<String>, rng: G) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }

    /// Picks an empty square uniformly at random.
    ///
    /// Returns `None` only when the board is full.
    #[instrument(skip_all)]
    pub fn choose_move(&mut self, board: &Board) -> Option<Position> {
        let choice = board.empty_positions().choose(&mut self.rng).copied();
        debug!(position = ?choice, "Computer chose square");
        choice
    }
}

impl<G: Rng> Player for ComputerPlayer<G> {
    fn request_move<R: BufRead, W: Write>(
        &mut self,
        board: &Board,
        _console: &mut Console<R, W>,
    ) -> Result<PlayerMove, GameError> {
        self.choose_move(board)
            .map(PlayerMove::Place)
            .ok_or(GameError::NoMovesLeft)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

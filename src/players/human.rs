//! Human player reading square numbers from the console.

use super::{Player, PlayerMove};
use crate::console::Console;
use crate::games::tictactoe::{Board, GameError, Position};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Prompt showing the square numbering next to the question.
pub const HUMAN_PROMPT: &str = "
                       1  2  3
                       4  5  6
   Choose your square: 7  8  9 : ";

/// Why a line of input did not produce a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RetryReason {
    /// Input was not a plain non-negative number.
    #[display("Invalid Input. Enter a Number.")]
    NotANumber,
    /// Number outside 1-9. Saturates at `u32::MAX` for huge inputs.
    #[display("Invalid Input. Please enter number between (1-9)")]
    OutOfRange(u32),
    /// Square already holds a mark.
    #[display("Please choose an empty space.")]
    Occupied(Position),
}

/// Parses one line of player input against the current board.
#[instrument(skip(board))]
pub fn parse_move(input: &str, board: &Board) -> PlayerMove {
    let input = input.trim();
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return PlayerMove::Retry(RetryReason::NotANumber);
    }

    let choice = input.parse::<u32>().unwrap_or(u32::MAX);
    let Some(position) = Position::from_choice(choice) else {
        return PlayerMove::Retry(RetryReason::OutOfRange(choice));
    };

    if !board.is_empty(position) {
        return PlayerMove::Retry(RetryReason::Occupied(position));
    }

    PlayerMove::Place(position)
}

/// Human player using console input.
#[derive(Debug, Clone, derive_new::new)]
pub struct HumanPlayer {
    #[new(into)]
    name: String,
}

impl Player for HumanPlayer {
    #[instrument(skip_all, fields(player = %self.name))]
    fn request_move<R: BufRead, W: Write>(
        &mut self,
        board: &Board,
        console: &mut Console<R, W>,
    ) -> Result<PlayerMove, GameError> {
        let line = console.ask(HUMAN_PROMPT)?.ok_or(GameError::InputClosed)?;
        let request = parse_move(&line, board);
        if let PlayerMove::Retry(reason) = request {
            debug!(?reason, "Rejected player input");
            console.say(reason)?;
        }
        Ok(request)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

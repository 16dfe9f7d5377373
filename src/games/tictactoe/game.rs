//! Match state machine: human (X) against computer (O).

use super::rules::{check_draw, check_win, winning_line};
use super::{Board, GameError, Mark, MoveError, Position};
use crate::console::Console;
use crate::players::{Player, PlayerMove};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Mark played by the human. The human always moves first.
pub const PLAYER_MARK: Mark = Mark::X;

/// Mark played by the computer.
pub const COMPUTER_MARK: Mark = PLAYER_MARK.opponent();

const WELCOME: &str = "Welcome to the 'Unbeatable Noughts and Crosses' game.\n\
                       The board layout is shown below:";
const WELCOME_HINT: &str =
    "When prompted, enter the number corresponding to the square you want.";

/// Terminal outcome of a match, seen from the human's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum MatchResult {
    /// The human completed a line.
    PlayerWin,
    /// The computer completed a line.
    ComputerWin,
    /// The board filled up with no line for the last mover.
    Draw,
}

impl MatchResult {
    /// Leaderboard points for this result.
    pub fn score(self) -> i64 {
        match self {
            Self::PlayerWin => 1,
            Self::Draw => 0,
            Self::ComputerWin => -1,
        }
    }

    /// Message announced at the end of the match.
    pub fn message(self) -> &'static str {
        match self {
            Self::PlayerWin => "Congratulation, You won.",
            Self::ComputerWin => "Sorry you lost.",
            Self::Draw => "It's a draw.",
        }
    }
}

/// Where the match currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// Waiting on the human's mark.
    AwaitingPlayerMove,
    /// The human moved without ending the game; the computer is next.
    ComputerToMove,
    /// The game is over.
    Finished(MatchResult),
}

/// A single match.
///
/// Each round the human moves first. After every mark the board is checked
/// for a win by that mark, then for a full board, before the other side is
/// asked to move. A match therefore ends after at most 9 marks.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    phase: TurnPhase,
}

impl Game {
    /// Creates a new game on an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: TurnPhase::AwaitingPlayerMove,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Returns the result once the game is over.
    pub fn result(&self) -> Option<MatchResult> {
        match self.phase {
            TurnPhase::Finished(result) => Some(result),
            _ => None,
        }
    }

    /// Applies the human's mark.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if it is not the human's turn or the square is taken.
    #[instrument(skip(self), fields(position = %pos))]
    pub fn play_player_move(&mut self, pos: Position) -> Result<TurnPhase, MoveError> {
        self.place(pos, PLAYER_MARK, TurnPhase::AwaitingPlayerMove)
    }

    /// Applies the computer's mark.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if it is not the computer's turn or the square is taken.
    #[instrument(skip(self), fields(position = %pos))]
    pub fn play_computer_move(&mut self, pos: Position) -> Result<TurnPhase, MoveError> {
        self.place(pos, COMPUTER_MARK, TurnPhase::ComputerToMove)
    }

    fn place(
        &mut self,
        pos: Position,
        mark: Mark,
        expected: TurnPhase,
    ) -> Result<TurnPhase, MoveError> {
        if let TurnPhase::Finished(_) = self.phase {
            return Err(MoveError::GameOver);
        }
        if self.phase != expected {
            return Err(MoveError::WrongTurn(mark));
        }

        self.board.place(pos, mark)?;
        self.phase = self.evaluate(mark);
        debug!(%mark, phase = ?self.phase, marks = self.board.marks_placed(), "Mark placed");
        Ok(self.phase)
    }

    /// Phase after `mark` was just placed. Win is checked before draw.
    fn evaluate(&self, mark: Mark) -> TurnPhase {
        if check_win(&self.board, mark) {
            info!(%mark, line = ?winning_line(&self.board, mark), "Line completed");
            return TurnPhase::Finished(match mark {
                Mark::X => MatchResult::PlayerWin,
                Mark::O => MatchResult::ComputerWin,
            });
        }
        if check_draw(&self.board) {
            return TurnPhase::Finished(MatchResult::Draw);
        }
        match mark {
            Mark::X => TurnPhase::ComputerToMove,
            Mark::O => TurnPhase::AwaitingPlayerMove,
        }
    }

    /// Runs the match to completion on the console.
    ///
    /// Rejected human input is re-prompted without using up the turn.
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] if input runs out or the console fails.
    #[instrument(skip_all, fields(human = human.name(), computer = computer.name()))]
    pub fn play<H, C, R, W>(
        &mut self,
        human: &mut H,
        computer: &mut C,
        console: &mut Console<R, W>,
    ) -> Result<MatchResult, GameError>
    where
        H: Player,
        C: Player,
        R: BufRead,
        W: Write,
    {
        info!("Starting match");
        console.say(WELCOME)?;
        console.say(&self.board)?;
        console.say(WELCOME_HINT)?;

        loop {
            match self.phase {
                TurnPhase::AwaitingPlayerMove => {
                    let PlayerMove::Place(pos) = human.request_move(&self.board, console)? else {
                        continue;
                    };
                    self.play_player_move(pos)?;
                    console.say(&self.board)?;
                }
                TurnPhase::ComputerToMove => {
                    let PlayerMove::Place(pos) = computer.request_move(&self.board, console)?
                    else {
                        continue;
                    };
                    self.play_computer_move(pos)?;
                    console.say("Computer's move is")?;
                    console.say(&self.board)?;
                }
                TurnPhase::Finished(result) => {
                    info!(%result, marks = self.board.marks_placed(), "Match finished");
                    console.say(result.message())?;
                    console.say(&self.board)?;
                    return Ok(result);
                }
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

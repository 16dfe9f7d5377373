//! Noughts and crosses: board, rules and the match state machine.

mod action;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::{GameError, MoveError};
pub use game::{COMPUTER_MARK, Game, MatchResult, PLAYER_MARK, TurnPhase};
pub use position::Position;
pub use types::{Board, Mark, Square};

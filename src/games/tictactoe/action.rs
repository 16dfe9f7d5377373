//! Errors raised while placing marks or running a match.

use super::{Mark, Position};

/// Error that can occur when applying a move to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this mark's turn.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(#[error(not(source))] Mark),
}

/// Error that ends a match early.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// The player's input stream ended mid-game.
    #[display("Input closed before the game finished")]
    InputClosed,

    /// The computer was asked to move on a full board.
    #[display("No empty squares left for the computer")]
    NoMovesLeft,

    /// A move could not be applied.
    #[display("Illegal move: {}", _0)]
    #[from]
    Move(MoveError),

    /// Reading input or writing output failed.
    #[display("Console I/O failed: {}", _0)]
    #[from]
    Io(std::io::Error),
}

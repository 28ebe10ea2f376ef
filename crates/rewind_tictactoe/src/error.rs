//! Errors raised by game operations.

use super::position::Position;
use super::types::Player;

/// Reasons a game operation was not applied.
///
/// Every rejection leaves the [`GameState`](crate::GameState) untouched, so
/// callers that want the permissive "ignore bad clicks" behaviour can simply
/// drop the error.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The active board already has a winner.
    #[display("Game is already won by {}", _0)]
    GameDecided(Player),

    /// A raw board index outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// A jump target past the end of the history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// A board description that could not be parsed.
    #[display("Invalid board: {}", _0)]
    InvalidBoard(String),
}

impl std::error::Error for GameError {}

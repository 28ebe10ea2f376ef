//! Rewind tic-tac-toe - game state with move history and time travel.
//!
//! The crate owns the authoritative game model and nothing else:
//!
//! - **Board**: 9 squares in row-major order, addressed by [`Position`]
//! - **Rules**: pure win and draw detection over a single board
//! - **GameState**: snapshot history, active step and turn indicator
//! - **Contracts/Invariants**: the pre- and postconditions of a move
//!
//! Rendering lives elsewhere; a presentation layer reads snapshots through
//! [`GameState`] accessors and mutates only through
//! [`GameState::apply_move`] and [`GameState::jump_to`].
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, Player, Position};
//!
//! let mut game = GameState::new();
//! game.apply_move(Position::Center)?;
//! game.apply_move(Position::TopLeft)?;
//! assert_eq!(game.history_len(), 3);
//!
//! // Rewind, then branch: the old move 2 is discarded.
//! game.jump_to(1)?;
//! game.apply_move(Position::BottomRight)?;
//! assert_eq!(game.history_len(), 3);
//! assert_eq!(game.to_move(), Player::X);
//! # Ok::<(), rewind_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod error;
mod game;
mod invariants;
mod position;
mod rules;
mod types;

pub use action::Move;
pub use contracts::{Contract, MoveContract};
pub use error::GameError;
pub use game::{GameState, GameStatus};
pub use invariants::{
    GameInvariants, HistoryConsistent, Invariant, InvariantSet, InvariantViolation, StepInBounds,
    TurnParity,
};
pub use position::Position;
pub use rules::{LINES, is_draw, is_full, winner};
pub use types::{Board, Player, Square};

//! Game state machine with snapshot history.
//!
//! The history is an append/truncate log of boards. `step_number` selects
//! the active snapshot; rewinding only moves the pointer, and the forward
//! branch is dropped the next time a move is applied.

use super::action::Move;
use super::contracts::{Contract, MoveContract};
use super::error::GameError;
use super::position::Position;
use super::rules::{is_draw, winner};
use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current status of the active board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// No winner yet, and empty squares remain.
    #[display("Next player: {}", _0)]
    InProgress(Player),
    /// A player completed a line.
    #[display("Winner: {}", _0)]
    Won(Player),
    /// Full board, no line.
    #[display("Draw")]
    Draw,
}

/// Complete game state: every snapshot plus the active step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Board after each move; entry 0 is the empty board.
    pub(crate) history: Vec<Board>,
    /// Index of the active snapshot.
    pub(crate) step_number: usize,
    /// Cached turn indicator, equal to `step_number % 2 == 0`.
    pub(crate) x_is_next: bool,
}

impl GameState {
    /// Creates a new game: one empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            step_number: 0,
            x_is_next: true,
        }
    }

    /// The board at the active step.
    pub fn active_board(&self) -> &Board {
        &self.history[self.step_number]
    }

    /// All snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Number of snapshots, including the initial empty board.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Index of the active snapshot.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Whether X places the next mark.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// The player who places the next mark.
    pub fn to_move(&self) -> Player {
        if self.x_is_next { Player::X } else { Player::O }
    }

    /// Winner of the active board, if any.
    pub fn winner(&self) -> Option<Player> {
        winner(self.active_board())
    }

    /// Status of the active board.
    pub fn status(&self) -> GameStatus {
        let board = self.active_board();
        if let Some(player) = winner(board) {
            GameStatus::Won(player)
        } else if is_draw(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.to_move())
        }
    }

    /// Empty squares on the active board, or none once the game is won.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.winner().is_some() {
            return Vec::new();
        }
        Position::valid_moves(self.active_board())
    }

    /// The move that produced snapshot `step`.
    ///
    /// Step 0 is the empty board and has no move.
    pub fn move_at(&self, step: usize) -> Option<Move> {
        let before = self.history.get(step.checked_sub(1)?)?;
        let after = self.history.get(step)?;
        Move::between(before, after)
    }

    /// Places the current player's mark at `position`.
    ///
    /// Rejected without touching the state when the active board already
    /// has a winner or the square is occupied. On success, any history past
    /// the active step is discarded before the new snapshot is appended.
    /// Returns the player who moved.
    #[instrument(skip(self), fields(step = self.step_number, player = %self.to_move()))]
    pub fn apply_move(&mut self, position: Position) -> Result<Player, GameError> {
        if let Err(e) = MoveContract::pre(self, &position) {
            debug!(error = %e, "Move ignored");
            return Err(e);
        }

        let player = self.to_move();
        let mut board = self.active_board().clone();
        board.set(position, Square::Occupied(player));

        let discarded = self.history.len() - (self.step_number + 1);
        self.history.truncate(self.step_number + 1);
        self.history.push(board);
        self.step_number = self.history.len() - 1;
        self.x_is_next = !self.x_is_next;

        debug!(
            discarded,
            step = self.step_number,
            "Move applied"
        );
        debug_assert!(
            MoveContract::post(self, &position).is_ok(),
            "Game invariants violated after move"
        );

        Ok(player)
    }

    /// Places a mark by raw board index (0-8).
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> Result<Player, GameError> {
        let position = Position::from_index(index).ok_or(GameError::OutOfBounds(index))?;
        self.apply_move(position)
    }

    /// Makes `step` the active snapshot. History is left intact.
    ///
    /// Steps past the end of the history are rejected and leave the state
    /// unchanged.
    #[instrument(skip(self), fields(from = self.step_number))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        let len = self.history.len();
        if step >= len {
            debug!(step, len, "Jump ignored, target out of range");
            return Err(GameError::StepOutOfRange { step, len });
        }

        self.step_number = step;
        self.x_is_next = step % 2 == 0;
        debug!(step, "Jumped");
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

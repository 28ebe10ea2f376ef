//! Non-interactive replay of moves and jumps.
//!
//! Each token is applied to a fresh [`GameState`] in order. Rejected moves
//! and jumps are recorded in the report rather than aborting the replay, the
//! same way the TUI ignores them.

use derive_more::{Display, Error};
use rewind_tictactoe::{Board, GameState, GameStatus, Position};
use serde::Serialize;
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// One replay token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReplayStep {
    /// Place the current player's mark.
    Place(Position),
    /// Make this history entry active.
    Jump(usize),
}

impl FromStr for ReplayStep {
    type Err = ReplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(step) = s.strip_prefix('@') {
            return step
                .parse()
                .map(ReplayStep::Jump)
                .map_err(|_| ReplayError::new(format!("Invalid jump target: {:?}", s)));
        }
        Position::from_label_or_number(s)
            .map(ReplayStep::Place)
            .ok_or_else(|| ReplayError::new(format!("Invalid position: {:?}", s)))
    }
}

impl std::fmt::Display for ReplayStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplayStep::Place(position) => write!(f, "play {}", position.label()),
            ReplayStep::Jump(step) => write!(f, "jump to step {}", step),
        }
    }
}

/// Result of applying one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayEvent {
    /// The token that was applied.
    pub step: ReplayStep,
    /// Why the token was ignored, or `None` if it was applied.
    pub ignored: Option<String>,
    /// Active step afterwards.
    pub step_number: usize,
    /// Active board afterwards.
    pub board: Board,
}

/// Everything a replay produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// One event per token, in order.
    pub events: Vec<ReplayEvent>,
    /// Status of the final active board.
    pub status: GameStatus,
    /// Final game state, including any history past the active step.
    pub game: GameState,
}

impl std::fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, event) in self.events.iter().enumerate() {
            write!(f, "[{}] {}", idx + 1, event.step)?;
            if let Some(reason) = &event.ignored {
                write!(f, " (ignored: {})", reason)?;
            }
            writeln!(f, " -> step {}", event.step_number)?;
            writeln!(f, "{}\n", event.board)?;
        }
        write!(f, "{}", self.status)
    }
}

/// Parses and applies `tokens` to a new game.
///
/// # Errors
///
/// Returns [`ReplayError`] if any token cannot be parsed. Parsing happens
/// before anything is applied.
#[instrument(skip_all, fields(tokens = tokens.len()))]
pub fn replay<S: AsRef<str>>(tokens: &[S]) -> Result<ReplayReport, ReplayError> {
    let steps = tokens
        .iter()
        .map(|t| t.as_ref().parse::<ReplayStep>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut game = GameState::new();
    let mut events = Vec::with_capacity(steps.len());
    for step in steps {
        let outcome = match step {
            ReplayStep::Place(position) => game.apply_move(position).map(|_| ()),
            ReplayStep::Jump(target) => game.jump_to(target),
        };
        let ignored = outcome.err().map(|e| e.to_string());
        debug!(%step, ignored = ?ignored, "Replay step");
        events.push(ReplayEvent {
            step,
            ignored,
            step_number: game.step_number(),
            board: game.active_board().clone(),
        });
    }

    let status = game.status();
    info!(%status, history = game.history_len(), "Replay finished");
    Ok(ReplayReport {
        events,
        status,
        game,
    })
}

/// Replay error.
#[derive(Debug, Clone, Display, Error)]
#[display("Replay error: {} at {}:{}", message, file, line)]
pub struct ReplayError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ReplayError {
    /// Creates a new replay error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

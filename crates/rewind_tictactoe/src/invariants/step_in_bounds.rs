//! Step bounds invariant: the active step points into the history.

use super::super::GameState;
use super::Invariant;

/// Invariant: `0 <= step_number < history.len()`, so the history is never
/// empty.
pub struct StepInBounds;

impl Invariant<GameState> for StepInBounds {
    fn holds(game: &GameState) -> bool {
        game.step_number() < game.history().len()
    }

    fn description() -> &'static str {
        "Active step lies within the history"
    }
}

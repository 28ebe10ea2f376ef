//! Turn parity invariant: X moves on even steps, O on odd steps.

use super::super::GameState;
use super::Invariant;

/// Invariant: the cached `x_is_next` flag equals `step_number` being even.
pub struct TurnParity;

impl Invariant<GameState> for TurnParity {
    fn holds(game: &GameState) -> bool {
        game.x_is_next == (game.step_number % 2 == 0)
    }

    fn description() -> &'static str {
        "X is next exactly on even steps"
    }
}

//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::error::GameError;
use super::game::GameState;
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::position::Position;
use super::types::{Player, Square};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(state, action)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions on the state produced by the action.
    fn post(state: &S, action: &A) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The active board has no winner yet.
pub struct GameUndecided;

impl GameUndecided {
    /// Fails with the winner when the active board is decided.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), GameError> {
        match game.winner() {
            Some(player) => Err(GameError::GameDecided(player)),
            None => Ok(()),
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails when `position` already holds a mark on the active board.
    #[instrument(skip(game))]
    pub fn check(position: Position, game: &GameState) -> Result<(), GameError> {
        if game.active_board().is_empty(position) {
            Ok(())
        } else {
            Err(GameError::SquareOccupied(position))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Preconditions, checked in order:
/// - Active board has no winner
/// - Square must be empty
///
/// Postconditions:
/// - The square holds the mark of the player who just moved
/// - All [`GameInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    fn pre(game: &GameState, position: &Position) -> Result<(), GameError> {
        GameUndecided::check(game)?;
        SquareIsEmpty::check(*position, game)?;
        Ok(())
    }

    fn post(game: &GameState, position: &Position) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = GameInvariants::check_all(game).err().unwrap_or_default();

        let mover = game
            .step_number()
            .checked_sub(1)
            .map(Player::for_step);
        let placed = mover.is_some_and(|player| {
            game.active_board().get(*position) == Square::Occupied(player)
        });
        if !placed {
            violations.push(InvariantViolation::new(
                "Active board holds the mover's mark at the played position",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Move postcondition failed");
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_empty_square() {
        let game = GameState::new();
        assert!(MoveContract::pre(&game, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut game = GameState::new();
        game.apply_move(Position::Center).unwrap();
        assert_eq!(
            MoveContract::pre(&game, &Position::Center),
            Err(GameError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_winner_checked_before_occupancy() {
        let mut game = GameState::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ] {
            game.apply_move(pos).unwrap();
        }
        // Occupied and decided: the decided board is reported.
        assert_eq!(
            MoveContract::pre(&game, &Position::TopLeft),
            Err(GameError::GameDecided(Player::X))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let mut game = GameState::new();
        game.apply_move(Position::Center).unwrap();
        assert!(MoveContract::post(&game, &Position::Center).is_ok());
    }

    #[test]
    fn test_postcondition_detects_wrong_square() {
        let mut game = GameState::new();
        game.apply_move(Position::Center).unwrap();
        assert!(MoveContract::post(&game, &Position::TopLeft).is_err());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let mut game = GameState::new();
        game.apply_move(Position::Center).unwrap();
        game.history[1].set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(MoveContract::post(&game, &Position::Center).is_err());
    }
}

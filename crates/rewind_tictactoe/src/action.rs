//! First-class move type for tic-tac-toe.
//!
//! The history stores board snapshots, not moves. A [`Move`] is recovered
//! by comparing two consecutive snapshots, which is how the move list gets
//! its labels.

use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Recovers the move that turned `before` into `after`.
    ///
    /// Returns `None` unless exactly one square changed, and it changed
    /// from empty to a mark.
    #[instrument(skip(before, after))]
    pub fn between(before: &Board, after: &Board) -> Option<Self> {
        let mut changed = Position::ALL
            .iter()
            .copied()
            .filter(|pos| before.get(*pos) != after.get(*pos));

        let position = changed.next()?;
        if changed.next().is_some() {
            return None;
        }

        match (before.get(position), after.get(position)) {
            (Square::Empty, Square::Occupied(player)) => Some(Self::new(player, position)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.player, self.position.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_single_placement() {
        let before: Board = "X________".parse().unwrap();
        let after: Board = "X___O____".parse().unwrap();
        assert_eq!(
            Move::between(&before, &after),
            Some(Move::new(Player::O, Position::Center))
        );
    }

    #[test]
    fn test_between_rejects_identical_boards() {
        let board: Board = "X________".parse().unwrap();
        assert_eq!(Move::between(&board, &board), None);
    }

    #[test]
    fn test_between_rejects_two_changes() {
        let before = Board::new();
        let after: Board = "XO_______".parse().unwrap();
        assert_eq!(Move::between(&before, &after), None);
    }

    #[test]
    fn test_between_rejects_overwrite() {
        let before: Board = "X________".parse().unwrap();
        let after: Board = "O________".parse().unwrap();
        assert_eq!(Move::between(&before, &after), None);
    }

    #[test]
    fn test_display() {
        let mov = Move::new(Player::X, Position::TopRight);
        assert_eq!(mov.to_string(), "X at Top-right");
    }
}

//! History consistency invariant: each snapshot adds exactly one mark.

use super::super::{Board, GameState, Move, Player};
use super::Invariant;

/// Invariant: the history is a legal sequence of placements.
///
/// Entry 0 is the empty board, and entry `n` differs from entry `n - 1`
/// by exactly one newly placed mark belonging to the player whose turn
/// it was (X for odd `n`, O for even `n`).
pub struct HistoryConsistent;

impl Invariant<GameState> for HistoryConsistent {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        let Some(first) = history.first() else {
            return false;
        };
        if *first != Board::new() {
            return false;
        }

        history
            .windows(2)
            .enumerate()
            .all(|(idx, pair)| match Move::between(&pair[0], &pair[1]) {
                Some(mov) => mov.player == Player::for_step(idx),
                None => false,
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds one mark for the player to move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistent::holds(&GameState::new()));
    }

    #[test]
    fn test_branch_discard_holds() {
        let mut game = GameState::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            game.apply_move(pos).unwrap();
        }
        game.jump_to(1).unwrap();
        game.apply_move(Position::BottomLeft).unwrap();
        assert!(HistoryConsistent::holds(&game));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = GameState::new();
        game.apply_move(Position::TopLeft).unwrap();
        let mut board = game.history[1].clone();
        board.set(Position::Center, Square::Occupied(Player::X));
        game.history.push(board);
        assert!(!HistoryConsistent::holds(&game));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let mut game = GameState::new();
        game.history[0].set(Position::Center, Square::Occupied(Player::X));
        assert!(!HistoryConsistent::holds(&game));
    }
}

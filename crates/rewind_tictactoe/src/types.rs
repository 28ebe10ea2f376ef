//! Core domain types for tic-tac-toe.

use super::error::GameError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (moves on even steps).
    X,
    /// Player O (moves on odd steps).
    O,
}

impl Player {
    /// Returns the player whose turn it is at `step`.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Single-character rendering: `X`, `O` or `_`.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '_',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                write!(f, "{}", self.squares[row * 3 + col].symbol())?;
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Parses 9 characters in row-major order: `X`, `O`, and `_`, `.` or a space
/// for empty squares. Row separators `/` and newlines are skipped.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; 9];
        let mut len = 0;
        for ch in s.chars().filter(|c| *c != '/' && *c != '\n') {
            let square = match ch.to_ascii_uppercase() {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                '_' | '.' | ' ' => Square::Empty,
                other => {
                    return Err(GameError::InvalidBoard(format!(
                        "unexpected character {:?}",
                        other
                    )));
                }
            };
            if len == 9 {
                return Err(GameError::InvalidBoard(
                    "more than 9 squares".to_string(),
                ));
            }
            squares[len] = square;
            len += 1;
        }
        if len != 9 {
            return Err(GameError::InvalidBoard(format!(
                "expected 9 squares, found {}",
                len
            )));
        }
        Ok(Self { squares })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board() {
        let board: Board = "XX_/O._/__O".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::MiddleLeft), Square::Occupied(Player::O));
        assert_eq!(board.get(Position::Center), Square::Empty);
        assert_eq!(board.get(Position::BottomRight), Square::Occupied(Player::O));
        assert_eq!(Position::valid_moves(&board).len(), 5);
    }

    #[test]
    fn test_parse_rejects_short_input() {
        let err = "XXO".parse::<Board>().unwrap_err();
        assert!(matches!(err, GameError::InvalidBoard(_)));
    }

    #[test]
    fn test_parse_rejects_long_input() {
        assert!("XXOXXOXXOX".parse::<Board>().is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_mark() {
        assert!("XXOXZOXXO".parse::<Board>().is_err());
    }

    #[test]
    fn test_display_marks_empty_squares() {
        let board: Board = "X___O___X".parse().unwrap();
        assert_eq!(board.to_string(), "X|_|_\n-+-+-\n_|O|_\n-+-+-\n_|_|X");
    }

    #[test]
    fn test_player_for_step() {
        assert_eq!(Player::for_step(0), Player::X);
        assert_eq!(Player::for_step(1), Player::O);
        assert_eq!(Player::for_step(4), Player::X);
    }
}

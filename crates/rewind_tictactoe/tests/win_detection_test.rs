//! Tests for the win-detection rule.

use rewind_tictactoe::{Board, LINES, Player, Position, Square, is_draw, winner};

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

#[test]
fn test_row_zero_for_x() {
    assert_eq!(winner(&board("XXXOO____")), Some(Player::X));
}

#[test]
fn test_column_zero_for_x() {
    assert_eq!(winner(&board("XO_XO_X__")), Some(Player::X));
}

#[test]
fn test_main_diagonal_for_x() {
    assert_eq!(winner(&board("XOOOXOOOX")), Some(Player::X));
}

#[test]
fn test_every_line_is_detected_for_both_players() {
    for line in LINES {
        for player in [Player::X, Player::O] {
            let mut b = Board::new();
            for pos in line {
                b.set(pos, Square::Occupied(player));
            }
            assert_eq!(winner(&b), Some(player), "line {:?}", line);
        }
    }
}

#[test]
fn test_two_in_a_line_is_not_a_win() {
    for line in LINES {
        let mut b = Board::new();
        b.set(line[0], Square::Occupied(Player::O));
        b.set(line[1], Square::Occupied(Player::O));
        b.set(line[2], Square::Occupied(Player::X));
        assert_eq!(winner(&b), None, "line {:?}", line);
    }
}

#[test]
fn test_winner_is_deterministic_and_pure() {
    let b = board("XO_XO_X__");
    let copy = b.clone();
    let first = winner(&b);
    for _ in 0..10 {
        assert_eq!(winner(&b), first);
    }
    assert_eq!(b, copy);
}

#[test]
fn test_draw_reports_no_winner() {
    let b = board("XOXXOOOXX");
    assert_eq!(winner(&b), None);
    assert!(is_draw(&b));
}

#[test]
fn test_lines_scan_rows_then_columns_then_diagonals() {
    assert_eq!(
        LINES[0],
        [Position::TopLeft, Position::TopCenter, Position::TopRight]
    );
    assert_eq!(
        LINES[3],
        [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]
    );
    assert_eq!(
        LINES[7],
        [Position::TopRight, Position::Center, Position::BottomLeft]
    );
}

//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a single board.
//! Rules are separated from board storage and history so the state
//! machine and the presentation layer can call them on any snapshot.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, winner};

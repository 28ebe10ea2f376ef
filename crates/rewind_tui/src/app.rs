//! Application state and key handling.

use crate::input::{digit_position, move_cursor};
use crossterm::event::KeyCode;
use rewind_tictactoe::{GameState, Position};
use tracing::{debug, info, instrument};

/// Pane that receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys select an entry in the move list.
    Moves,
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppControl {
    /// Redraw and keep reading input.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// The [`GameState`] is only ever changed through `apply_move` and
/// `jump_to`; everything else here is view state.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
    notice: Option<String>,
    show_cell_numbers: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(show_cell_numbers: bool) -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_step: 0,
            notice: None,
            show_cell_numbers,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Square under the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Entry highlighted in the move list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Why the last input was ignored, if it was.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether empty squares show their 1-9 number.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Status line for the active board.
    pub fn status_line(&self) -> String {
        self.game.status().to_string()
    }

    /// Handles a single key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppControl {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return AppControl::Quit;
            }
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Char('[') => {
                if let Some(step) = self.game.step_number().checked_sub(1) {
                    self.jump(step);
                }
            }
            KeyCode::Char(']') => self.jump(self.game.step_number() + 1),
            KeyCode::Home => self.jump(0),
            KeyCode::End => self.jump(self.game.history_len() - 1),
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::Moves => self.handle_moves_key(key),
            },
        }
        AppControl::Continue
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.selected_step = self.game.step_number();
                Focus::Moves
            }
            Focus::Moves => Focus::Board,
        };
        debug!(focus = ?self.focus, "Focus changed");
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            other => {
                if let Some(position) = digit_position(other) {
                    self.cursor = position;
                    self.place(position);
                }
            }
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) {
        let last = self.game.history_len() - 1;
        match key {
            KeyCode::Up => self.selected_step = self.selected_step.saturating_sub(1),
            KeyCode::Down => self.selected_step = (self.selected_step + 1).min(last),
            KeyCode::Enter | KeyCode::Char(' ') => self.jump(self.selected_step),
            _ => {}
        }
    }

    fn place(&mut self, position: Position) {
        match self.game.apply_move(position) {
            Ok(player) => {
                debug!(%player, %position, "Move applied to UI state");
                self.selected_step = self.game.step_number();
                self.notice = None;
            }
            Err(e) => self.notice = Some(format!("Ignored: {}", e)),
        }
    }

    fn jump(&mut self, step: usize) {
        match self.game.jump_to(step) {
            Ok(()) => {
                self.selected_step = step;
                self.notice = None;
            }
            Err(e) => self.notice = Some(format!("Ignored: {}", e)),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(true)
    }
}

//! Move list rendering ("go to move" controls).

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use rewind_tictactoe::GameState;

/// Label for the history entry at `step`.
///
/// Step 0 is the game start; later steps name the move that produced them.
pub fn step_label(game: &GameState, step: usize) -> String {
    if step == 0 {
        return "Go to game start".to_string();
    }
    match game.move_at(step) {
        Some(mov) => format!("Go to move #{} ({})", step, mov),
        None => format!("Go to move #{}", step),
    }
}

/// Renders one entry per history snapshot; the active step is marked.
pub fn render_moves(f: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let items: Vec<ListItem> = (0..game.history_len())
        .map(|step| {
            let marker = if step == game.step_number() { "▶ " } else { "  " };
            let style = if step == game.step_number() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("{}{}", marker, step_label(game, step))).style(style)
        })
        .collect();

    let focused = app.focus() == Focus::Moves;
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title("Moves"),
        )
        .highlight_style(Style::default().bg(Color::White).fg(Color::Black));

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.selected_step()));
    }
    f.render_stateful_widget(list, area, &mut state);
}

//! Stateless UI rendering using ratatui.

mod board;
mod moves;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

pub use board::render_board;
pub use moves::{render_moves, step_label};

/// Draws the main UI: title, board and move list, status, help.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(13),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);
    render_board(f, body[0], app);
    render_moves(f, body[1], app);

    let status_text = match app.notice() {
        Some(notice) => format!("{}  ({})", app.status_line(), notice),
        None => app.status_line(),
    };
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new(
        "1-9/Enter: move | Tab: board/moves | [ ]: step | Home/End: start/latest | Q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 26)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_initial_state() {
        let screen = render(&App::default());
        assert!(screen.contains("Rewind - Tic Tac Toe"));
        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("Go to game start"));
        assert!(!screen.contains("Go to move #1"));
    }

    #[test]
    fn test_renders_winner_and_moves() {
        let mut app = App::default();
        for key in ['1', '5', '2', '7', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        let screen = render(&app);
        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("Go to move #5 (X at Top-right)"));
    }

    #[test]
    fn test_renders_ignored_notice() {
        let mut app = App::default();
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('5'));
        let screen = render(&app);
        assert!(screen.contains("Ignored: Square Center is already occupied"));
    }
}

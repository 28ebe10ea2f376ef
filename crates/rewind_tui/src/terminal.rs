//! Terminal setup and the interactive event loop.

use crate::app::{App, AppControl};
use crate::config::RewindConfig;
use crate::ui;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the user quits.
///
/// The terminal is restored even when the event loop fails.
#[instrument(skip_all)]
pub fn run_tui(config: &RewindConfig) -> Result<()> {
    info!("Starting rewind TUI");

    let mut terminal = setup_terminal().context("Failed to set up terminal")?;
    let app = App::new(*config.show_cell_numbers());
    let res = run_app(&mut terminal, app);
    restore_terminal(&mut terminal).context("Failed to restore terminal")?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// One transition per key press, then a full redraw.
fn run_app(terminal: &mut Tui, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key.code) == AppControl::Quit {
                info!(
                    history = app.game().history_len(),
                    step = app.game().step_number(),
                    "Leaving game"
                );
                return Ok(());
            }
        }
    }
}

//! Rewind tic-tac-toe - terminal front end.
//!
//! # Architecture
//!
//! - **App**: owns the [`GameState`](rewind_tictactoe::GameState) and the
//!   cursor/focus state of the UI; translates key presses into moves and
//!   jumps
//! - **UI**: stateless rendering of an [`App`] with ratatui
//! - **Replay**: drives the same game from command-line tokens
//! - **Config/Logging**: TOML configuration and tracing setup

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod replay;
mod terminal;
mod ui;

pub use app::{App, AppControl, Focus};
pub use cli::{Cli, Command};
pub use config::{ConfigError, RewindConfig};
pub use input::move_cursor;
pub use logging::{LogTarget, init_logging};
pub use replay::{ReplayError, ReplayEvent, ReplayReport, ReplayStep, replay};
pub use terminal::run_tui;
pub use ui::{draw, step_label};

//! Rewind - tic-tac-toe with jump-to-move.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rewind_tui::{Cli, Command, LogTarget, RewindConfig, init_logging, replay, run_tui};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = RewindConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            init_logging(&LogTarget::File(config.log_file().clone()), config.log_filter())?;
            run_tui(&config)
        }
        Command::Replay { steps, json } => {
            init_logging(&LogTarget::Stderr, config.log_filter())?;
            let report = replay(steps.as_slice())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }
            Ok(())
        }
    }
}

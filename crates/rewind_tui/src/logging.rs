//! Tracing subscriber setup.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to a file. Used while the TUI owns the terminal.
    File(PathBuf),
    /// Standard error, for the non-interactive commands.
    Stderr,
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`. If a global subscriber
/// is already installed it is kept and the new one is dropped.
pub fn init_logging(target: &LogTarget, default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .with_context(|| format!("Invalid log filter: {}", default_filter))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match target {
        LogTarget::File(path) => {
            let log_file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false)
                .try_init()
        }
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
    };

    if let Err(e) = installed {
        debug!(error = %e, "Tracing subscriber already installed, keeping it");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_keeps_first_subscriber() {
        assert!(init_logging(&LogTarget::Stderr, "info").is_ok());
        assert!(init_logging(&LogTarget::Stderr, "debug").is_ok());
    }

    #[test]
    fn test_log_file_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rewind.log");
        assert!(init_logging(&LogTarget::File(path.clone()), "info").is_ok());
        assert!(path.exists());
    }
}

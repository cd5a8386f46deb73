//! Tracing subscriber setup

use anyhow::{Context, Result, anyhow};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Where log lines go when no log file was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Stderr,
    /// Full-screen modes own the terminal, so logs are dropped
    Discard,
}

/// Filter used when `RUST_LOG` is not set
#[must_use]
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "word_unscramble=debug"
    } else {
        "word_unscramble=info"
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` overrides the default filter. A log file is appended to.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init_tracing(log_file: Option<&Path>, fallback: Fallback, verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let (writer, ansi) = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => match fallback {
            Fallback::Stderr => (BoxMakeWriter::new(std::io::stderr), true),
            Fallback::Discard => (BoxMakeWriter::new(std::io::sink), false),
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    tracing::trace!("tracing initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_level() {
        assert_eq!(default_filter(false), "word_unscramble=info");
        assert_eq!(default_filter(true), "word_unscramble=debug");
    }

    #[test]
    fn default_filters_parse() {
        assert!(EnvFilter::try_new(default_filter(false)).is_ok());
        assert!(EnvFilter::try_new(default_filter(true)).is_ok());
    }
}

//! Logging infrastructure using `tracing` and `tracing-subscriber`
//!
//! The terminal belongs to the UI, so log lines go to a file instead of
//! stderr. `RUST_LOG` overrides the level from the config file.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber, appending to the file at `path`
///
/// `level` is any `EnvFilter` directive such as `info` or `debug`; it applies
/// to this crate while dependencies stay at `warn`.
pub fn init_logging(path: &Path, level: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Could not create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Could not open log file {}", path.display()))?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => default_filter(level)?,
    };

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("Logging was already initialized")?;

    tracing::info!(log_file = %path.display(), "logging started");
    Ok(())
}

/// Filter used when `RUST_LOG` is unset
fn default_filter(level: &str) -> Result<EnvFilter> {
    let level = level.trim().to_lowercase();
    EnvFilter::try_new(format!("warn,stock_tui={}", level))
        .with_context(|| format!("Invalid log level '{}'", level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_accepts_levels() {
        for level in ["error", "warn", "info", "debug", "trace", " DEBUG "] {
            assert!(default_filter(level).is_ok(), "{}", level);
        }
    }

    #[test]
    fn test_default_filter_rejects_garbage() {
        assert!(default_filter("loud!!").is_err());
    }
}

//! Tracing subscriber setup.
//!
//! The filter comes from `SCENEREEL_LOG` when set, else from the configured
//! level. The interactive player owns the terminal, so it logs to a file;
//! everything else logs to stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "SCENEREEL_LOG";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    /// Log file used while the terminal player is running.
    pub fn player_file() -> Result<Self> {
        let dir = dirs::data_dir().context("Could not determine data directory")?;
        Ok(Self::File(dir.join("scenereel").join("scenereel.log")))
    }
}

/// Build the filter: `SCENEREEL_LOG` wins over the configured level.
pub fn build_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// Calling it a second time is harmless; the first subscriber stays.
pub fn init(configured: &str, target: LogTarget) -> Result<()> {
    let filter = build_filter(configured);

    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false),
                )
                .try_init();
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false),
                )
                .try_init();
        }
    }
    Ok(())
}

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;
use when_core::Config;

const DEFAULT_FILTER: &str = "when=info,when_core=info";

/// Sends `tracing` output to the log file, since stdout belongs to the TUI.
/// `RUST_LOG` overrides the default filter.
pub fn init() -> Result<()> {
    let path = Config::log_file().context("no home directory to put the log file in")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!("{e}"))
}

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::warn;

/// Data file used when the config does not name one, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "daily_when_tracker.csv";
const DEFAULT_ROUND_MINUTES: u32 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// CSV file holding the entry table.
    pub data_file: PathBuf,
    /// Start with the dark colour scheme. Toggled at runtime with `d`.
    pub dark_mode: bool,
    /// New entries are stamped with the current time rounded to this many minutes.
    /// Valid range is 1..=1440. Default is 30.
    pub round_minutes: u32,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    data_file: Option<PathBuf>,
    dark_mode: Option<bool>,
    round_minutes: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file_config(FileConfig::default())
    }
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and
    /// apply defaults. A broken config file is reported and ignored.
    pub fn load() -> Self {
        let file_config = Self::read_file_config().unwrap_or_else(|e| {
            warn!("ignoring config file: {e:#}");
            FileConfig::default()
        });
        Self::from_file_config(file_config)
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let round_minutes = file_config
            .round_minutes
            .filter(|m| (1..=24 * 60).contains(m))
            .unwrap_or(DEFAULT_ROUND_MINUTES);

        Self {
            data_file: file_config
                .data_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE)),
            dark_mode: file_config.dark_mode.unwrap_or(true),
            round_minutes,
        }
    }

    /// Rounding interval in seconds.
    pub fn round_to_secs(&self) -> u32 {
        self.round_minutes * 60
    }

    /// Log file location: `{data_local_dir}/when/when.log`
    /// - macOS:   `~/Library/Application Support/when/when.log`
    /// - Linux:   `$XDG_DATA_HOME/when/when.log` or `~/.local/share/when/when.log`
    /// - Windows: `%LOCALAPPDATA%\when\when.log`
    pub fn log_file() -> Option<PathBuf> {
        BaseDirs::new().map(|b| b.data_local_dir().join("when").join("when.log"))
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b.home_dir().join(".config").join("when").join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("when").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

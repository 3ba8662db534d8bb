use crate::{Config, Entry};
use chrono::{NaiveDate, NaiveTime};
use std::path::PathBuf;

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(data_file: PathBuf) -> Config {
    Config {
        data_file,
        dark_mode: true,
        round_minutes: 30,
    }
}

/// Builds an entry from `YYYY-MM-DD` / `HH:MM` strings.
pub fn entry_at(date: &str, time: &str, task: &str, alertness: u8, energy: u8) -> Entry {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid date");
    let time = NaiveTime::parse_from_str(time, "%H:%M").expect("valid time");
    Entry::new(date.and_time(time), task, alertness, energy)
}

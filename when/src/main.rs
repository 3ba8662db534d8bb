mod logging;
mod tui;

use anyhow::Result;
use std::process::ExitCode;
use tracing::info;
use when_core::{AppState, Config, RecordStore};

use tui::App;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("when: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    if let Err(e) = logging::init() {
        eprintln!("when: logging disabled: {e:#}");
    }

    let config = Config::load();
    let store = RecordStore::new(&config.data_file);
    // Load before raw mode so a broken file is reported on a normal terminal.
    let entries = store.load()?;
    info!(count = entries.len(), path = %store.path().display(), "starting");

    let state = AppState::new(entries, &config);
    App::new(state, store).run()
}

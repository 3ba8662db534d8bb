//! Main TUI application.

use std::io;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use crossterm::event::{self, Event as TermEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};
use when_core::time_utils::now;
use when_core::{AppState, Effect, Event, RecordStore};

use super::input::map_key;
use super::render::render;

/// Puts the terminal back on drop, so errors and panics leave a usable shell.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("enabling raw mode")?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen).context("entering alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
    }
}

/// Main TUI application.
pub struct App {
    state: AppState,
    store: RecordStore,
}

impl App {
    pub fn new(state: AppState, store: RecordStore) -> Self {
        Self { state, store }
    }

    /// Runs the event loop until the user exits.
    pub fn run(mut self) -> Result<()> {
        let _guard = TerminalGuard::enter()?;
        let mut terminal =
            Terminal::new(CrosstermBackend::new(io::stdout())).context("creating terminal")?;
        terminal.clear()?;

        loop {
            terminal.draw(|f| render(f, &self.state, now()))?;

            let TermEvent::Key(key) = event::read().context("reading terminal event")? else {
                // Resize and focus changes only need a redraw.
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let Some(event) = map_key(self.state.view(), key) else {
                continue;
            };
            if self.apply(event, now()) {
                break;
            }
        }

        info!("exiting");
        Ok(())
    }

    /// Feeds one event to the state and carries out its effect.
    /// Returns `true` when the application should exit.
    fn apply(&mut self, event: Event, now: NaiveDateTime) -> bool {
        match self.state.update(event, now) {
            Effect::None => false,
            Effect::Save => {
                debug!(path = %self.store.path().display(), "saving");
                let result = self.store.save(self.state.entries());
                self.state.saved(&result, self.store.path());
                false
            }
            Effect::Exit => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::tempdir;
    use when_core::{Config, View};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, 15)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn mk_app(dir: &std::path::Path) -> App {
        let store = RecordStore::new(dir.join("tracker.csv"));
        let entries = store.load().unwrap();
        App::new(AppState::new(entries, &Config::default()), store)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            assert!(!app.apply(Event::Input(c), at(9, 40)));
        }
    }

    #[test]
    fn add_save_and_reload() {
        let tmp = tempdir().unwrap();
        let mut app = mk_app(tmp.path());

        assert!(!app.apply(Event::AddEntry, at(9, 40)));
        type_str(&mut app, "Read");
        app.apply(Event::NextField, at(9, 40));
        type_str(&mut app, "5");
        app.apply(Event::NextField, at(9, 40));
        type_str(&mut app, "6");
        app.apply(Event::Submit, at(9, 40));
        assert_eq!(app.state.view(), View::Table);

        assert!(!app.apply(Event::Save, at(9, 41)));
        let status = app.state.status().unwrap();
        assert!(status.starts_with("Saved 1 entries to"), "{status}");

        let content = fs::read_to_string(tmp.path().join("tracker.csv")).unwrap();
        assert_eq!(
            content,
            "date,day,time,task,alertness,energy\n2025-08-15,Friday,09:30,Read,5,6\n"
        );

        let reloaded = mk_app(tmp.path());
        assert_eq!(reloaded.state.entries(), app.state.entries());
    }

    #[test]
    fn failed_save_is_reported_not_fatal() {
        let tmp = tempdir().unwrap();
        // A directory where the file should be makes the write fail.
        let path = tmp.path().join("tracker.csv");
        fs::create_dir_all(&path).unwrap();
        let mut app = App::new(
            AppState::new(Vec::new(), &Config::default()),
            RecordStore::new(&path),
        );

        assert!(!app.apply(Event::Save, at(9, 0)));
        let status = app.state.status().unwrap();
        assert!(status.starts_with("Save failed"), "{status}");
    }

    #[test]
    fn exit_stops_the_loop() {
        let tmp = tempdir().unwrap();
        let mut app = mk_app(tmp.path());
        assert!(!app.apply(Event::ToggleDarkMode, at(9, 0)));
        assert!(app.apply(Event::Exit, at(9, 0)));
    }
}

//! Application state and the event → state transition function.
//!
//! The terminal front-end owns an [`AppState`], turns key presses into
//! [`Event`]s, feeds them to [`AppState::update`] and performs whatever
//! [`Effect`] comes back.

use anyhow::Result;
use chrono::NaiveDateTime;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::chart::{Bucket, Metric, aggregate};
use crate::config::Config;
use crate::entry::Entry;
use crate::form::EntryForm;
use crate::store::sort_newest_first;

/// Rows skipped by PageUp / PageDown.
const PAGE_SIZE: usize = 10;

/// The three mutually exclusive panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Table,
    Form,
    Chart,
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Table => "Entries",
            View::Form => "New entry",
            View::Chart => "Plots",
        }
    }
}

/// A discrete user input, already decoded from the raw key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Show the entry form.
    AddEntry,
    /// Delete the selected row (table only).
    RemoveRow,
    /// Show the charts, starting on the total.
    ShowPlots,
    Save,
    Exit,
    ToggleDarkMode,
    /// Leave the form or the charts for the table.
    Back,
    Submit,
    SelectMetric(Metric),
    NextMetric,
    PrevMetric,
    /// A character typed into the focused form field.
    Input(char),
    Backspace,
    NextField,
    PrevField,
    SelectUp,
    SelectDown,
    PageUp,
    PageDown,
    SelectFirst,
    SelectLast,
}

/// Side effect the caller must carry out after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Write [`AppState::entries`] to the data file.
    Save,
    /// Terminate; unsaved changes are dropped.
    Exit,
}

#[derive(Debug)]
pub struct AppState {
    view: View,
    /// Kept most recent first.
    entries: Vec<Entry>,
    selected: usize,
    form: EntryForm,
    metric: Metric,
    /// Bars for the current metric, recomputed when the chart is shown or its tab changes.
    chart: Vec<Bucket>,
    dark_mode: bool,
    round_to_secs: u32,
    status: Option<String>,
}

impl AppState {
    /// Starts on the table view with `entries` sorted most recent first.
    /// Entries sharing a timestamp keep the order they come in, which is the
    /// on-disk order after a reload.
    pub fn new(mut entries: Vec<Entry>, config: &Config) -> Self {
        sort_newest_first(&mut entries);
        Self {
            view: View::Table,
            entries,
            selected: 0,
            form: EntryForm::new(),
            metric: Metric::Total,
            chart: Vec::new(),
            dark_mode: config.dark_mode,
            round_to_secs: config.round_to_secs(),
            status: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Index of the highlighted table row, `None` when the table is empty.
    pub fn selected(&self) -> Option<usize> {
        (!self.entries.is_empty()).then_some(self.selected)
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn chart(&self) -> &[Bucket] {
        &self.chart
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Applies one event. `now` stamps entries created by a form submission.
    pub fn update(&mut self, event: Event, now: NaiveDateTime) -> Effect {
        debug!(?event, view = ?self.view, "update");
        match event {
            Event::Exit => return Effect::Exit,
            Event::Save => return Effect::Save,
            Event::ToggleDarkMode => self.dark_mode = !self.dark_mode,
            Event::AddEntry if self.view != View::Form => {
                self.status = None;
                self.view = View::Form;
            }
            Event::ShowPlots if self.view != View::Form => {
                self.view = View::Chart;
                self.show_metric(Metric::Total);
            }
            Event::RemoveRow if self.view == View::Table => self.remove_selected(),
            Event::Back if self.view != View::Table => {
                self.form.clear();
                self.view = View::Table;
            }
            _ => match self.view {
                View::Table => self.update_table(event),
                View::Form => self.update_form(event, now),
                View::Chart => self.update_chart(event),
            },
        }
        Effect::None
    }

    /// Records the outcome of carrying out [`Effect::Save`].
    pub fn saved(&mut self, result: &Result<()>, path: &Path) {
        self.status = Some(match result {
            Ok(()) => format!("Saved {} entries to {}", self.entries.len(), path.display()),
            Err(e) => {
                warn!("save failed: {e:#}");
                format!("Save failed: {e:#}")
            }
        });
    }

    fn update_table(&mut self, event: Event) {
        let last = self.entries.len().saturating_sub(1);
        self.selected = match event {
            Event::SelectUp => self.selected.saturating_sub(1),
            Event::SelectDown => (self.selected + 1).min(last),
            Event::PageUp => self.selected.saturating_sub(PAGE_SIZE),
            Event::PageDown => (self.selected + PAGE_SIZE).min(last),
            Event::SelectFirst => 0,
            Event::SelectLast => last,
            _ => return,
        };
    }

    fn update_form(&mut self, event: Event, now: NaiveDateTime) {
        match event {
            Event::Input(c) => self.form.insert_char(c),
            Event::Backspace => self.form.backspace(),
            Event::NextField => self.form.focus_next(),
            Event::PrevField => self.form.focus_prev(),
            Event::Submit => {
                if let Some(entry) = self.form.submit(now, self.round_to_secs) {
                    info!(date = %entry.date, time = %entry.time, "entry added");
                    let stamp = (entry.date, entry.time);
                    self.entries.insert(0, entry);
                    sort_newest_first(&mut self.entries);
                    // The new entry leads its tie group.
                    self.selected = self
                        .entries
                        .iter()
                        .position(|e| (e.date, e.time) == stamp)
                        .unwrap_or(0);
                    self.status = Some("Entry added (unsaved)".to_string());
                    self.view = View::Table;
                }
            }
            _ => {}
        }
    }

    fn update_chart(&mut self, event: Event) {
        match event {
            Event::SelectMetric(metric) => self.show_metric(metric),
            Event::NextMetric => self.show_metric(self.metric.next()),
            Event::PrevMetric => self.show_metric(self.metric.prev()),
            _ => {}
        }
    }

    fn show_metric(&mut self, metric: Metric) {
        self.metric = metric;
        self.chart = aggregate(&self.entries, metric);
    }

    fn remove_selected(&mut self) {
        if self.selected >= self.entries.len() {
            return;
        }
        let removed = self.entries.remove(self.selected);
        debug!(date = %removed.date, time = %removed.time, "row removed");
        self.selected = self.selected.min(self.entries.len().saturating_sub(1));
        self.status = Some("Row deleted (unsaved)".to_string());
    }
}

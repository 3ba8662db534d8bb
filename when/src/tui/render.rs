//! Main rendering logic for TUI.

use chrono::NaiveDateTime;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::Block;
use when_core::{AppState, View};

use super::theme::palette;
use super::widgets::{
    render_chart, render_footer, render_form, render_header, render_status, render_table,
};

/// Draws the whole screen for the current state.
pub fn render(frame: &mut Frame, state: &AppState, now: NaiveDateTime) {
    let palette = palette(state.dark_mode());
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(5),    // Active view
        Constraint::Length(1), // Status
        Constraint::Length(1), // Key hints
    ])
    .split(area);

    render_header(frame, chunks[0], state, now, palette);

    match state.view() {
        View::Table => render_table(frame, chunks[1], state, palette),
        View::Form => render_form(frame, chunks[1], state, palette),
        View::Chart => render_chart(frame, chunks[1], state, palette),
    }

    render_status(frame, chunks[2], state, palette);
    render_footer(frame, chunks[3], state, palette);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use when_core::{Config, Entry, Event};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, 15)
            .unwrap()
            .and_hms_opt(10, 7, 0)
            .unwrap()
    }

    fn entry(time: (u32, u32), task: &str, alertness: u8, energy: u8) -> Entry {
        let at = NaiveDate::from_ymd_opt(2025, 8, 15)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap());
        Entry::new(at, task, alertness, energy)
    }

    fn mk_state() -> AppState {
        let entries = vec![
            entry((9, 0), "Coffee", 4, 6),
            entry((13, 30), "Lunch walk", 7, 8),
        ];
        AppState::new(entries, &Config::default())
    }

    fn render_to_string(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, state, now())).unwrap();

        let buffer = terminal.backend().buffer();
        let mut lines = Vec::new();
        for y in 0..height {
            let mut line = String::new();
            for x in 0..width {
                line.push_str(buffer[(x, y)].symbol());
            }
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    #[test]
    fn table_view_lists_entries_and_hints() {
        let output = render_to_string(&mk_state(), 100, 20);
        assert!(output.contains("When Tracker | Entries"), "{output}");
        assert!(output.contains("10:07:00"), "{output}");
        assert!(output.contains("TASK"), "{output}");
        assert!(output.contains("Lunch walk"), "{output}");
        assert!(output.contains("Friday"), "{output}");
        assert!(output.contains("Delete Row"), "{output}");
        // most recent first
        let lunch = output.find("Lunch walk").unwrap();
        let coffee = output.find("Coffee").unwrap();
        assert!(lunch < coffee, "{output}");
    }

    #[test]
    fn form_view_shows_placeholders_and_errors() {
        let mut state = mk_state();
        state.update(Event::AddEntry, now());
        let output = render_to_string(&state, 120, 20);
        assert!(output.contains("What am I doing?"), "{output}");
        assert!(output.contains("Alertness"), "{output}");

        state.update(Event::NextField, now());
        state.update(Event::Input('0'), now());
        let output = render_to_string(&state, 120, 20);
        assert!(
            output.contains("Alertness must be between 1 and 10."),
            "{output}"
        );
    }

    #[test]
    fn chart_view_shows_tabs_and_fixed_axis() {
        let mut state = mk_state();
        state.update(Event::ShowPlots, now());
        let output = render_to_string(&state, 100, 40);
        assert!(output.contains("Time over Total"), "{output}");
        assert!(output.contains("Total score over time of day"), "{output}");
        assert!(output.contains("09:00"), "{output}");
        assert!(output.contains("13:30"), "{output}");
        assert!(output.contains("20"), "{output}");
        assert!(output.contains(" p Plot "), "{output}");

        state.update(Event::SelectMetric(when_core::Metric::Energy), now());
        let output = render_to_string(&state, 100, 40);
        assert!(output.contains("Energy over time of day"), "{output}");
    }

    #[test]
    fn empty_chart_shows_hint() {
        let mut state = AppState::new(Vec::new(), &Config::default());
        state.update(Event::ShowPlots, now());
        let output = render_to_string(&state, 100, 20);
        assert!(output.contains("No entries to plot yet"), "{output}");
    }

    #[test]
    fn status_line_shows_last_action() {
        let mut state = mk_state();
        state.update(Event::RemoveRow, now());
        let output = render_to_string(&state, 100, 20);
        assert!(output.contains("Row deleted"), "{output}");
    }
}

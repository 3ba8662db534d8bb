use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use when_core::{AppState, View};

use crate::tui::theme::Palette;

/// Key hints for the active view.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let hints: &[(&str, &str)] = match state.view() {
        View::Table => &[
            ("a", "Add Row"),
            ("r", "Delete Row"),
            ("p", "Plot"),
            ("s", "Save"),
            ("e", "Exit"),
            ("d", "Toggle Dark Mode"),
        ],
        View::Form => &[
            ("Tab", "Next Field"),
            ("Enter", "Submit"),
            ("Esc", "Back"),
            ("^S", "Save"),
            ("^D", "Toggle Dark Mode"),
            ("^C", "Exit"),
        ],
        View::Chart => &[
            ("1-3", "Chart"),
            ("p", "Plot"),
            ("Esc", "Back"),
            ("a", "Add Row"),
            ("s", "Save"),
            ("e", "Exit"),
            ("d", "Toggle Dark Mode"),
        ],
    };

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, label) in hints {
        spans.push(Span::styled(format!(" {key} "), palette.help_key()));
        spans.push(Span::styled(format!("{label} "), palette.help()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Outcome of the last save, add or delete.
pub fn render_status(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    if let Some(status) = state.status() {
        let style = if status.starts_with("Save failed") {
            palette.error()
        } else {
            palette.status()
        };
        frame.render_widget(Paragraph::new(format!(" {status}")).style(style), area);
    }
}

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Borders, Row, Table, TableState};
use when_core::AppState;
use when_core::csv_format::COLUMNS;

use crate::tui::theme::Palette;

/// The entry table, most recent first, with zebra stripes and a row cursor.
pub fn render_table(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let header = Row::new(COLUMNS.iter().map(|c| c.to_uppercase())).style(palette.table_header());

    let rows = state.entries().iter().enumerate().map(|(i, e)| {
        Row::new(vec![
            e.date_label(),
            e.day_label().to_string(),
            e.time_label(),
            e.task.clone(),
            e.alertness.to_string(),
            e.energy.to_string(),
        ])
        .style(palette.zebra(i))
    });

    let widths = [
        Constraint::Length(10),
        Constraint::Length(9),
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Length(6),
    ];

    let title = format!(" {} entries ", state.entries().len());
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(palette.border()),
        )
        .style(palette.base())
        .row_highlight_style(palette.selected());

    let mut table_state = TableState::default();
    table_state.select(state.selected());
    frame.render_stateful_widget(table, area, &mut table_state);
}

use chrono::NaiveDateTime;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use when_core::AppState;

use crate::tui::theme::Palette;

pub const TITLE: &str = "When Tracker";

/// Title bar with the active view on the left and a clock on the right.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    now: NaiveDateTime,
    palette: &Palette,
) {
    let left = Paragraph::new(Line::from(format!(" {TITLE} | {}", state.view().name())))
        .style(palette.header());
    let clock = Paragraph::new(Line::from(format!("{} ", now.format("%H:%M:%S"))))
        .alignment(Alignment::Right)
        .style(palette.header());

    frame.render_widget(left, area);
    frame.render_widget(clock, area);
}

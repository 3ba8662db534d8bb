use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use strum::IntoEnumIterator;
use when_core::{AppState, Field};

use crate::tui::theme::Palette;

/// Three input boxes side by side, the error area and the button hints.
pub fn render_form(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let form = state.form();
    let chunks = Layout::vertical([
        Constraint::Length(3), // inputs
        Constraint::Length(1), // error
        Constraint::Length(1), // buttons
        Constraint::Min(0),
    ])
    .split(area);

    let boxes = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(chunks[0]);

    for (field, rect) in Field::iter().zip(boxes.iter()) {
        let focused = form.focus() == field;
        let value = form.value(field);
        let text = if value.is_empty() {
            Span::styled(field.placeholder(), palette.placeholder())
        } else {
            Span::raw(value)
        };
        let block = Block::default()
            .title(format!(" {} ", field.as_ref()))
            .borders(Borders::ALL)
            .border_style(if focused {
                palette.border_focused()
            } else {
                palette.border()
            });
        let inner = block.inner(*rect);
        frame.render_widget(Paragraph::new(Line::from(text)).block(block), *rect);

        if focused {
            let width = value.chars().count() as u16;
            let x = inner.x + width.min(inner.width.saturating_sub(1));
            frame.set_cursor_position((x, inner.y));
        }
    }

    if let Some(err) = form.error() {
        frame.render_widget(
            Paragraph::new(Line::from(format!(" {err}"))).style(palette.error()),
            chunks[1],
        );
    }

    let buttons = Line::from(vec![
        Span::styled(" [Enter] ", palette.help_key()),
        Span::styled("Submit", palette.status()),
        Span::styled("  [Esc] ", palette.help_key()),
        Span::styled("Back", palette.error()),
    ]);
    frame.render_widget(Paragraph::new(buttons), chunks[2]);
}

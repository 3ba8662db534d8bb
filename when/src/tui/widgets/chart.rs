use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::symbols;
use ratatui::text::Line;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Tabs};
use strum::IntoEnumIterator;
use when_core::{AppState, Bucket, Metric};

use crate::tui::theme::Palette;

/// Metric tabs on top, the bar chart for the selected metric below.
pub fn render_chart(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).split(area);

    let metric = state.metric();
    let titles = Metric::iter()
        .enumerate()
        .map(|(i, m)| format!(" {} {} ", i + 1, m.tab_label()));
    let selected = Metric::iter().position(|m| m == metric).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(palette.tab_inactive())
        .highlight_style(palette.tab_active())
        .divider("|");
    frame.render_widget(tabs, chunks[0]);

    let block = Block::default()
        .title(format!(" {} ", metric.title()))
        .borders(Borders::ALL)
        .border_style(palette.border());

    let buckets = state.chart();
    if buckets.is_empty() {
        let msg = Paragraph::new("No entries to plot yet. Press a to add one.")
            .alignment(Alignment::Center)
            .style(palette.placeholder())
            .block(block);
        frame.render_widget(msg, chunks[1]);
        return;
    }

    let data = bar_points(buckets);
    let dataset = Dataset::default()
        .marker(symbols::Marker::HalfBlock)
        .graph_type(GraphType::Bar)
        .style(palette.metric(metric))
        .data(&data);

    let (x_bounds, x_labels) = x_axis(buckets);
    let y_labels = metric.y_ticks().into_iter().map(|t| Line::from(t.to_string()));

    let chart = Chart::new(vec![dataset])
        .block(block)
        .style(palette.base())
        .x_axis(
            Axis::default()
                .title("Time of day")
                .style(palette.help())
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(metric.axis_label())
                .style(palette.help())
                .bounds([0.0, f64::from(metric.y_max())])
                .labels(y_labels),
        );
    frame.render_widget(chart, chunks[1]);
}

/// One point per bucket at x = 0, 1, 2, …
fn bar_points(buckets: &[Bucket]) -> Vec<(f64, f64)> {
    buckets
        .iter()
        .enumerate()
        .map(|(i, b)| (i as f64, b.median))
        .collect()
}

/// Labels are spread evenly across the bounds, so pad one empty slot on each
/// side to keep every bucket label under its bar.
fn x_axis(buckets: &[Bucket]) -> ([f64; 2], Vec<Line<'static>>) {
    let bounds = [-1.0, buckets.len() as f64];
    let mut labels = Vec::with_capacity(buckets.len() + 2);
    labels.push(Line::from(""));
    labels.extend(buckets.iter().map(|b| Line::from(b.label())));
    labels.push(Line::from(""));
    (bounds, labels)
}

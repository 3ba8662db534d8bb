//! Panels drawn by the TUI. Each takes the area it may draw into.

mod chart;
mod footer;
mod form;
mod header;
mod table;

pub use chart::render_chart;
pub use footer::{render_footer, render_status};
pub use form::render_form;
pub use header::render_header;
pub use table::render_table;

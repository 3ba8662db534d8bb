//! Terminal front-end: draws the [`when_core::AppState`] with ratatui and
//! feeds it key presses from crossterm.

mod app;
mod input;
mod render;
mod theme;
mod widgets;

pub use app::App;

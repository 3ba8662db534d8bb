pub mod chart;
pub mod config;
pub mod csv_format;
pub mod entry;
pub mod form;
pub mod state;
pub mod store;
pub mod time_utils;
pub mod validate;

#[cfg(test)]
mod tests;

pub use chart::{Bucket, Metric};
pub use config::Config;
pub use entry::Entry;
pub use form::EntryForm;
pub use state::{AppState, Effect, Event, View};
pub use store::{RecordStore, sorted_view};
pub use validate::{Field, ValidationError};

//! The CSV-backed record store.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::csv_format::{format_table, header_line, parse_table};
use crate::entry::Entry;

/// Loads and saves the entry table from a single delimited text file.
///
/// The file is the only durable copy of the table. It is read once at start-up
/// and overwritten wholesale on every save.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every entry from the backing file, in file order.
    ///
    /// A missing file is a first run: it is created with just the header and
    /// an empty table is returned. A malformed row fails the whole load.
    pub fn load(&self) -> Result<Vec<Entry>> {
        if !self.path.is_file() {
            info!(path = %self.path.display(), "no data file yet, creating one");
            self.ensure_parent()?;
            fs::write(&self.path, format!("{}\n", header_line()))
                .with_context(|| format!("creating {}", self.path.display()))?;
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let entries =
            parse_table(&content).with_context(|| format!("parsing {}", self.path.display()))?;
        debug!(count = entries.len(), path = %self.path.display(), "loaded entries");
        Ok(entries)
    }

    /// Writes the header and every entry, replacing the previous content.
    pub fn save(&self, entries: &[Entry]) -> Result<()> {
        self.ensure_parent()?;
        fs::write(&self.path, format_table(entries))
            .with_context(|| format!("writing {}", self.path.display()))?;
        info!(count = entries.len(), path = %self.path.display(), "saved entries");
        Ok(())
    }

    fn ensure_parent(&self) -> Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display())),
            _ => Ok(()),
        }
    }
}

/// Returns the entries most recent first.
///
/// Sorted ascending by (date, time) with a stable sort and then reversed, so
/// entries sharing a timestamp end up in reverse insertion order.
pub fn sorted_view(entries: &[Entry]) -> Vec<Entry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|e| (e.date, e.time));
    sorted.reverse();
    sorted
}

/// Stable descending sort by (date, time) for a table that is already
/// newest first, such as one read back from the file. Tied entries keep
/// their current relative order.
pub fn sort_newest_first(entries: &mut [Entry]) {
    entries.sort_by(|a, b| (b.date, b.time).cmp(&(a.date, a.time)));
}

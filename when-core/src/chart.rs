//! Group-by-time aggregation behind the score charts.

use chrono::NaiveTime;
use std::collections::BTreeMap;
use strum_macros::EnumIter;

use crate::entry::Entry;

/// Which score a chart plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter)]
pub enum Metric {
    /// Alertness plus energy.
    #[default]
    Total,
    Alertness,
    Energy,
}

impl Metric {
    pub fn value(&self, entry: &Entry) -> u32 {
        match self {
            Metric::Total => entry.total(),
            Metric::Alertness => u32::from(entry.alertness),
            Metric::Energy => u32::from(entry.energy),
        }
    }

    /// Upper bound of the fixed y axis.
    pub fn y_max(&self) -> u32 {
        match self {
            Metric::Total => 20,
            Metric::Alertness | Metric::Energy => 10,
        }
    }

    /// Integer tick marks covering the whole y axis.
    pub fn y_ticks(&self) -> Vec<u32> {
        (0..=self.y_max()).collect()
    }

    pub fn tab_label(&self) -> &'static str {
        match self {
            Metric::Total => "Time over Total",
            Metric::Alertness => "Time over Alertness",
            Metric::Energy => "Time over Energy",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Metric::Total => "Total score over time of day",
            Metric::Alertness => "Alertness over time of day",
            Metric::Energy => "Energy over time of day",
        }
    }

    pub fn axis_label(&self) -> &'static str {
        match self {
            Metric::Total => "Total Score",
            Metric::Alertness => "Alertness",
            Metric::Energy => "Energy",
        }
    }

    pub fn next(&self) -> Metric {
        match self {
            Metric::Total => Metric::Alertness,
            Metric::Alertness => Metric::Energy,
            Metric::Energy => Metric::Total,
        }
    }

    pub fn prev(&self) -> Metric {
        match self {
            Metric::Total => Metric::Energy,
            Metric::Alertness => Metric::Total,
            Metric::Energy => Metric::Alertness,
        }
    }
}

/// One bar: the median score recorded at a given time of day.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub time: NaiveTime,
    pub median: f64,
}

impl Bucket {
    pub fn label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

/// Groups `entries` by time of day and takes the median of `metric` in each
/// group. Buckets come back ordered by time of day.
pub fn aggregate(entries: &[Entry], metric: Metric) -> Vec<Bucket> {
    let mut groups: BTreeMap<NaiveTime, Vec<u32>> = BTreeMap::new();
    for entry in entries {
        groups.entry(entry.time).or_default().push(metric.value(entry));
    }

    groups
        .into_iter()
        .filter_map(|(time, mut values)| median(&mut values).map(|median| Bucket { time, median }))
        .collect()
}

/// Middle value of `values`, or the mean of the two middle values when the
/// count is even. `None` for an empty slice.
pub fn median(values: &mut [u32]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_unstable();
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Some(f64::from(values[mid]))
    } else {
        Some((f64::from(values[mid - 1]) + f64::from(values[mid])) / 2.0)
    }
}

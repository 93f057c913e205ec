//! Timing results for a benchmark run.
//!
//! Durations serialize as fractional seconds. A [`SuiteResult`] serializes as
//! a JSON object keyed by table name, in suite order:
//!
//! ```json
//! {
//!   "SimpleTable": [{ "generationElapsed": 0.012, "loadElapsed": 0.25 }],
//!   "SimpleTable_NoKey": [...]
//! }
//! ```

use crate::schema::TableVariant;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::time::Duration;

/// Generation and load time of one repetition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingPair {
    #[serde(serialize_with = "serialize_secs")]
    pub generation_elapsed: Duration,
    #[serde(serialize_with = "serialize_secs")]
    pub load_elapsed: Duration,
}

impl TimingPair {
    pub fn new(generation_elapsed: Duration, load_elapsed: Duration) -> Self {
        Self {
            generation_elapsed,
            load_elapsed,
        }
    }

    /// Rows loaded per second of load time.
    pub fn load_rows_per_second(&self, rows: u64) -> f64 {
        if self.load_elapsed.as_secs_f64() > 0.0 {
            rows as f64 / self.load_elapsed.as_secs_f64()
        } else {
            0.0
        }
    }
}

fn serialize_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

/// Timing pairs for one table variant, in repetition order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TableResult {
    timings: Vec<TimingPair>,
}

impl TableResult {
    pub fn with_capacity(repetitions: usize) -> Self {
        Self {
            timings: Vec::with_capacity(repetitions),
        }
    }

    pub fn push(&mut self, timing: TimingPair) {
        self.timings.push(timing);
    }

    pub fn timings(&self) -> &[TimingPair] {
        &self.timings
    }

    pub fn len(&self) -> usize {
        self.timings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timings.is_empty()
    }

    /// Sum of load time across repetitions.
    pub fn total_load(&self) -> Duration {
        self.timings.iter().map(|t| t.load_elapsed).sum()
    }

    /// Sum of generation time across repetitions.
    pub fn total_generation(&self) -> Duration {
        self.timings.iter().map(|t| t.generation_elapsed).sum()
    }
}

impl From<Vec<TimingPair>> for TableResult {
    fn from(timings: Vec<TimingPair>) -> Self {
        Self { timings }
    }
}

/// Results for every table variant that ran, in suite order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteResult {
    tables: Vec<(TableVariant, TableResult)>,
}

impl SuiteResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, variant: TableVariant, result: TableResult) {
        match self.tables.iter_mut().find(|(v, _)| *v == variant) {
            Some((_, existing)) => *existing = result,
            None => self.tables.push((variant, result)),
        }
    }

    pub fn get(&self, variant: TableVariant) -> Option<&TableResult> {
        self.tables
            .iter()
            .find(|(v, _)| *v == variant)
            .map(|(_, result)| result)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TableVariant, &TableResult)> {
        self.tables.iter().map(|(variant, result)| (*variant, result))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Serialize for SuiteResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tables.len()))?;
        for (variant, result) in &self.tables {
            map.serialize_entry(variant.table_name(), result)?;
        }
        map.end()
    }
}

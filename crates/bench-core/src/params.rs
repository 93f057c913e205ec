//! Benchmark run parameters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of rows generated and loaded per repetition.
pub const DEFAULT_ROW_COUNT: u64 = 50_000;

/// Default number of repetitions per table variant.
pub const DEFAULT_REPEAT_COUNT: u64 = 1;

/// Default number of rows sent per bulk-copy round trip.
pub const DEFAULT_BATCH_SIZE: usize = 50_000;

/// Largest accepted value for any single parameter.
pub const MAX_PARAMETER_VALUE: u64 = i32::MAX as u64;

/// Largest accepted `row_count * repeat_count`: the last simple key,
/// `row_count * repeat_count - 1`, must fit the 32-bit `IntField` column.
pub const MAX_ROWS_PER_TABLE: u64 = i32::MAX as u64 + 1;

/// Errors raised while building or validating parameters.
///
/// These are caller errors: they are always detected before any database
/// work begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    /// A parameter value was not a valid non-negative integer.
    #[error("parameter '{name}' is not a valid integer: '{value}'")]
    NotNumeric { name: String, value: String },

    /// A parameter was zero.
    #[error("parameter '{0}' must be greater than zero")]
    NotPositive(&'static str),

    /// Unknown table variant name.
    #[error("unknown table variant '{0}'")]
    UnknownVariant(String),

    /// A parameter exceeds the 32-bit range.
    #[error("parameter '{name}' must not exceed {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: u64,
        max: u64,
    },

    /// Repetition offsets overflow the key range.
    #[error("row count {row_count} x repeat count {repeat_count} overflows the key range")]
    OffsetOverflow { row_count: u64, repeat_count: u64 },
}

/// Parameters for one benchmark invocation, shared by every table variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkParameters {
    /// Rows generated and loaded per repetition.
    pub row_count: u64,
    /// Generate+load cycles per table variant.
    pub repeat_count: u64,
    /// Rows per bulk-copy round trip.
    pub batch_size: usize,
}

impl Default for BenchmarkParameters {
    fn default() -> Self {
        Self {
            row_count: DEFAULT_ROW_COUNT,
            repeat_count: DEFAULT_REPEAT_COUNT,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl BenchmarkParameters {
    /// Create validated parameters.
    pub fn new(
        row_count: u64,
        repeat_count: u64,
        batch_size: usize,
    ) -> Result<Self, ParameterError> {
        let params = Self {
            row_count,
            repeat_count,
            batch_size,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check that every value is positive, fits a 32-bit integer, and that
    /// the last repetition's keys fit the integer key column.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.row_count == 0 {
            return Err(ParameterError::NotPositive("count"));
        }
        if self.repeat_count == 0 {
            return Err(ParameterError::NotPositive("repeat"));
        }
        if self.batch_size == 0 {
            return Err(ParameterError::NotPositive("batchSize"));
        }

        let batch_size = u64::try_from(self.batch_size).unwrap_or(u64::MAX);
        for (name, value) in [
            ("count", self.row_count),
            ("repeat", self.repeat_count),
            ("batchSize", batch_size),
        ] {
            if value > MAX_PARAMETER_VALUE {
                return Err(ParameterError::OutOfRange {
                    name,
                    value,
                    max: MAX_PARAMETER_VALUE,
                });
            }
        }

        // Both factors are at most i32::MAX, so the product fits a u64
        if self.row_count * self.repeat_count > MAX_ROWS_PER_TABLE {
            return Err(ParameterError::OffsetOverflow {
                row_count: self.row_count,
                repeat_count: self.repeat_count,
            });
        }
        Ok(())
    }

    /// First key used by repetition `repetition` (`repetition * row_count`).
    ///
    /// Returns `None` on overflow.
    pub fn start_offset(&self, repetition: u64) -> Option<u64> {
        repetition.checked_mul(self.row_count)
    }

    /// Total rows a single table holds after a successful run.
    pub fn rows_per_table(&self) -> u64 {
        self.row_count.saturating_mul(self.repeat_count)
    }
}

//! Row generator producing fixed-shape synthetic batches.

use crate::generators::uuid::generate_identifier;
use bench_core::{ComplexRow, RowBatch, SchemaKind, SimpleRow};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;
use tracing::debug;

/// Error type for generator operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    /// Row count was zero or does not fit in memory.
    #[error("row count must be positive and addressable, got {0}")]
    InvalidRowCount(u64),

    /// A key offset does not fit the integer key column.
    #[error("key {0} does not fit the 32-bit IntField column")]
    KeyOverflow(u64),
}

/// Generator for simple and complex row batches.
///
/// Keys are derived from the start offset; identifier columns come from the
/// generator's RNG, so one generator reused across repetitions never repeats
/// an identifier stream.
pub struct RowGenerator {
    /// Random source for identifier columns
    rng: StdRng,
    /// Rows produced so far
    rows_generated: u64,
}

impl Default for RowGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RowGenerator {
    /// Create a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            rows_generated: 0,
        }
    }

    /// Create a generator with a fixed seed (same seed = same identifiers).
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            rows_generated: 0,
        }
    }

    /// Total rows produced by this generator.
    pub fn rows_generated(&self) -> u64 {
        self.rows_generated
    }

    /// Build a batch of `row_count` rows for `schema`, numbering keys from
    /// `start_offset`.
    pub fn generate(
        &mut self,
        schema: SchemaKind,
        row_count: u64,
        start_offset: u64,
    ) -> Result<RowBatch, GeneratorError> {
        let capacity = usize::try_from(row_count)
            .ok()
            .filter(|count| *count > 0)
            .ok_or(GeneratorError::InvalidRowCount(row_count))?;

        let batch = match schema {
            SchemaKind::Simple => {
                RowBatch::Simple(self.simple_rows(capacity, row_count, start_offset)?)
            }
            SchemaKind::Complex => {
                RowBatch::Complex(self.complex_rows(capacity, row_count, start_offset)?)
            }
        };

        self.rows_generated += row_count;
        debug!(
            "Generated {} {} rows starting at offset {}",
            row_count, schema, start_offset
        );

        Ok(batch)
    }

    fn simple_rows(
        &mut self,
        capacity: usize,
        row_count: u64,
        start_offset: u64,
    ) -> Result<Vec<SimpleRow>, GeneratorError> {
        // Every row carries the batch size, not a per-row value.
        let decimal_field = Decimal::from(row_count);

        let mut rows = Vec::with_capacity(capacity);
        for i in 0..row_count {
            let key = start_offset
                .checked_add(i)
                .ok_or(GeneratorError::KeyOverflow(u64::MAX))?;
            let int_field = i32::try_from(key).map_err(|_| GeneratorError::KeyOverflow(key))?;

            rows.push(SimpleRow {
                int_field,
                string_field: generate_identifier(&mut self.rng),
                string_field1: generate_identifier(&mut self.rng),
                decimal_field,
            });
        }
        Ok(rows)
    }

    fn complex_rows(
        &mut self,
        capacity: usize,
        row_count: u64,
        start_offset: u64,
    ) -> Result<Vec<ComplexRow>, GeneratorError> {
        let mut rows = Vec::with_capacity(capacity);
        for i in 0..row_count {
            let key = start_offset
                .checked_add(i)
                .ok_or(GeneratorError::KeyOverflow(u64::MAX))?;

            rows.push(ComplexRow {
                string_field: key.to_string(),
                string_fields: std::array::from_fn(|_| generate_identifier(&mut self.rng)),
            });
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_simple_batch_shape() {
        let mut generator = RowGenerator::with_seed(42);
        let batch = generator.generate(SchemaKind::Simple, 25, 0).unwrap();

        assert_eq!(batch.schema(), SchemaKind::Simple);
        assert_eq!(batch.len(), 25);

        let RowBatch::Simple(rows) = batch else {
            panic!("Expected simple batch");
        };
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.int_field, i as i32);
            assert_eq!(row.string_field.len(), 36);
            assert_eq!(row.string_field1.len(), 36);
            assert_ne!(row.string_field, row.string_field1);
        }
    }

    #[test]
    fn test_simple_decimal_field_is_row_count() {
        let mut generator = RowGenerator::with_seed(1);
        let RowBatch::Simple(rows) = generator.generate(SchemaKind::Simple, 17, 300).unwrap()
        else {
            panic!("Expected simple batch");
        };

        for row in &rows {
            assert_eq!(row.decimal_field, Decimal::from(17));
        }
    }

    #[test]
    fn test_simple_keys_start_at_offset() {
        let mut generator = RowGenerator::with_seed(1);
        let RowBatch::Simple(rows) = generator.generate(SchemaKind::Simple, 5, 200).unwrap()
        else {
            panic!("Expected simple batch");
        };
        let keys: Vec<i32> = rows.iter().map(|r| r.int_field).collect();
        assert_eq!(keys, vec![200, 201, 202, 203, 204]);
    }

    #[test]
    fn test_complex_batch_shape() {
        let mut generator = RowGenerator::with_seed(42);
        let batch = generator.generate(SchemaKind::Complex, 10, 100).unwrap();

        assert_eq!(batch.schema(), SchemaKind::Complex);
        let RowBatch::Complex(rows) = batch else {
            panic!("Expected complex batch");
        };
        assert_eq!(rows.len(), 10);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.string_field, (100 + i).to_string());
            assert_eq!(row.string_fields.len(), 6);
            let distinct: HashSet<&String> = row.string_fields.iter().collect();
            assert_eq!(distinct.len(), 6);
        }
    }

    #[test]
    fn test_identifiers_unique_within_batch() {
        let mut generator = RowGenerator::new();
        let RowBatch::Complex(rows) = generator.generate(SchemaKind::Complex, 10_000, 0).unwrap()
        else {
            panic!("Expected complex batch");
        };

        let mut seen = HashSet::with_capacity(60_000);
        for row in &rows {
            for id in &row.string_fields {
                assert!(seen.insert(id.clone()), "duplicate identifier {id}");
            }
        }
        assert_eq!(seen.len(), 60_000);
    }

    #[test]
    fn test_identifiers_unique_across_repetitions() {
        let mut generator = RowGenerator::with_seed(9);
        let RowBatch::Simple(first) = generator.generate(SchemaKind::Simple, 100, 0).unwrap()
        else {
            panic!("Expected simple batch");
        };
        let RowBatch::Simple(second) = generator.generate(SchemaKind::Simple, 100, 100).unwrap()
        else {
            panic!("Expected simple batch");
        };

        let ids: HashSet<&String> = first
            .iter()
            .chain(second.iter())
            .flat_map(|r| [&r.string_field, &r.string_field1])
            .collect();
        assert_eq!(ids.len(), 400);
        assert_eq!(generator.rows_generated(), 200);
    }

    #[test]
    fn test_deterministic_with_seed() {
        let mut gen1 = RowGenerator::with_seed(42);
        let mut gen2 = RowGenerator::with_seed(42);

        let batch1 = gen1.generate(SchemaKind::Complex, 3, 0).unwrap();
        let batch2 = gen2.generate(SchemaKind::Complex, 3, 0).unwrap();
        assert_eq!(batch1, batch2);
    }

    #[test]
    fn test_zero_rows_rejected() {
        let mut generator = RowGenerator::with_seed(42);
        let result = generator.generate(SchemaKind::Simple, 0, 0);
        assert_eq!(result, Err(GeneratorError::InvalidRowCount(0)));
    }

    #[test]
    fn test_int_key_overflow() {
        let mut generator = RowGenerator::with_seed(42);
        let start = i32::MAX as u64;
        let result = generator.generate(SchemaKind::Simple, 2, start);
        assert_eq!(result, Err(GeneratorError::KeyOverflow(start + 1)));

        // Complex keys are text and are not bounded by the integer column.
        assert!(generator.generate(SchemaKind::Complex, 2, start).is_ok());
    }
}

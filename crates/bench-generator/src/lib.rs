//! Row generator for the sqlperf benchmark harness.
//!
//! This crate provides the [`RowGenerator`] which builds a [`RowBatch`] for
//! one of the two fixed schemas, given a row count and a starting key offset.
//! Identifier columns are filled with random UUID v4 strings drawn from a
//! [`StdRng`](rand::rngs::StdRng), entropy-seeded by default or seeded
//! explicitly for reproducible data.
//!
//! # Architecture
//!
//! ```text
//!   SchemaKind + row_count + start_offset
//!                  │
//!                  ▼
//!        ┌─────────────────┐
//!        │  RowGenerator   │
//!        │                 │
//!        │  - rng (StdRng) │
//!        └────────┬────────┘
//!                 │
//!                 ▼
//!   RowBatch::Simple(..) | RowBatch::Complex(..)
//! ```
//!
//! # Example
//!
//! ```rust
//! use bench_core::{RowBatch, SchemaKind};
//! use bench_generator::RowGenerator;
//!
//! let mut generator = RowGenerator::with_seed(42);
//! let batch = generator.generate(SchemaKind::Simple, 10, 100).unwrap();
//! assert_eq!(batch.len(), 10);
//! if let RowBatch::Simple(rows) = batch {
//!     assert_eq!(rows[0].int_field, 100);
//! }
//! ```

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{GeneratorError, RowGenerator};

pub use bench_core::RowBatch;

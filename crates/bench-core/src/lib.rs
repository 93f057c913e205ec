//! Core types for the sqlperf benchmark harness.
//!
//! This crate provides the data model shared by every other crate in the
//! workspace:
//!
//! - [`BenchmarkParameters`] - Row count, repeat count and batch size for one run
//! - [`SchemaKind`] - The two fixed row shapes (simple and complex)
//! - [`TableVariant`] - The four destination tables and their schema pairing
//! - [`RowBatch`] - A generated batch of rows for one schema
//! - [`TimingPair`], [`TableResult`], [`SuiteResult`] - Measurements
//!
//! # Architecture
//!
//! ```text
//! bench-core (this crate)
//!    │
//!    ├─── bench-generator   (builds RowBatch values)
//!    ├─── bench-runner      (orchestrates reset/generate/load, records timings)
//!    └─── bench-postgresql  (writes RowBatch values with binary COPY)
//! ```
//!
//! # Example
//!
//! ```rust
//! use bench_core::{BenchmarkParameters, TableVariant, SchemaKind};
//!
//! let params = BenchmarkParameters::new(100, 3, 25).unwrap();
//! assert_eq!(params.start_offset(2), Some(200));
//! assert_eq!(TableVariant::ComplexTable.schema(), SchemaKind::Complex);
//! ```

pub mod params;
pub mod results;
pub mod rows;
pub mod schema;

// Re-exports for convenience
pub use params::{BenchmarkParameters, ParameterError};
pub use results::{SuiteResult, TableResult, TimingPair};
pub use rows::{ComplexRow, RowBatch, SimpleRow};
pub use schema::{SchemaKind, TableVariant, TABLE_VARIANTS};

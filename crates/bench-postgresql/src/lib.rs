//! PostgreSQL target for the sqlperf benchmark harness.
//!
//! Implements [`bench_runner::BulkTarget`] on top of `tokio-postgres`:
//!
//! - reset issues `TRUNCATE TABLE`
//! - load streams rows with `COPY ... FROM STDIN (FORMAT binary)`, one COPY
//!   per chunk of `batch_size` rows, under a fixed 120 second ceiling
//!
//! Every operation opens its own connection and drops it before returning.

pub mod args;
pub mod connect;
pub mod copy;
pub mod error;
pub mod sql;
pub mod target;

pub use args::{CommonBenchArgs, PostgreSQLBenchArgs};
pub use copy::BULK_COPY_TIMEOUT;
pub use error::PostgreSQLBenchError;
pub use target::PostgreSQLTarget;

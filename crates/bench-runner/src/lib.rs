//! Benchmark orchestration for sqlperf.
//!
//! This crate drives the timing protocol independently of any database:
//!
//! - [`BulkTarget`] - the two operations a destination must offer (reset, load)
//! - [`run_table`] - reset once, then `repeat_count` generate+load cycles
//! - [`Suite`] - the four table variants, run one after another
//!
//! Database crates implement [`BulkTarget`]; the CLI picks one implementation
//! and hands it to a [`Suite`].

mod error;
mod runner;
mod suite;
mod target;

pub use error::{Phase, RunError};
pub use runner::{run_table, RunState};
pub use suite::Suite;
pub use target::BulkTarget;

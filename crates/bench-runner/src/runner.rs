//! Single-table benchmark runner.

use crate::error::{Phase, RunError};
use crate::target::BulkTarget;
use bench_core::{BenchmarkParameters, ParameterError, SchemaKind, TableResult, TimingPair};
use bench_generator::RowGenerator;
use std::fmt;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Lifecycle of one table run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Resetting,
    Generating { repetition: u64 },
    Loading { repetition: u64 },
    Done,
    Failed,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Idle => write!(f, "idle"),
            RunState::Resetting => write!(f, "resetting"),
            RunState::Generating { repetition } => write!(f, "generating #{repetition}"),
            RunState::Loading { repetition } => write!(f, "loading #{repetition}"),
            RunState::Done => write!(f, "done"),
            RunState::Failed => write!(f, "failed"),
        }
    }
}

struct StateTracker<'a> {
    table: &'a str,
    state: RunState,
}

impl<'a> StateTracker<'a> {
    fn new(table: &'a str) -> Self {
        Self {
            table,
            state: RunState::Idle,
        }
    }

    fn enter(&mut self, next: RunState) {
        debug!("{}: {} -> {}", self.table, self.state, next);
        self.state = next;
    }

    fn fail<E>(&mut self, phase: Phase, repetition: Option<u64>, source: E) -> RunError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        warn!(
            "{}: {} failed while {}: {}",
            self.table, phase, self.state, source
        );
        self.enter(RunState::Failed);
        RunError::phase(self.table, phase, repetition, source)
    }
}

/// Benchmark one table: reset it once, then run `repeat_count` cycles of
/// generate and load, timing each phase separately.
///
/// Repetition `i` generates keys from `i * row_count`. Any failure aborts the
/// remaining repetitions and no partial result is returned.
pub async fn run_table<T: BulkTarget>(
    target: &T,
    generator: &mut RowGenerator,
    table: &str,
    schema: SchemaKind,
    params: &BenchmarkParameters,
) -> Result<TableResult, RunError> {
    params.validate()?;

    let mut tracker = StateTracker::new(table);
    info!(
        "Benchmarking '{}' ({} schema): {} rows x {} repetitions (batch size: {})",
        table, schema, params.row_count, params.repeat_count, params.batch_size
    );

    tracker.enter(RunState::Resetting);
    target
        .reset(table)
        .await
        .map_err(|e| tracker.fail(Phase::Reset, None, e))?;

    let mut result = TableResult::with_capacity(params.repeat_count.min(1024) as usize);

    for repetition in 0..params.repeat_count {
        let start_offset = params.start_offset(repetition).ok_or(
            ParameterError::OffsetOverflow {
                row_count: params.row_count,
                repeat_count: params.repeat_count,
            },
        )?;

        tracker.enter(RunState::Generating { repetition });
        let generation_start = Instant::now();
        let batch = generator
            .generate(schema, params.row_count, start_offset)
            .map_err(|e| tracker.fail(Phase::Generate, Some(repetition), e))?;
        let generation_elapsed = generation_start.elapsed();
        info!("Created data in {:?}", generation_elapsed);

        tracker.enter(RunState::Loading { repetition });
        let load_start = Instant::now();
        let rows_written = target
            .load(table, &batch, params.batch_size)
            .await
            .map_err(|e| tracker.fail(Phase::Load, Some(repetition), e))?;
        let load_elapsed = load_start.elapsed();
        drop(batch);
        info!("Inserted data in {:?}", load_elapsed);

        let timing = TimingPair::new(generation_elapsed, load_elapsed);
        debug!(
            "{}: repetition {} wrote {} rows ({:.2} rows/sec)",
            table,
            repetition,
            rows_written,
            timing.load_rows_per_second(rows_written)
        );
        result.push(timing);
    }

    tracker.enter(RunState::Done);
    Ok(result)
}

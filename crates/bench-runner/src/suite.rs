//! Suite driver running every table variant in turn.

use crate::error::RunError;
use crate::runner::run_table;
use crate::target::BulkTarget;
use bench_core::{BenchmarkParameters, SuiteResult, TableResult, TableVariant, TABLE_VARIANTS};
use bench_generator::RowGenerator;
use std::time::Instant;
use tracing::{error, info};

/// Runs the benchmark against the four table variants.
///
/// Variants run sequentially in [`TABLE_VARIANTS`] order, never
/// concurrently, so no two loads contend for the same server. The first
/// failing variant aborts the suite.
///
/// Two suites pointed at the same database are not coordinated with each
/// other; overlapping runs disturb each other's timings.
pub struct Suite<T: BulkTarget> {
    target: T,
    seed: Option<u64>,
}

impl<T: BulkTarget> Suite<T> {
    /// Create a suite writing to `target`.
    pub fn new(target: T) -> Self {
        Self { target, seed: None }
    }

    /// Seed identifier generation for reproducible data.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Get a reference to the target.
    pub fn target(&self) -> &T {
        &self.target
    }

    fn generator(&self) -> RowGenerator {
        match self.seed {
            Some(seed) => RowGenerator::with_seed(seed),
            None => RowGenerator::new(),
        }
    }

    /// Run all four variants with the same parameters.
    pub async fn run_suite(&self, params: &BenchmarkParameters) -> Result<SuiteResult, RunError> {
        params.validate()?;

        let start_time = Instant::now();
        let mut generator = self.generator();
        let mut suite = SuiteResult::new();

        for (variant, schema) in TABLE_VARIANTS {
            let result = run_table(
                &self.target,
                &mut generator,
                variant.table_name(),
                schema,
                params,
            )
            .await
            .inspect_err(|e| error!("Aborting suite: {}", e))?;

            info!(
                "{}: {} repetitions, total load {:?}",
                variant,
                result.len(),
                result.total_load()
            );
            suite.insert(variant, result);
        }

        info!("Suite complete in {:?}", start_time.elapsed());
        Ok(suite)
    }

    /// Run a single variant with the given parameters.
    pub async fn run_variant(
        &self,
        variant: TableVariant,
        params: &BenchmarkParameters,
    ) -> Result<TableResult, RunError> {
        let mut generator = self.generator();
        run_table(
            &self.target,
            &mut generator,
            variant.table_name(),
            variant.schema(),
            params,
        )
        .await
    }
}

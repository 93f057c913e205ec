//! Process configuration.

use anyhow::Context;
use bench_postgresql::PostgreSQLTarget;
use bench_runner::Suite;

use crate::logging::mask_connection_password;

/// Configuration resolved once at startup and handed to every run.
#[derive(Clone)]
pub struct BenchConfig {
    /// Connection string of the database holding the benchmark tables.
    pub target_database: String,
    /// Seed for identifier generation, `None` for fresh entropy per run.
    pub seed: Option<u64>,
}

impl std::fmt::Debug for BenchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BenchConfig")
            .field(
                "target_database",
                &mask_connection_password(&self.target_database),
            )
            .field("seed", &self.seed)
            .finish()
    }
}

impl BenchConfig {
    /// Build a configuration, rejecting unusable connection strings before
    /// any database work.
    pub fn new(target_database: impl Into<String>, seed: Option<u64>) -> anyhow::Result<Self> {
        let target_database = target_database.into();
        bench_postgresql::connect::validate_connection_string(&target_database)
            .context("TargetDatabase setting is not usable")?;
        Ok(Self {
            target_database,
            seed,
        })
    }

    /// Build a suite pointed at the configured database.
    pub fn suite(&self) -> anyhow::Result<Suite<PostgreSQLTarget>> {
        let target = PostgreSQLTarget::new(self.target_database.clone())
            .context("Failed to configure PostgreSQL target")?;
        Ok(Suite::new(target).with_seed(self.seed))
    }
}

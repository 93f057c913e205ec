//! PostgreSQL implementation of the benchmark target.

use crate::connect::{connect, validate_connection_string};
use crate::copy::{bulk_copy, BULK_COPY_TIMEOUT};
use crate::error::PostgreSQLBenchError;
use crate::sql::{count_statement, truncate_statement};
use bench_core::RowBatch;
use bench_runner::BulkTarget;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};

/// Benchmark target writing to a PostgreSQL database.
///
/// Holds only the connection string; every operation connects, does its
/// work and drops the connection.
#[derive(Debug, Clone)]
pub struct PostgreSQLTarget {
    connection_string: String,
}

impl PostgreSQLTarget {
    /// Create a target for the given connection string.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let target = PostgreSQLTarget::new(
    ///     "host=localhost user=postgres password=postgres dbname=testdb",
    /// )?;
    /// ```
    pub fn new(connection_string: impl Into<String>) -> Result<Self, PostgreSQLBenchError> {
        let connection_string = connection_string.into();
        validate_connection_string(&connection_string)?;
        Ok(Self { connection_string })
    }

    /// Open a connection and run a trivial query.
    pub async fn check_connection(&self) -> Result<(), PostgreSQLBenchError> {
        let client = connect(&self.connection_string).await?;
        client.simple_query("SELECT 1").await?;
        Ok(())
    }

    /// Truncate the table (delete all rows).
    pub async fn truncate_table(&self, table_name: &str) -> Result<(), PostgreSQLBenchError> {
        let client = connect(&self.connection_string).await?;
        info!("Truncating table: {}", table_name);
        client
            .batch_execute(&truncate_statement(table_name))
            .await
            .map_err(|e| PostgreSQLBenchError::from_server(table_name, e))?;
        Ok(())
    }

    /// Bulk copy a batch into the table, bounded by [`BULK_COPY_TIMEOUT`].
    pub async fn bulk_load(
        &self,
        table_name: &str,
        batch: &RowBatch,
        batch_size: usize,
    ) -> Result<u64, PostgreSQLBenchError> {
        let load = async {
            let client = connect(&self.connection_string).await?;
            bulk_copy(&client, table_name, batch, batch_size).await
        };

        with_timeout(table_name, BULK_COPY_TIMEOUT, load).await
    }

    /// Get the row count for a table.
    pub async fn row_count(&self, table_name: &str) -> Result<u64, PostgreSQLBenchError> {
        let client = connect(&self.connection_string).await?;
        let row = client
            .query_one(&count_statement(table_name), &[])
            .await
            .map_err(|e| PostgreSQLBenchError::from_server(table_name, e))?;
        let count: i64 = row.get(0);
        Ok(count as u64)
    }
}

/// Run `operation` on `table_name`, failing with
/// [`PostgreSQLBenchError::Timeout`] once `timeout` elapses.
async fn with_timeout<F, T>(
    table_name: &str,
    timeout: Duration,
    operation: F,
) -> Result<T, PostgreSQLBenchError>
where
    F: Future<Output = Result<T, PostgreSQLBenchError>>,
{
    match tokio::time::timeout(timeout, operation).await {
        Ok(result) => result,
        Err(_) => Err(PostgreSQLBenchError::Timeout {
            table: table_name.to_string(),
            timeout,
        }),
    }
}

#[async_trait::async_trait]
impl BulkTarget for PostgreSQLTarget {
    type Error = PostgreSQLBenchError;

    async fn reset(&self, table: &str) -> Result<(), PostgreSQLBenchError> {
        self.truncate_table(table).await
    }

    async fn load(
        &self,
        table: &str,
        batch: &RowBatch,
        batch_size: usize,
    ) -> Result<u64, PostgreSQLBenchError> {
        debug!(
            "Loading {} rows into '{}' (batch size: {})",
            batch.len(),
            table,
            batch_size
        );
        self.bulk_load(table, batch, batch_size).await
    }
}

//! BulkTarget trait definition.

use bench_core::RowBatch;

/// Destination for benchmark rows.
///
/// Implementations own connection handling: each call acquires whatever
/// connection it needs and releases it before returning, on success and on
/// failure alike.
///
/// ```ignore
/// pub async fn run_table<T: BulkTarget>(target: &T, ..) -> Result<TableResult, RunError> {
///     target.reset(table).await?;
///     target.load(table, &batch, batch_size).await?;
/// }
/// ```
#[async_trait::async_trait]
pub trait BulkTarget: Send + Sync {
    /// Error returned by this target.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Remove every row from `table` with a whole-table clear.
    async fn reset(&self, table: &str) -> Result<(), Self::Error>;

    /// Write `batch` into `table`, `batch_size` rows per server round trip.
    ///
    /// Returns the number of rows written.
    async fn load(
        &self,
        table: &str,
        batch: &RowBatch,
        batch_size: usize,
    ) -> Result<u64, Self::Error>;
}

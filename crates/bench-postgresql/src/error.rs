//! Error types for the PostgreSQL target.

use std::time::Duration;
use thiserror::Error;
use tokio_postgres::error::SqlState;

/// Errors that can occur while resetting or loading a PostgreSQL table.
#[derive(Error, Debug)]
pub enum PostgreSQLBenchError {
    /// PostgreSQL query or COPY error not covered by a narrower variant.
    #[error("PostgreSQL error: {0}")]
    PostgreSQL(#[from] tokio_postgres::Error),

    /// Could not open or authenticate a connection.
    #[error("Connection error: {source}")]
    Connection {
        #[source]
        source: tokio_postgres::Error,
    },

    /// Destination table missing, or its columns do not match the batch.
    #[error("Schema error on table '{table}': {message}")]
    Schema { table: String, message: String },

    /// Bulk copy exceeded the operation ceiling.
    #[error("Bulk copy into '{table}' timed out after {timeout:?}")]
    Timeout { table: String, timeout: Duration },

    /// Invalid connection string.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// SQLSTATE codes reported when the destination does not fit the batch.
const SCHEMA_STATES: [SqlState; 4] = [
    SqlState::UNDEFINED_TABLE,
    SqlState::UNDEFINED_COLUMN,
    SqlState::INVALID_BINARY_REPRESENTATION,
    SqlState::DATATYPE_MISMATCH,
];

/// Whether `code` means the destination table does not fit the batch.
pub fn is_schema_state(code: &SqlState) -> bool {
    SCHEMA_STATES.contains(code)
}

impl PostgreSQLBenchError {
    /// Classify a server error raised while working on `table`.
    pub fn from_server(table: &str, err: tokio_postgres::Error) -> Self {
        match err.code() {
            Some(code) if is_schema_state(code) => {
                let message = err
                    .as_db_error()
                    .map(|db| db.message().to_string())
                    .unwrap_or_else(|| err.to_string());
                PostgreSQLBenchError::Schema {
                    table: table.to_string(),
                    message,
                }
            }
            _ => PostgreSQLBenchError::PostgreSQL(err),
        }
    }

    pub fn is_schema_error(&self) -> bool {
        matches!(self, PostgreSQLBenchError::Schema { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, PostgreSQLBenchError::Timeout { .. })
    }

    pub fn is_connection_error(&self) -> bool {
        matches!(self, PostgreSQLBenchError::Connection { .. })
    }
}

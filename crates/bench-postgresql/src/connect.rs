//! Connection handling.

use crate::error::PostgreSQLBenchError;
use std::str::FromStr;
use tokio_postgres::{Client, NoTls};

/// Open a connection and spawn its driver task.
///
/// The connection closes when the returned client is dropped.
pub async fn connect(connection_string: &str) -> Result<Client, PostgreSQLBenchError> {
    let (client, connection) = tokio_postgres::connect(connection_string, NoTls)
        .await
        .map_err(|source| PostgreSQLBenchError::Connection { source })?;

    // Spawn the connection task
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            tracing::error!("PostgreSQL connection error: {}", e);
        }
    });

    Ok(client)
}

/// Check that a connection string parses, without connecting.
pub fn validate_connection_string(connection_string: &str) -> Result<(), PostgreSQLBenchError> {
    if connection_string.trim().is_empty() {
        return Err(PostgreSQLBenchError::Config(
            "connection string is empty".to_string(),
        ));
    }
    tokio_postgres::Config::from_str(connection_string)
        .map(|_| ())
        .map_err(|e| PostgreSQLBenchError::Config(format!("invalid connection string: {e}")))
}

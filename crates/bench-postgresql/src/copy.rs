//! Binary COPY bulk loading.

use crate::error::PostgreSQLBenchError;
use crate::sql::copy_statement;
use bench_core::{ComplexRow, RowBatch, SchemaKind, SimpleRow};
use std::time::Duration;
use tokio_postgres::binary_copy::BinaryCopyInWriter;
use tokio_postgres::types::{ToSql, Type};
use tokio_postgres::Client;
use tracing::debug;

/// Ceiling for a single load, independent of batch size.
pub const BULK_COPY_TIMEOUT: Duration = Duration::from_secs(120);

/// Wire types sent for each column, in COPY column order.
pub fn column_types(schema: SchemaKind) -> Vec<Type> {
    match schema {
        SchemaKind::Simple => vec![Type::INT4, Type::TEXT, Type::TEXT, Type::NUMERIC],
        SchemaKind::Complex => vec![Type::TEXT; 7],
    }
}

fn simple_values(row: &SimpleRow) -> [&(dyn ToSql + Sync); 4] {
    [
        &row.int_field,
        &row.string_field,
        &row.string_field1,
        &row.decimal_field,
    ]
}

fn complex_values(row: &ComplexRow) -> [&(dyn ToSql + Sync); 7] {
    let [f2, f3, f4, f5, f6, f7] = &row.string_fields;
    [&row.string_field, f2, f3, f4, f5, f6, f7]
}

/// Stream `batch` into `table_name`, issuing one COPY per `batch_size` rows.
///
/// Each COPY commits on its own; a failure leaves earlier chunks in place.
pub async fn bulk_copy(
    client: &Client,
    table_name: &str,
    batch: &RowBatch,
    batch_size: usize,
) -> Result<u64, PostgreSQLBenchError> {
    let schema = batch.schema();
    let statement = copy_statement(table_name, schema);
    let types = column_types(schema);
    let batch_size = batch_size.max(1);

    let mut written = 0u64;
    let mut chunk_count = 0u64;

    match batch {
        RowBatch::Simple(rows) => {
            for chunk in rows.chunks(batch_size) {
                written += copy_chunk(client, &statement, &types, chunk, simple_values)
                    .await
                    .map_err(|e| PostgreSQLBenchError::from_server(table_name, e))?;
                chunk_count += 1;
            }
        }
        RowBatch::Complex(rows) => {
            for chunk in rows.chunks(batch_size) {
                written += copy_chunk(client, &statement, &types, chunk, complex_values)
                    .await
                    .map_err(|e| PostgreSQLBenchError::from_server(table_name, e))?;
                chunk_count += 1;
            }
        }
    }

    debug!(
        "Copied {} rows into '{}' in {} chunks",
        written, table_name, chunk_count
    );
    Ok(written)
}

async fn copy_chunk<R: Sync, const N: usize>(
    client: &Client,
    statement: &str,
    types: &[Type],
    rows: &[R],
    values: fn(&R) -> [&(dyn ToSql + Sync); N],
) -> Result<u64, tokio_postgres::Error> {
    let sink = client.copy_in(statement).await?;
    let writer = BinaryCopyInWriter::new(sink, types);
    tokio::pin!(writer);

    for row in rows {
        writer.as_mut().write(&values(row)).await?;
    }

    writer.as_mut().finish().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_column_types_match_columns() {
        for schema in [SchemaKind::Simple, SchemaKind::Complex] {
            assert_eq!(column_types(schema).len(), schema.columns().len());
        }
        assert_eq!(column_types(SchemaKind::Simple)[0], Type::INT4);
        assert_eq!(column_types(SchemaKind::Simple)[3], Type::NUMERIC);
    }

    #[test]
    fn test_values_accept_declared_types() {
        let simple = SimpleRow {
            int_field: 1,
            string_field: "a".to_string(),
            string_field1: "b".to_string(),
            decimal_field: Decimal::from(10),
        };
        let types = column_types(SchemaKind::Simple);
        let values = simple_values(&simple);
        assert_eq!(values.len(), types.len());

        assert!(<i32 as ToSql>::accepts(&types[0]));
        assert!(<String as ToSql>::accepts(&types[1]));
        assert!(<String as ToSql>::accepts(&types[2]));
        assert!(<Decimal as ToSql>::accepts(&types[3]));
    }

    #[test]
    fn test_complex_values_order() {
        let row = ComplexRow {
            string_field: "0".to_string(),
            string_fields: std::array::from_fn(|i| format!("f{}", i + 2)),
        };
        let values = complex_values(&row);
        assert_eq!(values.len(), 7);
        assert_eq!(format!("{:?}", values[0]), "\"0\"");
        assert_eq!(format!("{:?}", values[6]), "\"f7\"");
    }
}

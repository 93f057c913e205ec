//! SQL statement builders.

use bench_core::SchemaKind;

/// Quote an identifier so mixed-case table and column names survive.
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Generate the whole-table clear statement.
pub fn truncate_statement(table_name: &str) -> String {
    format!("TRUNCATE TABLE {}", quote_ident(table_name))
}

/// Generate the binary COPY statement for a schema, naming every column so
/// the mapping is positional against the batch.
pub fn copy_statement(table_name: &str, schema: SchemaKind) -> String {
    let columns = schema
        .columns()
        .iter()
        .map(|c| quote_ident(c))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "COPY {} ({}) FROM STDIN (FORMAT binary)",
        quote_ident(table_name),
        columns
    )
}

/// Generate a row count query.
pub fn count_statement(table_name: &str) -> String {
    format!("SELECT COUNT(*) FROM {}", quote_ident(table_name))
}

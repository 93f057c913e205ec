//! Request adapter: turns an inbound query string into a benchmark request.
//!
//! Keys and values are form-decoded (`%XX` escapes, `+` as space), keys
//! match case-insensitively and the first occurrence wins. Missing keys
//! take the defaults (`count=50000`, `repeat=1`, `batchSize=50000`). Any
//! malformed value rejects the whole request before a database is touched.

use bench_core::params::{DEFAULT_BATCH_SIZE, DEFAULT_REPEAT_COUNT, DEFAULT_ROW_COUNT};
use bench_core::{BenchmarkParameters, ParameterError, TableVariant};
use std::borrow::Cow;

/// What an inbound request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchRequest {
    /// All four table variants.
    Suite(BenchmarkParameters),
    /// A single table variant.
    Table(TableVariant, BenchmarkParameters),
}

impl BenchRequest {
    pub fn parameters(&self) -> &BenchmarkParameters {
        match self {
            BenchRequest::Suite(params) | BenchRequest::Table(_, params) => params,
        }
    }
}

type QueryPairs<'a> = Vec<(Cow<'a, str>, Cow<'a, str>)>;

/// Split a query string into decoded key/value pairs.
pub fn query_pairs(query: &str) -> QueryPairs<'_> {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes()).collect()
}

fn lookup<'a>(pairs: &'a QueryPairs<'_>, key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v.as_ref())
}

fn parse_number(pairs: &QueryPairs<'_>, key: &str, default: u64) -> Result<u64, ParameterError> {
    match lookup(pairs, key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map_err(|_| ParameterError::NotNumeric {
                name: key.to_string(),
                value: value.to_string(),
            }),
    }
}

/// Read `count`, `repeat` and `batchSize` from a query string.
pub fn parameters_from_query(query: &str) -> Result<BenchmarkParameters, ParameterError> {
    let pairs = query_pairs(query);

    let row_count = parse_number(&pairs, "count", DEFAULT_ROW_COUNT)?;
    let repeat_count = parse_number(&pairs, "repeat", DEFAULT_REPEAT_COUNT)?;
    let batch_size = parse_number(&pairs, "batchSize", DEFAULT_BATCH_SIZE as u64)?;
    let batch_size = usize::try_from(batch_size).map_err(|_| ParameterError::NotNumeric {
        name: "batchSize".to_string(),
        value: batch_size.to_string(),
    })?;

    BenchmarkParameters::new(row_count, repeat_count, batch_size)
}

/// Build a suite request from a query string.
pub fn suite_request(query: &str) -> Result<BenchRequest, ParameterError> {
    Ok(BenchRequest::Suite(parameters_from_query(query)?))
}

/// Build a single-table request; the query must carry `table`.
pub fn table_request(query: &str) -> Result<BenchRequest, ParameterError> {
    let pairs = query_pairs(query);
    let table = lookup(&pairs, "table")
        .ok_or_else(|| ParameterError::UnknownVariant(String::new()))?
        .parse::<TableVariant>()?;
    Ok(BenchRequest::Table(table, parameters_from_query(query)?))
}

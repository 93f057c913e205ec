//! Result formatting for the CLI.

use bench_core::{BenchmarkParameters, SuiteResult};
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use std::time::Duration;

/// Output format for benchmark results.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Render a result in the requested format.
pub fn render(
    result: &SuiteResult,
    params: &BenchmarkParameters,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Table => Ok(format_table(result, params)),
    }
}

/// Format a suite result as a table, one row per repetition.
pub fn format_table(result: &SuiteResult, params: &BenchmarkParameters) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "Table",
        "Repetition",
        "Generation",
        "Load",
        "Rows/sec",
    ]);

    for (variant, timings) in result.iter() {
        for (repetition, timing) in timings.timings().iter().enumerate() {
            table.add_row(vec![
                Cell::new(variant.table_name()),
                Cell::new(repetition),
                Cell::new(format_duration(timing.generation_elapsed)),
                Cell::new(format_duration(timing.load_elapsed)),
                Cell::new(format!(
                    "{:.1}",
                    timing.load_rows_per_second(params.row_count)
                )),
            ]);
        }

        let total_load = timings.total_load();
        let total_rows = params.row_count * timings.len() as u64;
        let throughput = if total_load.as_secs_f64() > 0.0 {
            total_rows as f64 / total_load.as_secs_f64()
        } else {
            0.0
        };
        table.add_row(vec![
            Cell::new(variant.table_name()).fg(Color::Cyan),
            Cell::new("TOTAL").fg(Color::Cyan),
            Cell::new(format_duration(timings.total_generation())),
            Cell::new(format_duration(total_load)),
            Cell::new(format!("{throughput:.1}")),
        ]);
    }

    format!(
        "{table}\n{} rows x {} repetitions, batch size {}\n",
        params.row_count, params.repeat_count, params.batch_size
    )
}

fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs >= 1.0 {
        format!("{secs:.3}s")
    } else {
        format!("{:.3}ms", secs * 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bench_core::{TableVariant, TimingPair};

    fn sample() -> SuiteResult {
        let mut result = SuiteResult::new();
        result.insert(
            TableVariant::SimpleTable,
            vec![
                TimingPair::new(Duration::from_millis(5), Duration::from_millis(500)),
                TimingPair::new(Duration::from_millis(6), Duration::from_secs(2)),
            ]
            .into(),
        );
        result
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.500s");
        assert_eq!(format_duration(Duration::from_micros(2500)), "2.500ms");
    }

    #[test]
    fn test_table_output() {
        let params = BenchmarkParameters::new(1000, 2, 100).unwrap();
        let output = format_table(&sample(), &params);
        assert!(output.contains("SimpleTable"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("2000.0"));
        assert!(output.contains("1000 rows x 2 repetitions, batch size 100"));
    }

    #[test]
    fn test_json_output() {
        let params = BenchmarkParameters::new(1000, 2, 100).unwrap();
        let output = render(&sample(), &params, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["SimpleTable"][1]["loadElapsed"], 2.0);
    }
}

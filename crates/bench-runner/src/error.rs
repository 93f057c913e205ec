//! Error types for benchmark runs.

use bench_core::ParameterError;
use std::fmt;
use thiserror::Error;

/// Stage of a table run in which a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Reset,
    Generate,
    Load,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Reset => write!(f, "reset"),
            Phase::Generate => write!(f, "generate"),
            Phase::Load => write!(f, "load"),
        }
    }
}

/// Errors that abort a table run (and with it the suite).
#[derive(Error, Debug)]
pub enum RunError {
    /// Parameters rejected before any database work.
    #[error("Invalid parameters: {0}")]
    Parameter(#[from] ParameterError),

    /// A reset, generate or load step failed.
    #[error(
        "Table '{table}' failed during {phase}{}: {source}",
        repetition_suffix(.repetition)
    )]
    Phase {
        table: String,
        phase: Phase,
        /// `None` for the reset step, which precedes all repetitions.
        repetition: Option<u64>,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

fn repetition_suffix(repetition: &Option<u64>) -> String {
    repetition
        .map(|r| format!(" of repetition {r}"))
        .unwrap_or_default()
}

impl RunError {
    pub(crate) fn phase<E>(table: &str, phase: Phase, repetition: Option<u64>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        RunError::Phase {
            table: table.to_string(),
            phase,
            repetition,
            source: Box::new(source),
        }
    }

    /// Table that failed, if the failure happened inside a table run.
    pub fn table(&self) -> Option<&str> {
        match self {
            RunError::Parameter(_) => None,
            RunError::Phase { table, .. } => Some(table),
        }
    }

    /// Phase that failed, if the failure happened inside a table run.
    pub fn failed_phase(&self) -> Option<Phase> {
        match self {
            RunError::Parameter(_) => None,
            RunError::Phase { phase, .. } => Some(*phase),
        }
    }

    /// The target's own error, if the failure came from a phase and was
    /// raised as an `E`.
    pub fn source_as<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            RunError::Parameter(_) => None,
            RunError::Phase { source, .. } => source.downcast_ref::<E>(),
        }
    }

    /// Whether the caller supplied bad input (as opposed to a run failure).
    pub fn is_caller_error(&self) -> bool {
        matches!(self, RunError::Parameter(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("relation does not exist")]
    struct MissingTable;

    #[test]
    fn test_phase_error_message() {
        let err = RunError::phase("SimpleTable", Phase::Load, Some(2), MissingTable);
        assert_eq!(
            err.to_string(),
            "Table 'SimpleTable' failed during load of repetition 2: relation does not exist"
        );
        assert_eq!(err.table(), Some("SimpleTable"));
        assert_eq!(err.failed_phase(), Some(Phase::Load));
        assert!(!err.is_caller_error());
    }

    #[test]
    fn test_source_downcast() {
        let err = RunError::phase("SimpleTable", Phase::Reset, None, MissingTable);
        assert!(err.source_as::<MissingTable>().is_some());
        assert!(err.source_as::<std::fmt::Error>().is_none());

        let err: RunError = ParameterError::NotPositive("count").into();
        assert!(err.source_as::<MissingTable>().is_none());
    }

    #[test]
    fn test_reset_error_message() {
        let err = RunError::phase("ComplexTable", Phase::Reset, None, MissingTable);
        assert_eq!(
            err.to_string(),
            "Table 'ComplexTable' failed during reset: relation does not exist"
        );
    }

    #[test]
    fn test_parameter_error_is_caller_error() {
        let err: RunError = ParameterError::NotPositive("count").into();
        assert!(err.is_caller_error());
        assert_eq!(err.table(), None);
    }
}

// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while reading, reconstructing, analysing or rendering a log.
///
/// `InputNotFound`, `Io`, `EmptySequence`, `TimestampOutOfRange` and `Plot` abort a run.
/// `MalformedRecord` only skips one line, and the per-channel variants only
/// mark that channel's statistics undefined.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("input file '{}' does not exist", path.display())]
    InputNotFound { path: PathBuf },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
    #[error("channel '{channel}' has no valid samples")]
    EmptySeries { channel: String },
    #[error("timestamp sequence is empty")]
    EmptySequence,
    #[error("timestamp at sample {index} is too far from the first one to represent")]
    TimestampOutOfRange { index: usize },
    #[error("no periods detected on channel '{channel}'")]
    NoPeriodsDetected { channel: String },
    #[error("channel '{channel}' produced an unusable mean period of {mean_period_ms} ms")]
    DegeneratePeriod { channel: String, mean_period_ms: f64 },
    #[error("failed to render plot: {0}")]
    Plot(String),
}

impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for AnalysisError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        AnalysisError::Plot(format!("{value:?}"))
    }
}

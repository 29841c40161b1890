// src/data_analysis/time_normalization.rs

use crate::error::AnalysisError;

/// Rebases timestamps so the first one is zero.
pub fn normalize_timestamps(timestamps_ms: &[i64]) -> Result<Vec<i64>, AnalysisError> {
    let start = *timestamps_ms.first().ok_or(AnalysisError::EmptySequence)?;
    timestamps_ms
        .iter()
        .enumerate()
        .map(|(index, t)| {
            t.checked_sub(start)
                .ok_or(AnalysisError::TimestampOutOfRange { index })
        })
        .collect()
}

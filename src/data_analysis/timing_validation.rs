// src/data_analysis/timing_validation.rs

/// Result of checking that samples arrive at a fixed interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingOutcome {
    Success,
    /// First offending pair: `timestamps[index]` -> `timestamps[index + 1]`.
    Failed {
        index: usize,
        expected_ms: i64,
        actual_ms: i64,
    },
}

impl TimingOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TimingOutcome::Success)
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_success() {
            "success"
        } else {
            "failed"
        }
    }
}

/// Checks that every consecutive pair of timestamps is exactly `expected_interval_ms` apart.
/// Stops at the first mismatch. A gap too wide for `i64` is reported saturated.
pub fn validate_timing(timestamps_ms: &[i64], expected_interval_ms: i64) -> TimingOutcome {
    timestamps_ms
        .windows(2)
        .enumerate()
        .find_map(|(index, pair)| {
            let gap = pair[1].checked_sub(pair[0]);
            (gap != Some(expected_interval_ms)).then(|| TimingOutcome::Failed {
                index,
                expected_ms: expected_interval_ms,
                actual_ms: pair[1].saturating_sub(pair[0]),
            })
        })
        .unwrap_or(TimingOutcome::Success)
}

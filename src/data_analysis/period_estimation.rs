// src/data_analysis/period_estimation.rs

use crate::constants::{FREQUENCY_DECIMALS, MS_PER_SECOND};
use crate::data_analysis::amplitude::ValueRange;
use crate::data_analysis::channel_series::ChannelSeries;
use crate::error::AnalysisError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtremumKind {
    Trough,
    Peak,
}

/// A half-cycle boundary found by the extremum scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtremumEvent {
    pub timestamp_ms: i64,
    pub kind: ExtremumKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodEstimate {
    /// Number of trough -> peak pairs found.
    pub half_periods: usize,
    /// Sum of all trough -> peak durations.
    pub accumulated_ms: i64,
    /// Full period: twice the mean half-period.
    pub mean_period_ms: f64,
    /// `1000 / mean_period_ms`, rounded to two decimals.
    pub frequency_hz: f64,
}

/// Scans the series once for troughs and peaks.
///
/// A trough is taken when no trough is open and the sample equals the global
/// minimum or the next sample is strictly greater. A peak closes the open
/// trough when the sample equals the global maximum or the next sample is
/// strictly smaller. The trough test runs before the peak test on each sample.
/// The next-sample comparison is only made while two more samples follow.
pub fn detect_extrema(series: &ChannelSeries, range: ValueRange) -> Vec<ExtremumEvent> {
    let values = &series.values;
    let n = values.len();
    let mut events = Vec::new();
    let mut trough_open = false;

    for i in 0..n {
        let value = values[i];
        let timestamp_ms = series.timestamps_ms[i];
        let has_lookahead = i + 2 < n;

        if !trough_open && (value == range.min || (has_lookahead && values[i + 1] > value)) {
            trough_open = true;
            events.push(ExtremumEvent {
                timestamp_ms,
                kind: ExtremumKind::Trough,
            });
        }

        if trough_open && (value == range.max || (has_lookahead && values[i + 1] < value)) {
            trough_open = false;
            events.push(ExtremumEvent {
                timestamp_ms,
                kind: ExtremumKind::Peak,
            });
        }
    }

    events
}

/// Estimates the fundamental frequency of a gap-filled series from its
/// trough -> peak half-periods, assuming a symmetric waveform.
pub fn estimate_period(series: &ChannelSeries, range: ValueRange) -> Result<PeriodEstimate, AnalysisError> {
    // A flat line has no turning points; every sample would match both extremes.
    if range.is_constant() {
        return Err(AnalysisError::NoPeriodsDetected {
            channel: series.name.clone(),
        });
    }

    let mut start: Option<i64> = None;
    let mut accumulated_ms = 0i64;
    let mut half_periods = 0usize;

    for event in detect_extrema(series, range) {
        match event.kind {
            ExtremumKind::Trough => start = Some(event.timestamp_ms),
            ExtremumKind::Peak => {
                if let Some(trough_ms) = start.take() {
                    accumulated_ms = event
                        .timestamp_ms
                        .checked_sub(trough_ms)
                        .and_then(|half_ms| accumulated_ms.checked_add(half_ms))
                        .ok_or_else(|| AnalysisError::DegeneratePeriod {
                            channel: series.name.clone(),
                            mean_period_ms: f64::INFINITY,
                        })?;
                    half_periods += 1;
                }
            }
        }
    }

    if half_periods == 0 {
        return Err(AnalysisError::NoPeriodsDetected {
            channel: series.name.clone(),
        });
    }

    let mean_period_ms = 2.0 * (accumulated_ms as f64 / half_periods as f64);
    if mean_period_ms <= 0.0 {
        return Err(AnalysisError::DegeneratePeriod {
            channel: series.name.clone(),
            mean_period_ms,
        });
    }

    Ok(PeriodEstimate {
        half_periods,
        accumulated_ms,
        mean_period_ms,
        frequency_hz: round_to_decimals(MS_PER_SECOND / mean_period_ms, FREQUENCY_DECIMALS),
    })
}

fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    fn series(timestamps_ms: &[i64], values: &[f64]) -> (ChannelSeries, ValueRange) {
        let series = ChannelSeries {
            name: "data".to_string(),
            timestamps_ms: timestamps_ms.to_vec(),
            values: Array1::from(values.to_vec()),
        };
        let range = ValueRange::of("data", &series.values).unwrap();
        (series, range)
    }

    #[test]
    fn test_square_alternation_50hz() {
        let (s, range) = series(&[0, 10, 20, 30], &[1.0, -1.0, 1.0, -1.0]);
        let estimate = estimate_period(&s, range).unwrap();
        assert_eq!(estimate.half_periods, 1);
        assert_eq!(estimate.accumulated_ms, 10);
        assert_eq!(estimate.mean_period_ms, 20.0);
        assert_eq!(estimate.frequency_hz, 50.0);
    }

    #[test]
    fn test_events_alternate_trough_first() {
        let (s, range) = series(&[0, 10, 20, 30], &[1.0, -1.0, 1.0, -1.0]);
        let events = detect_extrema(&s, range);
        assert_eq!(
            events,
            vec![
                ExtremumEvent { timestamp_ms: 10, kind: ExtremumKind::Trough },
                ExtremumEvent { timestamp_ms: 20, kind: ExtremumKind::Peak },
                ExtremumEvent { timestamp_ms: 30, kind: ExtremumKind::Trough },
            ]
        );
    }

    #[test]
    fn test_sampled_cosine() {
        // 50 Hz sampled every millisecond, starting at a trough.
        let timestamps: Vec<i64> = (0..100).collect();
        let values: Vec<f64> = timestamps
            .iter()
            .map(|&t| -(std::f64::consts::PI * t as f64 / 10.0).cos())
            .collect();
        let (s, range) = series(&timestamps, &values);
        let estimate = estimate_period(&s, range).unwrap();
        assert_eq!(estimate.half_periods, 5);
        assert_eq!(estimate.accumulated_ms, 50);
        assert_eq!(estimate.frequency_hz, 50.0);
    }

    #[test]
    fn test_lookahead_stops_two_samples_before_end() {
        // Only the global max at the last sample can close the trough opened at t=0.
        let (s, range) = series(&[0, 10, 20, 30], &[0.0, 1.0, 2.0, 3.0]);
        let estimate = estimate_period(&s, range).unwrap();
        assert_eq!(estimate.accumulated_ms, 30);
        assert_eq!(estimate.mean_period_ms, 60.0);
        assert_eq!(estimate.frequency_hz, 16.67);
    }

    #[test]
    fn test_noisy_turning_points_are_counted() {
        // The small dip at t=20 opens a second half-cycle.
        let (s, range) = series(
            &[0, 10, 20, 30, 40, 50, 60],
            &[-2.0, 1.0, 0.5, 0.8, 0.2, 2.0, 0.0],
        );
        let events = detect_extrema(&s, range);
        let kinds: Vec<ExtremumKind> = events.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ExtremumKind::Trough,
                ExtremumKind::Peak,
                ExtremumKind::Trough,
                ExtremumKind::Peak,
                ExtremumKind::Trough,
                ExtremumKind::Peak,
            ]
        );
        let estimate = estimate_period(&s, range).unwrap();
        assert_eq!(estimate.half_periods, 3);
        // 0->10, 20->30, 40->50
        assert_eq!(estimate.accumulated_ms, 30);
    }

    #[test]
    fn test_constant_series_has_no_periods() {
        let (s, range) = series(&[0, 10, 20], &[2.0, 2.0, 2.0]);
        assert!(matches!(
            estimate_period(&s, range),
            Err(AnalysisError::NoPeriodsDetected { .. })
        ));
    }

    #[test]
    fn test_monotonic_falling_has_no_periods() {
        // Trough only at the last sample, never closed.
        let (s, range) = series(&[0, 10, 20], &[3.0, 2.0, 1.0]);
        assert!(matches!(
            estimate_period(&s, range),
            Err(AnalysisError::NoPeriodsDetected { .. })
        ));
    }

    #[test]
    fn test_half_period_wider_than_i64() {
        let (s, range) = series(&[i64::MIN, i64::MAX], &[-1.0, 1.0]);
        assert!(matches!(
            estimate_period(&s, range),
            Err(AnalysisError::DegeneratePeriod { .. })
        ));
    }

    #[test]
    fn test_round_to_decimals() {
        assert_eq!(round_to_decimals(33.33333, 2), 33.33);
        assert_eq!(round_to_decimals(16.666666, 2), 16.67);
    }
}

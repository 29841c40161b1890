// src/data_analysis/gap_fill.rs

use crate::data_input::log_data::SampleValue;
use crate::error::AnalysisError;

/// Replaces every missing slot with the nearest preceding valid value.
/// A missing run at the start of the series takes the first valid value that follows it.
///
/// The output has the same length and ordering as `raw`. A non-empty series
/// without a single valid value fails with `EmptySeries`.
pub fn fill_gaps(channel: &str, raw: &[SampleValue]) -> Result<Vec<f64>, AnalysisError> {
    let mut filled = Vec::with_capacity(raw.len());
    let mut last_valid: Option<f64> = None;

    for (index, sample) in raw.iter().enumerate() {
        let value = match (sample.value(), last_valid) {
            (Some(v), _) => {
                last_valid = Some(v);
                v
            }
            (None, Some(previous)) => previous,
            (None, None) => {
                // Leading gap: backfill from the first valid value ahead.
                let first_valid = raw[index..]
                    .iter()
                    .find_map(|s| s.value())
                    .ok_or_else(|| AnalysisError::EmptySeries {
                        channel: channel.to_string(),
                    })?;
                last_valid = Some(first_valid);
                first_valid
            }
        };
        filled.push(value);
    }

    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use SampleValue::{Missing, Present};

    #[test]
    fn test_forward_fill() {
        let raw = [Present(1.0), Missing, Missing, Present(3.0), Missing];
        assert_eq!(fill_gaps("out1", &raw).unwrap(), vec![1.0, 1.0, 1.0, 3.0, 3.0]);
    }

    #[test]
    fn test_leading_gap_backfilled() {
        let raw = [Missing, Missing, Present(-2.5), Missing, Present(4.0)];
        assert_eq!(
            fill_gaps("out2", &raw).unwrap(),
            vec![-2.5, -2.5, -2.5, -2.5, 4.0]
        );
    }

    #[test]
    fn test_present_values_preserved() {
        let raw = [Missing, Present(0.0), Present(7.5), Missing, Present(-1.0), Missing];
        let filled = fill_gaps("out3", &raw).unwrap();
        assert_eq!(filled.len(), raw.len());
        for (i, sample) in raw.iter().enumerate() {
            if let Present(v) = sample {
                assert_eq!(filled[i], *v);
            }
        }
    }

    #[test]
    fn test_all_missing_is_empty_series() {
        let raw = [Missing, Missing];
        match fill_gaps("out1", &raw) {
            Err(AnalysisError::EmptySeries { channel }) => assert_eq!(channel, "out1"),
            other => panic!("expected EmptySeries, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(fill_gaps("data", &[]).unwrap().is_empty());
    }
}

// src/data_analysis/amplitude.rs

use ndarray::Array1;
use ndarray_stats::QuantileExt; // .min() and .max() on Array1

use crate::error::AnalysisError;

/// Global extremes of a reconstructed series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn of(channel: &str, values: &Array1<f64>) -> Result<Self, AnalysisError> {
        let empty = || AnalysisError::EmptySeries {
            channel: channel.to_string(),
        };
        let min = *values.min().map_err(|_| empty())?;
        let max = *values.max().map_err(|_| empty())?;
        Ok(Self { min, max })
    }

    /// The excursion from zero with the larger magnitude: `max` when it
    /// exceeds `-min`, otherwise `-min`.
    pub fn amplitude(&self) -> f64 {
        if self.max > -self.min {
            self.max
        } else {
            -self.min
        }
    }

    pub fn peak_to_peak(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_constant(&self) -> bool {
        self.max == self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn estimate_amplitude(channel: &str, values: &Array1<f64>) -> Result<f64, AnalysisError> {
        ValueRange::of(channel, values).map(|range| range.amplitude())
    }

    #[test]
    fn test_symmetric_wave() {
        let values = array![1.0, -1.0, 1.0, -1.0];
        assert_eq!(estimate_amplitude("data", &values).unwrap(), 1.0);
        let range = ValueRange::of("data", &values).unwrap();
        assert_eq!(range.peak_to_peak(), 2.0);
    }

    #[test]
    fn test_dominant_excursion() {
        assert_eq!(estimate_amplitude("out1", &array![0.5, 4.0, -2.0]).unwrap(), 4.0);
        assert_eq!(estimate_amplitude("out1", &array![0.5, 2.0, -6.0]).unwrap(), 6.0);
        // Entirely positive signal offset from zero.
        assert_eq!(estimate_amplitude("out1", &array![2.0, 3.0, 5.0]).unwrap(), 5.0);
    }

    #[test]
    fn test_invariant_under_duplicate_extremum() {
        let mut values = vec![0.3, -4.5, 2.0, 1.0];
        let before = estimate_amplitude("out2", &Array1::from(values.clone())).unwrap();
        values.push(-4.5);
        let after = estimate_amplitude("out2", &Array1::from(values)).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_empty_series() {
        let values: Array1<f64> = Array1::from(vec![]);
        assert!(matches!(
            estimate_amplitude("out3", &values),
            Err(AnalysisError::EmptySeries { .. })
        ));
    }

    #[test]
    fn test_constant_detection() {
        let range = ValueRange::of("data", &array![3.0, 3.0, 3.0]).unwrap();
        assert!(range.is_constant());
        assert_eq!(range.peak_to_peak(), 0.0);
    }
}

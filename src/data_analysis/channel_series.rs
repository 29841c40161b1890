// src/data_analysis/channel_series.rs

use ndarray::Array1;

use crate::data_analysis::gap_fill::fill_gaps;
use crate::data_input::log_data::SampleValue;
use crate::error::AnalysisError;

/// A reconstructed channel: every sample has a real value.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSeries {
    pub name: String,
    pub timestamps_ms: Vec<i64>,
    pub values: Array1<f64>,
}

impl ChannelSeries {
    /// Gap-fills `raw` and pairs it with the sample timestamps.
    pub fn reconstruct(
        name: &str,
        timestamps_ms: &[i64],
        raw: &[SampleValue],
    ) -> Result<Self, AnalysisError> {
        debug_assert_eq!(timestamps_ms.len(), raw.len());
        let filled = fill_gaps(name, raw)?;
        Ok(Self {
            name: name.to_string(),
            timestamps_ms: timestamps_ms.to_vec(),
            values: Array1::from(filled),
        })
    }
}

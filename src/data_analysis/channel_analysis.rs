// src/data_analysis/channel_analysis.rs

use crate::data_analysis::amplitude::ValueRange;
use crate::data_analysis::channel_series::ChannelSeries;
use crate::data_analysis::period_estimation::estimate_period;
use crate::data_analysis::time_normalization::normalize_timestamps;
use crate::data_input::log_data::{ParsedLog, SampleValue};
use crate::error::AnalysisError;

/// Statistics shown next to a channel's plot. `None` means undefined.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChannelStatistics {
    pub amplitude_v: Option<f64>,
    pub peak_to_peak_v: Option<f64>,
    pub frequency_hz: Option<f64>,
    pub half_periods: usize,
}

impl ChannelStatistics {
    pub fn frequency_label(&self) -> String {
        match self.frequency_hz {
            Some(hz) => format!("Frequency(Hz): {hz:.2}"),
            None => "Frequency(Hz): undefined".to_string(),
        }
    }

    pub fn amplitude_label(&self) -> String {
        match self.amplitude_v {
            Some(v) => format!("Amplitude(V): {}", format_volts(v)),
            None => "Amplitude(V): undefined".to_string(),
        }
    }

    pub fn peak_to_peak_label(&self) -> String {
        match self.peak_to_peak_v {
            Some(v) => format!("Peak-to-peak(V): {}", format_volts(v)),
            None => "Peak-to-peak(V): undefined".to_string(),
        }
    }
}

/// Shortest round-trip text, such as `1.0` or `1.25`.
fn format_volts(v: f64) -> String {
    format!("{v:?}")
}

/// Reconstruction and statistics for one channel.
#[derive(Debug)]
pub struct ChannelAnalysis {
    pub name: String,
    /// `None` when the channel could not be reconstructed.
    pub series: Option<ChannelSeries>,
    pub statistics: ChannelStatistics,
    /// Non-fatal problems met while analysing this channel.
    pub issues: Vec<AnalysisError>,
}

/// All channels of one log plus the zero-based time axis.
#[derive(Debug)]
pub struct LogAnalysis {
    pub timestamps_ms: Vec<i64>,
    pub normalized_time_ms: Vec<i64>,
    pub channels: Vec<ChannelAnalysis>,
}

/// Gap-fills one channel and computes its amplitude, peak-to-peak and frequency.
/// Failures are recorded in `issues` and leave the affected statistic undefined.
pub fn analyze_channel(name: &str, timestamps_ms: &[i64], raw: &[SampleValue]) -> ChannelAnalysis {
    let mut issues = Vec::new();
    let mut statistics = ChannelStatistics::default();

    let series = match ChannelSeries::reconstruct(name, timestamps_ms, raw) {
        Ok(series) => series,
        Err(e) => {
            log::warn!("Channel '{name}': {e}");
            return ChannelAnalysis {
                name: name.to_string(),
                series: None,
                statistics,
                issues: vec![e],
            };
        }
    };

    match ValueRange::of(name, &series.values) {
        Ok(range) => {
            statistics.amplitude_v = Some(range.amplitude());
            statistics.peak_to_peak_v = Some(range.peak_to_peak());
            match estimate_period(&series, range) {
                Ok(estimate) => {
                    statistics.frequency_hz = Some(estimate.frequency_hz);
                    statistics.half_periods = estimate.half_periods;
                }
                Err(e) => {
                    log::warn!("Channel '{name}': {e}");
                    issues.push(e);
                }
            }
        }
        Err(e) => {
            log::warn!("Channel '{name}': {e}");
            issues.push(e);
        }
    }

    ChannelAnalysis {
        name: name.to_string(),
        series: Some(series),
        statistics,
        issues,
    }
}

/// Analyses every channel of a parsed log independently.
///
/// Fails with `EmptySequence` when the log holds no samples at all, or
/// `TimestampOutOfRange` when timestamps cannot be rebased to the first one.
pub fn analyze_log(parsed: &ParsedLog) -> Result<LogAnalysis, AnalysisError> {
    let timestamps_ms = parsed.timestamps();
    let normalized_time_ms = normalize_timestamps(&timestamps_ms)?;

    let channels = parsed
        .layout
        .channel_names()
        .iter()
        .enumerate()
        .map(|(index, name)| analyze_channel(name, &timestamps_ms, &parsed.channel_values(index)))
        .collect();

    Ok(LogAnalysis {
        timestamps_ms,
        normalized_time_ms,
        channels,
    })
}

// src/plot_functions/plot_channel_waveforms.rs

use std::path::Path;

use plotters::style::RGBColor;

use crate::channel_names::channel_label;
use crate::constants::{CHANNEL_COLORS, LINE_WIDTH_PLOT};
use crate::data_analysis::channel_analysis::{ChannelAnalysis, LogAnalysis};
use crate::error::AnalysisError;
use crate::plot_framework::{
    calculate_range, calculate_time_range, draw_stacked_plot, PlotConfig, PlotSeries,
};

/// Builds the chart for one reconstructed channel against the zero-based time axis.
pub fn channel_plot_config(
    channel_index: usize,
    channel: &ChannelAnalysis,
    normalized_time_ms: &[i64],
) -> Option<PlotConfig> {
    let series = channel.series.as_ref()?;

    let data: Vec<(f64, f64)> = normalized_time_ms
        .iter()
        .zip(series.values.iter())
        .map(|(t, v)| (*t as f64, *v))
        .collect();
    if data.is_empty() {
        return None;
    }

    let mut time_min = f64::INFINITY;
    let mut time_max = f64::NEG_INFINITY;
    let mut val_min = f64::INFINITY;
    let mut val_max = f64::NEG_INFINITY;
    for (time, value) in &data {
        time_min = time_min.min(*time);
        time_max = time_max.max(*time);
        val_min = val_min.min(*value);
        val_max = val_max.max(*value);
    }

    let (final_value_min, final_value_max) = calculate_range(val_min, val_max);
    let label = channel_label(&channel.name);
    let color: RGBColor = *CHANNEL_COLORS[channel_index % CHANNEL_COLORS.len()];

    Some(PlotConfig {
        title: format!("{label} Waveform"),
        x_range: calculate_time_range(time_min, time_max),
        y_range: final_value_min..final_value_max,
        series: vec![PlotSeries {
            data,
            label: label.clone(),
            color,
            stroke_width: LINE_WIDTH_PLOT,
        }],
        x_label: "Time(ms)".to_string(),
        y_label: label,
        annotations: vec![
            channel.statistics.frequency_label(),
            channel.statistics.amplitude_label(),
            channel.statistics.peak_to_peak_label(),
        ],
    })
}

/// Generates the stacked waveform plot, one subplot per channel.
///
/// Returns whether at least one channel was drawn.
pub fn plot_channel_waveforms(
    analysis: &LogAnalysis,
    root_name: &str,
    output_path: &Path,
) -> Result<bool, AnalysisError> {
    let plot_type_name = "Waveform";
    let channel_labels: Vec<String> = analysis
        .channels
        .iter()
        .map(|c| channel_label(&c.name))
        .collect();

    draw_stacked_plot(
        output_path,
        root_name,
        plot_type_name,
        &channel_labels,
        |channel_index| {
            let channel = analysis.channels.get(channel_index)?;
            channel_plot_config(channel_index, channel, &analysis.normalized_time_ms)
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_analysis::channel_analysis::analyze_channel;
    use crate::data_input::log_data::SampleValue::{Missing, Present};

    #[test]
    fn test_plot_config_uses_normalized_time_and_labels() {
        let channel = analyze_channel(
            "out2",
            &[1000, 1010, 1020, 1030],
            &[Missing, Present(-1.0), Present(1.0), Present(-1.0)],
        );
        let config = channel_plot_config(1, &channel, &[0, 10, 20, 30]).unwrap();
        assert_eq!(config.y_label, "Out2");
        assert_eq!(config.x_label, "Time(ms)");
        assert_eq!(config.x_range, 0.0..30.0);
        assert_eq!(
            config.series[0].data,
            vec![(0.0, -1.0), (10.0, -1.0), (20.0, 1.0), (30.0, -1.0)]
        );
        assert_eq!(
            config.annotations,
            vec![
                "Frequency(Hz): 25.00".to_string(),
                "Amplitude(V): 1.0".to_string(),
                "Peak-to-peak(V): 2.0".to_string(),
            ]
        );
        assert!(config.y_range.start < -1.0 && config.y_range.end > 1.0);
    }

    #[test]
    fn test_unreconstructed_channel_has_no_config() {
        let channel = analyze_channel("out3", &[0, 10], &[Missing, Missing]);
        assert!(channel_plot_config(2, &channel, &[0, 10]).is_none());
    }
}

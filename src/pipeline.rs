// src/pipeline.rs

use std::path::{Path, PathBuf};

use crate::cli::{input_log_path, output_plot_path};
use crate::data_analysis::channel_analysis::{analyze_log, LogAnalysis};
use crate::data_input::log_data::{LogLayout, ParsedLog};
use crate::data_input::log_parser::parse_log_file;
use crate::error::AnalysisError;
use crate::plot_functions::plot_channel_waveforms::plot_channel_waveforms;

/// Outcome of one read -> analyse -> render run.
#[derive(Debug)]
pub struct RunReport {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub parsed: ParsedLog,
    pub analysis: LogAnalysis,
    /// False when every subplot shows only a placeholder.
    pub any_channel_plotted: bool,
}

/// Reads `<base>.log`, reconstructs and analyses each channel, and writes `<base>.png`.
///
/// Nothing is written when the input is missing or holds no decodable sample.
pub fn run_log_analysis(base_name: &str, layout: LogLayout) -> Result<RunReport, AnalysisError> {
    let input_path = input_log_path(base_name);
    let output_path = output_plot_path(base_name);

    let parsed = parse_log_file(&input_path, layout)?;
    let analysis = analyze_log(&parsed)?;

    let root_name = Path::new(base_name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| base_name.to_string());
    let any_channel_plotted = plot_channel_waveforms(&analysis, &root_name, &output_path)?;

    Ok(RunReport {
        input_path,
        output_path,
        parsed,
        analysis,
        any_channel_plotted,
    })
}

/// Prints the per-channel statistics in the same wording as the plot annotations.
pub fn print_channel_summary(analysis: &LogAnalysis) {
    for channel in &analysis.channels {
        println!(
            "  {}: {}, {}, {}",
            crate::channel_names::channel_label(&channel.name),
            channel.statistics.frequency_label(),
            channel.statistics.amplitude_label(),
            channel.statistics.peak_to_peak_label()
        );
    }
}

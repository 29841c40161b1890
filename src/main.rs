// src/main.rs - Single-channel port log analyzer

use std::env;
use std::error::Error;

use waveform_log_render::cli::AnalyzerArgs;
use waveform_log_render::crate_version;
use waveform_log_render::data_input::log_data::LogLayout;
use waveform_log_render::pipeline::{print_channel_summary, run_log_analysis};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    let cli = match AnalyzerArgs::parse(&args) {
        Ok(cli) => cli,
        Err(usage) => {
            eprintln!("{usage}");
            std::process::exit(1);
        }
    };

    println!("log_analyzer {}", crate_version());
    println!(
        "Processing log file: {}",
        waveform_log_render::cli::input_log_path(&cli.base_name).display()
    );

    // --- Read, Reconstruct, Analyse, Render ---
    let report = match run_log_analysis(&cli.base_name, LogLayout::SingleChannel) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "Finished reading {} samples ({} malformed lines skipped).",
        report.parsed.samples.len(),
        report.parsed.skipped_lines.len()
    );
    match report.parsed.sample_rate_hz {
        Some(rate) => println!("Estimated Sample Rate: {rate:.2} Hz"),
        None => println!("Warning: Could not determine sample rate (need >= 2 samples with distinct timestamps)."),
    }
    print_channel_summary(&report.analysis);

    println!("Result saved: {}", report.output_path.display());
    Ok(())
}

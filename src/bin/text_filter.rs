// src/bin/text_filter.rs - Drops "no such property" lines from a client log

use std::env;
use std::error::Error;

use waveform_log_render::cli::{filtered_log_path, input_log_path, FilterArgs};
use waveform_log_render::constants::FILTER_MARKER;
use waveform_log_render::text_filter::filter_log_file;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let cli = match FilterArgs::parse(&args) {
        Ok(cli) => cli,
        Err(usage) => {
            eprintln!("{usage}");
            std::process::exit(1);
        }
    };

    let input_path = input_log_path(&cli.base_name);
    let output_path = filtered_log_path(&cli.base_name);

    let summary = match filter_log_file(&input_path, &output_path, FILTER_MARKER) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "{} lines containing '{}' have been removed and saved to {}",
        summary.removed,
        FILTER_MARKER,
        output_path.display()
    );
    Ok(())
}

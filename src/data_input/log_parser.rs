// src/data_input/log_parser.rs

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::data_input::log_data::{LogLayout, ParsedLog, Sample};
use crate::error::AnalysisError;

/// Parses a JSON-lines log file into samples of the given layout.
///
/// Lines that fail to decode are skipped and recorded in `skipped_lines`;
/// only a missing or unreadable file aborts.
pub fn parse_log_file(input_file_path: &Path, layout: LogLayout) -> Result<ParsedLog, AnalysisError> {
    let file = File::open(input_file_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AnalysisError::InputNotFound {
            path: input_file_path.to_path_buf(),
        },
        _ => AnalysisError::Io(e),
    })?;
    parse_log_reader(BufReader::new(file), layout)
}

/// Same as [`parse_log_file`] for an already opened reader.
pub fn parse_log_reader<R: BufRead>(mut reader: R, layout: LogLayout) -> Result<ParsedLog, AnalysisError> {
    let mut samples: Vec<Sample> = Vec::new();
    let mut skipped_lines: Vec<usize> = Vec::new();
    let mut line_buf: Vec<u8> = Vec::new();
    let mut line_number = 0usize;

    loop {
        line_buf.clear();
        if reader.read_until(b'\n', &mut line_buf)? == 0 {
            break;
        }
        line_number += 1;

        let trimmed = line_buf.trim_ascii();
        if trimmed.is_empty() {
            continue;
        }

        match layout.decode(trimmed) {
            Ok(sample) => samples.push(sample),
            Err(e) => {
                let err = AnalysisError::MalformedRecord {
                    line: line_number,
                    reason: e.to_string(),
                };
                log::warn!("Skipping line: {err}");
                skipped_lines.push(line_number);
            }
        }
    }

    log::debug!(
        "Read {} samples ({} lines skipped) with layout {:?}",
        samples.len(),
        skipped_lines.len(),
        layout
    );

    let sample_rate_hz = estimate_sample_rate(&samples);

    Ok(ParsedLog {
        layout,
        samples,
        skipped_lines,
        sample_rate_hz,
    })
}

/// Mean sampling rate in Hz from the first and last timestamps.
fn estimate_sample_rate(samples: &[Sample]) -> Option<f64> {
    let (first, last) = match (samples.first(), samples.last()) {
        (Some(first), Some(last)) if samples.len() > 1 => (first, last),
        _ => return None,
    };
    let total_time_ms = (i128::from(last.timestamp_ms) - i128::from(first.timestamp_ms)) as f64;
    if total_time_ms <= 0.0 {
        return None;
    }
    Some((samples.len() - 1) as f64 * crate::constants::MS_PER_SECOND / total_time_ms)
}


// src/data_input/log_parser.rs

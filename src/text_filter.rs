// src/text_filter.rs

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use crate::error::AnalysisError;

/// Line counts from one filter pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub kept: usize,
    pub removed: usize,
}

/// Copies every line of `reader` that does not contain `marker` to `writer`, unchanged.
pub fn filter_lines<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    marker: &str,
) -> Result<FilterSummary, AnalysisError> {
    let marker = marker.as_bytes();
    let mut summary = FilterSummary::default();
    let mut line: Vec<u8> = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if contains(&line, marker) {
            summary.removed += 1;
        } else {
            writer.write_all(&line)?;
            summary.kept += 1;
        }
    }

    writer.flush()?;
    Ok(summary)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
}

/// Filters `input_path` into `output_path`, dropping lines that contain `marker`.
pub fn filter_log_file(
    input_path: &Path,
    output_path: &Path,
    marker: &str,
) -> Result<FilterSummary, AnalysisError> {
    let input = File::open(input_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AnalysisError::InputNotFound {
            path: input_path.to_path_buf(),
        },
        _ => AnalysisError::Io(e),
    })?;
    let output = File::create(output_path)?;
    let summary = filter_lines(BufReader::new(input), BufWriter::new(output), marker)?;
    log::debug!(
        "Filtered '{}': kept {}, removed {}",
        input_path.display(),
        summary.kept,
        summary.removed
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FILTER_MARKER;

    #[test]
    fn test_removes_marker_lines() {
        let input = "{\"timestamp\": 1, \"out1\": \"1.0\"}\n\
                     error: no such property 'foo'\n\
                     {\"timestamp\": 2, \"out1\": \"2.0\"}\n";
        let mut output = Vec::new();
        let summary = filter_lines(input.as_bytes(), &mut output, FILTER_MARKER).unwrap();
        assert_eq!(summary, FilterSummary { kept: 2, removed: 1 });
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "{\"timestamp\": 1, \"out1\": \"1.0\"}\n{\"timestamp\": 2, \"out1\": \"2.0\"}\n"
        );
    }

    #[test]
    fn test_keeps_final_line_without_newline() {
        let mut output = Vec::new();
        let summary = filter_lines("a\nb".as_bytes(), &mut output, FILTER_MARKER).unwrap();
        assert_eq!(summary.kept, 2);
        assert_eq!(output, b"a\nb");
    }

    #[test]
    fn test_filter_log_file_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = filter_log_file(
            &dir.path().join("absent.log"),
            &dir.path().join("absent_filterred.log"),
            FILTER_MARKER,
        );
        assert!(matches!(result, Err(AnalysisError::InputNotFound { .. })));
        assert!(!dir.path().join("absent_filterred.log").exists());
    }
}

// src/cli.rs

use std::path::PathBuf;

use crate::constants::{FILTERED_LOG_SUFFIX, LOG_EXTENSION, PLOT_EXTENSION};

/// `log_analyzer <base>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerArgs {
    pub base_name: String,
}

/// `timing_test <base> <interval_ms>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingTestArgs {
    pub base_name: String,
    pub expected_interval_ms: i64,
}

/// `text_filter <base>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterArgs {
    pub base_name: String,
}

fn program_name(args: &[String], fallback: &str) -> String {
    args.first().cloned().unwrap_or_else(|| fallback.to_string())
}

impl AnalyzerArgs {
    /// Parses `std::env::args()`; the error is the usage message.
    pub fn parse(args: &[String]) -> Result<Self, String> {
        match args {
            [_, base_name] => Ok(Self {
                base_name: base_name.clone(),
            }),
            _ => Err(format!("Usage: {} <log base name>", program_name(args, "log_analyzer"))),
        }
    }
}

impl TimingTestArgs {
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let usage = || {
            format!(
                "Usage: {} <client log base name> <interval ms>",
                program_name(args, "timing_test")
            )
        };
        match args {
            [_, base_name, interval] => {
                let expected_interval_ms = interval.trim().parse::<i64>().map_err(|_| usage())?;
                Ok(Self {
                    base_name: base_name.clone(),
                    expected_interval_ms,
                })
            }
            _ => Err(usage()),
        }
    }
}

impl FilterArgs {
    pub fn parse(args: &[String]) -> Result<Self, String> {
        match args {
            [_, base_name] => Ok(Self {
                base_name: base_name.clone(),
            }),
            _ => Err(format!("Usage: {} <log base name>", program_name(args, "text_filter"))),
        }
    }
}

// Extensions are appended, not substituted: base names may contain dots.
pub fn input_log_path(base_name: &str) -> PathBuf {
    PathBuf::from(format!("{base_name}.{LOG_EXTENSION}"))
}

pub fn output_plot_path(base_name: &str) -> PathBuf {
    PathBuf::from(format!("{base_name}.{PLOT_EXTENSION}"))
}

pub fn filtered_log_path(base_name: &str) -> PathBuf {
    PathBuf::from(format!("{base_name}{FILTERED_LOG_SUFFIX}.{LOG_EXTENSION}"))
}

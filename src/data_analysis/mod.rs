// src/data_analysis/mod.rs

pub mod amplitude;
pub mod channel_analysis;
pub mod channel_series;
pub mod gap_fill;
pub mod period_estimation;
pub mod time_normalization;
pub mod timing_validation;

// src/data_analysis/mod.rs

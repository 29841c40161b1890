// src/lib.rs - Library interface shared by the log tools

pub mod channel_names;
pub mod cli;
pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod error;
pub mod font_config;
pub mod pipeline;
pub mod plot_framework;
pub mod plot_functions;
pub mod text_filter;

// Crate version: VERGEN_GIT_SEMVER when the build sets it, otherwise the package version.
pub fn crate_version() -> &'static str {
    option_env!("VERGEN_GIT_SEMVER").unwrap_or(env!("CARGO_PKG_VERSION"))
}

// src/channel_names.rs

//! Centralized channel naming utilities.
//!
//! Field names as they appear in the JSON records, plus the display labels
//! used on plot axes and in status output.

/// Channel carried by the single-port logger (`{"timestamp", "data"}`).
pub const SINGLE_CHANNEL_NAMES: [&str; 1] = ["data"];

/// Channels carried by the multi-port client logs (`{"timestamp", "out1", ...}`).
pub const MULTI_CHANNEL_NAMES: [&str; 3] = ["out1", "out2", "out3"];

/// Display label for a channel field name: the first letter is upper-cased.
///
/// # Arguments
/// * `name` - Field name as written in the log (`"out1"`, `"data"`)
///
/// # Returns
/// Label used on the y axis (`"Out1"`, `"Data"`)
pub fn channel_label(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

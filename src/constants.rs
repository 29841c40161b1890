// src/constants.rs

use plotters::style::colors::full_palette::{BLUE, GREEN, ORANGE, PURPLE, RED};
use plotters::style::RGBColor;

// Plot dimensions. Height grows with the number of channels.
pub const PLOT_WIDTH: u32 = 1000;
pub const PLOT_HEIGHT_PER_CHANNEL: u32 = 500;
pub const PLOT_TITLE_MARGIN_PX: u32 = 40;

// Input/output naming.
pub const LOG_EXTENSION: &str = "log";
pub const PLOT_EXTENSION: &str = "png";
pub const FILTERED_LOG_SUFFIX: &str = "_filterred";

// Value written by the device clients when a port delivered nothing.
pub const MISSING_VALUE_SENTINEL: &str = "--";

// Lines carrying this text are dropped by the text filter.
pub const FILTER_MARKER: &str = "no such property";

// Timestamps are in milliseconds.
pub const MS_PER_SECOND: f64 = 1000.0;

// Frequency annotations are rounded to this many decimals.
pub const FREQUENCY_DECIMALS: i32 = 2;

// --- Plot Color Assignments (cycled per channel) ---
pub const CHANNEL_COLORS: [&RGBColor; 5] = [&BLUE, &ORANGE, &GREEN, &PURPLE, &RED];

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Font sizes
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 18;
pub const FONT_SIZE_AXIS_LABEL: i32 = 12;
pub const FONT_SIZE_LEGEND: i32 = 12;
pub const FONT_SIZE_ANNOTATION: i32 = 14;
pub const FONT_SIZE_MESSAGE: i32 = 20;

// Annotation block, measured from the bottom-left of each subplot.
pub const ANNOTATION_LEFT_PX: i32 = 10;
pub const ANNOTATION_LINE_HEIGHT_PX: i32 = 18;
pub const ANNOTATION_BOTTOM_MARGIN_PX: i32 = 4;

// Space reserved below each chart for rotated tick labels and annotations.
pub const X_LABEL_AREA_PX: i32 = 110;
pub const Y_LABEL_AREA_PX: i32 = 60;

// src/constants.rs

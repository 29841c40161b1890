// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{PathElement, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, FontTransform, IntoFont, RGBColor, TextStyle};

use std::ops::Range;
use std::path::Path;

use crate::constants::{
    ANNOTATION_BOTTOM_MARGIN_PX, ANNOTATION_LEFT_PX, ANNOTATION_LINE_HEIGHT_PX, LINE_WIDTH_LEGEND,
    PLOT_HEIGHT_PER_CHANNEL, PLOT_TITLE_MARGIN_PX, PLOT_WIDTH, X_LABEL_AREA_PX, Y_LABEL_AREA_PX,
};
use crate::error::AnalysisError;
use crate::font_config::{
    FONT_TUPLE_ANNOTATION, FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND,
    FONT_TUPLE_MAIN_TITLE, FONT_TUPLE_MESSAGE,
};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Time axis range; a single instant is widened by one millisecond each side.
pub fn calculate_time_range(start_ms: f64, end_ms: f64) -> Range<f64> {
    if end_ms > start_ms {
        start_ms..end_ms
    } else {
        (start_ms - 1.0)..(start_ms + 1.0)
    }
}

/// Number of y ticks requested from the mesh.
const Y_TICK_COUNT: usize = 10;
/// Upper bound on y tick decimals.
const MAX_TICK_DECIMALS: usize = 4;

/// Y tick format shared by every label on one axis.
/// Large ranges switch to k/M notation, small ranges get more decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueTickFormat {
    divisor: f64,
    suffix: &'static str,
    decimals: usize,
}

impl ValueTickFormat {
    pub fn for_range(range: &Range<f64>) -> Self {
        let magnitude = range.start.abs().max(range.end.abs());
        let (divisor, suffix) = if magnitude >= 1_000_000.0 {
            (1_000_000.0, "M")
        } else if magnitude >= 1000.0 {
            (1000.0, "k")
        } else {
            (1.0, "")
        };
        let step = (range.end - range.start).abs() / divisor / Y_TICK_COUNT as f64;
        let decimals = if step.is_finite() && step > 0.0 {
            (-step.log10().floor()).clamp(0.0, MAX_TICK_DECIMALS as f64) as usize
        } else {
            0
        };
        Self {
            divisor,
            suffix,
            decimals,
        }
    }

    pub fn decimals(&self) -> usize {
        self.decimals
    }

    pub fn format(&self, y: f64) -> String {
        format!("{:.*}{}", self.decimals, y / self.divisor, self.suffix)
    }
}

/// Tick label styles: time ticks rotated, value ticks upright.
pub fn axis_label_styles() -> (TextStyle<'static>, TextStyle<'static>) {
    let x_style = TextStyle::from(FONT_TUPLE_AXIS_LABEL.into_font().transform(FontTransform::Rotate90));
    let y_style = TextStyle::from(FONT_TUPLE_AXIS_LABEL.into_font());
    (x_style, y_style)
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, Shift>,
    channel_label: &str,
    plot_type: &str,
    reason: &str,
) -> Result<(), AnalysisError> {
    // Constants for text rendering
    const CHAR_WIDTH_RATIO: f32 = 0.6; // Approximate character width relative to font size
    const LINE_HEIGHT_SPACING: i32 = 4;

    let (width, height) = area.dim_in_pixel();
    let message = format!("{channel_label} {plot_type} Data Unavailable:\n{reason}");

    let (_, font_size) = FONT_TUPLE_MESSAGE;
    let estimated_char_width = (font_size as f32 * CHAR_WIDTH_RATIO) as i32;
    let estimated_line_height = font_size + LINE_HEIGHT_SPACING;

    let lines: Vec<&str> = message.split('\n').collect();
    let max_line_length = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    let estimated_text_width = max_line_length.saturating_mul(estimated_char_width as usize) as i32;

    let center_x = width as i32 / 2 - estimated_text_width / 2;
    let mut y = height as i32 / 2 - (lines.len() as i32 * estimated_line_height) / 2;

    let text_style = FONT_TUPLE_MESSAGE.into_font().color(&RED);
    for line in lines {
        area.draw(&Text::new(line.to_string(), (center_x, y), text_style.clone()))?;
        y += estimated_line_height;
    }
    Ok(())
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
    /// Text lines written under the chart, top to bottom.
    pub annotations: Vec<String>,
}

/// Draws one channel chart with grid, rotated time ticks and annotation lines.
fn draw_single_channel_chart(
    area: &DrawingArea<BitMapBackend, Shift>,
    plot_config: &PlotConfig,
) -> Result<(), AnalysisError> {
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, FONT_TUPLE_CHART_TITLE)
        .margin(5)
        .x_label_area_size(X_LABEL_AREA_PX)
        .y_label_area_size(Y_LABEL_AREA_PX)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    let y_tick_format = ValueTickFormat::for_range(&plot_config.y_range);
    let (x_label_style, y_label_style) = axis_label_styles();
    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(20)
        .y_labels(Y_TICK_COUNT)
        .x_label_formatter(&|x| format!("{x:.0}"))
        .y_label_formatter(&|y| y_tick_format.format(*y))
        .x_label_style(x_label_style)
        .y_label_style(y_label_style)
        .bold_line_style(BLACK.mix(0.2))
        .light_line_style(BLACK.mix(0.05))
        .draw()?;

    let mut legend_series_count = 0;
    for s in &plot_config.series {
        if s.data.is_empty() {
            continue;
        }
        let series = chart.draw_series(LineSeries::new(
            s.data.iter().cloned(),
            s.color.stroke_width(s.stroke_width),
        ))?;
        if !s.label.is_empty() {
            series.label(&s.label).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], s.color.stroke_width(LINE_WIDTH_LEGEND))
            });
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(FONT_TUPLE_LEGEND)
            .draw()?;
    }

    // Annotation block sits in the bottom-left corner, below the y axis labels.
    let (_, area_height) = area.dim_in_pixel();
    let line_count = plot_config.annotations.len() as i32;
    let text_style = FONT_TUPLE_ANNOTATION.into_font().color(&BLACK);
    for (row, line) in plot_config.annotations.iter().enumerate() {
        let text_y = area_height as i32
            - ANNOTATION_BOTTOM_MARGIN_PX
            - (line_count - row as i32) * ANNOTATION_LINE_HEIGHT_PX;
        area.draw(&Text::new(line.clone(), (ANNOTATION_LEFT_PX, text_y), text_style.clone()))?;
    }

    Ok(())
}

/// Creates a stacked plot image with one subplot per channel.
///
/// `get_channel_plot_config` returns `None` for a channel that could not be
/// reconstructed; its subplot then shows an "unavailable" message.
pub fn draw_stacked_plot<F>(
    output_path: &Path,
    root_name: &str,
    plot_type_name: &str,
    channel_labels: &[String],
    mut get_channel_plot_config: F,
) -> Result<bool, AnalysisError>
where
    F: FnMut(usize) -> Option<PlotConfig>,
{
    let channel_count = channel_labels.len().max(1);
    let plot_height = PLOT_TITLE_MARGIN_PX + PLOT_HEIGHT_PER_CHANNEL * channel_count as u32;

    let root_area = BitMapBackend::new(output_path, (PLOT_WIDTH, plot_height)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name.to_string(),
        (10, 10),
        FONT_TUPLE_MAIN_TITLE.into_font().color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(PLOT_TITLE_MARGIN_PX as i32, 5, 5, 5);
    let sub_plot_areas = margined_root_area.split_evenly((channel_count, 1));
    let mut any_channel_plotted = false;

    for (channel_index, channel_label) in channel_labels.iter().enumerate() {
        let area = &sub_plot_areas[channel_index];
        match get_channel_plot_config(channel_index) {
            Some(plot_config) => {
                let has_data = plot_config.series.iter().any(|s| !s.data.is_empty());
                let valid_ranges = plot_config.x_range.end > plot_config.x_range.start
                    && plot_config.y_range.end > plot_config.y_range.start;
                if has_data && valid_ranges {
                    draw_single_channel_chart(area, &plot_config)?;
                    any_channel_plotted = true;
                } else {
                    let reason = if !has_data {
                        "No data points"
                    } else {
                        "Invalid ranges"
                    };
                    draw_unavailable_message(area, channel_label, plot_type_name, reason)?;
                }
            }
            None => {
                let reason = "No valid samples to reconstruct";
                draw_unavailable_message(area, channel_label, plot_type_name, reason)?;
            }
        }
    }

    root_area.present()?;
    if any_channel_plotted {
        log::info!("Stacked plot saved as '{}'.", output_path.display());
    } else {
        log::warn!(
            "'{}' saved with placeholder messages only: no channel had data to plot.",
            output_path.display()
        );
    }
    Ok(any_channel_plotted)
}

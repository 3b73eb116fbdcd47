// src/plot_framework.rs

use std::ops::Range;
use std::path::{Path, PathBuf};

use log::info;
use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Cross, PathElement, Rectangle, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, IntoFont, RGBColor};

use crate::constants::{
    BAR_HEADROOM_FACTOR, BAR_WIDTH_FRACTION, DEFAULT_ROOT_NAME, FIGURE_TITLE_AREA_PX,
    FONT_SIZE_MESSAGE, LABEL_AREA_PX, LINE_WIDTH_LEGEND, MARKER_SIZE_SCATTER, PANEL_MARGIN_PX,
    PLOT_HEIGHT, PLOT_WIDTH,
};
use crate::font_config::{
    FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND, FONT_TUPLE_MAIN_TITLE,
    FONT_TUPLE_MESSAGE,
};
use crate::types::{PanelResult, Point2};

/// Where figures go and how they are titled.
#[derive(Debug, Clone)]
pub struct FigureContext {
    output_dir: PathBuf,
    root_name: String,
    meters: bool,
}

impl FigureContext {
    pub fn new(output_dir: impl Into<PathBuf>, prefix: &str, meters: bool) -> Self {
        Self {
            output_dir: output_dir.into(),
            root_name: root_name_from_prefix(prefix),
            meters,
        }
    }

    /// `{output_dir}/{root}_{figure}.png`
    pub fn output_path(&self, figure: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}_{}.png", self.root_name, figure))
    }

    /// Figure title carrying the unit mode, e.g. "All horizontal measuring, meters - true".
    pub fn title(&self, base: &str) -> String {
        format!("{base}, meters - {}", self.meters)
    }

    /// Unit of the latitude/longitude columns.
    pub fn horizontal_unit(&self) -> &'static str {
        if self.meters {
            "m"
        } else {
            "deg"
        }
    }
}

/// File-name part of the log prefix, or [`DEFAULT_ROOT_NAME`].
pub fn root_name_from_prefix(prefix: &str) -> String {
    Path::new(prefix)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_ROOT_NAME.to_string())
}

/// Stable colour for a log, so it looks the same in every figure.
pub fn log_color(index: usize) -> RGBColor {
    let palette = colorous::CATEGORY10;
    let color = palette[index % palette.len()];
    RGBColor(color.r, color.g, color.b)
}

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

/// Minimum and maximum of the finite values, if any.
pub fn finite_bounds<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Points whose coordinates are both finite.
pub fn finite_points<I: IntoIterator<Item = Point2>>(points: I) -> Vec<Point2> {
    points
        .into_iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect()
}

/// Padded ranges with the same units-per-pixel on both axes, centred on the data.
pub fn equal_aspect_ranges(
    x_bounds: (f64, f64),
    y_bounds: (f64, f64),
    plot_size_px: (u32, u32),
) -> (Range<f64>, Range<f64>) {
    let (x0, x1) = calculate_range(x_bounds.0, x_bounds.1);
    let (y0, y1) = calculate_range(y_bounds.0, y_bounds.1);
    let width = plot_size_px.0.max(1) as f64;
    let height = plot_size_px.1.max(1) as f64;
    let per_px = ((x1 - x0) / width).max((y1 - y0) / height);
    let (cx, cy) = ((x0 + x1) / 2.0, (y0 + y1) / 2.0);
    let (half_w, half_h) = (per_px * width / 2.0, per_px * height / 2.0);
    (cx - half_w..cx + half_w, cy - half_h..cy + half_h)
}

/// Approximate size of the plotting area inside a panel, excluding labels and caption.
pub fn panel_plot_size(area: &DrawingArea<BitMapBackend, Shift>) -> (u32, u32) {
    let (width, height) = area.dim_in_pixel();
    let reserved = LABEL_AREA_PX + 2 * PANEL_MARGIN_PX;
    (
        width.saturating_sub(reserved + 10),
        height.saturating_sub(reserved + FIGURE_TITLE_AREA_PX),
    )
}

/// Number of decimals that keeps neighbouring ticks distinguishable over `span`.
pub fn tick_decimals(span: f64) -> usize {
    if !span.is_finite() || span <= 0.0 {
        return 2;
    }
    ((-span.log10()).ceil() + 1.0).clamp(0.0, 6.0) as usize
}

/// Tick label for `value` on an axis covering `span`.
pub fn format_tick(value: f64, span: f64) -> String {
    let decimals = tick_decimals(span);
    // Avoid "-0" / "-0.00" for values that round to zero.
    let half_step = 0.5 * 10f64.powi(-(decimals as i32));
    let value = if value.abs() < half_step { 0.0 } else { value };
    format!("{value:.decimals$}")
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, Shift>,
    chart_title: &str,
    reason: &str,
) -> PanelResult {
    // Approximate character width relative to font size
    const CHAR_WIDTH_RATIO: f32 = 0.6;

    let (width, height) = area.dim_in_pixel();
    let message = format!("{chart_title}: Data Unavailable ({reason})");
    let estimated_text_width = (message.len() as f32 * FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let center_x = (width as i32 / 2 - estimated_text_width / 2).max(0);
    let center_y = height as i32 / 2 - FONT_SIZE_MESSAGE / 2;

    let text_style = FONT_TUPLE_MESSAGE.into_font().color(&RED);
    area.draw(&Text::new(message, (center_x, center_y), text_style))?;
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesStyle {
    Line,
    Cross,
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<Point2>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
    pub style: SeriesStyle,
}

#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
}

#[derive(Clone)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: RGBColor,
}

#[derive(Clone)]
pub struct BarChartConfig {
    pub title: String,
    pub bars: Vec<Bar>,
    pub x_label: String,
    pub y_label: String,
}

/// Creates one image with `panel_count` panels side by side under a common title,
/// and calls `draw_panel` for each of them.
pub fn draw_panel_figure<'a, F>(
    output_path: &'a Path,
    figure_title: &str,
    panel_count: usize,
    mut draw_panel: F,
) -> PanelResult
where
    F: FnMut(usize, &DrawingArea<BitMapBackend<'a>, Shift>) -> PanelResult,
{
    let root_area = BitMapBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        figure_title,
        (10, 10),
        FONT_TUPLE_MAIN_TITLE.into_font().color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(
        FIGURE_TITLE_AREA_PX,
        PANEL_MARGIN_PX,
        PANEL_MARGIN_PX,
        PANEL_MARGIN_PX,
    );
    let panel_areas = margined_root_area.split_evenly((1, panel_count.max(1)));

    for (panel_index, area) in panel_areas.iter().enumerate().take(panel_count) {
        draw_panel(panel_index, area)?;
    }

    root_area.present()?;
    info!("  Plot saved as '{}'.", output_path.display());
    Ok(())
}

/// Draws a 2D chart of line and/or '+' marker series, with a legend for labelled series.
pub fn draw_xy_chart(area: &DrawingArea<BitMapBackend, Shift>, plot_config: &PlotConfig) -> PanelResult {
    let x_span = plot_config.x_range.end - plot_config.x_range.start;
    let y_span = plot_config.y_range.end - plot_config.y_range.start;

    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, FONT_TUPLE_CHART_TITLE)
        .margin(PANEL_MARGIN_PX)
        .x_label_area_size(LABEL_AREA_PX)
        .y_label_area_size(LABEL_AREA_PX + 10)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(8)
        .y_labels(8)
        .x_label_formatter(&|x| format_tick(*x, x_span))
        .y_label_formatter(&|y| format_tick(*y, y_span))
        .light_line_style(WHITE.mix(0.7))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    let mut legend_series_count = 0;
    for s in &plot_config.series {
        if s.data.is_empty() {
            continue;
        }
        let style = s.color.stroke_width(s.stroke_width);
        let annotation = match s.style {
            SeriesStyle::Line => chart.draw_series(LineSeries::new(s.data.iter().copied(), style))?,
            SeriesStyle::Cross => chart.draw_series(
                s.data
                    .iter()
                    .map(|&point| Cross::new(point, MARKER_SIZE_SCATTER, style)),
            )?,
        };
        if !s.label.is_empty() {
            let color = s.color;
            annotation.label(&s.label).legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 20, y)],
                    color.stroke_width(LINE_WIDTH_LEGEND),
                )
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
    Ok(())
}

/// Draws one bar per entry, each annotated with its label and value.
/// Non-finite values get an annotation but no bar.
pub fn draw_bar_chart(area: &DrawingArea<BitMapBackend, Shift>, bar_config: &BarChartConfig) -> PanelResult {
    let Some((_, max_value)) = finite_bounds(bar_config.bars.iter().map(|bar| bar.value)) else {
        return draw_unavailable_message(area, &bar_config.title, "No finite values");
    };
    let y_max = if max_value > 0.0 {
        max_value * BAR_HEADROOM_FACTOR
    } else {
        1.0
    };
    let bar_count = bar_config.bars.len() as f64;
    let half_width = BAR_WIDTH_FRACTION / 2.0;

    let mut chart = ChartBuilder::on(area)
        .caption(&bar_config.title, FONT_TUPLE_CHART_TITLE)
        .margin(PANEL_MARGIN_PX)
        .x_label_area_size(LABEL_AREA_PX)
        .y_label_area_size(LABEL_AREA_PX + 10)
        .build_cartesian_2d(-0.5..bar_count - 0.5, 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(&bar_config.x_label)
        .y_desc(&bar_config.y_label)
        .x_label_formatter(&|_| String::new())
        .y_label_formatter(&|y| format_tick(*y, y_max))
        .light_line_style(WHITE.mix(0.7))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    chart.draw_series(
        bar_config
            .bars
            .iter()
            .enumerate()
            .filter(|(_, bar)| bar.value.is_finite())
            .map(|(index, bar)| {
                let x = index as f64;
                Rectangle::new(
                    [(x - half_width, 0.0), (x + half_width, bar.value)],
                    bar.color.filled(),
                )
            }),
    )?;

    let annotation_style = FONT_TUPLE_AXIS_LABEL
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(bar_config.bars.iter().enumerate().map(|(index, bar)| {
        let y = if bar.value.is_finite() { bar.value } else { 0.0 };
        Text::new(
            format!("{}: {}", bar.label, format_tick(bar.value, y_max)),
            (index as f64, y),
            annotation_style.clone(),
        )
    }))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_calculate_range_pads_and_orders() {
        assert_eq!(calculate_range(0.0, 10.0), (-1.5, 11.5));
        assert_eq!(calculate_range(10.0, 0.0), (-1.5, 11.5));
        assert_eq!(calculate_range(3.0, 3.0), (2.5, 3.5));
    }

    #[test]
    fn test_finite_bounds() {
        assert_eq!(finite_bounds(vec![3.0, f64::NAN, -1.0, 2.0]), Some((-1.0, 3.0)));
        assert_eq!(finite_bounds(vec![f64::NAN, f64::INFINITY]), None);
        assert_eq!(finite_bounds(Vec::<f64>::new()), None);
    }

    #[test]
    fn test_finite_points() {
        let points = finite_points(vec![(0.0, 1.0), (f64::NAN, 1.0), (2.0, f64::INFINITY)]);
        assert_eq!(points, vec![(0.0, 1.0)]);
    }

    #[test]
    fn test_equal_aspect_ranges() {
        let (x, y) = equal_aspect_ranges((0.0, 10.0), (0.0, 1.0), (200, 100));
        let x_per_px = (x.end - x.start) / 200.0;
        let y_per_px = (y.end - y.start) / 100.0;
        assert_abs_diff_eq!(x_per_px, y_per_px, epsilon = 1e-12);
        // The wider axis keeps its padded range.
        assert_abs_diff_eq!(x.start, -1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(x.end, 11.5, epsilon = 1e-12);
        assert_abs_diff_eq!((y.start + y.end) / 2.0, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_root_name_from_prefix() {
        assert_eq!(root_name_from_prefix("data/run_"), "run_");
        assert_eq!(root_name_from_prefix("log"), "log");
        assert_eq!(root_name_from_prefix(""), DEFAULT_ROOT_NAME);
    }

    #[test]
    fn test_figure_context() {
        let ctx = FigureContext::new("/tmp/out", "data/log", true);
        assert_eq!(
            ctx.output_path("CombinedHorizontal"),
            PathBuf::from("/tmp/out/log_CombinedHorizontal.png")
        );
        assert_eq!(
            ctx.title("All horizontal measuring"),
            "All horizontal measuring, meters - true"
        );
        assert_eq!(ctx.horizontal_unit(), "m");
        assert_eq!(FigureContext::new(".", "log", false).horizontal_unit(), "deg");
    }

    #[test]
    fn test_log_colors_are_distinct_and_stable() {
        let rgb = |c: RGBColor| (c.0, c.1, c.2);
        assert_eq!(rgb(log_color(0)), rgb(log_color(10)));
        assert_ne!(rgb(log_color(0)), rgb(log_color(1)));
    }
}

// src/plot_framework.rs

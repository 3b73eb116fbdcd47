// src/plot_functions/plot_separate_horizontal.rs

use crate::constants::LINE_WIDTH_PLOT;
use crate::data_input::log_data::GpsLog;
use crate::plot_framework::{
    draw_panel_figure, draw_unavailable_message, draw_xy_chart, equal_aspect_ranges,
    finite_bounds, finite_points, log_color, panel_plot_size, FigureContext, PlotConfig,
    PlotSeries, SeriesStyle,
};
use crate::types::PanelResult;

/// One '+' scatter panel per log showing its horizontal track, equal aspect.
pub fn plot_separate_horizontal(logs: &[GpsLog], ctx: &FigureContext) -> PanelResult {
    let output_path = ctx.output_path("SeparateHorizontal");
    let unit = ctx.horizontal_unit();

    draw_panel_figure(
        &output_path,
        &ctx.title("Separate horizontal measuring"),
        logs.len(),
        |index, area| {
            let log = &logs[index];
            let chart_title = format!("Log {}", index + 1);
            let track = finite_points(log.horizontal_track());
            let x_bounds = finite_bounds(track.iter().map(|p| p.0));
            let y_bounds = finite_bounds(track.iter().map(|p| p.1));
            let (Some(x_bounds), Some(y_bounds)) = (x_bounds, y_bounds) else {
                return draw_unavailable_message(area, &chart_title, "No data points");
            };
            let (x_range, y_range) = equal_aspect_ranges(x_bounds, y_bounds, panel_plot_size(area));

            let plot_config = PlotConfig {
                title: chart_title,
                x_range,
                y_range,
                series: vec![PlotSeries {
                    data: track,
                    label: log.display_name(),
                    color: log_color(index),
                    stroke_width: LINE_WIDTH_PLOT,
                    style: SeriesStyle::Cross,
                }],
                x_label: format!("Longitude ({unit})"),
                y_label: format!("Latitude ({unit})"),
            };
            draw_xy_chart(area, &plot_config)
        },
    )
}

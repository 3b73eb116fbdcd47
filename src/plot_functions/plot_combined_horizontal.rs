// src/plot_functions/plot_combined_horizontal.rs

use crate::constants::LINE_WIDTH_PLOT;
use crate::data_input::log_data::GpsLog;
use crate::plot_framework::{
    draw_panel_figure, draw_unavailable_message, draw_xy_chart, equal_aspect_ranges,
    finite_bounds, finite_points, log_color, panel_plot_size, FigureContext, PlotConfig,
    PlotSeries, SeriesStyle,
};
use crate::types::PanelResult;

/// Horizontal tracks of the selected logs as lines in one equal-aspect chart.
pub fn plot_combined_horizontal(
    logs: &[GpsLog],
    selection: &[usize],
    ctx: &FigureContext,
) -> PanelResult {
    let output_path = ctx.output_path("CombinedHorizontal");
    let unit = ctx.horizontal_unit();

    let series: Vec<PlotSeries> = selection
        .iter()
        .map(|&index| PlotSeries {
            data: finite_points(logs[index].horizontal_track()),
            label: format!("{}", index + 1),
            color: log_color(index),
            stroke_width: LINE_WIDTH_PLOT,
            style: SeriesStyle::Line,
        })
        .collect();

    draw_panel_figure(
        &output_path,
        &ctx.title("All horizontal measuring"),
        1,
        |_, area| {
            let chart_title = "Horizontal tracks".to_string();
            let points = series.iter().flat_map(|s| s.data.iter());
            let x_bounds = finite_bounds(points.clone().map(|p| p.0));
            let y_bounds = finite_bounds(points.map(|p| p.1));
            let (Some(x_bounds), Some(y_bounds)) = (x_bounds, y_bounds) else {
                return draw_unavailable_message(area, &chart_title, "No data points");
            };
            let (x_range, y_range) = equal_aspect_ranges(x_bounds, y_bounds, panel_plot_size(area));

            let plot_config = PlotConfig {
                title: chart_title,
                x_range,
                y_range,
                series: series.clone(),
                x_label: format!("Longitude ({unit})"),
                y_label: format!("Latitude ({unit})"),
            };
            draw_xy_chart(area, &plot_config)
        },
    )
}

// src/plot_functions/plot_altitude.rs

use crate::constants::LINE_WIDTH_PLOT;
use crate::data_input::log_data::{Field, GpsLog};
use crate::plot_framework::{
    calculate_range, draw_panel_figure, draw_unavailable_message, draw_xy_chart, finite_bounds,
    finite_points, log_color, FigureContext, PlotConfig, PlotSeries, SeriesStyle,
};
use crate::types::PanelResult;

/// Altitude of the selected logs against sample index.
pub fn plot_altitude(logs: &[GpsLog], selection: &[usize], ctx: &FigureContext) -> PanelResult {
    let output_path = ctx.output_path("Altitude");

    let series: Vec<PlotSeries> = selection
        .iter()
        .map(|&index| PlotSeries {
            data: finite_points(
                logs[index]
                    .field(Field::Altitude)
                    .iter()
                    .enumerate()
                    .map(|(sample, &alt)| (sample as f64, alt)),
            ),
            label: format!("{}", index + 1),
            color: log_color(index),
            stroke_width: LINE_WIDTH_PLOT,
            style: SeriesStyle::Line,
        })
        .collect();

    // Altitude is never converted, so the title carries no unit mode.
    draw_panel_figure(&output_path, "All altitude measuring", 1, |_, area| {
        let chart_title = "Altitude".to_string();
        let last_sample = selection
            .iter()
            .map(|&index| logs[index].len().saturating_sub(1))
            .max()
            .unwrap_or(0)
            .max(1) as f64;
        let Some((alt_min, alt_max)) =
            finite_bounds(series.iter().flat_map(|s| s.data.iter().map(|p| p.1)))
        else {
            return draw_unavailable_message(area, &chart_title, "No data points");
        };
        let (y_min, y_max) = calculate_range(alt_min, alt_max);

        let plot_config = PlotConfig {
            title: chart_title,
            x_range: 0.0..last_sample,
            y_range: y_min..y_max,
            series: series.clone(),
            x_label: "Sample".to_string(),
            y_label: "Altitude (m)".to_string(),
        };
        draw_xy_chart(area, &plot_config)
    })
}

// src/plot_functions/plot_pairwise_distance.rs

use crate::constants::LINE_WIDTH_PLOT;
use crate::data_analysis::statistics::PairingMode;
use crate::data_input::log_data::GpsLog;
use crate::plot_framework::{
    calculate_range, draw_panel_figure, draw_unavailable_message, draw_xy_chart, finite_bounds,
    finite_points, log_color, FigureContext, PlotConfig, PlotSeries, SeriesStyle,
};
use crate::types::PanelResult;

/// For every selected log, the horizontal distance series to each selected log.
pub fn plot_pairwise_distance(
    logs: &[GpsLog],
    selection: &[usize],
    mode: PairingMode,
    ctx: &FigureContext,
) -> PanelResult {
    let output_path = ctx.output_path("PairwiseDistance");
    let unit = ctx.horizontal_unit();
    let x_label = match mode {
        PairingMode::Index => "Sample",
        PairingMode::Time => "Overlapping sample",
    };

    draw_panel_figure(
        &output_path,
        &ctx.title("Horizontal absolute measuring all-by-one"),
        selection.len(),
        |panel, area| {
            let index = selection[panel];
            let chart_title = format!("Log {} vs selected", index + 1);

            let mut series = Vec::with_capacity(selection.len());
            for &other in selection {
                let distance = mode.distance(&logs[index], &logs[other])?;
                series.push(PlotSeries {
                    data: finite_points(
                        distance
                            .iter()
                            .enumerate()
                            .map(|(sample, &d)| (sample as f64, d)),
                    ),
                    label: format!("{}", other + 1),
                    color: log_color(other),
                    stroke_width: LINE_WIDTH_PLOT,
                    style: SeriesStyle::Line,
                });
            }

            let last_sample = series.iter().map(|s| s.data.len()).max().unwrap_or(0);
            let Some((d_min, d_max)) =
                finite_bounds(series.iter().flat_map(|s| s.data.iter().map(|p| p.1)))
            else {
                return draw_unavailable_message(area, &chart_title, "No overlapping samples");
            };
            let (y_min, y_max) = calculate_range(d_min.min(0.0), d_max);

            let plot_config = PlotConfig {
                title: chart_title,
                x_range: 0.0..(last_sample.saturating_sub(1).max(1) as f64),
                y_range: y_min..y_max,
                series,
                x_label: x_label.to_string(),
                y_label: format!("Distance ({unit})"),
            };
            draw_xy_chart(area, &plot_config)
        },
    )
}

// src/plot_functions/plot_pairwise_std_dev.rs

use crate::data_analysis::statistics::StatisticsReport;
use crate::plot_framework::{draw_bar_chart, draw_panel_figure, log_color, Bar, BarChartConfig, FigureContext};
use crate::types::PanelResult;

/// One panel per log with a bar for the std dev of its distance to every log (N×N grid).
pub fn plot_pairwise_std_dev(report: &StatisticsReport, ctx: &FigureContext) -> PanelResult {
    let output_path = ctx.output_path("PairwiseStdDev");
    let matrix = &report.pairwise_std;

    draw_panel_figure(
        &output_path,
        &ctx.title("Std dev absolute measuring all-by-one"),
        matrix.nrows(),
        |index, area| {
            let bars = matrix
                .row(index)
                .iter()
                .enumerate()
                .map(|(other, &value)| Bar {
                    label: format!("{}", other + 1),
                    value,
                    color: log_color(other),
                })
                .collect();
            let bar_config = BarChartConfig {
                title: format!("Log {} vs all", index + 1),
                bars,
                x_label: "Log".to_string(),
                y_label: format!("Std dev of distance ({})", ctx.horizontal_unit()),
            };
            draw_bar_chart(area, &bar_config)
        },
    )
}

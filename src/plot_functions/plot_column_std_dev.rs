// src/plot_functions/plot_column_std_dev.rs

use crate::data_analysis::statistics::StatisticsReport;
use crate::data_input::log_data::Field;
use crate::plot_framework::{draw_bar_chart, draw_panel_figure, log_color, Bar, BarChartConfig, FigureContext};
use crate::types::PanelResult;

/// Per-log bar chart of the latitude, longitude and altitude standard deviations.
pub fn plot_column_std_dev(report: &StatisticsReport, ctx: &FigureContext) -> PanelResult {
    let output_path = ctx.output_path("ColumnStdDev");

    draw_panel_figure(
        &output_path,
        &ctx.title("Std dev relative"),
        report.column_std.len(),
        |index, area| {
            let bars = Field::SPATIAL
                .iter()
                .zip(report.column_std[index].iter())
                .map(|(field, &value)| Bar {
                    label: field.name().to_string(),
                    value,
                    color: log_color(index),
                })
                .collect();
            let bar_config = BarChartConfig {
                title: format!("Log {}", index + 1),
                bars,
                x_label: "Column".to_string(),
                y_label: format!("Std dev ({} / m)", ctx.horizontal_unit()),
            };
            draw_bar_chart(area, &bar_config)
        },
    )
}

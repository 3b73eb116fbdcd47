// src/plot_functions/plot_trajectory_3d.rs

use plotters::chart::ChartBuilder;
use plotters::element::PathElement;
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::Color;

use crate::constants::{
    COLOR_GRID_3D, LINE_WIDTH_LEGEND, LINE_WIDTH_TRAJECTORY_3D, PANEL_MARGIN_PX,
    TRAJECTORY_3D_PITCH, TRAJECTORY_3D_SCALE, TRAJECTORY_3D_YAW,
};
use crate::data_input::log_data::{Field, GpsLog};
use crate::font_config::{FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND};
use crate::plot_framework::{
    calculate_range, draw_panel_figure, draw_unavailable_message, finite_bounds, log_color,
    FigureContext,
};
use crate::types::{PanelResult, Point3};

/// `(east, altitude, north)` points: plotters draws the second 3D axis upwards.
fn trajectory(log: &GpsLog) -> Vec<Point3> {
    log.field(Field::Longitude)
        .iter()
        .zip(log.field(Field::Altitude).iter())
        .zip(log.field(Field::Latitude).iter())
        .map(|((&lon, &alt), &lat)| (lon, alt, lat))
        .filter(|(x, y, z)| x.is_finite() && y.is_finite() && z.is_finite())
        .collect()
}

/// 3D trajectories (longitude, latitude, altitude) of the selected logs.
pub fn plot_trajectory_3d(logs: &[GpsLog], selection: &[usize], ctx: &FigureContext) -> PanelResult {
    let output_path = ctx.output_path("Trajectory3D");
    let trajectories: Vec<(usize, Vec<Point3>)> = selection
        .iter()
        .map(|&index| (index, trajectory(&logs[index])))
        .collect();

    draw_panel_figure(&output_path, &ctx.title("All measuring"), 1, |_, area| {
        let chart_title = format!("3D trajectories ({} horizontal, m vertical)", ctx.horizontal_unit());
        let points = || trajectories.iter().flat_map(|(_, points)| points.iter());
        let bounds = (
            finite_bounds(points().map(|p| p.0)),
            finite_bounds(points().map(|p| p.1)),
            finite_bounds(points().map(|p| p.2)),
        );
        let (Some(x_bounds), Some(y_bounds), Some(z_bounds)) = bounds else {
            return draw_unavailable_message(area, &chart_title, "No data points");
        };
        let (x_min, x_max) = calculate_range(x_bounds.0, x_bounds.1);
        let (y_min, y_max) = calculate_range(y_bounds.0, y_bounds.1);
        let (z_min, z_max) = calculate_range(z_bounds.0, z_bounds.1);

        let mut chart = ChartBuilder::on(area)
            .caption(&chart_title, FONT_TUPLE_CHART_TITLE)
            .margin(PANEL_MARGIN_PX * 4)
            .build_cartesian_3d(x_min..x_max, y_min..y_max, z_min..z_max)?;
        chart.with_projection(|mut pb| {
            pb.yaw = TRAJECTORY_3D_YAW;
            pb.pitch = TRAJECTORY_3D_PITCH;
            pb.scale = TRAJECTORY_3D_SCALE;
            pb.into_matrix()
        });
        chart
            .configure_axes()
            .light_grid_style(COLOR_GRID_3D.mix(0.2))
            .max_light_lines(3)
            .draw()?;

        for (index, points) in &trajectories {
            if points.is_empty() {
                continue;
            }
            let color = log_color(*index);
            chart
                .draw_series(LineSeries::new(
                    points.iter().copied(),
                    color.stroke_width(LINE_WIDTH_TRAJECTORY_3D),
                ))?
                .label(format!("{}", index + 1))
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_LEGEND))
                });
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(FONT_TUPLE_LEGEND)
            .draw()?;
        Ok(())
    })
}

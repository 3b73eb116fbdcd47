// src/plot_functions/mod.rs

use log::info;

use crate::data_analysis::statistics::{PairingMode, StatisticsReport};
use crate::data_input::log_set::LogSet;
use crate::plot_framework::FigureContext;
use crate::types::PanelResult;

pub mod plot_altitude;
pub mod plot_column_std_dev;
pub mod plot_combined_horizontal;
pub mod plot_pairwise_distance;
pub mod plot_pairwise_std_dev;
pub mod plot_separate_horizontal;
pub mod plot_trajectory_3d;

/// Renders every figure. `selection` (0-based) restricts the combined plots;
/// the separate and statistics plots always cover all logs.
pub fn render_all_plots(
    log_set: &LogSet,
    selection: &[usize],
    report: &StatisticsReport,
    mode: PairingMode,
    ctx: &FigureContext,
) -> PanelResult {
    let logs = log_set.logs();
    info!("Rendering plots for {} logs ({} selected)", logs.len(), selection.len());

    plot_separate_horizontal::plot_separate_horizontal(logs, ctx)?;
    plot_combined_horizontal::plot_combined_horizontal(logs, selection, ctx)?;
    plot_trajectory_3d::plot_trajectory_3d(logs, selection, ctx)?;
    plot_altitude::plot_altitude(logs, selection, ctx)?;
    plot_pairwise_distance::plot_pairwise_distance(logs, selection, mode, ctx)?;
    plot_column_std_dev::plot_column_std_dev(report, ctx)?;
    plot_pairwise_std_dev::plot_pairwise_std_dev(report, ctx)?;
    Ok(())
}

// src/plot_functions/mod.rs

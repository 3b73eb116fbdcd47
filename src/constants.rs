// src/constants.rs

use plotters::style::RGBColor;

// Margin subtracted from the first log's minimum latitude/longitude when
// picking the local origin, in degrees.
pub const ORIGIN_MARGIN_DEG: f64 = 0.0001;

// Input files: "{prefix}{index}.log", first line is a header.
pub const LOG_FILE_EXTENSION: &str = "log";
pub const LOG_HEADER_ROWS: usize = 1;
pub const LOG_COMMENT_CHAR: char = '#';

// Root name used for image files when the prefix has no file-name part.
pub const DEFAULT_ROOT_NAME: &str = "gps";

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;

// Space reserved around each panel, in pixels.
pub const FIGURE_TITLE_AREA_PX: u32 = 50;
pub const PANEL_MARGIN_PX: u32 = 5;
pub const LABEL_AREA_PX: u32 = 50;

// Font sizes.
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 18;
pub const FONT_SIZE_AXIS_LABEL: i32 = 12;
pub const FONT_SIZE_LEGEND: i32 = 12;
pub const FONT_SIZE_MESSAGE: i32 = 18;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_TRAJECTORY_3D: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Size of the '+' markers in the separate horizontal scatter plots.
pub const MARKER_SIZE_SCATTER: i32 = 4;

// Bar width as a fraction of the slot each bar gets.
pub const BAR_WIDTH_FRACTION: f64 = 0.8;

// Headroom above the tallest bar.
pub const BAR_HEADROOM_FACTOR: f64 = 1.15;

// 3D view angles, in radians.
pub const TRAJECTORY_3D_YAW: f64 = 0.6;
pub const TRAJECTORY_3D_PITCH: f64 = 0.35;
pub const TRAJECTORY_3D_SCALE: f64 = 0.8;

pub const COLOR_GRID_3D: RGBColor = RGBColor(120, 120, 120);

// src/constants.rs

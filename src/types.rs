// src/types.rs
// Type aliases shared by the plotting code

use std::error::Error;

/// `(x, y)` chart coordinate.
pub type Point2 = (f64, f64);

/// `(x, y, z)` chart coordinate.
pub type Point3 = (f64, f64, f64);

/// Result of drawing a figure or a single panel.
pub type PanelResult = Result<(), Box<dyn Error>>;

// src/lib.rs - Library interface for the GPS log comparison tool

pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod error;
pub mod font_config;
pub mod plot_framework;
pub mod plot_functions;
pub mod types;

pub use error::{GpsError, Result};

pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

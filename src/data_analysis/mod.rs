// src/data_analysis/mod.rs

pub mod normalize;
pub mod statistics;
pub mod stats_export;

// src/data_analysis/mod.rs

// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, converting or comparing GPS logs.
#[derive(Error, Debug)]
pub enum GpsError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("at least one log file is required")]
    NoLogs,

    #[error("{}: no finite latitude/longitude samples to derive an origin from", path.display())]
    EmptyLog { path: PathBuf },

    #[error("{}: coordinates are already converted to meters", path.display())]
    AlreadyConverted { path: PathBuf },

    #[error("{}: time column is not non-decreasing or contains NaN", path.display())]
    UnsortedTime { path: PathBuf },

    #[error("log index {index} is out of range 1..={count}")]
    SelectionOutOfRange { index: usize, count: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, GpsError>;

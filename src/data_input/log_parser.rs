// src/data_input/log_parser.rs

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, info};
use ndarray::Array2;

use crate::constants::{LOG_COMMENT_CHAR, LOG_FILE_EXTENSION, LOG_HEADER_ROWS};
use crate::data_input::log_data::{Field, GpsLog, FIELD_COUNT};
use crate::error::{GpsError, Result};

/// Path of the `index`-th log (1-based): `"{prefix}{index}.log"`.
pub fn log_file_path(prefix: &str, index: usize) -> PathBuf {
    PathBuf::from(format!("{prefix}{index}.{LOG_FILE_EXTENSION}"))
}

/// Loads `count` logs named `{prefix}1.log` .. `{prefix}{count}.log`.
///
/// Stops at the first file that cannot be opened or parsed.
pub fn load_logs(prefix: &str, count: usize) -> Result<Vec<GpsLog>> {
    if count == 0 {
        return Err(GpsError::NoLogs);
    }
    info!("Loading files:");
    (1..=count)
        .map(|index| {
            let path = log_file_path(prefix, index);
            info!("  {}", path.display());
            parse_log_file(&path)
        })
        .collect()
}

/// Parses one whitespace-delimited log file.
///
/// The first line is a header and is discarded. Blank lines and `#` comments
/// are skipped. Each remaining row needs at least time, latitude, longitude
/// and altitude; extra columns are ignored.
pub fn parse_log_file(input_file_path: &Path) -> Result<GpsLog> {
    let io_error = |source| GpsError::Io {
        path: input_file_path.to_path_buf(),
        source,
    };
    let file = File::open(input_file_path).map_err(io_error)?;
    let reader = BufReader::new(file);

    let mut rows: Vec<[f64; FIELD_COUNT]> = Vec::new();
    for (line_index, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(io_error)?;
        if line_index < LOG_HEADER_ROWS {
            continue;
        }
        let content = match line.find(LOG_COMMENT_CHAR) {
            Some(pos) => &line[..pos],
            None => line.as_str(),
        };
        let content = content.trim();
        if content.is_empty() {
            continue;
        }
        let row = parse_row(content).map_err(|message| GpsError::Parse {
            path: input_file_path.to_path_buf(),
            line: line_index + 1,
            message,
        })?;
        rows.push(row);
    }

    debug!(
        "Parsed {} samples from '{}'",
        rows.len(),
        input_file_path.display()
    );
    Ok(GpsLog::new(input_file_path, Array2::from(rows)))
}

fn parse_row(line: &str) -> std::result::Result<[f64; FIELD_COUNT], String> {
    let mut row = [0.0; FIELD_COUNT];
    let mut tokens = line.split_whitespace();
    for field in Field::ALL {
        let token = tokens
            .next()
            .ok_or_else(|| format!("missing '{}' column", field.name()))?;
        row[field.index()] = token
            .parse::<f64>()
            .map_err(|e| format!("invalid '{}' value '{}': {}", field.name(), token, e))?;
    }
    Ok(row)
}


// src/data_input/log_parser.rs

// src/data_analysis/stats_export.rs

use std::path::Path;

use csv::Writer;
use log::info;
use serde::Serialize;

use crate::data_analysis::statistics::StatisticsReport;
use crate::data_input::log_data::Field;
use crate::error::{GpsError, Result};

/// One exported statistic. `log_b` is empty for per-log column statistics.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct StatsRecord {
    pub statistic: String,
    pub log_a: usize,
    pub log_b: Option<usize>,
    pub value: f64,
}

/// Flattens a report into rows, with 1-based log numbers.
pub fn stats_records(report: &StatisticsReport) -> Vec<StatsRecord> {
    let mut records = Vec::new();
    for (index, std) in report.column_std.iter().enumerate() {
        for (field, value) in Field::SPATIAL.iter().zip(std.iter()) {
            records.push(StatsRecord {
                statistic: format!("std_dev_{}", field.name()),
                log_a: index + 1,
                log_b: None,
                value: *value,
            });
        }
    }
    for ((i, j), value) in report.pairwise_std.indexed_iter() {
        records.push(StatsRecord {
            statistic: "std_dev_abs".to_string(),
            log_a: i + 1,
            log_b: Some(j + 1),
            value: *value,
        });
    }
    records
}

pub fn write_stats_csv(output_path: &Path, report: &StatisticsReport) -> Result<()> {
    let mut writer = Writer::from_path(output_path)?;
    for record in stats_records(report) {
        writer.serialize(record)?;
    }
    writer.flush().map_err(|source| GpsError::Io {
        path: output_path.to_path_buf(),
        source,
    })?;
    info!("Statistics written to '{}'", output_path.display());
    Ok(())
}

// src/data_input/log_set.rs

use log::info;

use crate::data_analysis::normalize::{angles_to_meters, Origin};
use crate::data_input::log_data::GpsLog;
use crate::data_input::log_parser::load_logs;
use crate::error::{GpsError, Result};

/// All logs of one run, optionally converted to meters from a shared origin.
#[derive(Debug, Clone)]
pub struct LogSet {
    logs: Vec<GpsLog>,
    origin: Option<Origin>,
}

impl LogSet {
    /// Loads `{prefix}1.log` .. `{prefix}{count}.log` and, when
    /// `meters_enabled`, converts them to meters.
    pub fn load(prefix: &str, count: usize, meters_enabled: bool) -> Result<Self> {
        let logs = load_logs(prefix, count)?;
        Self::from_logs(logs, meters_enabled)
    }

    /// The origin is taken from the first log.
    pub fn from_logs(mut logs: Vec<GpsLog>, meters_enabled: bool) -> Result<Self> {
        let first = logs.first().ok_or(GpsError::NoLogs)?;
        let origin = if meters_enabled {
            let origin = Origin::from_log(first)?;
            info!(
                "Origin: lat {:.7}, lon {:.7}",
                origin.latitude, origin.longitude
            );
            angles_to_meters(&mut logs, &origin)?;
            Some(origin)
        } else {
            None
        };
        Ok(Self { logs, origin })
    }

    pub fn logs(&self) -> &[GpsLog] {
        &self.logs
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn meters_enabled(&self) -> bool {
        self.origin.is_some()
    }

    /// Dumps every table to stdout.
    pub fn print_data(&self) {
        for (index, log) in self.logs.iter().enumerate() {
            println!(
                "\nShape of log {} ({}): {:?}",
                index + 1,
                log.display_name(),
                log.data().shape()
            );
            println!("{}", log.data());
        }
    }
}

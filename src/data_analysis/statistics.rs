// src/data_analysis/statistics.rs

use log::debug;
use ndarray::{s, Array1, Array2, ArrayView1, Axis};

use crate::data_input::log_data::{Field, GpsLog};
use crate::error::{GpsError, Result};

/// How samples of two logs are paired before measuring their distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairingMode {
    /// Sample `k` of one log against sample `k` of the other, truncated to the shorter log.
    #[default]
    Index,
    /// Each sample of the first log against the second log interpolated at the same time.
    Time,
}

impl PairingMode {
    pub fn distance(self, a: &GpsLog, b: &GpsLog) -> Result<Array1<f64>> {
        match self {
            PairingMode::Index => Ok(horizontal_distance(a, b)),
            PairingMode::Time => time_aligned_distance(a, b),
        }
    }
}

/// Population standard deviation (ddof = 0). NaN for an empty series.
pub fn std_dev(values: ArrayView1<'_, f64>) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.std_axis(Axis(0), 0.0).into_scalar()
}

/// Standard deviation of latitude, longitude and altitude, in [`Field::SPATIAL`] order.
pub fn column_std_dev(log: &GpsLog) -> Array1<f64> {
    if log.is_empty() {
        return Array1::from_elem(Field::SPATIAL.len(), f64::NAN);
    }
    log.data()
        .slice(s![.., Field::Latitude.index()..])
        .std_axis(Axis(0), 0.0)
}

/// Per-sample horizontal distance between two logs, paired by index.
///
/// Both logs are truncated to the shorter one; timestamps are not looked at.
pub fn horizontal_distance(a: &GpsLog, b: &GpsLog) -> Array1<f64> {
    let n = a.len().min(b.len());
    let d_lat = &a.field(Field::Latitude).slice(s![..n]) - &b.field(Field::Latitude).slice(s![..n]);
    let d_lon =
        &a.field(Field::Longitude).slice(s![..n]) - &b.field(Field::Longitude).slice(s![..n]);
    (&d_lat * &d_lat + &d_lon * &d_lon).mapv_into(f64::sqrt)
}

/// Per-sample horizontal distance between `a` and `b` interpolated at `a`'s timestamps.
///
/// Samples of `a` outside `b`'s time span are dropped. `b`'s time column
/// must be non-decreasing and free of NaN.
pub fn time_aligned_distance(a: &GpsLog, b: &GpsLog) -> Result<Array1<f64>> {
    let times: Vec<f64> = b.field(Field::Time).to_vec();
    if times.iter().any(|t| t.is_nan()) || times.windows(2).any(|w| w[0] > w[1]) {
        return Err(GpsError::UnsortedTime {
            path: b.path().to_path_buf(),
        });
    }
    let b_lat = b.field(Field::Latitude);
    let b_lon = b.field(Field::Longitude);

    let distances: Vec<f64> = a
        .field(Field::Time)
        .iter()
        .zip(a.field(Field::Latitude).iter())
        .zip(a.field(Field::Longitude).iter())
        .filter_map(|((&t, &lat), &lon)| {
            let (k, frac) = locate(&times, t)?;
            let (other_lat, other_lon) = if frac == 0.0 {
                (b_lat[k], b_lon[k])
            } else {
                (
                    lerp(b_lat[k], b_lat[k + 1], frac),
                    lerp(b_lon[k], b_lon[k + 1], frac),
                )
            };
            Some((lat - other_lat).hypot(lon - other_lon))
        })
        .collect();
    Ok(Array1::from(distances))
}

/// Index `k` and fraction such that `t` lies at `times[k] + frac * (times[k + 1] - times[k])`.
fn locate(times: &[f64], t: f64) -> Option<(usize, f64)> {
    let k = times.partition_point(|&x| x < t);
    if k < times.len() && times[k] == t {
        return Some((k, 0.0));
    }
    if k == 0 || k == times.len() {
        return None;
    }
    let (t0, t1) = (times[k - 1], times[k]);
    Some((k - 1, (t - t0) / (t1 - t0)))
}

fn lerp(a: f64, b: f64, frac: f64) -> f64 {
    a + (b - a) * frac
}

/// Standard deviation of the horizontal distance between two logs.
pub fn std_dev_abs(a: &GpsLog, b: &GpsLog, mode: PairingMode) -> Result<f64> {
    Ok(std_dev(mode.distance(a, b)?.view()))
}

/// Full N×N grid of [`std_dev_abs`]; entry `(i, j)` compares log `i` against log `j`.
pub fn std_dev_abs_matrix(logs: &[GpsLog], mode: PairingMode) -> Result<Array2<f64>> {
    let n = logs.len();
    let mut matrix = Array2::zeros((n, n));
    for (i, a) in logs.iter().enumerate() {
        for (j, b) in logs.iter().enumerate() {
            matrix[[i, j]] = std_dev_abs(a, b, mode)?;
        }
    }
    Ok(matrix)
}

/// Statistics shared by the console report, the CSV export and the bar charts.
#[derive(Debug, Clone)]
pub struct StatisticsReport {
    /// One entry per log, in [`Field::SPATIAL`] order.
    pub column_std: Vec<Array1<f64>>,
    pub pairwise_std: Array2<f64>,
    pub mode: PairingMode,
}

impl StatisticsReport {
    pub fn compute(logs: &[GpsLog], mode: PairingMode) -> Result<Self> {
        let column_std = logs.iter().map(column_std_dev).collect();
        let pairwise_std = std_dev_abs_matrix(logs, mode)?;
        debug!("Computed statistics for {} logs ({:?} pairing)", logs.len(), mode);
        Ok(Self {
            column_std,
            pairwise_std,
            mode,
        })
    }

    pub fn print_column_std_dev(&self) {
        println!("\nStd dev relative:");
        println!("{:?}", Field::SPATIAL.map(Field::name));
        for (index, std) in self.column_std.iter().enumerate() {
            println!("  log {}: {}", index + 1, std);
        }
    }

    pub fn print_pairwise_std_dev(&self) {
        for ((i, j), value) in self.pairwise_std.indexed_iter() {
            println!("\nStd dev absolute between {} and {}:", i + 1, j + 1);
            println!("{value}");
        }
    }
}

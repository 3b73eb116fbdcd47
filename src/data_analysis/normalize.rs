// src/data_analysis/normalize.rs

//! Conversion of latitude/longitude degrees into meters from a local origin.
//!
//! Each axis is measured separately: the north distance holds longitude at
//! the origin's value, the east distance holds latitude at the origin's
//! value. This is a small-area approximation of a local tangent plane.

use geo::{GeodesicDistance, Point};
use log::debug;
use ndarray::ArrayView1;
use ndarray_stats::QuantileExt;

use crate::constants::ORIGIN_MARGIN_DEG;
use crate::data_input::log_data::{Field, GpsLog};
use crate::error::{GpsError, Result};

/// Reference point for the metric frame, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    pub latitude: f64,
    pub longitude: f64,
}

impl Origin {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Minimum latitude and longitude of `log`, each pulled back by
    /// [`ORIGIN_MARGIN_DEG`]. NaN samples are skipped.
    pub fn from_log(log: &GpsLog) -> Result<Self> {
        let latitude = finite_min(log.field(Field::Latitude));
        let longitude = finite_min(log.field(Field::Longitude));
        match (latitude, longitude) {
            (Some(lat), Some(lon)) => Ok(Self::new(
                lat - ORIGIN_MARGIN_DEG,
                lon - ORIGIN_MARGIN_DEG,
            )),
            _ => Err(GpsError::EmptyLog {
                path: log.path().to_path_buf(),
            }),
        }
    }

    fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    /// Geodesic distance in meters from the origin to `(latitude, origin.longitude)`.
    pub fn north_meters(&self, latitude: f64) -> f64 {
        if !latitude.is_finite() {
            return f64::NAN;
        }
        Point::new(self.longitude, latitude).geodesic_distance(&self.point())
    }

    /// Geodesic distance in meters from the origin to `(origin.latitude, longitude)`.
    pub fn east_meters(&self, longitude: f64) -> f64 {
        if !longitude.is_finite() {
            return f64::NAN;
        }
        Point::new(longitude, self.latitude).geodesic_distance(&self.point())
    }

    /// `(north, east)` meters for one sample.
    pub fn to_meters(&self, latitude: f64, longitude: f64) -> (f64, f64) {
        (self.north_meters(latitude), self.east_meters(longitude))
    }
}

fn finite_min(values: ArrayView1<'_, f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let min = *values.min_skipnan();
    min.is_finite().then_some(min)
}

/// Overwrites latitude/longitude of every log with meters from `origin`.
///
/// One-way: logs that are already in meters are refused, and nothing is
/// converted unless every log is still in degrees.
pub fn angles_to_meters(logs: &mut [GpsLog], origin: &Origin) -> Result<()> {
    if let Some(converted) = logs.iter().find(|log| log.in_meters()) {
        return Err(GpsError::AlreadyConverted {
            path: converted.path().to_path_buf(),
        });
    }
    for log in logs.iter_mut() {
        log.field_mut(Field::Latitude)
            .mapv_inplace(|lat| origin.north_meters(lat));
        log.field_mut(Field::Longitude)
            .mapv_inplace(|lon| origin.east_meters(lon));
        log.mark_converted();
        debug!("Converted '{}' to meters", log.display_name());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn scenario_log() -> GpsLog {
        GpsLog::from_rows(
            "log1.log",
            &[[0.0, 10.0001, 20.0001, 5.0], [1.0, 10.0002, 20.0002, 6.0]],
        )
    }

    #[test]
    fn test_origin_is_minimum_minus_margin() {
        let origin = Origin::from_log(&scenario_log()).unwrap();
        assert_abs_diff_eq!(origin.latitude, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(origin.longitude, 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_origin_skips_nan() {
        let log = GpsLog::from_rows(
            "log1.log",
            &[[0.0, f64::NAN, 5.0, 0.0], [1.0, 3.0, f64::NAN, 0.0], [2.0, 4.0, 6.0, 0.0]],
        );
        let origin = Origin::from_log(&log).unwrap();
        assert_abs_diff_eq!(origin.latitude, 3.0 - ORIGIN_MARGIN_DEG, epsilon = 1e-12);
        assert_abs_diff_eq!(origin.longitude, 5.0 - ORIGIN_MARGIN_DEG, epsilon = 1e-12);
    }

    #[test]
    fn test_origin_of_empty_log_fails() {
        let log = GpsLog::from_rows("log1.log", &[]);
        assert!(matches!(
            Origin::from_log(&log),
            Err(GpsError::EmptyLog { .. })
        ));
    }

    #[test]
    fn test_origin_maps_to_zero() {
        let origin = Origin::new(47.0, 8.0);
        let (north, east) = origin.to_meters(47.0, 8.0);
        assert_abs_diff_eq!(north, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(east, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_one_arc_second_of_latitude() {
        // One arc second of latitude is close to 30.7 m near the equator.
        let origin = Origin::new(0.0, 0.0);
        let north = origin.north_meters(1.0 / 3600.0);
        assert!((north - 30.7).abs() < 0.3, "got {north}");
    }

    #[test]
    fn test_conversion_is_positive_and_increasing() {
        let mut logs = vec![scenario_log()];
        let origin = Origin::from_log(&logs[0]).unwrap();
        angles_to_meters(&mut logs, &origin).unwrap();

        let lat = logs[0].field(Field::Latitude);
        let lon = logs[0].field(Field::Longitude);
        assert!(lat[0] > 0.0 && lat[1] > lat[0]);
        assert!(lon[0] > 0.0 && lon[1] > lon[0]);
        // 0.0001 degrees of latitude is roughly 11 m.
        assert!((lat[0] - 11.06).abs() < 0.1, "got {}", lat[0]);
        // Time and altitude are untouched.
        assert_eq!(logs[0].field(Field::Time)[1], 1.0);
        assert_eq!(logs[0].field(Field::Altitude)[0], 5.0);
        assert!(logs[0].in_meters());
    }

    #[test]
    fn test_conversion_is_one_way() {
        let mut logs = vec![scenario_log()];
        let origin = Origin::from_log(&logs[0]).unwrap();
        angles_to_meters(&mut logs, &origin).unwrap();
        let converted = logs[0].data().clone();

        assert!(matches!(
            angles_to_meters(&mut logs, &origin),
            Err(GpsError::AlreadyConverted { .. })
        ));
        assert_eq!(logs[0].data(), &converted);
    }

    #[test]
    fn test_nan_samples_stay_nan() {
        let mut logs = vec![GpsLog::from_rows(
            "log1.log",
            &[[0.0, 1.0, 1.0, 0.0], [1.0, f64::NAN, 1.0, 0.0]],
        )];
        let origin = Origin::from_log(&logs[0]).unwrap();
        angles_to_meters(&mut logs, &origin).unwrap();
        assert!(logs[0].field(Field::Latitude)[1].is_nan());
        assert!(logs[0].field(Field::Longitude)[1].is_finite());
    }
}

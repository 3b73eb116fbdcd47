// tests/pipeline_test.rs

use std::fs;
use std::path::Path;

use approx::assert_abs_diff_eq;

use gps_log_compare::data_analysis::statistics::{
    horizontal_distance, std_dev_abs, PairingMode, StatisticsReport,
};
use gps_log_compare::data_input::log_data::{Field, FIELD_COUNT};
use gps_log_compare::data_input::log_set::LogSet;
use gps_log_compare::GpsError;

const HEADER: &str = "time latitude longitude altitude\n";

fn write_log(dir: &Path, index: usize, rows: &[(f64, f64, f64, f64)]) {
    let mut content = String::from(HEADER);
    for (t, lat, lon, alt) in rows {
        content.push_str(&format!("{t} {lat} {lon} {alt}\n"));
    }
    fs::write(dir.join(format!("log{index}.log")), content).unwrap();
}

fn walk(len: usize, lat_step: f64) -> Vec<(f64, f64, f64, f64)> {
    (0..len)
        .map(|k| {
            let k = k as f64;
            (k, 46.5 + lat_step * k, 6.6 + 0.00002 * k, 400.0 + k)
        })
        .collect()
}

fn prefix(dir: &Path) -> String {
    format!("{}/log", dir.display())
}

#[test]
fn test_loader_produces_one_table_per_file() {
    let dir = tempfile::tempdir().unwrap();
    write_log(dir.path(), 1, &walk(5, 0.00001));
    write_log(dir.path(), 2, &walk(8, 0.00002));
    write_log(dir.path(), 3, &walk(3, 0.00003));

    let set = LogSet::load(&prefix(dir.path()), 3, false).unwrap();
    assert_eq!(set.len(), 3);
    let lengths: Vec<usize> = set.logs().iter().map(|log| log.len()).collect();
    assert_eq!(lengths, vec![5, 8, 3]);
    assert!(set.logs().iter().all(|log| log.data().ncols() == FIELD_COUNT));
}

#[test]
fn test_scenario_conversion() {
    let dir = tempfile::tempdir().unwrap();
    write_log(
        dir.path(),
        1,
        &[(0.0, 10.0001, 20.0001, 5.0), (1.0, 10.0002, 20.0002, 6.0)],
    );

    let set = LogSet::load(&prefix(dir.path()), 1, true).unwrap();
    let origin = set.origin().unwrap();
    assert_abs_diff_eq!(origin.latitude, 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(origin.longitude, 20.0, epsilon = 1e-9);

    let log = &set.logs()[0];
    let north = log.field(Field::Latitude);
    let east = log.field(Field::Longitude);
    assert!(north[0] > 0.0 && north[1] > north[0]);
    assert!(east[0] > 0.0 && east[1] > east[0]);
}

#[test]
fn test_origin_maps_to_zero_meters() {
    let dir = tempfile::tempdir().unwrap();
    // The origin is the first log's minimum minus the margin, so a sample
    // placed exactly there must end up at (0, 0).
    write_log(
        dir.path(),
        1,
        &[(0.0, 46.5001, 6.6001, 400.0), (1.0, 46.501, 6.601, 401.0)],
    );
    write_log(dir.path(), 2, &[(0.0, 46.5, 6.6, 400.0)]);

    let set = LogSet::load(&prefix(dir.path()), 2, true).unwrap();
    let second = &set.logs()[1];
    assert_abs_diff_eq!(second.field(Field::Latitude)[0], 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(second.field(Field::Longitude)[0], 0.0, epsilon = 1e-6);
}

#[test]
fn test_identical_logs_after_conversion() {
    let dir = tempfile::tempdir().unwrap();
    write_log(dir.path(), 1, &walk(6, 0.00001));
    write_log(dir.path(), 2, &walk(6, 0.00001));

    let set = LogSet::load(&prefix(dir.path()), 2, true).unwrap();
    let (a, b) = (&set.logs()[0], &set.logs()[1]);
    assert!(horizontal_distance(a, b).iter().all(|&d| d == 0.0));
    assert_eq!(std_dev_abs(a, b, PairingMode::Index).unwrap(), 0.0);
}

#[test]
fn test_truncation_to_shorter_log() {
    let dir = tempfile::tempdir().unwrap();
    write_log(dir.path(), 1, &walk(10, 0.00001));
    write_log(dir.path(), 2, &walk(7, 0.00002));

    let set = LogSet::load(&prefix(dir.path()), 2, true).unwrap();
    assert_eq!(horizontal_distance(&set.logs()[0], &set.logs()[1]).len(), 7);

    let report = StatisticsReport::compute(set.logs(), PairingMode::Index).unwrap();
    assert_eq!(report.pairwise_std.dim(), (2, 2));
    assert!(report.pairwise_std[[0, 1]] > 0.0);
}

#[test]
fn test_missing_file_fails_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    write_log(dir.path(), 1, &walk(4, 0.00001));
    write_log(dir.path(), 2, &walk(4, 0.00001));

    match LogSet::load(&prefix(dir.path()), 3, true) {
        Err(GpsError::Io { path, .. }) => assert!(path.ends_with("log3.log")),
        other => panic!("expected missing file error, got {other:?}"),
    }
}

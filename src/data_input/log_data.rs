// src/data_input/log_data.rs

use std::path::{Path, PathBuf};

use ndarray::{Array2, ArrayView1, ArrayViewMut1};

/// Number of columns in every log table.
pub const FIELD_COUNT: usize = 4;

/// Columns of a GPS log, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Time = 0,
    Latitude = 1,
    Longitude = 2,
    Altitude = 3,
}

impl Field {
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Time,
        Field::Latitude,
        Field::Longitude,
        Field::Altitude,
    ];

    /// Every column except time.
    pub const SPATIAL: [Field; 3] = [Field::Latitude, Field::Longitude, Field::Altitude];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Field::Time => "t",
            Field::Latitude => "lat",
            Field::Longitude => "lon",
            Field::Altitude => "alt",
        }
    }
}

/// One GPS track: a `(samples, 4)` table of time, latitude, longitude and altitude.
///
/// Latitude and longitude hold degrees until the log is converted to meters,
/// after which they hold the north and east distances from the shared origin.
#[derive(Debug, Clone)]
pub struct GpsLog {
    path: PathBuf,
    data: Array2<f64>,
    in_meters: bool,
}

impl GpsLog {
    pub fn new(path: impl Into<PathBuf>, data: Array2<f64>) -> Self {
        debug_assert_eq!(data.ncols(), FIELD_COUNT);
        Self {
            path: path.into(),
            data,
            in_meters: false,
        }
    }

    pub fn from_rows(path: impl Into<PathBuf>, rows: &[[f64; FIELD_COUNT]]) -> Self {
        Self::new(path, Array2::from(rows.to_vec()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name of the log, for labels and messages.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.data.nrows() == 0
    }

    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    pub fn field(&self, field: Field) -> ArrayView1<'_, f64> {
        self.data.column(field.index())
    }

    pub(crate) fn field_mut(&mut self, field: Field) -> ArrayViewMut1<'_, f64> {
        self.data.column_mut(field.index())
    }

    /// Horizontal track as `(longitude, latitude)` points, i.e. (x, y) on a map.
    pub fn horizontal_track(&self) -> Vec<(f64, f64)> {
        self.field(Field::Longitude)
            .iter()
            .zip(self.field(Field::Latitude).iter())
            .map(|(&lon, &lat)| (lon, lat))
            .collect()
    }

    pub fn in_meters(&self) -> bool {
        self.in_meters
    }

    pub(crate) fn mark_converted(&mut self) {
        self.in_meters = true;
    }
}

// src/data_input/log_data.rs

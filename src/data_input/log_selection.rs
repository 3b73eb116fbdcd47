// src/data_input/log_selection.rs

use crate::error::{GpsError, Result};

/// Turns the 1-based log numbers given on the command line into 0-based indices.
///
/// An empty request selects every log. Order and repeats are kept as given.
pub fn resolve_selection(requested: &[usize], count: usize) -> Result<Vec<usize>> {
    if requested.is_empty() {
        return Ok((0..count).collect());
    }
    requested
        .iter()
        .map(|&index| {
            if (1..=count).contains(&index) {
                Ok(index - 1)
            } else {
                Err(GpsError::SelectionOutOfRange { index, count })
            }
        })
        .collect()
}

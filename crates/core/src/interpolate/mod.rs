//! Temporal interpolation over sparse year series.
//!
//! Override tables are only re-measured in certain years; intermediate years
//! are reconstructed by linear interpolation between the bracketing known
//! years, while years outside the observed range take the nearest boundary
//! value unchanged. A series that explicitly supplies a requested year passes
//! that value through exactly, with no interpolation arithmetic.

use thiserror::Error;

use crate::model::{Series, Year};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InterpolationError {
    #[error("cannot interpolate an empty series")]
    EmptySeries,
}

/// Value of `series` at `year`.
///
/// A single-observation series extrapolates flat in both directions.
pub fn value_at(series: &Series, year: Year) -> Result<f64, InterpolationError> {
    let points = series.points();
    if points.is_empty() {
        return Err(InterpolationError::EmptySeries);
    }
    match points.binary_search_by_key(&year, |(known, _)| *known) {
        Ok(index) => Ok(points[index].1),
        Err(0) => Ok(points[0].1),
        Err(index) if index == points.len() => Ok(points[points.len() - 1].1),
        Err(index) => {
            let (y0, v0) = points[index - 1];
            let (y1, v1) = points[index];
            Ok(v0 + (v1 - v0) * f64::from(year - y0) / f64::from(y1 - y0))
        }
    }
}

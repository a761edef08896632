use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Calendar year of an observation.
pub type Year = i32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeriesError {
    #[error("duplicate year in series: {year}")]
    DuplicateYear { year: Year },
}

/// Sparse per-year observations, kept sorted ascending by year.
///
/// Sorted storage supports binary bracket search during interpolation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Year, f64>", into = "BTreeMap<Year, f64>")]
pub struct Series {
    points: Vec<(Year, f64)>,
}

impl Series {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Year, f64)>) -> Result<Self, SeriesError> {
        let mut points: Vec<(Year, f64)> = pairs.into_iter().collect();
        points.sort_by_key(|(year, _)| *year);
        for window in points.windows(2) {
            if window[0].0 == window[1].0 {
                return Err(SeriesError::DuplicateYear { year: window[0].0 });
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[(Year, f64)] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn first_year(&self) -> Option<Year> {
        self.points.first().map(|(year, _)| *year)
    }

    pub fn last_year(&self) -> Option<Year> {
        self.points.last().map(|(year, _)| *year)
    }

    /// Exact-year lookup; `None` when the year carries no observation.
    pub fn value(&self, year: Year) -> Option<f64> {
        self.points
            .binary_search_by_key(&year, |(known, _)| *known)
            .ok()
            .map(|index| self.points[index].1)
    }
}

impl From<BTreeMap<Year, f64>> for Series {
    fn from(map: BTreeMap<Year, f64>) -> Self {
        // BTreeMap iteration is already sorted and duplicate-free.
        Self {
            points: map.into_iter().collect(),
        }
    }
}

impl From<Series> for BTreeMap<Year, f64> {
    fn from(series: Series) -> Self {
        series.points.into_iter().collect()
    }
}

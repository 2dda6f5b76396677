// File: crates/chart-core/src/series.rs
// Summary: Yearly observation series (one value per consecutive year).
// Notes:
// - Values are validated once on construction; everything downstream may
//   assume at least two finite values.

use crate::error::{ChartError, ChartResult};

#[derive(Clone, Debug, PartialEq)]
pub struct Observations {
    start_year: i32,
    values: Vec<f64>,
}

impl Observations {
    /// Build a series starting at `start_year`, one value per year.
    pub fn try_new(start_year: i32, values: Vec<f64>) -> ChartResult<Self> {
        if values.len() < 2 {
            return Err(ChartError::TooFewObservations { len: values.len() });
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ChartError::NonFiniteObservation { index, value });
        }
        let last = i32::try_from(values.len() - 1).ok().and_then(|n| start_year.checked_add(n));
        if last.is_none() {
            return Err(ChartError::YearOverflow { start_year, len: values.len() });
        }
        Ok(Self { start_year, values })
    }

    pub fn from_slice(start_year: i32, values: &[f64]) -> ChartResult<Self> {
        Self::try_new(start_year, values.to_vec())
    }

    pub fn values(&self) -> &[f64] { &self.values }
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
    pub fn start_year(&self) -> i32 { self.start_year }
    pub fn end_year(&self) -> i32 { self.year_at(self.values.len() - 1) }

    /// Year of `index`. Saturates past the end; in-range indices never overflow.
    pub fn year_at(&self, index: usize) -> i32 {
        self.start_year.saturating_add(i32::try_from(index).unwrap_or(i32::MAX))
    }

    pub fn get(&self, index: usize) -> ChartResult<f64> {
        self.values
            .get(index)
            .copied()
            .ok_or(ChartError::IndexOutOfRange { index, len: self.values.len() })
    }

    /// Index of `year`, if the series covers it.
    pub fn index_of_year(&self, year: i32) -> Option<usize> {
        let offset = year.checked_sub(self.start_year)?;
        usize::try_from(offset).ok().filter(|&i| i < self.values.len())
    }

    /// (min, max) over all values.
    pub fn min_max(&self) -> (f64, f64) {
        self.values.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
    }

    /// `(index, year, value)` triples in order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, i32, f64)> + '_ {
        self.values.iter().enumerate().map(move |(i, &v)| (i, self.year_at(i), v))
    }
}

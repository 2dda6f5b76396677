// File: crates/chart-core/src/trend.rs
// Summary: Where the trend line endpoints come from: fixed illustrative values or an
// ordinary least-squares fit of the displayed series.

use crate::error::{ChartError, ChartResult};
use crate::series::Observations;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrendSource {
    /// Caller-supplied start/end values. Illustrative only; not derived from the data.
    Illustrative { start: f64, end: f64 },
    /// Least-squares line of value against index, evaluated at the first and last index.
    LeastSquares,
}

impl TrendSource {
    /// `(start, end)` values in data units.
    pub fn endpoints(&self, obs: &Observations) -> ChartResult<(f64, f64)> {
        match *self {
            TrendSource::Illustrative { start, end } => {
                finite("trend start", start)?;
                finite("trend end", end)?;
                Ok((start, end))
            }
            TrendSource::LeastSquares => {
                let fit = LinearFit::least_squares(obs.values());
                Ok((fit.at(0.0), fit.at((obs.len() - 1) as f64)))
            }
        }
    }

    pub fn is_fitted(&self) -> bool { matches!(self, TrendSource::LeastSquares) }
}

/// `value = intercept + slope * index`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Fit over `(i, values[i])`. Fewer than two points yield a flat line.
    pub fn least_squares(values: &[f64]) -> Self {
        let n = values.len();
        if n == 0 { return Self { slope: 0.0, intercept: 0.0 }; }
        let nf = n as f64;
        let mean_x = (nf - 1.0) * 0.5;
        let mean_y = values.iter().sum::<f64>() / nf;
        let mut sxy = 0.0f64;
        let mut sxx = 0.0f64;
        for (i, &y) in values.iter().enumerate() {
            let dx = i as f64 - mean_x;
            sxy += dx * (y - mean_y);
            sxx += dx * dx;
        }
        let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };
        Self { slope, intercept: mean_y - slope * mean_x }
    }

    #[inline]
    pub fn at(&self, index: f64) -> f64 { self.intercept + self.slope * index }
}

pub(crate) fn finite(what: &'static str, value: f64) -> ChartResult<f64> {
    if value.is_finite() { Ok(value) } else { Err(ChartError::NonFiniteReference { what, value }) }
}

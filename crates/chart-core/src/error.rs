// File: crates/chart-core/src/error.rs
// Summary: Input validation errors raised before any geometry is produced.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("need at least 2 observations to map a series, got {len}")]
    TooFewObservations { len: usize },

    #[error("observation {index} is not finite ({value})")]
    NonFiniteObservation { index: usize, value: f64 },

    #[error("invalid plot area {width}x{height} with padding {padding}: {reason}")]
    InvalidPlotArea {
        width: f64,
        height: f64,
        padding: f64,
        reason: &'static str,
    },

    #[error("value margin must be finite and non-negative, got {0}")]
    InvalidMargin(f64),

    #[error("{what} must be finite, got {value}")]
    NonFiniteReference { what: &'static str, value: f64 },

    #[error("{len} yearly observations starting in {start_year} run past the largest representable year")]
    YearOverflow { start_year: i32, len: usize },

    #[error("index {index} out of range for {len} observations")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type ChartResult<T> = Result<T, ChartError>;

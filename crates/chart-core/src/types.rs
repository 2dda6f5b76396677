// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (plot area, default sizes, value margin).

use crate::error::{ChartError, ChartResult};

/// Default drawing width in pixels.
pub const WIDTH: f64 = 600.0;
/// Default drawing height in pixels.
pub const HEIGHT: f64 = 300.0;
/// Default padding applied on every side of the plot, in pixels.
pub const PADDING: f64 = 40.0;
/// Value units added below the minimum and above the maximum observation.
pub const VALUE_MARGIN: f64 = 20.0;

/// Target draw area for a chart.
/// Contract: finite, `width > 2 * padding`, `height > 2 * padding`, `padding >= 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl PlotArea {
    /// Create a plot area, rejecting sizes that leave no room to draw.
    pub fn new(width: f64, height: f64, padding: f64) -> ChartResult<Self> {
        let area = Self { width, height, padding };
        area.validate()?;
        Ok(area)
    }

    pub fn validate(&self) -> ChartResult<()> {
        let fail = |reason| ChartError::InvalidPlotArea {
            width: self.width,
            height: self.height,
            padding: self.padding,
            reason,
        };
        if !(self.width.is_finite() && self.height.is_finite() && self.padding.is_finite()) {
            return Err(fail("dimensions must be finite"));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(fail("width and height must be positive"));
        }
        if self.padding < 0.0 {
            return Err(fail("padding must be non-negative"));
        }
        if self.width <= 2.0 * self.padding {
            return Err(fail("width must exceed twice the padding"));
        }
        if self.height <= 2.0 * self.padding {
            return Err(fail("height must exceed twice the padding"));
        }
        Ok(())
    }

    /// Drawable width between the left and right padding.
    pub fn inner_width(&self) -> f64 { self.width - 2.0 * self.padding }
    /// Drawable height between the top and bottom padding.
    pub fn inner_height(&self) -> f64 { self.height - 2.0 * self.padding }

    pub fn left(&self) -> f64 { self.padding }
    pub fn right(&self) -> f64 { self.width - self.padding }
    pub fn top(&self) -> f64 { self.padding }
    pub fn bottom(&self) -> f64 { self.height - self.padding }
}

impl Default for PlotArea {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, padding: PADDING }
    }
}

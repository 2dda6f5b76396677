// File: crates/chart-core/src/scale.rs
// Summary: Index (X) and Value (Y) scale transforms between data space and pixels.

use crate::error::{ChartError, ChartResult};
use crate::geometry::clamp;
use crate::types::PlotArea;

/// Logical X coordinate (position in the observation sequence).
pub type Logical = f64;
/// Value Y coordinate (observation value).
pub type Value = f64;

/// Forward and inverse pixel mapping along one axis.
pub trait ScaleTransform {
    type Domain;
    fn to_px(&self, v: Self::Domain) -> f64;
    fn from_px(&self, px: f64) -> Self::Domain;
}

/// Horizontal scale placing `count` evenly spaced indices between the paddings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexScale {
    pub left_px: f64,
    pub span_px: f64,
    pub count: usize,
}

impl IndexScale {
    pub fn new(area: &PlotArea, count: usize) -> ChartResult<Self> {
        if count < 2 {
            return Err(ChartError::TooFewObservations { len: count });
        }
        Ok(Self { left_px: area.left(), span_px: area.inner_width(), count })
    }

    #[inline]
    pub fn last_index(&self) -> usize { self.count - 1 }

    /// Nearest index to a pixel column, clamped to the sequence.
    pub fn nearest_index(&self, px: f64) -> usize {
        let i = self.from_px(px).round();
        if !i.is_finite() { return 0; }
        clamp(i, 0.0, self.last_index() as f64) as usize
    }
}

impl ScaleTransform for IndexScale {
    type Domain = Logical;

    #[inline]
    fn to_px(&self, i: Logical) -> f64 {
        i / self.last_index() as f64 * self.span_px + self.left_px
    }

    #[inline]
    fn from_px(&self, px: f64) -> Logical {
        (px - self.left_px) / self.span_px * self.last_index() as f64
    }
}

/// Vertical value scale mapping [vmin, vmax] onto [bottom, top] pixels.
/// A zero-width range collapses onto the vertical middle of the drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub height_px: f64,
    pub padding_px: f64,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new(area: &PlotArea, vmin: Value, vmax: Value) -> Self {
        Self { height_px: area.height, padding_px: area.padding, vmin, vmax }
    }

    /// Data range padded by `margin` on both sides.
    pub fn with_margin(area: &PlotArea, lo: Value, hi: Value, margin: f64) -> ChartResult<Self> {
        if !margin.is_finite() || margin < 0.0 {
            return Err(ChartError::InvalidMargin(margin));
        }
        Ok(Self::new(area, lo - margin, hi + margin))
    }

    pub fn is_degenerate(&self) -> bool { self.vmax == self.vmin }

    #[inline]
    fn inner_px(&self) -> f64 { self.height_px - 2.0 * self.padding_px }
}

impl ScaleTransform for ValueScale {
    type Domain = Value;

    #[inline]
    fn to_px(&self, v: Value) -> f64 {
        if self.is_degenerate() {
            return self.height_px * 0.5;
        }
        self.height_px - (v - self.vmin) / (self.vmax - self.vmin) * self.inner_px() - self.padding_px
    }

    #[inline]
    fn from_px(&self, py: f64) -> Value {
        if self.is_degenerate() {
            return self.vmin;
        }
        self.vmin + (self.height_px - self.padding_px - py) / self.inner_px() * (self.vmax - self.vmin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_scale_endpoints_and_inverse() {
        let s = IndexScale::new(&PlotArea::default(), 38).unwrap();
        assert_eq!(s.to_px(0.0), 40.0);
        assert_eq!(s.to_px(37.0), 560.0);
        assert_eq!(s.nearest_index(-100.0), 0);
        assert_eq!(s.nearest_index(1e6), 37);
        assert_eq!(s.nearest_index(s.to_px(12.0) + 3.0), 12);
    }

    #[test]
    fn value_scale_inverse_round_trips() {
        let s = ValueScale::with_margin(&PlotArea::default(), 110.0, 220.0, 20.0).unwrap();
        for v in [90.0, 115.0, 160.0, 240.0] {
            assert!((s.from_px(s.to_px(v)) - v).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_range_is_midline() {
        let s = ValueScale::with_margin(&PlotArea::default(), 5.0, 5.0, 0.0).unwrap();
        assert!(s.is_degenerate());
        assert_eq!(s.to_px(5.0), 150.0);
        assert_eq!(s.to_px(1e9), 150.0);
    }

    #[test]
    fn negative_margin_rejected() {
        assert_eq!(
            ValueScale::with_margin(&PlotArea::default(), 0.0, 1.0, -1.0),
            Err(ChartError::InvalidMargin(-1.0))
        );
    }
}

// File: crates/chart-core/src/hover.rs
// Summary: Hover state for chart markers, driven by per-point pointer enter/leave events.

use crate::error::{ChartError, ChartResult};
use crate::geometry::Rect;
use crate::mapper::ChartGeometryMapper;

pub const MARKER_RADIUS: f64 = 3.0;
pub const HOVER_MARKER_RADIUS: f64 = 6.0;
pub const TOOLTIP_WIDTH: f64 = 80.0;
pub const TOOLTIP_HEIGHT: f64 = 40.0;
/// Tooltip box offset from the hovered point (box is centered, above the marker).
pub const TOOLTIP_OFFSET: (f64, f64) = (-40.0, -50.0);

/// Pointer event targeting one marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Enter(usize),
    Leave,
}

/// Which marker, if any, is under the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    index: Option<usize>,
}

impl HoverState {
    pub fn new() -> Self { Self { index: None } }

    pub fn index(&self) -> Option<usize> { self.index }

    pub fn is_hovered(&self, index: usize) -> bool { self.index == Some(index) }

    /// Apply an event for a series of `len` points. An out-of-range enter is rejected
    /// and leaves the state untouched.
    pub fn apply(&mut self, event: PointerEvent, len: usize) -> ChartResult<()> {
        match event {
            PointerEvent::Enter(index) if index >= len => {
                return Err(ChartError::IndexOutOfRange { index, len });
            }
            PointerEvent::Enter(index) => self.index = Some(index),
            PointerEvent::Leave => self.index = None,
        }
        Ok(())
    }

    pub fn enter(&mut self, index: usize, len: usize) -> ChartResult<()> {
        self.apply(PointerEvent::Enter(index), len)
    }

    pub fn leave(&mut self) { self.index = None; }

    pub fn marker_radius(&self, index: usize) -> f64 {
        if self.is_hovered(index) { HOVER_MARKER_RADIUS } else { MARKER_RADIUS }
    }

    /// Tooltip for the hovered point, if any.
    pub fn tooltip(&self, mapper: &ChartGeometryMapper) -> Option<Tooltip> {
        let index = self.index?;
        let p = mapper.point(index).ok()?;
        let obs = mapper.observations();
        let value = obs.values()[index];
        Some(Tooltip {
            index,
            year: obs.year_at(index),
            value,
            rect: Rect::from_xywh(p.x + TOOLTIP_OFFSET.0, p.y + TOOLTIP_OFFSET.1, TOOLTIP_WIDTH, TOOLTIP_HEIGHT),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub index: usize,
    pub year: i32,
    pub value: f64,
    pub rect: Rect,
}

impl Tooltip {
    /// `"1986: 160mm"`
    pub fn label(&self, unit: &str) -> String {
        format!("{}: {}{}", self.year, format_value(self.value), unit)
    }
}

/// Whole numbers print without a fractional part; others keep up to two decimals.
pub fn format_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        let s = format!("{v:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_formatting() {
        assert_eq!(format_value(192.0), "192");
        assert_eq!(format_value(12.5), "12.5");
        assert_eq!(format_value(-0.25), "-0.25");
        assert_eq!(format_value(3.10), "3.1");
    }

    #[test]
    fn out_of_range_enter_keeps_state() {
        let mut h = HoverState::new();
        h.enter(2, 3).unwrap();
        assert!(h.enter(3, 3).is_err());
        assert_eq!(h.index(), Some(2));
    }
}

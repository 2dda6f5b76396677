// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

use crate::geometry::{Point, Segment};
use crate::types::PlotArea;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Horizontal guide lines at `rows` evenly spaced fractions of the plot height,
/// top edge first.
pub fn horizontal_grid(area: &PlotArea, rows: usize) -> Vec<Segment> {
    linspace(0.0, 1.0, rows)
        .into_iter()
        .map(|p| {
            let y = area.top() + p * area.inner_height();
            Segment::new(Point::new(area.left(), y), Point::new(area.right(), y))
        })
        .collect()
}

// File: crates/chart-core/src/mapper.rs
// Summary: ChartGeometryMapper: observation sequence + plot area -> pixel geometry.
//
// The mapping is a pure function of the observations, the plot area and the value
// margin. Nothing here is mutable after construction; hover state lives elsewhere.

use crate::error::ChartResult;
use crate::geometry::{Point, Segment};
use crate::grid::horizontal_grid;
use crate::scale::{IndexScale, ScaleTransform, ValueScale};
use crate::series::Observations;
use crate::svg::fmt_num;
use crate::trend::{finite, TrendSource};
use crate::types::{PlotArea, VALUE_MARGIN};

#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometryMapper {
    obs: Observations,
    area: PlotArea,
    margin: f64,
    xs: IndexScale,
    ys: ValueScale,
}

impl ChartGeometryMapper {
    /// Mapper with the default value margin.
    pub fn new(obs: Observations, area: PlotArea) -> ChartResult<Self> {
        Self::with_margin(obs, area, VALUE_MARGIN)
    }

    pub fn with_margin(obs: Observations, area: PlotArea, margin: f64) -> ChartResult<Self> {
        area.validate()?;
        let xs = IndexScale::new(&area, obs.len())?;
        let (lo, hi) = obs.min_max();
        let ys = ValueScale::with_margin(&area, lo, hi, margin)?;
        tracing::debug!(
            n = obs.len(),
            width = area.width,
            height = area.height,
            padding = area.padding,
            vmin = ys.vmin,
            vmax = ys.vmax,
            "chart geometry mapper ready"
        );
        Ok(Self { obs, area, margin, xs, ys })
    }

    pub fn observations(&self) -> &Observations { &self.obs }
    pub fn area(&self) -> &PlotArea { &self.area }
    pub fn margin(&self) -> f64 { self.margin }
    pub fn len(&self) -> usize { self.obs.len() }
    pub fn is_empty(&self) -> bool { self.obs.is_empty() }

    /// Padded value range `(minVal, maxVal)` used for the vertical mapping.
    pub fn value_range(&self) -> (f64, f64) { (self.ys.vmin, self.ys.vmax) }

    /// `x(i) = i / (N-1) * (W - 2P) + P`
    #[inline]
    pub fn x(&self, index: usize) -> f64 { self.xs.to_px(index as f64) }

    /// `y(v) = H - (v - minVal) / (maxVal - minVal) * (H - 2P) - P`, or `H/2` when the
    /// value range is empty.
    #[inline]
    pub fn y(&self, value: f64) -> f64 { self.ys.to_px(value) }

    /// Pixel position of observation `index`.
    pub fn point(&self, index: usize) -> ChartResult<Point> {
        let v = self.obs.get(index)?;
        Ok(Point::new(self.x(index), self.y(v)))
    }

    /// Every observation in index order; the renderer joins them with straight segments.
    pub fn points(&self) -> Vec<Point> {
        self.obs
            .values()
            .iter()
            .enumerate()
            .map(|(i, &v)| Point::new(self.x(i), self.y(v)))
            .collect()
    }

    /// SVG path data: `M x0 y0 L x1 y1 ...`
    pub fn path_data(&self) -> String {
        let mut d = String::with_capacity(self.len() * 16);
        for (i, p) in self.points().iter().enumerate() {
            if i > 0 { d.push(' '); }
            d.push(if i == 0 { 'M' } else { 'L' });
            d.push(' ');
            d.push_str(&fmt_num(p.x));
            d.push(' ');
            d.push_str(&fmt_num(p.y));
        }
        d
    }

    /// Horizontal reference line across the plot at `value`.
    pub fn mean_line(&self, value: f64) -> ChartResult<Segment> {
        let y = self.y(finite("mean reference", value)?);
        Ok(Segment::new(Point::new(self.area.left(), y), Point::new(self.area.right(), y)))
    }

    /// Two-point trend line from the first to the last observation column.
    pub fn trend_line(&self, source: &TrendSource) -> ChartResult<Segment> {
        let (start, end) = source.endpoints(&self.obs)?;
        let last = self.xs.last_index();
        Ok(Segment::new(
            Point::new(self.x(0), self.y(start)),
            Point::new(self.x(last), self.y(end)),
        ))
    }

    /// Dashed background guides (`rows` evenly spaced lines, top to bottom).
    pub fn grid_lines(&self, rows: usize) -> Vec<Segment> { horizontal_grid(&self.area, rows) }

    /// `(year, x)` for each requested year the series covers.
    pub fn year_ticks(&self, years: &[i32]) -> Vec<(i32, f64)> {
        years
            .iter()
            .filter_map(|&y| self.obs.index_of_year(y).map(|i| (y, self.x(i))))
            .collect()
    }

    /// Observation index closest to a pointer column.
    pub fn nearest_index(&self, px: f64) -> usize { self.xs.nearest_index(px) }

    /// Data value under a pointer row.
    pub fn value_at(&self, py: f64) -> f64 { self.ys.from_px(py) }
}

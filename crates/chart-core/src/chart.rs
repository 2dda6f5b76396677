// File: crates/chart-core/src/chart.rs
// Summary: TrendChart struct, layout pass, and headless SVG/PNG rendering (Skia CPU raster surfaces).

use anyhow::Result;
use skia_safe as skia;

use crate::axis::YearAxis;
use crate::dataset::{self, HISTORICAL_MEAN_MM, TREND_END_MM, TREND_START_MM};
use crate::error::ChartResult;
use crate::geometry::{Point, Segment};
use crate::hover::{HoverState, PointerEvent, Tooltip};
use crate::mapper::ChartGeometryMapper;
use crate::svg::{render_svg, DATA_STROKE_WIDTH, TREND_STROKE_WIDTH};
use crate::theme::Theme;
use crate::trend::TrendSource;
use crate::types::PlotArea;

pub const GRID_ROWS: usize = 5;

pub struct RenderOptions {
    /// Device pixel ratio applied to raster output.
    pub scale: f32,
    /// Year tick labels and tooltip text. Off for pixel-exact snapshots.
    pub draw_labels: bool,
    pub draw_background: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { scale: 1.0, draw_labels: true, draw_background: true }
    }
}

/// One observation marker as drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub index: usize,
    pub year: i32,
    pub center: Point,
    pub radius: f64,
    pub hovered: bool,
}

/// Everything a backend needs, computed once per render.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub area: PlotArea,
    pub title: String,
    pub unit: String,
    pub grid: Vec<Segment>,
    pub mean: Segment,
    pub trend: Segment,
    pub points: Vec<Point>,
    pub path_data: String,
    pub markers: Vec<Marker>,
    pub ticks: Vec<(i32, f64)>,
    pub tooltip: Option<Tooltip>,
}

pub struct TrendChart {
    pub mapper: ChartGeometryMapper,
    pub mean_reference: f64,
    pub trend: TrendSource,
    pub axis: YearAxis,
    pub theme: Theme,
    pub title: String,
    pub unit: String,
    hover: HoverState,
}

impl TrendChart {
    pub fn new(mapper: ChartGeometryMapper) -> Self {
        Self {
            mapper,
            mean_reference: HISTORICAL_MEAN_MM,
            trend: TrendSource::Illustrative { start: TREND_START_MM, end: TREND_END_MM },
            axis: YearAxis::default_years(),
            theme: Theme::altiplano(),
            title: dataset::TITLE.to_string(),
            unit: dataset::UNIT.to_string(),
            hover: HoverState::new(),
        }
    }

    /// The built-in Altiplano DJF series on the default 600x300 area.
    pub fn altiplano() -> ChartResult<Self> {
        let mapper = ChartGeometryMapper::new(dataset::djf_observations(), PlotArea::default())?;
        Ok(Self::new(mapper))
    }

    pub fn with_mean_reference(mut self, value: f64) -> Self { self.mean_reference = value; self }
    pub fn with_trend(mut self, trend: TrendSource) -> Self { self.trend = trend; self }
    pub fn with_theme(mut self, theme: Theme) -> Self { self.theme = theme; self }
    pub fn with_axis(mut self, axis: YearAxis) -> Self { self.axis = axis; self }
    pub fn with_title(mut self, title: impl Into<String>) -> Self { self.title = title.into(); self }

    pub fn hover(&self) -> &HoverState { &self.hover }

    /// Feed a pointer event from the UI layer.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> ChartResult<()> {
        self.hover.apply(event, self.mapper.len())
    }

    /// Resolve all geometry. Fails instead of producing NaN geometry.
    pub fn layout(&self) -> ChartResult<ChartLayout> {
        let m = &self.mapper;
        let obs = m.observations();
        let points = m.points();
        let markers = points
            .iter()
            .enumerate()
            .map(|(i, &center)| Marker {
                index: i,
                year: obs.year_at(i),
                center,
                radius: self.hover.marker_radius(i),
                hovered: self.hover.is_hovered(i),
            })
            .collect();
        Ok(ChartLayout {
            area: *m.area(),
            title: self.title.clone(),
            unit: self.unit.clone(),
            grid: m.grid_lines(GRID_ROWS),
            mean: m.mean_line(self.mean_reference)?,
            trend: m.trend_line(&self.trend)?,
            path_data: m.path_data(),
            points,
            markers,
            ticks: m.year_ticks(&self.axis.ticks),
            tooltip: self.hover.tooltip(m),
        })
    }

    /// Render the chart as an SVG document.
    pub fn render_svg_string(&self, opts: &RenderOptions) -> Result<String> {
        let layout = self.layout()?;
        render_svg(&layout, &self.theme, opts).map_err(|_| anyhow::anyhow!("formatting SVG failed"))
    }

    pub fn render_to_svg(&self, opts: &RenderOptions, output_svg_path: impl AsRef<std::path::Path>) -> Result<()> {
        let svg = self.render_svg_string(opts)?;
        write_output(output_svg_path.as_ref(), svg.as_bytes())
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_output(output_png_path.as_ref(), &bytes)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.rasterize(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Unpremultiplied RGBA8 pixels: `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.rasterize(opts)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut px = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut px, row_bytes, (0, 0)) {
            anyhow::bail!("reading back raster pixels failed");
        }
        Ok((px, w, h, row_bytes))
    }

    fn rasterize(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let layout = self.layout()?;
        let scale = if opts.scale.is_finite() && opts.scale > 0.0 { opts.scale } else { 1.0 };
        let w = (layout.area.width as f32 * scale).ceil() as i32;
        let h = (layout.area.height as f32 * scale).ceil() as i32;
        tracing::debug!(w, h, scale, "rasterizing trend chart");

        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.scale((scale, scale));

        let t = &self.theme;
        if opts.draw_background {
            canvas.clear(t.background);
        } else {
            canvas.clear(skia::Color::TRANSPARENT);
        }

        draw_grid(canvas, &layout.grid, t.grid);
        draw_segment(canvas, &layout.mean, &stroke(t.mean_line, 1.0, Some(&[8.0, 4.0])));

        let mut trend = stroke(t.trend_line, TREND_STROKE_WIDTH as f32, None);
        trend.set_stroke_cap(skia::paint::Cap::Round);
        draw_segment(canvas, &layout.trend, &trend);

        draw_data_path(canvas, &layout.points, t.data_stroke);
        draw_markers(canvas, &layout.markers, t);

        if opts.draw_labels {
            draw_ticks(canvas, &layout, t.axis_label);
        }
        if let Some(tip) = &layout.tooltip {
            draw_tooltip(canvas, tip, &layout.unit, t, opts.draw_labels);
        }
        Ok(surface)
    }
}

fn write_output(path: &std::path::Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn sk(p: Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

fn stroke(color: skia::Color, width: f32, dash: Option<&[f32]>) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    if let Some(intervals) = dash {
        paint.set_path_effect(skia::PathEffect::dash(intervals, 0.0));
    }
    paint
}

fn draw_segment(canvas: &skia::Canvas, s: &Segment, paint: &skia::Paint) {
    canvas.draw_line(sk(s.from), sk(s.to), paint);
}

fn draw_grid(canvas: &skia::Canvas, lines: &[Segment], color: skia::Color) {
    let paint = stroke(color, 1.0, Some(&[4.0, 4.0]));
    for s in lines {
        draw_segment(canvas, s, &paint);
    }
}

fn draw_data_path(canvas: &skia::Canvas, points: &[Point], color: skia::Color) {
    let Some((first, rest)) = points.split_first() else { return };
    let mut path = skia::Path::new();
    path.move_to(sk(*first));
    for &p in rest {
        path.line_to(sk(p));
    }
    let mut paint = stroke(color, DATA_STROKE_WIDTH as f32, None);
    paint.set_stroke_join(skia::paint::Join::Round);
    canvas.draw_path(&path, &paint);
}

fn draw_markers(canvas: &skia::Canvas, markers: &[Marker], t: &Theme) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    for m in markers {
        fill.set_color(if m.hovered { t.marker_hover } else { t.marker });
        canvas.draw_circle(sk(m.center), m.radius as f32, &fill);
    }
}

fn draw_ticks(canvas: &skia::Canvas, layout: &ChartLayout, color: skia::Color) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(color);
    let mut font = skia::Font::default();
    font.set_size(10.0);
    let y = (layout.area.bottom() + 24.0) as f32;
    for (year, x) in &layout.ticks {
        let label = year.to_string();
        let (width, _) = font.measure_str(&label, Some(&paint));
        canvas.draw_str(&label, (*x as f32 - width * 0.5, y), &font, &paint);
    }
}

fn draw_tooltip(canvas: &skia::Canvas, tip: &Tooltip, unit: &str, t: &Theme, draw_text: bool) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(t.tooltip_fill);
    let r = tip.rect;
    let rect = skia::Rect::from_xywh(r.x as f32, r.y as f32, r.width as f32, r.height as f32);
    canvas.draw_round_rect(rect, 4.0, 4.0, &fill);

    if draw_text {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(t.tooltip_text);
        let mut font = skia::Font::default();
        font.set_size(10.0);
        let label = tip.label(unit);
        let (width, _) = font.measure_str(&label, Some(&paint));
        let c = r.center();
        canvas.draw_str(&label, (c.x as f32 - width * 0.5, c.y as f32 + 3.5), &font, &paint);
    }
}

// File: crates/chart-core/src/svg.rs
// Summary: SVG backend: writes a laid-out trend chart as a standalone SVG document.

use std::fmt::{self, Write};

use crate::chart::{ChartLayout, RenderOptions};
use crate::geometry::Segment;
use crate::theme::{hex, Theme};

pub const GRID_DASH: &str = "4 4";
pub const MEAN_DASH: &str = "8 4";
pub const TREND_STROKE_WIDTH: f64 = 4.0;
pub const DATA_STROKE_WIDTH: f64 = 2.5;

/// Compact number for SVG attributes: at most two decimals, no trailing zeros.
pub fn fmt_num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

pub fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

pub fn render_svg(layout: &ChartLayout, theme: &Theme, opts: &RenderOptions) -> Result<String, fmt::Error> {
    let mut out = String::with_capacity(8 * 1024);
    write_svg(&mut out, layout, theme, opts)?;
    Ok(out)
}

fn write_line(out: &mut String, s: &Segment, attrs: &str) -> fmt::Result {
    writeln!(
        out,
        r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" {attrs}/>"#,
        fmt_num(s.from.x),
        fmt_num(s.from.y),
        fmt_num(s.to.x),
        fmt_num(s.to.y),
    )
}

fn write_svg(out: &mut String, layout: &ChartLayout, theme: &Theme, opts: &RenderOptions) -> fmt::Result {
    let w = fmt_num(layout.area.width);
    let h = fmt_num(layout.area.height);
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#
    )?;
    writeln!(out, "  <title>{}</title>", xml_escape(&layout.title))?;
    if opts.draw_background {
        writeln!(out, r#"  <rect x="0" y="0" width="{w}" height="{h}" fill="{}"/>"#, hex(theme.background))?;
    }

    for g in &layout.grid {
        write_line(
            out,
            g,
            &format!(r#"stroke="{}" stroke-width="1" stroke-dasharray="{GRID_DASH}""#, hex(theme.grid)),
        )?;
    }

    write_line(
        out,
        &layout.mean,
        &format!(r#"class="mean" stroke="{}" stroke-width="1" stroke-dasharray="{MEAN_DASH}""#, hex(theme.mean_line)),
    )?;
    write_line(
        out,
        &layout.trend,
        &format!(
            r#"class="trend" stroke="{}" stroke-width="{}" stroke-linecap="round""#,
            hex(theme.trend_line),
            fmt_num(TREND_STROKE_WIDTH)
        ),
    )?;

    writeln!(
        out,
        r#"  <path class="data" d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linejoin="round"/>"#,
        layout.path_data,
        hex(theme.data_stroke),
        fmt_num(DATA_STROKE_WIDTH),
    )?;

    for m in &layout.markers {
        let fill = if m.hovered { theme.marker_hover } else { theme.marker };
        writeln!(
            out,
            r#"  <circle data-index="{}" data-year="{}" cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            m.index,
            m.year,
            fmt_num(m.center.x),
            fmt_num(m.center.y),
            fmt_num(m.radius),
            hex(fill),
        )?;
    }

    if opts.draw_labels {
        for (year, x) in &layout.ticks {
            writeln!(
                out,
                r#"  <text x="{}" y="{}" text-anchor="middle" font-size="10" font-weight="bold" fill="{}">{year}</text>"#,
                fmt_num(*x),
                fmt_num(layout.area.bottom() + 24.0),
                hex(theme.axis_label),
            )?;
        }
    }

    if let Some(tip) = &layout.tooltip {
        let c = tip.rect.center();
        writeln!(out, r#"  <g class="tooltip">"#)?;
        writeln!(
            out,
            r#"    <rect x="{}" y="{}" width="{}" height="{}" rx="4" fill="{}"/>"#,
            fmt_num(tip.rect.x),
            fmt_num(tip.rect.y),
            fmt_num(tip.rect.width),
            fmt_num(tip.rect.height),
            hex(theme.tooltip_fill),
        )?;
        writeln!(
            out,
            r#"    <text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-size="10" font-weight="bold" fill="{}">{}</text>"#,
            fmt_num(c.x),
            fmt_num(c.y),
            hex(theme.tooltip_text),
            xml_escape(&tip.label(&layout.unit)),
        )?;
        writeln!(out, "  </g>")?;
    }

    writeln!(out, "</svg>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_compact() {
        assert_eq!(fmt_num(40.0), "40");
        assert_eq!(fmt_num(110.4), "110.4");
        assert_eq!(fmt_num(223.3333333), "223.33");
        assert_eq!(fmt_num(-0.001), "0");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(xml_escape("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }
}

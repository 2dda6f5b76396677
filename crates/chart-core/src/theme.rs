// File: crates/chart-core/src/theme.rs
// Summary: Color palettes for trend chart rendering (shared by the SVG and Skia backends).

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub mean_line: skia::Color,
    pub trend_line: skia::Color,
    pub data_stroke: skia::Color,
    pub marker: skia::Color,
    pub marker_hover: skia::Color,
    pub tooltip_fill: skia::Color,
    pub tooltip_text: skia::Color,
    pub axis_label: skia::Color,
}

impl Theme {
    /// Warm light palette of the Altiplano page.
    pub fn altiplano() -> Self {
        Self {
            name: "altiplano",
            background: skia::Color::from_argb(255, 0xf8, 0xfa, 0xfc), // slate-50
            grid: skia::Color::from_argb(255, 0xe2, 0xe8, 0xf0),       // slate-200
            mean_line: skia::Color::from_argb(255, 0xcb, 0xd5, 0xe1),  // slate-300
            trend_line: skia::Color::from_argb(255, 0xea, 0x58, 0x0c), // orange-600
            data_stroke: skia::Color::from_argb(255, 0x9a, 0x34, 0x12), // orange-800
            marker: skia::Color::from_argb(255, 0x9a, 0x34, 0x12),
            marker_hover: skia::Color::from_argb(255, 0xea, 0x58, 0x0c),
            tooltip_fill: skia::Color::from_argb(255, 0x0f, 0x17, 0x2a), // slate-900
            tooltip_text: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0x94, 0xa3, 0xb8), // slate-400
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            mean_line: skia::Color::from_argb(255, 90, 90, 100),
            trend_line: skia::Color::from_argb(255, 0xfb, 0x92, 0x3c),
            data_stroke: skia::Color::from_argb(255, 0xfd, 0xba, 0x74),
            marker: skia::Color::from_argb(255, 0xfd, 0xba, 0x74),
            marker_hover: skia::Color::from_argb(255, 0xfb, 0x92, 0x3c),
            tooltip_fill: skia::Color::from_argb(255, 235, 235, 245),
            tooltip_text: skia::Color::from_argb(255, 18, 18, 20),
            axis_label: skia::Color::from_argb(255, 150, 150, 160),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::altiplano() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::altiplano(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to altiplano.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::altiplano()
}

/// `#rrggbb`, ignoring alpha.
pub fn hex(c: skia::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
}

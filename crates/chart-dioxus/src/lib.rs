// File: crates/chart-dioxus/src/lib.rs
// Summary: Dioxus desktop component drawing the trend chart as SVG elements, with
// per-marker enter/leave wired to a HoverState signal.
// Notes:
// - UI deps stay behind the `desktop` feature.
// - Geometry is computed once per mount; only the hover cell changes afterwards.

#[cfg(feature = "desktop")]
pub mod ui {
    use std::rc::Rc;

    use chart_core::hover::HoverState;
    use chart_core::svg::{fmt_num, DATA_STROKE_WIDTH, GRID_DASH, MEAN_DASH, TREND_STROKE_WIDTH};
    use chart_core::theme::{self, hex};
    use chart_core::TrendChart;
    use dioxus::prelude::*;

    #[derive(Props, Clone, PartialEq)]
    pub struct TrendChartViewProps {
        /// Theme preset name; unknown names fall back to the default palette.
        #[props(default = "altiplano".to_string())]
        pub theme: String,
        /// Called with the hovered index after every enter/leave.
        #[props(default)]
        pub on_hover: Option<EventHandler<Option<usize>>>,
    }

    #[component]
    pub fn TrendChartView(props: TrendChartViewProps) -> Element {
        let theme_name = props.theme.clone();
        let chart = use_hook(move || {
            Rc::new(TrendChart::altiplano().map(|c| c.with_theme(theme::find(&theme_name))).map_err(|e| e.to_string()))
        });
        let mut hover = use_signal(HoverState::new);

        let chart = match chart.as_ref() {
            Ok(c) => c,
            Err(e) => return rsx! { div { "chart unavailable: {e}" } },
        };
        let layout = match chart.layout() {
            Ok(l) => l,
            Err(e) => return rsx! { div { "chart unavailable: {e}" } },
        };

        let state = *hover.read();
        let tooltip = state.tooltip(&chart.mapper);
        let len = layout.markers.len();
        let on_hover = props.on_hover;
        let t = chart.theme;
        let (w, h) = (fmt_num(layout.area.width), fmt_num(layout.area.height));
        let label_y = fmt_num(layout.area.bottom() + 24.0);
        let (mean, trend) = (layout.mean, layout.trend);
        let fills: Vec<String> = layout
            .markers
            .iter()
            .map(|m| hex(if state.is_hovered(m.index) { t.marker_hover } else { t.marker }))
            .collect();

        rsx! {
            svg {
                view_box: "0 0 {w} {h}",
                width: "{w}",
                height: "{h}",
                rect { x: "0", y: "0", width: "{w}", height: "{h}", fill: hex(t.background) }
                for (k, g) in layout.grid.iter().enumerate() {
                    line {
                        key: "grid-{k}",
                        x1: fmt_num(g.from.x), y1: fmt_num(g.from.y), x2: fmt_num(g.to.x), y2: fmt_num(g.to.y),
                        stroke: hex(t.grid), stroke_dasharray: GRID_DASH,
                    }
                }
                line {
                    x1: fmt_num(mean.from.x), y1: fmt_num(mean.from.y), x2: fmt_num(mean.to.x), y2: fmt_num(mean.to.y),
                    stroke: hex(t.mean_line), stroke_dasharray: MEAN_DASH,
                }
                line {
                    x1: fmt_num(trend.from.x), y1: fmt_num(trend.from.y), x2: fmt_num(trend.to.x), y2: fmt_num(trend.to.y),
                    stroke: hex(t.trend_line), stroke_width: fmt_num(TREND_STROKE_WIDTH), stroke_linecap: "round",
                }
                path {
                    d: "{layout.path_data}",
                    fill: "none",
                    stroke: hex(t.data_stroke),
                    stroke_width: fmt_num(DATA_STROKE_WIDTH),
                    stroke_linejoin: "round",
                }
                for (m, fill) in layout.markers.iter().copied().zip(fills) {
                    circle {
                        key: "{m.index}",
                        cx: fmt_num(m.center.x),
                        cy: fmt_num(m.center.y),
                        r: fmt_num(state.marker_radius(m.index)),
                        fill: "{fill}",
                        onmouseenter: move |_| {
                            if hover.write().enter(m.index, len).is_ok() {
                                if let Some(cb) = on_hover { cb.call(Some(m.index)); }
                            }
                        },
                        onmouseleave: move |_| {
                            hover.write().leave();
                            if let Some(cb) = on_hover { cb.call(None); }
                        },
                    }
                }
                for (year, x) in layout.ticks.iter().copied() {
                    text {
                        key: "tick-{year}",
                        x: fmt_num(x), y: "{label_y}", text_anchor: "middle", font_size: "12",
                        fill: hex(t.axis_label),
                        "{year}"
                    }
                }
                if let Some(tip) = tooltip {
                    g {
                        rect {
                            x: fmt_num(tip.rect.x), y: fmt_num(tip.rect.y),
                            width: fmt_num(tip.rect.width), height: fmt_num(tip.rect.height),
                            rx: "4", fill: hex(t.tooltip_fill),
                        }
                        text {
                            x: fmt_num(tip.rect.x + tip.rect.width / 2.0),
                            y: fmt_num(tip.rect.y + tip.rect.height / 2.0 + 4.0),
                            text_anchor: "middle", font_size: "12", fill: hex(t.tooltip_text),
                            {tip.label(&layout.unit)}
                        }
                    }
                }
            }
        }
    }

    /// Opens a desktop window with the chart mounted.
    pub fn run_demo_ui() -> Result<(), String> {
        #[component]
        fn App() -> Element {
            rsx! {
                div { style: "padding:24px; font-family:Georgia,serif;",
                    h2 { {chart_core::dataset::TITLE} }
                    p { {chart_core::dataset::SUBTITLE} }
                    TrendChartView {}
                }
            }
        }

        let cfg = dioxus_desktop::Config::new()
            .with_prerendered("<style>html,body{margin:0;height:100%;background:#f8fafc}</style>".to_string());
        let providers: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> = Vec::new();
        let globals: Vec<Box<dyn std::any::Any>> = vec![Box::new(cfg)];
        dioxus_desktop::launch::launch(App, providers, globals);
        Ok(())
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_demo_ui() -> Result<(), &'static str> {
    Err("chart-dioxus built without `desktop` feature; enable features to run UI demo")
}

#[cfg(all(test, not(feature = "desktop")))]
mod tests {
    #[test]
    fn fallback_reports_missing_feature() {
        assert!(super::run_demo_ui().unwrap_err().contains("desktop"));
    }
}

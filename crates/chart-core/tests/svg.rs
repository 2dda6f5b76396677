// File: crates/chart-core/tests/svg.rs
// Purpose: SVG output structure for the Altiplano chart, with and without hover.

use chart_core::{PointerEvent, RenderOptions, Theme, TrendChart, TrendSource};

#[test]
fn svg_contains_every_layer() {
    let chart = TrendChart::altiplano().unwrap();
    let svg = chart.render_svg_string(&RenderOptions::default()).expect("svg");

    assert!(svg.starts_with("<svg "));
    assert!(svg.contains(r#"viewBox="0 0 600 300""#));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("stroke-dasharray=\"4 4\"").count(), 5, "grid rows");
    assert!(svg.contains(r#"class="mean""#) && svg.contains(r#"stroke-dasharray="8 4""#));
    assert!(svg.contains(r##"class="trend" stroke="#ea580c" stroke-width="4""##));
    assert!(svg.contains(r#"<path class="data" d="M 40 110.4 L"#));
    assert_eq!(svg.matches("<circle ").count(), 38);
    assert_eq!(svg.matches(r#"r="3""#).count(), 38);
    assert!(!svg.contains("tooltip"));
    for year in ["1981", "1990", "2000", "2010", "2018"] {
        assert!(svg.contains(&format!(">{year}</text>")), "tick {year}");
    }
}

#[test]
fn hovered_point_gets_tooltip() {
    let mut chart = TrendChart::altiplano().unwrap();
    chart.handle_pointer(PointerEvent::Enter(0)).unwrap();
    let svg = chart.render_svg_string(&RenderOptions::default()).unwrap();

    assert_eq!(svg.matches(r#"r="6""#).count(), 1);
    assert!(svg.contains(r##"data-index="0" data-year="1981" cx="40" cy="110.4" r="6" fill="#ea580c""##));
    assert!(svg.contains(r#"<g class="tooltip">"#));
    assert!(svg.contains(">1981: 192mm</text>"));
}

#[test]
fn labels_and_background_can_be_disabled() {
    let chart = TrendChart::altiplano().unwrap().with_theme(Theme::dark());
    let opts = RenderOptions { draw_labels: false, draw_background: false, ..RenderOptions::default() };
    let svg = chart.render_svg_string(&opts).unwrap();
    assert!(!svg.contains("<text"));
    assert!(!svg.contains(r#"<rect x="0" y="0""#));
}

#[test]
fn fitted_trend_renders_differently() {
    let base = TrendChart::altiplano().unwrap();
    let fitted = TrendChart::altiplano().unwrap().with_trend(TrendSource::LeastSquares);
    let a = base.layout().unwrap();
    let b = fitted.layout().unwrap();
    assert_ne!(a.trend, b.trend);
    assert_eq!(a.points, b.points);
}

#[test]
fn svg_file_is_written() {
    let out = std::path::PathBuf::from("target/test_out/trend.svg");
    TrendChart::altiplano().unwrap().render_to_svg(&RenderOptions::default(), &out).expect("write svg");
    let text = std::fs::read_to_string(&out).expect("read back");
    assert!(text.contains("<title>Summer Precipitation Trend</title>"));
}

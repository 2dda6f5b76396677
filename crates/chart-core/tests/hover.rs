// File: crates/chart-core/tests/hover.rs
// Purpose: Pointer enter/leave drives marker size and tooltip without moving geometry.

use chart_core::hover::{HOVER_MARKER_RADIUS, MARKER_RADIUS};
use chart_core::{ChartError, PointerEvent, TrendChart};

#[test]
fn enter_and_leave_toggle_hover() {
    let mut chart = TrendChart::altiplano().expect("chart");
    assert_eq!(chart.hover().index(), None);

    chart.handle_pointer(PointerEvent::Enter(5)).unwrap();
    assert_eq!(chart.hover().index(), Some(5));

    chart.handle_pointer(PointerEvent::Enter(9)).unwrap();
    assert_eq!(chart.hover().index(), Some(9));

    chart.handle_pointer(PointerEvent::Leave).unwrap();
    assert_eq!(chart.hover().index(), None);
}

#[test]
fn hover_changes_only_marker_and_tooltip() {
    let mut chart = TrendChart::altiplano().unwrap();
    let before = chart.layout().unwrap();

    chart.handle_pointer(PointerEvent::Enter(5)).unwrap();
    let during = chart.layout().unwrap();

    assert_eq!(before.points, during.points);
    assert_eq!(before.path_data, during.path_data);
    assert_eq!(before.mean, during.mean);
    assert_eq!(before.trend, during.trend);
    for (a, b) in before.markers.iter().zip(&during.markers) {
        assert_eq!(a.center, b.center);
        if b.index == 5 {
            assert!(b.hovered);
            assert_eq!(b.radius, HOVER_MARKER_RADIUS);
        } else {
            assert!(!b.hovered);
            assert_eq!(b.radius, MARKER_RADIUS);
        }
    }

    let tip = during.tooltip.expect("tooltip for hovered point");
    assert_eq!(tip.year, 1986);
    assert_eq!(tip.value, 160.0);
    assert_eq!(tip.label("mm"), "1986: 160mm");
    let p = during.points[5];
    assert!((tip.rect.x - (p.x - 40.0)).abs() < 1e-9);
    assert!((tip.rect.y - (p.y - 50.0)).abs() < 1e-9);
    assert_eq!((tip.rect.width, tip.rect.height), (80.0, 40.0));

    chart.handle_pointer(PointerEvent::Leave).unwrap();
    assert_eq!(chart.layout().unwrap(), before);
}

#[test]
fn entering_missing_point_is_rejected() {
    let mut chart = TrendChart::altiplano().unwrap();
    chart.handle_pointer(PointerEvent::Enter(3)).unwrap();
    assert_eq!(
        chart.handle_pointer(PointerEvent::Enter(38)),
        Err(ChartError::IndexOutOfRange { index: 38, len: 38 })
    );
    assert_eq!(chart.hover().index(), Some(3));
}

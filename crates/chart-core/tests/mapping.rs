// File: crates/chart-core/tests/mapping.rs
// Purpose: Coordinate mapping against the built-in Altiplano series and edge cases.

use chart_core::dataset::{djf_observations, DJF_PRECIPITATION_MM, HISTORICAL_MEAN_MM};
use chart_core::{ChartError, ChartGeometryMapper, LinearFit, Observations, PlotArea, TrendSource};

fn close(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

fn altiplano() -> ChartGeometryMapper {
    ChartGeometryMapper::new(djf_observations(), PlotArea::new(600.0, 300.0, 40.0).unwrap()).expect("mapper")
}

#[test]
fn altiplano_endpoints_and_ordering() {
    let m = altiplano();
    assert_eq!(m.len(), 38);
    assert!(close(m.x(0), 40.0));
    assert!(close(m.x(37), 560.0));

    // min 110 - 20, max 220 + 20
    assert_eq!(m.value_range(), (90.0, 240.0));

    let y192 = m.y(192.0);
    let y115 = m.y(115.0);
    assert!(close(y192, 110.4), "y(192) = {y192}");
    assert!(close(y115, 300.0 - 25.0 / 150.0 * 220.0 - 40.0));
    assert!(y192 < y115, "192 plots higher than 115");

    assert!(close(m.y(90.0), 260.0));
    assert!(close(m.y(240.0), 40.0));
}

#[test]
fn points_follow_index_order() {
    let m = altiplano();
    let pts = m.points();
    assert_eq!(pts.len(), DJF_PRECIPITATION_MM.len());
    for (i, p) in pts.iter().enumerate() {
        assert!(close(p.x, m.x(i)));
        assert!(close(p.y, m.y(DJF_PRECIPITATION_MM[i])));
        assert_eq!(*p, m.point(i).unwrap());
    }
    assert!(pts.windows(2).all(|w| w[0].x < w[1].x));
    assert!(matches!(m.point(38), Err(ChartError::IndexOutOfRange { index: 38, len: 38 })));
}

#[test]
fn path_data_is_move_then_lines() {
    let m = altiplano();
    let d = m.path_data();
    assert!(d.starts_with("M 40 110.4 L "), "{d}");
    assert_eq!(d.matches('L').count(), 37);
    assert_eq!(d.matches('M').count(), 1);
    assert!(d.ends_with("560 223.33"), "{d}");
}

#[test]
fn mean_and_illustrative_trend_lines() {
    let m = altiplano();
    let mean = m.mean_line(HISTORICAL_MEAN_MM).unwrap();
    assert!(mean.is_horizontal());
    assert!(close(mean.from.x, 40.0) && close(mean.to.x, 560.0));
    assert!(close(mean.from.y, 300.0 - 70.0 / 150.0 * 220.0 - 40.0));

    let trend = m.trend_line(&TrendSource::Illustrative { start: 190.0, end: 135.0 }).unwrap();
    assert!(close(trend.from.x, 40.0) && close(trend.to.x, 560.0));
    assert!(close(trend.to.y, 194.0));
    assert!(trend.from.y < trend.to.y, "declining trend slopes down the screen");
}

#[test]
fn fitted_trend_matches_least_squares() {
    let m = altiplano();
    let fit = LinearFit::least_squares(&DJF_PRECIPITATION_MM);
    assert!(fit.slope < 0.0, "series declines");
    let trend = m.trend_line(&TrendSource::LeastSquares).unwrap();
    assert!(close(trend.from.y, m.y(fit.at(0.0))));
    assert!(close(trend.to.y, m.y(fit.at(37.0))));
}

#[test]
fn non_finite_reference_values_fail() {
    let m = altiplano();
    assert!(matches!(m.mean_line(f64::NAN), Err(ChartError::NonFiniteReference { .. })));
    let bad = TrendSource::Illustrative { start: 190.0, end: f64::INFINITY };
    assert!(matches!(m.trend_line(&bad), Err(ChartError::NonFiniteReference { what: "trend end", .. })));
}

#[test]
fn all_equal_values_draw_midline() {
    let obs = Observations::try_new(2000, vec![42.0; 6]).unwrap();
    let area = PlotArea::new(600.0, 300.0, 40.0).unwrap();

    let with_margin = ChartGeometryMapper::new(obs.clone(), area).unwrap();
    let no_margin = ChartGeometryMapper::with_margin(obs, area, 0.0).unwrap();
    for m in [&with_margin, &no_margin] {
        for p in m.points() {
            assert!(p.is_finite());
            assert!(close(p.y, 150.0), "flat series sits at H/2, got {}", p.y);
        }
    }
}

#[test]
fn invalid_inputs_fail_fast() {
    let area = PlotArea::default();
    assert_eq!(
        Observations::try_new(1981, vec![5.0]).unwrap_err(),
        ChartError::TooFewObservations { len: 1 }
    );
    assert!(matches!(
        Observations::try_new(1981, vec![5.0, f64::NAN, 1.0]).unwrap_err(),
        ChartError::NonFiniteObservation { index: 1, .. }
    ));

    let obs = djf_observations();
    let bad_area = PlotArea { width: 60.0, height: 300.0, padding: 40.0 };
    assert!(matches!(
        ChartGeometryMapper::new(obs.clone(), bad_area),
        Err(ChartError::InvalidPlotArea { .. })
    ));
    assert_eq!(
        ChartGeometryMapper::with_margin(obs, area, f64::NAN).unwrap_err().to_string(),
        "value margin must be finite and non-negative, got NaN"
    );
}

#[test]
fn year_ticks_and_hit_testing() {
    let m = altiplano();
    let ticks = m.year_ticks(&[1981, 1990, 2000, 2010, 2018, 2030]);
    assert_eq!(ticks.len(), 5);
    assert!(close(ticks[0].1, 40.0));
    assert!(close(ticks[4].1, 560.0));

    assert_eq!(m.nearest_index(m.x(5)), 5);
    assert_eq!(m.nearest_index(0.0), 0);
    assert_eq!(m.nearest_index(600.0), 37);
    assert!(close(m.value_at(m.y(150.0)), 150.0));
}

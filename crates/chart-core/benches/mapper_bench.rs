use chart_core::{ChartGeometryMapper, Observations, PlotArea, TrendSource};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};

fn gen_values(n: usize) -> Vec<f64> {
    // noisy decline, roughly the shape of the DJF series
    (0..n).map(|i| 190.0 - i as f64 * 0.15 + (i as f64 * 0.7).sin() * 25.0).collect()
}

fn bench_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapper");
    for &n in &[38usize, 1_000usize, 100_000usize] {
        let obs = Observations::try_new(1981, gen_values(n)).expect("valid series");
        group.bench_with_input(BenchmarkId::new("points", n), &obs, |b, obs| {
            b.iter_batched(
                || obs.clone(),
                |o| {
                    let m = ChartGeometryMapper::new(o, PlotArea::default()).expect("mapper");
                    black_box(m.points());
                },
                BatchSize::SmallInput,
            );
        });
        let m = ChartGeometryMapper::new(obs, PlotArea::default()).expect("mapper");
        group.bench_with_input(BenchmarkId::new("path_data", n), &m, |b, m| {
            b.iter(|| black_box(m.path_data()));
        });
        group.bench_with_input(BenchmarkId::new("least_squares_trend", n), &m, |b, m| {
            b.iter(|| black_box(m.trend_line(&TrendSource::LeastSquares)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_mapping);
criterion_main!(benches);

use board_core::preview_series;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_preview_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("preview_series");
    for &points in &[24usize, 256usize, 4_096usize] {
        group.bench_with_input(BenchmarkId::from_parameter(points), &points, |b, &n| {
            b.iter(|| {
                let _ = black_box(preview_series("BTCUSDT", 64_000.0, 3.25, n));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_preview_series);
criterion_main!(benches);

use board_core::{build_path, preview_series, Series};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn gen_series(n: usize) -> Series {
    Series::from_values(preview_series("ETHUSDT", 3_200.0, -2.4, n))
}

fn bench_build_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_path");
    for &n in &[24usize, 1_000usize, 10_000usize] {
        let series = gen_series(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &series, |b, s| {
            b.iter_batched(
                || s.clone(),
                |s| { let _ = black_box(build_path(&s, 120.0, 36.0, true)); },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_path);
criterion_main!(benches);

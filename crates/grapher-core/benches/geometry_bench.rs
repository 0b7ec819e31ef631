use grapher_core::compute_series_path;
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn bench_series_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_series_path");
    for &n in &[1_000usize, 100_000usize] {
        let ys: Vec<f64> = (0..n).map(|i| (i as f64 * 0.01).sin().abs()).collect();
        group.bench_function(format!("n_{n}"), |b| {
            b.iter(|| black_box(compute_series_path(black_box(&ys), 0.75, 650.0, 100.0, 0.83)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_series_path);
criterion_main!(benches);

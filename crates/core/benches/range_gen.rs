use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cubic_grid::{CubicCoordinate, CubicVector};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("cubic-grid");
    group.sample_size(10);

    group.bench_function("range radius 100", |b| {
        b.iter(|| CubicCoordinate::ZERO.range(black_box(100)))
    });

    let end = CubicCoordinate::ZERO + CubicVector::Q * 200 + CubicVector::RS;
    group.bench_function("line length 400", |b| {
        b.iter(|| CubicCoordinate::ZERO.line_to(black_box(end)))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

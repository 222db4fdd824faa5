//! Benchmarks for inclination computation

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use neck_motion_tracker::angle::inclination_degrees;

fn benchmark_inclination(c: &mut Criterion) {
    let mut group = c.benchmark_group("inclination");

    group.bench_function("sloped", |b| {
        b.iter(|| inclination_degrees(black_box(0.0), black_box(0.3), black_box(0.05), black_box(0.55)));
    });

    group.bench_function("vertical", |b| {
        b.iter(|| inclination_degrees(black_box(0.0), black_box(0.3), black_box(0.0), black_box(0.55)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_inclination);
criterion_main!(benches);

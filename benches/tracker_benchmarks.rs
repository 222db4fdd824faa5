//! Benchmarks for the per-frame tracker update

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use neck_motion_tracker::{skeleton::Point3D, tracker::NeckMotionTracker};

fn benchmark_tracker(c: &mut Criterion) {
    let mut group = c.benchmark_group("tracker");
    let chest = Point3D::new(0.0, 0.3, 2.0);

    // Simulated neck turn: head sweeps right, then left, with sensor jitter
    let frames: Vec<Point3D> = (0..300)
        .map(|i| {
            let t = f64::from(i) * 0.02;
            Point3D::new(
                0.12 * t.sin() + 0.002 * rand::random::<f64>(),
                0.55 + 0.002 * rand::random::<f64>(),
                2.04 + 0.002 * rand::random::<f64>(),
            )
        })
        .collect();

    group.bench_function("single_update", |b| {
        let mut tracker = NeckMotionTracker::new();
        let head = frames[0];
        b.iter(|| black_box(tracker.update(black_box(&head), black_box(&chest))));
    });

    for len in [30, 300] {
        group.bench_with_input(BenchmarkId::new("sequence", len), &frames[..len], |b, data| {
            b.iter(|| {
                let mut tracker = NeckMotionTracker::new();
                for head in data {
                    black_box(tracker.update(black_box(head), &chest));
                }
                tracker.phase()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_tracker);
criterion_main!(benches);

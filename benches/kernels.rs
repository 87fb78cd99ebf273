//! Benchmarks for the CPU simulation kernels.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use psim::gravity::{accumulate_accelerations, GravityParams};
use psim::prelude::*;

fn bench_accelerations(c: &mut Criterion) {
    let mut group = c.benchmark_group("accumulate_accelerations");

    for count in [100, 500, 1000, 2000] {
        let disk = DiskSystem::new(DiskConfig::new().with_body_count(count).with_seed(1))
            .expect("valid disk config");
        let bodies = disk.bodies().to_vec();
        let mut out = vec![DVec2::ZERO; bodies.len()];
        let params = GravityParams::default();

        group.bench_with_input(BenchmarkId::new("bodies", count), &bodies, |b, bodies| {
            b.iter(|| {
                accumulate_accelerations(black_box(bodies), &mut out, &params);
                black_box(out[0])
            })
        });
    }

    group.finish();
}

fn bench_disk_frame(c: &mut Criterion) {
    c.bench_function("disk_frame_1000", |b| {
        let mut disk = DiskSystem::new(DiskConfig::new().with_seed(3)).expect("valid disk config");
        b.iter(|| {
            disk.advance_frame();
            black_box(disk.steps())
        })
    });
}

fn bench_tracer(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_tracer_step");

    for count in [1_000, 10_000, 100_000] {
        let config = TracerConfig::new().with_particle_count(count).with_seed(5);
        let mut tracer = FieldTracer::new(config).expect("valid tracer config");

        group.bench_function(BenchmarkId::new("particles", count), |b| {
            b.iter(|| black_box(tracer.step()))
        });
    }

    group.finish();
}

fn bench_field_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_grid");

    for resolution in [128, 512, 1024] {
        let config = FieldConfig::new(resolution);
        group.bench_with_input(BenchmarkId::new("resolution", resolution), &config, |b, config| {
            b.iter(|| black_box(FieldGrid::from_line_current(config)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_accelerations,
    bench_disk_frame,
    bench_tracer,
    bench_field_grid,
);

criterion_main!(benches);

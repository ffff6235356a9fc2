/*
 * Constellation Benchmark
 *
 * Measures the two halves of a frame: the simulation step and the render pass
 * (drawn onto a RecordingSurface so no window is needed). The line pass is
 * quadratic in the particle count, so it dominates as counts grow.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use constellation::{physics, renderer, CanvasBounds, ConstellationParams, CursorState, ParticleField, RecordingSurface};

const COUNTS: [usize; 4] = [100, 500, 1000, 2000];

fn seeded_field(count: usize, bounds: &CanvasBounds) -> ParticleField {
    let mut rng = StdRng::seed_from_u64(count as u64);
    let mut field = ParticleField::new();
    field.initialize_with_rng(&mut rng, bounds, count);
    field
}

// Benchmark one simulation step with the force point active
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    let bounds = CanvasBounds::new(1600.0, 900.0);
    let params = ConstellationParams {
        force_point_enabled: true,
        gravity: 0.5,
        ..Default::default()
    };
    let cursor = CursorState::new(800.0, 450.0);

    for count in COUNTS.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &n| {
            let mut field = seeded_field(n, &bounds);
            b.iter(|| {
                physics::step(&mut field, &params, &cursor, &bounds);
                black_box(field.len());
            });
        });
    }

    group.finish();
}

// Benchmark the render pass, flat and gradient lines
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let bounds = CanvasBounds::new(1600.0, 900.0);

    for gradient in [false, true] {
        let params = ConstellationParams {
            lines_gradient_enabled: gradient,
            ..Default::default()
        };
        let label = if gradient { "gradient" } else { "flat" };

        for count in COUNTS.iter() {
            group.bench_with_input(BenchmarkId::new(label, count), count, |b, &n| {
                let field = seeded_field(n, &bounds);
                let mut surface = RecordingSurface::new();
                b.iter(|| {
                    surface.clear();
                    black_box(renderer::render(&mut surface, &field, &params, &bounds));
                });
            });
        }
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_step, bench_render
}

criterion_main!(benches);

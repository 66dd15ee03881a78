//! Benchmark for the particle network frame.
//!
//! TARGET: step + draw for the default 60 particles well under 1 ms
//!
//! Run with: cargo bench --package neonfolio_effects --bench network_benchmark

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use neonfolio_effects::{draw, reseed, seeded_rng, step, NetworkConfig, NetworkFrame};
use neonfolio_shared::{Vec2, MAX_PARTICLES};
use neonfolio_ui::CommandBuffer;

const SIZE: Vec2 = Vec2::new(1920.0, 1080.0);
const FRAME: f32 = 1.0 / 60.0;

fn benchmark_step(c: &mut Criterion) {
    let config = NetworkConfig::default();
    let mut group = c.benchmark_group("step");

    for count in [60usize, 200, MAX_PARTICLES] {
        let mut particles = Vec::new();
        reseed(&mut particles, &mut seeded_rng(1), count, SIZE, &config);
        let pointer = Some(Vec2::new(960.0, 540.0));

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                step(black_box(&mut particles), pointer, FRAME, SIZE, &config);
            });
        });
    }
    group.finish();
}

fn benchmark_full_frame(c: &mut Criterion) {
    let config = NetworkConfig::default();
    let mut particles = Vec::new();
    reseed(&mut particles, &mut seeded_rng(2), 60, SIZE, &config);
    let mut commands = CommandBuffer::new();
    let mut elapsed = Duration::ZERO;

    c.bench_function("frame_60_particles", |b| {
        b.iter(|| {
            elapsed += Duration::from_millis(16);
            let pointer = Some(Vec2::new(960.0, 540.0));
            step(&mut particles, pointer, FRAME, SIZE, &config);

            commands.begin_frame();
            let frame = NetworkFrame {
                particles: &particles,
                pointer,
                size: SIZE,
                connection_distance: 140.0,
                elapsed,
            };
            draw(&frame, &config, &mut commands);
            black_box(commands.len())
        });
    });
}

criterion_group!(benches, benchmark_step, benchmark_full_frame);
criterion_main!(benches);

//! # Particle Field Benchmark
//!
//! Measures one tick over populations reached by sustained clicking.
//!
//! Run with: `cargo bench --package glitter_core`

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glitter_core::{GlitterConfig, ManualClock, ParticleField, Point};

/// Builds a field holding roughly `population` particles.
fn populated_field(population: u32) -> ParticleField<ManualClock> {
    let config = GlitterConfig {
        count: population,
        decay: 0.0,
        seed: Some(9),
        ..GlitterConfig::default()
    };
    let mut field = ParticleField::with_clock(config, ManualClock::new(0.0));
    field.on_input(Point::new(400.0, 300.0));
    field.tick();
    field
}

/// Benchmark: update tick without spawning.
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for population in [64, 1_024, 16_384] {
        group.bench_with_input(
            BenchmarkId::from_parameter(population),
            &population,
            |b, &population| {
                let mut field = populated_field(population);
                b.iter(|| black_box(field.tick()));
            },
        );
    }

    group.finish();
}

/// Benchmark: tick that consumes an input and spawns a default burst.
fn bench_burst(c: &mut Criterion) {
    c.bench_function("tick_with_burst", |b| {
        let mut field = ParticleField::with_clock(
            GlitterConfig {
                seed: Some(3),
                ..GlitterConfig::default()
            },
            ManualClock::new(0.0),
        );
        b.iter(|| {
            field.on_input(black_box(Point::new(10.0, 20.0)));
            black_box(field.tick());
            field.clear();
        });
    });
}

criterion_group!(benches, bench_tick, bench_burst);
criterion_main!(benches);

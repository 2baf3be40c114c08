//! Criterion benchmarks for pharma-receptors.
//!
//! Covers: Hill binding (two `powf` calls), the logistic curves, and the
//! Scatchard split over a ligand grid.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pharma_core::constants::LINE_SAMPLES;
use pharma_core::sampling::{linspace, logspace};
use pharma_receptors::{
    competitive_binding, four_parameter_logistic, scatchard_many, specific_binding_hill,
};

fn bench_hill(c: &mut Criterion) {
    c.bench_function("specific_binding_hill", |b| {
        b.iter(|| {
            specific_binding_hill(
                black_box(3e-7f64),
                black_box(100.0),
                black_box(1e-6),
                black_box(1.7),
            )
        })
    });
}

fn bench_logistics(c: &mut Criterion) {
    c.bench_function("competitive_binding", |b| {
        b.iter(|| {
            competitive_binding(
                black_box(-6.3f64),
                black_box(0.0),
                black_box(100.0),
                black_box(6.0),
                black_box(1.0),
            )
        })
    });
    c.bench_function("four_parameter_logistic", |b| {
        b.iter(|| {
            four_parameter_logistic(
                black_box(-6.3f64),
                black_box(100.0),
                black_box(0.0),
                black_box(1.0),
                black_box(-6.0),
            )
        })
    });
}

fn bench_scatchard(c: &mut Criterion) {
    let grid = logspace(-9.0, -3.0, LINE_SAMPLES);
    c.bench_function("scatchard_100", |b| {
        b.iter(|| scatchard_many(black_box(&grid), black_box(100.0), black_box(1e-6)))
    });

    let log_grid = linspace(-9.0, -3.0, LINE_SAMPLES);
    c.bench_function("dose_response_curve_100", |b| {
        b.iter(|| {
            log_grid
                .iter()
                .map(|&x| four_parameter_logistic(x, 100.0, 0.0, 1.0, -6.0))
                .sum::<f64>()
        })
    });
}

criterion_group!(benches, bench_hill, bench_logistics, bench_scatchard);
criterion_main!(benches);

//! Conversion hot-path benchmarks
//!
//! The lookup is a linear scan, so cost scales with how deep in the table
//! the reading lands: the hot end matches the first pair, the cold end walks
//! all 111 intervals. Both ends are measured alongside the full two-stage
//! pipeline.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ntc10k_core::{CalibrationCurve, Divider};

fn conversion_benches(c: &mut Criterion) {
    let divider = Divider::new(10.0);
    let curve = CalibrationCurve::TYPE2_10K;

    c.bench_function("lookup_hot_end", |b| {
        b.iter(|| curve.temperature(black_box(1.05)).unwrap())
    });

    c.bench_function("lookup_cold_end", |b| {
        b.iter(|| curve.temperature(black_box(320.0)).unwrap())
    });

    c.bench_function("divider_inversion", |b| {
        b.iter(|| divider.resistance(black_box(512)).unwrap())
    });

    c.bench_function("full_pipeline", |b| {
        b.iter(|| {
            let r = divider.resistance(black_box(512)).unwrap();
            curve.temperature(r).unwrap()
        })
    });
}

criterion_group!(benches, conversion_benches);
criterion_main!(benches);

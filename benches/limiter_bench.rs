//! Benchmarks for flux limiters and gradient ratios.
//!
//! Run with: `cargo bench --bench limiter_bench`
//!
//! Benchmarks the limiter functions alone and the clamped differences and
//! ratios that feed them.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ndarray::Array3;
use tvd_transport::solver::limiters::{TINY, differences, upwind_ratio};
use tvd_transport::solver::{BoundaryKind, FluxLimiter, Limiter, ScalarField};
use tvd_transport::types::{Axis3, Position};

/// Field with smooth regions, plateaus and fronts.
fn setup_field(n: usize) -> ScalarField {
    let cells = (n, n, 4);
    let mut phi = ScalarField::new("phi", Position::Center, cells, BoundaryKind::Dirichlet);
    phi.val = Array3::from_shape_fn(cells, |(i, j, k)| {
        let x = i as f64 / n as f64;
        let y = j as f64 / n as f64;
        let front = if x + 0.5 * y < 0.6 { 1.0 } else { 0.0 };
        front + 0.2 * (6.0 * x).sin() * (4.0 * y).cos() + 0.01 * k as f64
    });
    phi
}

/// Benchmark psi(r) over a sweep of ratios.
fn bench_psi(c: &mut Criterion) {
    let mut group = c.benchmark_group("psi");
    let ratios: Vec<f64> = (0..1024).map(|i| -4.0 + 8.0 * i as f64 / 1023.0).collect();

    for limiter in Limiter::ALL {
        group.bench_function(limiter.name(), |b| {
            b.iter(|| {
                ratios
                    .iter()
                    .map(|&r| limiter.psi(black_box(r)))
                    .sum::<f64>()
            });
        });
    }

    group.finish();
}

/// Benchmark clamped differences along each axis.
fn bench_differences(c: &mut Criterion) {
    let mut group = c.benchmark_group("differences");

    for n in [16, 32, 64] {
        let phi = setup_field(n);
        for axis in [Axis3::X, Axis3::Y] {
            group.bench_with_input(
                BenchmarkId::new(axis.name(), format!("{n}x{n}x4")),
                &n,
                |b, _| {
                    b.iter(|| differences(black_box(&phi), axis, TINY));
                },
            );
        }
    }

    group.finish();
}

/// Benchmark flow-selected ratios.
fn bench_upwind_ratio(c: &mut Criterion) {
    let mut group = c.benchmark_group("upwind_ratio");

    for n in [16, 32, 64] {
        let phi = setup_field(n);
        let Ok(d) = differences(&phi, Axis3::X, TINY) else {
            continue;
        };
        let vel = Array3::from_shape_fn((n + 1, n, 4), |(i, j, _)| {
            if (i + j) % 3 == 0 { -0.5 } else { 1.0 }
        });

        group.bench_with_input(
            BenchmarkId::new("mixed_flow", format!("{n}x{n}x4")),
            &n,
            |b, _| {
                b.iter(|| upwind_ratio(black_box(&d), black_box(&vel), Axis3::X));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_psi, bench_differences, bench_upwind_ratio);
criterion_main!(benches);

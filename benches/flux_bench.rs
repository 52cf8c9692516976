//! Benchmarks for advective fluxes and full transport steps.
//!
//! Run with: `cargo bench --bench flux_bench`
//!
//! Compares limiters, placements and the explicit and deferred forms.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ndarray::Array3;
use tvd_transport::flux::{AdvectionConfig, advection_deferred, advection_explicit};
use tvd_transport::mesh::Grid;
use tvd_transport::solver::{
    BoundaryKind, FluxLimiter, Limiter, ScalarField, SystemMatrix, Velocity,
};
use tvd_transport::time::{TransportConfig, advance_transport};
use tvd_transport::types::{Face, Position};

type Cells = (usize, usize, usize);

/// Swirling flow over a block with a blob in the middle.
fn setup_problem(cells: Cells, pos: Position) -> (Grid, Array3<f64>, ScalarField, Velocity) {
    let (nx, ny, nz) = cells;
    let grid = Grid::uniform(cells, (1.0, 1.0, 0.25));
    let rho = Array3::from_elem(cells, 1000.0);

    let mut uvw = Velocity::new(cells, BoundaryKind::Dirichlet);
    uvw.u.val = Array3::from_shape_fn(uvw.u.shape(), |(_, j, _)| {
        (j as f64 / ny as f64 - 0.5) * 0.2
    });
    uvw.v.val = Array3::from_shape_fn(uvw.v.shape(), |(i, _, _)| {
        (0.5 - i as f64 / nx as f64) * 0.2
    });

    let mut phi = ScalarField::new("t", pos, cells, BoundaryKind::Neumann)
        .with_boundary(Face::West, BoundaryKind::Dirichlet, 10.0);
    phi.val = Array3::from_shape_fn(phi.shape(), |(i, j, k)| {
        let x = i as f64 / nx as f64 - 0.5;
        let y = j as f64 / ny as f64 - 0.5;
        let z = k as f64 / nz.max(1) as f64;
        10.0 + if x * x + y * y < 0.04 { 5.0 } else { 0.0 } + z
    });
    phi.save_old();

    (grid, rho, phi, uvw)
}

/// Benchmark the explicit limited term for each limiter.
fn bench_explicit_limiters(c: &mut Criterion) {
    let mut group = c.benchmark_group("advection_explicit");
    let cfg = AdvectionConfig::default();

    for cells in [(32, 32, 4), (64, 64, 4)] {
        let (grid, rho, phi, uvw) = setup_problem(cells, Position::Center);
        for limiter in Limiter::ALL {
            group.bench_with_input(
                BenchmarkId::new(limiter.name(), format!("{}x{}x{}", cells.0, cells.1, cells.2)),
                &cells,
                |b, _| {
                    let mut phi = phi.clone();
                    let mut uvw = uvw.clone();
                    b.iter(|| {
                        advection_explicit(
                            black_box(&rho),
                            &mut phi,
                            &mut uvw,
                            &grid,
                            0.01,
                            &limiter,
                            &cfg,
                        )
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark the explicit term for each placement.
fn bench_placements(c: &mut Criterion) {
    let mut group = c.benchmark_group("placements");
    let cfg = AdvectionConfig::default();
    let cells = (48, 48, 4);

    for pos in [Position::Center, Position::X, Position::Y, Position::Z] {
        let (grid, rho, phi, uvw) = setup_problem(cells, pos);
        group.bench_function(pos.name(), |b| {
            let mut phi = phi.clone();
            let mut uvw = uvw.clone();
            b.iter(|| {
                advection_explicit(
                    black_box(&rho),
                    &mut phi,
                    &mut uvw,
                    &grid,
                    0.01,
                    &Limiter::Superbee,
                    &cfg,
                )
            });
        });
    }

    group.finish();
}

/// Benchmark the deferred form including matrix assembly.
fn bench_deferred(c: &mut Criterion) {
    let mut group = c.benchmark_group("advection_deferred");
    let cfg = AdvectionConfig::default();

    for cells in [(32, 32, 4), (64, 64, 4)] {
        let (grid, rho, phi, uvw) = setup_problem(cells, Position::Center);
        group.bench_with_input(
            BenchmarkId::new("koren", format!("{}x{}x{}", cells.0, cells.1, cells.2)),
            &cells,
            |b, _| {
                let mut phi = phi.clone();
                let mut uvw = uvw.clone();
                b.iter(|| {
                    let mut a = SystemMatrix::zeros(phi.shape());
                    advection_deferred(
                        black_box(&rho),
                        &mut phi,
                        &mut uvw,
                        &grid,
                        0.01,
                        &Limiter::Koren,
                        &cfg,
                        &mut a,
                    )
                });
            },
        );
    }

    group.finish();
}

/// Benchmark one complete transport step with diffusion.
fn bench_transport_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("transport_step");
    group.sample_size(20);

    for cells in [(16, 16, 4), (32, 32, 4)] {
        let (grid, rho, phi, uvw) = setup_problem(cells, Position::Center);
        let gamma = Array3::from_elem(cells, 0.6);
        let config = TransportConfig::new().with_limiter(Limiter::Superbee);

        group.bench_with_input(
            BenchmarkId::new("bicgstab", format!("{}x{}x{}", cells.0, cells.1, cells.2)),
            &cells,
            |b, _| {
                let mut phi = phi.clone();
                let mut uvw = uvw.clone();
                b.iter(|| {
                    advance_transport(
                        &mut phi,
                        &mut uvw,
                        black_box(&rho),
                        &gamma,
                        0.01,
                        &grid,
                        None,
                        None,
                        &config,
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_explicit_limiters,
    bench_placements,
    bench_deferred,
    bench_transport_step
);
criterion_main!(benches);

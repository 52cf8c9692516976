//! Implicit time step of the generic transport equation.
//!
//! Discretizes
//!
//! ```text
//! d(rho phi)/dt + div(rho u phi) = div(gamma grad phi) + S
//! ```
//!
//! with diffusion and the time derivative treated implicitly and the
//! limited advective term explicitly, and hands the system to a linear
//! solver.

use log::debug;
use ndarray::Array3;
use thiserror::Error;

use crate::boundary::refresh_boundary_adjacent;
use crate::flux::{AdvectionConfig, AdvectionError, advection_explicit};
use crate::mesh::Grid;
use crate::operators::avg_pos;
use crate::solver::diagnostics::{DiagnosticsTracker, TransportDiagnostics};
use crate::solver::{
    BoundaryKind, FluxLimiter, Limiter, LinearSolver, ScalarField, SolverError, StandardSolver,
    Velocity, create_matrix,
};

/// Failure of a transport step.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Configuration, shape or geometry problem.
    #[error(transparent)]
    Advection(#[from] AdvectionError),

    /// The linear solve failed.
    #[error(transparent)]
    Solver(#[from] SolverError),
}

/// Settings of a transport step.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TransportConfig {
    /// Limiter of the advective flux (minmod by default)
    pub limiter: Limiter,
    /// Numerical settings of the advection term
    pub advection: AdvectionConfig,
    /// Linear solver (BiCGSTAB by default)
    pub solver: StandardSolver,
}

impl TransportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flux limiter.
    pub fn with_limiter(mut self, limiter: Limiter) -> Self {
        self.limiter = limiter;
        self
    }

    /// Set the advection settings.
    pub fn with_advection(mut self, advection: AdvectionConfig) -> Self {
        self.advection = advection;
        self
    }

    /// Set the linear solver.
    pub fn with_solver(mut self, solver: impl Into<StandardSolver>) -> Self {
        self.solver = solver.into();
        self
    }
}

/// Advance `phi` by one time step.
///
/// Assembles the diffusion matrix with inertia `density / dt`, subtracts
/// the explicit limited advection of the current values, adds the inertial
/// term `phi.old * density * V / dt` and the optional source `source * V`,
/// solves and refreshes boundary arrays. `phi.old` must hold the previous
/// step's values (see [`ScalarField::save_old`]).
///
/// # Arguments
/// * `phi` - Transported unknown, overwritten with the new values
/// * `uvw` - Staggered convecting velocity
/// * `density` - Cell-based density (times capacity)
/// * `diffusivity` - Cell-based diffusion coefficient
/// * `dt` - Time step
/// * `grid` - Cell geometry
/// * `obstacle` - Optional cell mask, positive in solid cells
/// * `source` - Optional source per unit volume, shaped like `phi.val`
/// * `config` - Limiter, advection settings and linear solver
#[allow(clippy::too_many_arguments)]
pub fn advance_transport(
    phi: &mut ScalarField,
    uvw: &mut Velocity,
    density: &Array3<f64>,
    diffusivity: &Array3<f64>,
    dt: f64,
    grid: &Grid,
    obstacle: Option<&Array3<f64>>,
    source: Option<&Array3<f64>>,
    config: &TransportConfig,
) -> Result<(), TransportError> {
    if !(dt > 0.0 && dt.is_finite()) {
        return Err(AdvectionError::InvalidTimeStep(dt).into());
    }
    if let Some(src) = source {
        AdvectionError::check_shape("source", phi.shape(), src.dim())?;
    }

    let inertia = density / dt;
    let a = create_matrix(phi, &inertia, diffusivity, grid, obstacle, BoundaryKind::Neumann)?;
    let b = Array3::<f64>::zeros(phi.shape());

    let c = advection_explicit(density, phi, uvw, grid, dt, &config.limiter, &config.advection)?;

    let vol = avg_pos(phi.pos, &grid.volume());
    let i = &phi.old * &avg_pos(phi.pos, density) * &vol / dt;

    let mut f = b - &c + &i;
    if let Some(src) = source {
        f += &(src * &vol);
    }

    let x = config.solver.solve(&a, phi, &f)?;
    phi.val.assign(&x);
    refresh_boundary_adjacent(phi);

    debug!(
        "{}: advanced by dt={dt:e} with {} and {}",
        phi.name,
        config.limiter.name(),
        config.solver.name()
    );
    Ok(())
}

/// Run `n_steps` transport steps of size `dt`, tracking diagnostics.
///
/// Before each step the current values are saved as `old`. The callback
/// sees the step number and the updated field after every step.
#[allow(clippy::too_many_arguments)]
pub fn run_transport<F>(
    phi: &mut ScalarField,
    uvw: &mut Velocity,
    density: &Array3<f64>,
    diffusivity: &Array3<f64>,
    dt: f64,
    n_steps: usize,
    grid: &Grid,
    obstacle: Option<&Array3<f64>>,
    source: Option<&Array3<f64>>,
    config: &TransportConfig,
    mut callback: F,
) -> Result<DiagnosticsTracker, TransportError>
where
    F: FnMut(usize, &ScalarField),
{
    density_check(density, grid)?;
    let mut tracker =
        DiagnosticsTracker::new(TransportDiagnostics::compute(phi, uvw, density, grid, dt));

    for step in 1..=n_steps {
        phi.save_old();
        advance_transport(
            phi, uvw, density, diffusivity, dt, grid, obstacle, source, config,
        )?;
        tracker.update(
            step as f64 * dt,
            TransportDiagnostics::compute(phi, uvw, density, grid, dt),
        );
        callback(step, phi);
    }

    debug!("{} after {n_steps} steps: {}", phi.name, tracker.current().summary_line());
    Ok(tracker)
}

fn density_check(density: &Array3<f64>, grid: &Grid) -> Result<(), AdvectionError> {
    AdvectionError::check_shape("density", grid.cells(), density.dim())
}

//! Krylov subspace solvers.
//!
//! Both solvers work on the linear part of the stencil operator; boundary
//! values of the field are moved to the right-hand side first. Convergence
//! is declared once `||b - A x|| < tolerance * max(||b||, 1)`.

use log::{debug, trace, warn};
use ndarray::Array3;

use super::error::SolverError;
use super::traits::{LinearSolver, TOL, check_system, dot, norm};
use crate::solver::state::ScalarField;
use crate::solver::system::SystemMatrix;

/// Default iteration limit.
pub const MAX_ITERATIONS: usize = 1000;

/// Conjugate gradient, for symmetric positive definite systems.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConjugateGradient {
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for ConjugateGradient {
    fn default() -> Self {
        Self {
            tolerance: TOL,
            max_iterations: MAX_ITERATIONS,
        }
    }
}

impl ConjugateGradient {
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

impl LinearSolver for ConjugateGradient {
    fn solve(
        &self,
        a: &SystemMatrix,
        field: &ScalarField,
        b: &Array3<f64>,
    ) -> Result<Array3<f64>, SolverError> {
        let name = self.name();
        check_system(a, field, b)?;

        let rhs = b + &a.boundary_source(field);
        let target = self.tolerance * norm(&rhs).max(1.0);

        let mut x = field.val.clone();
        let mut r = &rhs - &a.mat_vec(&x, field);
        let mut rr = dot(&r, &r);
        if rr.sqrt() < target {
            return Ok(x);
        }
        let mut p = r.clone();

        for it in 1..=self.max_iterations {
            let ap = a.mat_vec(&p, field);
            let pap = dot(&p, &ap);
            if pap.abs() < f64::MIN_POSITIVE {
                return Err(SolverError::Breakdown {
                    solver: name,
                    iteration: it,
                });
            }
            let alpha = rr / pap;
            x.scaled_add(alpha, &p);
            r.scaled_add(-alpha, &ap);

            let rr_new = dot(&r, &r);
            trace!("{name} iteration {it}: residual {:e}", rr_new.sqrt());
            if rr_new.sqrt() < target {
                debug!("{name} converged in {it} iterations");
                return Ok(x);
            }

            let beta = rr_new / rr;
            p = &r + &(&p * beta);
            rr = rr_new;
        }

        let residual = rr.sqrt();
        warn!(
            "{name} stopped after {} iterations, residual {residual:e}",
            self.max_iterations
        );
        Err(SolverError::not_converged(name, self.max_iterations, residual))
    }

    fn name(&self) -> &'static str {
        "cg"
    }
}

/// Biconjugate gradient stabilized, for general non-symmetric systems.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BiCgStab {
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for BiCgStab {
    fn default() -> Self {
        Self {
            tolerance: TOL,
            max_iterations: MAX_ITERATIONS,
        }
    }
}

impl BiCgStab {
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

impl LinearSolver for BiCgStab {
    fn solve(
        &self,
        a: &SystemMatrix,
        field: &ScalarField,
        b: &Array3<f64>,
    ) -> Result<Array3<f64>, SolverError> {
        let name = self.name();
        check_system(a, field, b)?;

        let rhs = b + &a.boundary_source(field);
        let target = self.tolerance * norm(&rhs).max(1.0);

        let mut x = field.val.clone();
        let mut r = &rhs - &a.mat_vec(&x, field);
        let mut residual = norm(&r);
        if residual < target {
            return Ok(x);
        }

        let r_hat = r.clone();
        let mut p = Array3::zeros(r.dim());
        let mut v = Array3::zeros(r.dim());
        let (mut rho_old, mut alpha, mut omega) = (1.0, 1.0, 1.0);

        for it in 1..=self.max_iterations {
            let breakdown = SolverError::Breakdown {
                solver: name,
                iteration: it,
            };

            let rho = dot(&r_hat, &r);
            if rho.abs() < f64::MIN_POSITIVE {
                return Err(breakdown);
            }
            if it == 1 {
                p.assign(&r);
            } else {
                let beta = (rho / rho_old) * (alpha / omega);
                p.scaled_add(-omega, &v);
                p *= beta;
                p += &r;
            }

            v = a.mat_vec(&p, field);
            let denom = dot(&r_hat, &v);
            if denom.abs() < f64::MIN_POSITIVE {
                return Err(breakdown);
            }
            alpha = rho / denom;

            let mut s = r;
            s.scaled_add(-alpha, &v);
            if norm(&s) < target {
                x.scaled_add(alpha, &p);
                debug!("{name} converged in {it} iterations");
                return Ok(x);
            }

            let t = a.mat_vec(&s, field);
            let tt = dot(&t, &t);
            if tt < f64::MIN_POSITIVE {
                return Err(breakdown);
            }
            omega = dot(&t, &s) / tt;

            x.scaled_add(alpha, &p);
            x.scaled_add(omega, &s);
            s.scaled_add(-omega, &t);
            r = s;

            residual = norm(&r);
            trace!("{name} iteration {it}: residual {residual:e}");
            if residual < target {
                debug!("{name} converged in {it} iterations");
                return Ok(x);
            }
            if omega.abs() < f64::MIN_POSITIVE {
                return Err(breakdown);
            }
            rho_old = rho;
        }

        warn!(
            "{name} stopped after {} iterations, residual {residual:e}",
            self.max_iterations
        );
        Err(SolverError::not_converged(name, self.max_iterations, residual))
    }

    fn name(&self) -> &'static str {
        "bicgstab"
    }
}

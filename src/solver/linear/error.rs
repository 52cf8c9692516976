//! Error types for linear solvers.

use thiserror::Error;

/// Failures of a linear solve.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Iteration limit reached before the residual dropped below tolerance.
    #[error("{solver} did not converge in {iterations} iterations (residual {residual:e})")]
    NotConverged {
        solver: &'static str,
        iterations: usize,
        residual: f64,
    },

    /// A Krylov recurrence divided by (nearly) zero.
    #[error("{solver} broke down at iteration {iteration}")]
    Breakdown {
        solver: &'static str,
        iteration: usize,
    },

    /// The system has no unique solution.
    #[error("Singular system: {0}")]
    Singular(String),

    /// Too many unknowns for a dense factorization.
    #[error("System too large for {solver}: {unknowns} unknowns, limit {limit}")]
    TooLarge {
        solver: &'static str,
        unknowns: usize,
        limit: usize,
    },

    /// Right-hand side, initial guess and matrix disagree in shape.
    #[error("Shape mismatch: matrix {matrix:?}, right-hand side {rhs:?}, unknowns {unknowns:?}")]
    ShapeMismatch {
        matrix: (usize, usize, usize),
        rhs: (usize, usize, usize),
        unknowns: (usize, usize, usize),
    },
}

impl SolverError {
    pub fn not_converged(solver: &'static str, iterations: usize, residual: f64) -> Self {
        Self::NotConverged {
            solver,
            iterations,
            residual,
        }
    }
}

//! Linear solver trait for the seven-band system.

use ndarray::{Array3, Zip};

use super::error::SolverError;
use crate::solver::state::ScalarField;
use crate::solver::system::SystemMatrix;

/// Default relative residual tolerance of iterative solvers.
pub const TOL: f64 = 1.0e-8;

/// Solver for `A x = b` on the unknowns of a field.
///
/// Implementors read boundary values and periodicity from `field` and start
/// iterating from `field.val`. The field is not modified; the solution is
/// returned so that the caller decides where to store it.
///
/// # Extending
///
/// 1. Create a struct holding the solver's settings
/// 2. Implement `LinearSolver` for it
/// 3. Optionally add it to `StandardSolver` for zero-cost dispatch
pub trait LinearSolver: Send + Sync {
    /// Solve `a x = b`.
    fn solve(
        &self,
        a: &SystemMatrix,
        field: &ScalarField,
        b: &Array3<f64>,
    ) -> Result<Array3<f64>, SolverError>;

    /// Human-readable name for debugging and logging.
    fn name(&self) -> &'static str;
}

/// Type alias for boxed solver (dynamic dispatch).
pub type BoxedSolver = Box<dyn LinearSolver>;

/// Check that matrix, right-hand side and unknowns agree in shape.
pub(crate) fn check_system(
    a: &SystemMatrix,
    field: &ScalarField,
    b: &Array3<f64>,
) -> Result<(), SolverError> {
    if a.shape() == b.dim() && a.shape() == field.shape() {
        Ok(())
    } else {
        Err(SolverError::ShapeMismatch {
            matrix: a.shape(),
            rhs: b.dim(),
            unknowns: field.shape(),
        })
    }
}

#[inline]
pub(crate) fn dot(a: &Array3<f64>, b: &Array3<f64>) -> f64 {
    Zip::from(a).and(b).fold(0.0, |acc, &x, &y| acc + x * y)
}

#[inline]
pub(crate) fn norm(a: &Array3<f64>) -> f64 {
    dot(a, a).sqrt()
}

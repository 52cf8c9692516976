//! Standard linear solvers as an enum for zero-cost dispatch.

use std::fmt;

use ndarray::Array3;

use super::direct::DirectLu;
use super::error::SolverError;
use super::krylov::{BiCgStab, ConjugateGradient};
use super::traits::{BoxedSolver, LinearSolver};
use crate::solver::state::ScalarField;
use crate::solver::system::SystemMatrix;

/// Built-in linear solvers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StandardSolver {
    /// Conjugate gradient (symmetric systems only)
    Cg(ConjugateGradient),
    /// BiCGSTAB (general systems)
    BiCgStab(BiCgStab),
    /// Dense LU (small systems)
    Direct(DirectLu),
}

impl Default for StandardSolver {
    fn default() -> Self {
        StandardSolver::BiCgStab(BiCgStab::default())
    }
}

impl LinearSolver for StandardSolver {
    #[inline]
    fn solve(
        &self,
        a: &SystemMatrix,
        field: &ScalarField,
        b: &Array3<f64>,
    ) -> Result<Array3<f64>, SolverError> {
        match self {
            StandardSolver::Cg(s) => s.solve(a, field, b),
            StandardSolver::BiCgStab(s) => s.solve(a, field, b),
            StandardSolver::Direct(s) => s.solve(a, field, b),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            StandardSolver::Cg(s) => s.name(),
            StandardSolver::BiCgStab(s) => s.name(),
            StandardSolver::Direct(s) => s.name(),
        }
    }
}

impl From<ConjugateGradient> for StandardSolver {
    fn from(s: ConjugateGradient) -> Self {
        StandardSolver::Cg(s)
    }
}

impl From<BiCgStab> for StandardSolver {
    fn from(s: BiCgStab) -> Self {
        StandardSolver::BiCgStab(s)
    }
}

impl From<DirectLu> for StandardSolver {
    fn from(s: DirectLu) -> Self {
        StandardSolver::Direct(s)
    }
}

impl fmt::Display for StandardSolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Create a boxed solver from a standard solver.
pub fn create_solver(solver: StandardSolver) -> BoxedSolver {
    match solver {
        StandardSolver::Cg(s) => Box::new(s),
        StandardSolver::BiCgStab(s) => Box::new(s),
        StandardSolver::Direct(s) => Box::new(s),
    }
}

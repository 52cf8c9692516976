//! Dense direct solver for small systems.
//!
//! Assembles the stencil into a dense matrix and factors it with faer's
//! partially pivoted LU. Cost grows with the cube of the unknown count, so the
//! solver refuses systems beyond a configurable size; it mainly serves as a
//! reference for the iterative solvers.

use faer::{Mat, linalg::solvers::Solve};
use log::debug;
use ndarray::Array3;

use super::error::SolverError;
use super::traits::{LinearSolver, check_system};
use crate::solver::state::ScalarField;
use crate::solver::system::SystemMatrix;
use crate::types::{Axis3, AxisRole, Cells};

/// Default unknown count limit of the dense solver.
pub const MAX_DENSE_UNKNOWNS: usize = 4096;

/// Dense LU factorization via faer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectLu {
    pub max_unknowns: usize,
}

impl Default for DirectLu {
    fn default() -> Self {
        Self {
            max_unknowns: MAX_DENSE_UNKNOWNS,
        }
    }
}

impl DirectLu {
    pub fn with_max_unknowns(mut self, max_unknowns: usize) -> Self {
        self.max_unknowns = max_unknowns;
        self
    }
}

#[inline]
fn flat(shape: Cells, idx: [usize; 3]) -> usize {
    (idx[0] * shape.1 + idx[1]) * shape.2 + idx[2]
}

/// Dense matrix of the linear stencil operator.
///
/// Along a periodic axis whose first and last entries describe the same
/// location, rows of the last entries are replaced by `x_last - x_first = 0`,
/// otherwise the duplicated rows make the matrix singular.
fn assemble(a: &SystemMatrix, field: &ScalarField) -> Mat<f64> {
    let shape = a.shape();
    let dims = [shape.0, shape.1, shape.2];
    let n = a.len();
    let mut m = Mat::<f64>::zeros(n, n);

    for ((i, j, k), &c) in a.c.indexed_iter() {
        let idx = [i, j, k];
        let p = flat(shape, idx);
        m[(p, p)] += c;

        for axis in Axis3::ALL {
            let d = axis.index();
            let wrap = field.wrap_indices(axis);
            let low = a.band(axis.low_face())[(i, j, k)];
            let high = a.band(axis.high_face())[(i, j, k)];

            let lo_nb = if idx[d] > 0 {
                Some(idx[d] - 1)
            } else {
                wrap.map(|(l, _)| l as usize)
            };
            let hi_nb = if idx[d] + 1 < dims[d] {
                Some(idx[d] + 1)
            } else {
                wrap.map(|(_, h)| h as usize)
            };

            for (nb, coef) in [(lo_nb, low), (hi_nb, high)] {
                if let Some(q) = nb {
                    let mut other = idx;
                    other[d] = q;
                    m[(p, flat(shape, other))] -= coef;
                }
            }
        }
    }

    for axis in Axis3::ALL {
        if field.wrap_indices(axis).is_none() || field.pos.role(axis) == AxisRole::Own {
            continue;
        }
        let d = axis.index();
        for ((i, j, k), _) in a.c.indexed_iter() {
            let idx = [i, j, k];
            if idx[d] + 1 != dims[d] {
                continue;
            }
            let p = flat(shape, idx);
            let mut first = idx;
            first[d] = 0;
            for col in 0..n {
                m[(p, col)] = 0.0;
            }
            m[(p, p)] = 1.0;
            m[(p, flat(shape, first))] = -1.0;
        }
    }
    m
}

impl LinearSolver for DirectLu {
    fn solve(
        &self,
        a: &SystemMatrix,
        field: &ScalarField,
        b: &Array3<f64>,
    ) -> Result<Array3<f64>, SolverError> {
        check_system(a, field, b)?;
        let n = a.len();
        if n > self.max_unknowns {
            return Err(SolverError::TooLarge {
                solver: self.name(),
                unknowns: n,
                limit: self.max_unknowns,
            });
        }
        if n == 0 {
            return Ok(Array3::zeros(a.shape()));
        }

        let shape = a.shape();
        let m = assemble(a, field);
        let src = b + &a.boundary_source(field);
        let mut rhs = Mat::<f64>::zeros(n, 1);
        for ((i, j, k), &v) in src.indexed_iter() {
            rhs[(flat(shape, [i, j, k]), 0)] = v;
        }
        for axis in Axis3::ALL {
            if field.wrap_indices(axis).is_none() || field.pos.role(axis) == AxisRole::Own {
                continue;
            }
            let d = axis.index();
            let last = [shape.0, shape.1, shape.2][d] - 1;
            for ((i, j, k), _) in src.indexed_iter() {
                if [i, j, k][d] == last {
                    rhs[(flat(shape, [i, j, k]), 0)] = 0.0;
                }
            }
        }

        let lu = m.as_ref().partial_piv_lu();
        let sol = lu.solve(&rhs);

        let x = Array3::from_shape_fn(shape, |(i, j, k)| sol[(flat(shape, [i, j, k]), 0)]);
        if x.iter().any(|v| !v.is_finite()) {
            return Err(SolverError::Singular(format!(
                "LU solve of {n} unknowns produced non-finite values"
            )));
        }
        debug!("{} solved {n} unknowns", self.name());
        Ok(x)
    }

    fn name(&self) -> &'static str {
        "direct-lu"
    }
}

//! Seven-band system matrix of the finite-volume stencil.
//!
//! Each unknown `P` couples to its six axis neighbours through the row
//!
//! ```text
//! c_P x_P - w_P x_W - e_P x_E - s_P x_S - n_P x_N - b_P x_B - t_P x_T = rhs_P
//! ```
//!
//! Neighbours beyond the ends of a non-periodic axis are the field's
//! boundary values; they are known, so they move to the right-hand side
//! (see [`SystemMatrix::boundary_source`]). Along a periodic axis the
//! neighbour wraps around to the opposite end of the unknowns.

use ndarray::{Array3, Zip};

use crate::operators::{slab, span};
use crate::solver::state::ScalarField;
use crate::types::{Axis3, Cells, Face};

/// Band coefficients of the system matrix, one array per band.
#[derive(Clone, Debug, PartialEq)]
pub struct SystemMatrix {
    pub c: Array3<f64>,
    pub w: Array3<f64>,
    pub e: Array3<f64>,
    pub s: Array3<f64>,
    pub n: Array3<f64>,
    pub b: Array3<f64>,
    pub t: Array3<f64>,
}

impl SystemMatrix {
    /// All-zero matrix for unknowns of `shape`.
    pub fn zeros(shape: Cells) -> Self {
        Self {
            c: Array3::zeros(shape),
            w: Array3::zeros(shape),
            e: Array3::zeros(shape),
            s: Array3::zeros(shape),
            n: Array3::zeros(shape),
            b: Array3::zeros(shape),
            t: Array3::zeros(shape),
        }
    }

    /// Shape of the unknowns.
    pub fn shape(&self) -> Cells {
        self.c.dim()
    }

    /// Number of unknowns.
    pub fn len(&self) -> usize {
        self.c.len()
    }

    pub fn is_empty(&self) -> bool {
        self.c.is_empty()
    }

    /// Coefficient band of the neighbour across `face`.
    pub fn band(&self, face: Face) -> &Array3<f64> {
        match face {
            Face::West => &self.w,
            Face::East => &self.e,
            Face::South => &self.s,
            Face::North => &self.n,
            Face::Bottom => &self.b,
            Face::Top => &self.t,
        }
    }

    pub fn band_mut(&mut self, face: Face) -> &mut Array3<f64> {
        match face {
            Face::West => &mut self.w,
            Face::East => &mut self.e,
            Face::South => &mut self.s,
            Face::North => &mut self.n,
            Face::Bottom => &mut self.b,
            Face::Top => &mut self.t,
        }
    }

    /// Linear part of `A x`.
    ///
    /// Neighbours beyond non-periodic ends count as zero; periodic axes of
    /// `field` wrap around.
    pub fn mat_vec(&self, x: &Array3<f64>, field: &ScalarField) -> Array3<f64> {
        let mut y = &self.c * x;
        for axis in Axis3::ALL {
            let (lo, hi) = neighbours(x, axis, field);
            let w = self.band(axis.low_face());
            let e = self.band(axis.high_face());
            let zip = Zip::from(&mut y).and(w).and(&lo).and(e).and(&hi);

            #[cfg(feature = "parallel")]
            zip.par_for_each(|y, &w, &l, &e, &h| *y -= w * l + e * h);

            #[cfg(not(feature = "parallel"))]
            zip.for_each(|y, &w, &l, &e, &h| *y -= w * l + e * h);
        }
        y
    }

    /// Contribution of the field's boundary values to the right-hand side.
    ///
    /// Periodic axes contribute nothing; their coupling is in [`mat_vec`].
    ///
    /// [`mat_vec`]: SystemMatrix::mat_vec
    pub fn boundary_source(&self, field: &ScalarField) -> Array3<f64> {
        let mut src = Array3::zeros(self.shape());
        for axis in Axis3::ALL {
            if field.is_periodic(axis) || src.len_of(axis.nd()) == 0 {
                continue;
            }
            let ax = axis.nd();
            let (low, high) = (axis.low_face(), axis.high_face());

            let inflow_lo = &slab(self.band(low), axis, 0) * &field.bnd[low].val;
            let mut first = src.slice_axis_mut(ax, span(0, Some(1)));
            first += &inflow_lo;

            let inflow_hi = &slab(self.band(high), axis, -1) * &field.bnd[high].val;
            let mut last = src.slice_axis_mut(ax, span(-1, None));
            last += &inflow_hi;
        }
        src
    }

    /// Full `A x` with boundary values taken from `field`.
    pub fn mat_vec_bnd(&self, x: &Array3<f64>, field: &ScalarField) -> Array3<f64> {
        self.mat_vec(x, field) - self.boundary_source(field)
    }

    /// Residual `rhs - A x` with boundary values taken from `field`.
    pub fn residual(&self, x: &Array3<f64>, field: &ScalarField, rhs: &Array3<f64>) -> Array3<f64> {
        rhs - &self.mat_vec_bnd(x, field)
    }
}

/// Low- and high-side neighbour values of every entry of `x` along `axis`.
fn neighbours(x: &Array3<f64>, axis: Axis3, field: &ScalarField) -> (Array3<f64>, Array3<f64>) {
    let ax = axis.nd();
    let mut lo = Array3::zeros(x.dim());
    let mut hi = Array3::zeros(x.dim());
    if x.len_of(ax) == 0 {
        return (lo, hi);
    }

    lo.slice_axis_mut(ax, span(1, None))
        .assign(&x.slice_axis(ax, span(0, Some(-1))));
    hi.slice_axis_mut(ax, span(0, Some(-1)))
        .assign(&x.slice_axis(ax, span(1, None)));

    if let Some((l, h)) = field.wrap_indices(axis) {
        lo.slice_axis_mut(ax, span(0, Some(1)))
            .assign(&slab(x, axis, l));
        hi.slice_axis_mut(ax, span(-1, None))
            .assign(&slab(x, axis, h));
    }
    (lo, hi)
}

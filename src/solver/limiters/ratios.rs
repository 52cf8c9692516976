//! Clamped one-sided differences and flow-selected gradient ratios.
//!
//! Along an axis with `m` values the field is extended by two entries at
//! each end and differenced, giving `m + 3` differences for `m + 1` faces:
//!
//! ```text
//!   non-periodic:  | lo | lo | v0 | v1 | ... | vm-1 | hi | hi |
//!   differences:      d0   d1   d2   ...            dm+2
//!   face f uses:   d[f], d[f+1] (flow >= 0)   or   d[f+1], d[f+2] (flow < 0)
//! ```
//!
//! Periodic axes extend with values from the opposite end instead of the
//! boundary arrays.

use ndarray::{Array3, Zip};

use crate::flux::AdvectionError;
use crate::operators::{cat, dif, span};
use crate::solver::state::ScalarField;
use crate::types::{Axis3, AxisRole};

/// Smallest difference magnitude kept in gradient ratios.
pub const TINY: f64 = 1.0e-20;

/// Push a difference out of the dead zone around zero.
///
/// `(-tiny, 0]` maps to `-tiny`, then `[0, tiny)` maps to `+tiny`; an exact
/// zero therefore ends up at `-tiny`.
#[inline]
pub fn clamp_tiny(d: f64, tiny: f64) -> f64 {
    if d > -tiny && d <= 0.0 {
        -tiny
    } else if d >= 0.0 && d < tiny {
        tiny
    } else {
        d
    }
}

/// Entries a periodic axis needs for the wrap-around stencil.
pub fn periodic_stencil_depth(role: AxisRole) -> usize {
    match role {
        AxisRole::Own => 2,
        _ => 3,
    }
}

/// Clamped consecutive differences of the boundary-extended field along `axis`.
pub fn differences(
    phi: &ScalarField,
    axis: Axis3,
    tiny: f64,
) -> Result<Array3<f64>, AdvectionError> {
    let ax = axis.nd();
    let val = &phi.val;

    let extended = if phi.is_periodic(axis) {
        let role = phi.pos.role(axis);
        let needed = periodic_stencil_depth(role);
        let actual = val.len_of(ax);
        if actual < needed {
            return Err(AdvectionError::TooFewCells {
                axis,
                needed,
                actual,
            });
        }
        let (head, tail) = match role {
            AxisRole::Own => (span(-2, None), span(0, Some(2))),
            _ => (span(-3, Some(-1)), span(1, Some(3))),
        };
        cat(
            axis,
            &[val.slice_axis(ax, head), val.view(), val.slice_axis(ax, tail)],
        )?
    } else {
        let lo = phi.bnd[axis.low_face()].val.view();
        let hi = phi.bnd[axis.high_face()].val.view();
        cat(axis, &[lo, lo, val.view(), hi, hi])?
    };

    let mut d = dif(&extended, axis);
    d.mapv_inplace(|x| clamp_tiny(x, tiny));
    Ok(d)
}

/// Gradient ratio at each face, picked by the sign of the face velocity.
///
/// For flow towards increasing index the ratio is `d[f+1] / d[f]`,
/// otherwise `d[f+2] / d[f+1]`.
pub fn upwind_ratio(d: &Array3<f64>, vel: &Array3<f64>, axis: Axis3) -> Array3<f64> {
    let ax = axis.nd();
    let d0 = d.slice_axis(ax, span(0, Some(-2)));
    let d1 = d.slice_axis(ax, span(1, Some(-1)));
    let d2 = d.slice_axis(ax, span(2, None));

    let mut r = Array3::zeros(vel.dim());
    Zip::from(&mut r)
        .and(vel)
        .and(&d0)
        .and(&d1)
        .and(&d2)
        .for_each(|r, &u, &a, &b, &c| {
            *r = if u >= 0.0 { b / a } else { c / b };
        });
    r
}

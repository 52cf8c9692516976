//! Post-solve refresh of boundary arrays.

use crate::operators::slab;
use crate::solver::state::{BoundaryKind, ScalarField};
use crate::types::Axis3;

/// Bring boundary arrays in line with freshly solved values.
///
/// Neumann faces take the values of the adjacent slab (zero normal
/// gradient), Dirichlet faces keep their prescribed values and periodic
/// axes are exchanged.
pub fn refresh_boundary_adjacent(field: &mut ScalarField) {
    for axis in Axis3::ALL {
        if field.is_periodic(axis) || field.val.len_of(axis.nd()) == 0 {
            continue;
        }
        for (face, index) in [(axis.low_face(), 0), (axis.high_face(), -1)] {
            if field.bnd[face].kind == BoundaryKind::Neumann {
                let adjacent = slab(&field.val, axis, index);
                field.bnd[face].val.assign(&adjacent);
            }
        }
    }
    field.exchange();
}

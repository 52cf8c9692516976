//! Diffusion matrix of the generic transport equation.
//!
//! Builds the seven-band matrix of
//!
//! ```text
//! inertia * V * x_P + sum over faces of K_f (x_P - x_nb) = rhs
//! ```
//!
//! with face conductances `K_f = mu_f A_f / delta_f` and boundary faces at
//! half a cell from the adjacent centre.

use ndarray::{Array3, Zip};

use crate::flux::AdvectionError;
use crate::mesh::Grid;
use crate::operators::{avg, avg_pos, cat, copy_slab, first, last, span};
use crate::solver::state::{BoundaryKind, ScalarField};
use crate::solver::system::SystemMatrix;
use crate::types::{Axis3, AxisRole, Position};

/// Face conductances `mu A / delta` along `axis` for a variable at `pos`,
/// one entry longer than the variable along `axis`.
pub fn face_conductance(
    axis: Axis3,
    pos: Position,
    per: [bool; 3],
    mu: &Array3<f64>,
    grid: &Grid,
) -> Result<Array3<f64>, AdvectionError> {
    let area = grid.area(axis);
    let width = grid.extent(axis);

    let centered = || -> Result<Array3<f64>, AdvectionError> {
        let interior = avg(mu, axis) * avg(&area, axis) / avg(width, axis);
        let cell = mu * &area / width * 2.0;
        Ok(cat(
            axis,
            &[first(&cell, axis), interior.view(), last(&cell, axis)],
        )?)
    };

    let role = pos.role(axis);
    let mut k = match role {
        AxisRole::Center => centered()?,
        AxisRole::Own => mu * &area / width,
        AxisRole::Transverse(s) => avg(&centered()?, s),
    };

    if per[axis.index()] && role != AxisRole::Own {
        copy_slab(&mut k, axis, -2, 0);
        copy_slab(&mut k, axis, 1, -1);
    }
    Ok(k)
}

/// Assemble the diffusion matrix of `field`.
///
/// # Arguments
/// * `field` - Unknown whose placement, periodicity and boundaries shape the stencil
/// * `inertia` - Cell-based coefficient of the diagonal term (e.g. density / dt)
/// * `diffusivity` - Cell-based diffusion coefficient
/// * `grid` - Cell geometry
/// * `obstacle` - Optional cell mask, positive in solid cells
/// * `kind` - Boundary faces of this kind get zero coefficients
///
/// Solid unknowns are decoupled from all their neighbours and keep only the
/// inertial diagonal.
pub fn create_matrix(
    field: &ScalarField,
    inertia: &Array3<f64>,
    diffusivity: &Array3<f64>,
    grid: &Grid,
    obstacle: Option<&Array3<f64>>,
    kind: BoundaryKind,
) -> Result<SystemMatrix, AdvectionError> {
    let cells = grid.cells();
    AdvectionError::check_shape("inertia", cells, inertia.dim())?;
    AdvectionError::check_shape("diffusivity", cells, diffusivity.dim())?;
    if let Some(obst) = obstacle {
        AdvectionError::check_shape("obstacle", cells, obst.dim())?;
    }
    field.validate(cells)?;
    AdvectionError::check_placement(field.pos, cells)?;

    let mut a = SystemMatrix::zeros(field.shape());
    for axis in Axis3::ALL {
        let ax = axis.nd();
        let k = face_conductance(axis, field.pos, field.per, diffusivity, grid)?;
        let (low, high) = (axis.low_face(), axis.high_face());
        a.band_mut(low).assign(&k.slice_axis(ax, span(0, Some(-1))));
        a.band_mut(high).assign(&k.slice_axis(ax, span(1, None)));

        if !field.is_periodic(axis) && field.val.len_of(ax) > 0 {
            if field.bnd[low].kind == kind {
                a.band_mut(low)
                    .slice_axis_mut(ax, span(0, Some(1)))
                    .fill(0.0);
            }
            if field.bnd[high].kind == kind {
                a.band_mut(high)
                    .slice_axis_mut(ax, span(-1, None))
                    .fill(0.0);
            }
        }
    }

    if let Some(obst) = obstacle {
        let solid = avg_pos(field.pos, obst).mapv(|v| v > 0.0);
        decouple_solid(&mut a, &solid);
    }

    let diagonal = avg_pos(field.pos, inertia) * avg_pos(field.pos, &grid.volume());
    a.c.assign(&diagonal);
    for axis in Axis3::ALL {
        let sum = a.band(axis.low_face()) + a.band(axis.high_face());
        a.c += &sum;
    }
    Ok(a)
}

/// Zero every coupling to or from a solid unknown.
fn decouple_solid(a: &mut SystemMatrix, solid: &Array3<bool>) {
    for axis in Axis3::ALL {
        let ax = axis.nd();
        if solid.len_of(ax) == 0 {
            continue;
        }
        let zero_where = |band: &mut Array3<f64>| {
            Zip::from(band)
                .and(solid)
                .for_each(|c, &s| if s { *c = 0.0 });
        };
        zero_where(a.band_mut(axis.low_face()));
        zero_where(a.band_mut(axis.high_face()));

        Zip::from(a.band_mut(axis.low_face()).slice_axis_mut(ax, span(1, None)))
            .and(solid.slice_axis(ax, span(0, Some(-1))))
            .for_each(|c, &s| if s { *c = 0.0 });
        Zip::from(a.band_mut(axis.high_face()).slice_axis_mut(ax, span(0, Some(-1))))
            .and(solid.slice_axis(ax, span(1, None)))
            .for_each(|c, &s| if s { *c = 0.0 });
    }
}

//! Face values of density, area, centre distance and velocity.
//!
//! Every transported variable needs, along each axis, one value per face of
//! its control volumes, boundary faces included. How those values are
//! obtained depends on how the axis relates to the variable's placement:
//!
//! - cell-centered: neighbour averages, boundary faces take the boundary
//!   cell's own value (half its width for the centre distance);
//! - own staggered axis: the control volumes of a staggered variable are
//!   centred on cell faces, so its faces sit at cell centres and the cell
//!   arrays are used directly;
//! - transverse axis: cell-centered face values averaged along the
//!   staggered axis.

use ndarray::{Array3, ArrayBase, Data, Ix3};

use crate::flux::AdvectionError;
use crate::mesh::Grid;
use crate::operators::{avg, cat, copy_slab, first, last};
use crate::solver::state::{ScalarField, Velocity};
use crate::types::{Axis3, AxisRole, Position};

/// Face quantities along one axis, one entry longer than the variable.
#[derive(Clone, Debug)]
pub struct FaceData {
    /// Density (or other advected property) at faces
    pub rho: Array3<f64>,
    /// Face areas
    pub area: Array3<f64>,
    /// Distance between the centres on both sides of each face
    pub delta: Array3<f64>,
    /// Face-normal velocity
    pub vel: Array3<f64>,
}

impl FaceData {
    /// Density times area, the factor turning a velocity into a mass flow.
    pub fn mass_factor(&self) -> Array3<f64> {
        &self.rho * &self.area
    }
}

/// Neighbour averages padded with the first and last slab.
pub fn pad_edges<S>(x: &ArrayBase<S, Ix3>, axis: Axis3) -> Result<Array3<f64>, AdvectionError>
where
    S: Data<Elem = f64>,
{
    let mid = avg(x, axis);
    Ok(cat(axis, &[first(x, axis), mid.view(), last(x, axis)])?)
}

/// Neighbour averages padded with half the first and last slab.
pub fn pad_half<S>(x: &ArrayBase<S, Ix3>, axis: Axis3) -> Result<Array3<f64>, AdvectionError>
where
    S: Data<Elem = f64>,
{
    let lo = &first(x, axis) * 0.5;
    let mid = avg(x, axis);
    let hi = &last(x, axis) * 0.5;
    Ok(cat(axis, &[lo.view(), mid.view(), hi.view()])?)
}

/// Component values with their boundary values on both ends.
fn with_boundaries(c: &ScalarField, axis: Axis3) -> Result<Array3<f64>, AdvectionError> {
    Ok(cat(
        axis,
        &[
            c.bnd[axis.low_face()].val.view(),
            c.val.view(),
            c.bnd[axis.high_face()].val.view(),
        ],
    )?)
}

/// Density on faces transverse to the staggered axis `s`.
///
/// Nodal averages padded with their own edge slabs; a single cell along
/// `axis` has no nodes, so both faces then take the cell value.
fn transverse_density(
    rho: &Array3<f64>,
    axis: Axis3,
    s: Axis3,
) -> Result<Array3<f64>, AdvectionError> {
    if rho.len_of(axis.nd()) < 2 {
        return Ok(avg(&pad_edges(rho, axis)?, s));
    }
    let nodal = avg(&avg(rho, axis), s);
    Ok(cat(axis, &[first(&nodal, axis), nodal.view(), last(&nodal, axis)])?)
}

/// Face quantities of a variable at `pos` along `axis`.
///
/// Velocity boundary values must be fresh; callers exchange periodic
/// velocity components beforehand.
pub fn reconstruct(
    axis: Axis3,
    pos: Position,
    per: [bool; 3],
    rho: &Array3<f64>,
    grid: &Grid,
    uvw: &Velocity,
) -> Result<FaceData, AdvectionError> {
    let role = pos.role(axis);
    let comp = uvw.component(axis);

    let mut faces = match role {
        AxisRole::Center => FaceData {
            rho: pad_edges(rho, axis)?,
            area: pad_edges(&grid.area(axis), axis)?,
            delta: pad_half(grid.extent(axis), axis)?,
            vel: with_boundaries(comp, axis)?,
        },
        AxisRole::Own => {
            let mid = avg(&comp.val, axis);
            let vel = cat(
                axis,
                &[
                    comp.bnd[axis.low_face()].val.view(),
                    mid.view(),
                    comp.bnd[axis.high_face()].val.view(),
                ],
            )?;
            FaceData {
                rho: rho.clone(),
                area: grid.area(axis),
                delta: grid.extent(axis).clone(),
                vel,
            }
        }
        AxisRole::Transverse(s) => FaceData {
            rho: transverse_density(rho, axis, s)?,
            area: avg(&pad_edges(&grid.area(axis), axis)?, s),
            delta: avg(&pad_half(grid.extent(axis), axis)?, s),
            vel: avg(&with_boundaries(comp, axis)?, s),
        },
    };

    // Boundary faces of a periodic axis are interior faces of the period.
    if per[axis.index()] && role != AxisRole::Own {
        for x in [&mut faces.rho, &mut faces.area, &mut faces.delta] {
            copy_slab(x, axis, -2, 0);
            copy_slab(x, axis, 1, -1);
        }
    }

    Ok(faces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::state::BoundaryKind;
    use crate::types::Face;

    const TOL: f64 = 1e-12;

    fn setup(cells: (usize, usize, usize)) -> (Array3<f64>, Grid, Velocity) {
        let rho = Array3::from_shape_fn(cells, |(i, j, k)| 1.0 + i as f64 + 0.1 * j as f64 + 0.01 * k as f64);
        let grid = Grid::from_nodes(
            &[0.0, 1.0, 3.0, 4.0, 7.0],
            &[0.0, 1.0, 2.0, 4.0],
            &[0.0, 0.5, 1.0],
        )
        .unwrap();
        assert_eq!(grid.cells(), cells);
        let uvw = Velocity::uniform(cells, (1.0, 2.0, 3.0));
        (rho, grid, uvw)
    }

    #[test]
    fn test_shapes_every_position() {
        let cells = (4, 3, 2);
        let (rho, grid, uvw) = setup(cells);
        for pos in [Position::Center, Position::X, Position::Y, Position::Z] {
            let shape = pos.shape(cells);
            for axis in Axis3::ALL {
                let f = reconstruct(axis, pos, [false; 3], &rho, &grid, &uvw).unwrap();
                let mut expected = [shape.0, shape.1, shape.2];
                expected[axis.index()] += 1;
                let expected = (expected[0], expected[1], expected[2]);
                assert_eq!(f.rho.dim(), expected, "rho {pos} {axis}");
                assert_eq!(f.area.dim(), expected, "area {pos} {axis}");
                assert_eq!(f.delta.dim(), expected, "delta {pos} {axis}");
                assert_eq!(f.vel.dim(), expected, "vel {pos} {axis}");
            }
        }
    }

    #[test]
    fn test_center_distances() {
        let (rho, grid, uvw) = setup((4, 3, 2));
        let f = reconstruct(Axis3::X, Position::Center, [false; 3], &rho, &grid, &uvw).unwrap();
        let got: Vec<f64> = (0..5).map(|i| f.delta[[i, 0, 0]]).collect();
        let expected = [0.5, 1.5, 1.5, 2.0, 1.5];
        for (g, e) in got.iter().zip(expected) {
            assert!((g - e).abs() < TOL);
        }
        assert!((f.rho[[0, 1, 0]] - rho[[0, 1, 0]]).abs() < TOL);
        assert!((f.rho[[2, 1, 0]] - 2.6).abs() < TOL);
    }

    #[test]
    fn test_own_axis_uses_cell_values() {
        let (rho, grid, mut uvw) = setup((4, 3, 2));
        for (i, v) in [1.0, 3.0, 5.0].into_iter().enumerate() {
            uvw.u.val.index_axis_mut(ndarray::Axis(0), i).fill(v);
        }
        uvw.u.set_boundary(Face::West, BoundaryKind::Dirichlet, -1.0);
        let f = reconstruct(Axis3::X, Position::X, [false; 3], &rho, &grid, &uvw).unwrap();
        assert_eq!(f.rho, rho);
        assert_eq!(f.delta, grid.dx);
        let vel: Vec<f64> = (0..4).map(|i| f.vel[[i, 0, 0]]).collect();
        assert_eq!(vel, vec![-1.0, 2.0, 4.0, 1.0]);
    }

    #[test]
    fn test_transverse_density_nodal_padding() {
        let (rho, grid, uvw) = setup((4, 3, 2));
        let f = reconstruct(Axis3::Y, Position::X, [false; 3], &rho, &grid, &uvw).unwrap();
        let nodal = |i: usize, j: usize| {
            0.25 * (rho[[i, j, 0]] + rho[[i + 1, j, 0]] + rho[[i, j + 1, 0]] + rho[[i + 1, j + 1, 0]])
        };
        assert!((f.rho[[0, 0, 0]] - nodal(0, 0)).abs() < TOL);
        assert!((f.rho[[0, 1, 0]] - nodal(0, 0)).abs() < TOL);
        assert!((f.rho[[0, 2, 0]] - nodal(0, 1)).abs() < TOL);
        assert!((f.rho[[0, 3, 0]] - nodal(0, 1)).abs() < TOL);
        // Distances along y averaged onto x-faces.
        assert!((f.delta[[1, 0, 0]] - 0.5).abs() < TOL);
        assert!((f.delta[[1, 2, 0]] - 1.5).abs() < TOL);
    }

    #[test]
    fn test_transverse_single_cell() {
        let cells = (4, 1, 1);
        let rho = Array3::from_shape_fn(cells, |(i, _, _)| 1.0 + i as f64);
        let grid = Grid::uniform(cells, (4.0, 1.0, 1.0));
        let uvw = Velocity::uniform(cells, (1.0, 0.0, 0.0));
        let f = reconstruct(Axis3::Y, Position::X, [false; 3], &rho, &grid, &uvw).unwrap();
        assert_eq!(f.rho.dim(), (3, 2, 1));
        assert!((f.rho[[1, 0, 0]] - 2.5).abs() < TOL);
        assert!((f.rho[[1, 1, 0]] - 2.5).abs() < TOL);
    }

    #[test]
    fn test_periodic_patch() {
        let cells = (5, 1, 1);
        let rho = Array3::from_shape_fn(cells, |(i, _, _)| 1.0 + i as f64);
        let grid = Grid::from_nodes(&[0.0, 1.0, 2.0, 4.0, 5.0, 6.0], &[0.0, 1.0], &[0.0, 1.0]).unwrap();
        let uvw = Velocity::uniform(cells, (1.0, 0.0, 0.0));
        let f = reconstruct(Axis3::X, Position::Center, [true, false, false], &rho, &grid, &uvw).unwrap();
        assert!((f.rho[[0, 0, 0]] - f.rho[[4, 0, 0]]).abs() < TOL);
        assert!((f.rho[[5, 0, 0]] - f.rho[[1, 0, 0]]).abs() < TOL);
        assert!((f.delta[[0, 0, 0]] - 1.0).abs() < TOL);
        assert!((f.delta[[5, 0, 0]] - 1.0).abs() < TOL);
    }
}

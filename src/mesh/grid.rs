//! Tensor-product Cartesian grid of a structured 3D block.
//!
//! Geometry is stored as three cell-based arrays of extents, which is what
//! the finite-volume operators consume. Face areas and volumes are derived
//! on demand.

use ndarray::Array3;

use crate::flux::AdvectionError;
use crate::types::{Axis3, Cells};

/// Cell extents of a structured block.
#[derive(Clone, Debug)]
pub struct Grid {
    /// Cell widths in x
    pub dx: Array3<f64>,
    /// Cell widths in y
    pub dy: Array3<f64>,
    /// Cell widths in z
    pub dz: Array3<f64>,
    /// Node coordinates along x, y, z (cell count + 1 each)
    pub nodes: [Vec<f64>; 3],
}

impl Grid {
    /// Create a uniform grid of `cells` spanning a box of `lengths`.
    ///
    /// # Panics
    /// If any cell count is zero or any length is not positive.
    pub fn uniform(cells: Cells, lengths: (f64, f64, f64)) -> Self {
        let (nx, ny, nz) = cells;
        assert!(nx > 0 && ny > 0 && nz > 0, "Need at least one cell per axis");
        assert!(
            lengths.0 > 0.0 && lengths.1 > 0.0 && lengths.2 > 0.0,
            "Domain lengths must be positive"
        );

        let line = |n: usize, l: f64| -> Vec<f64> {
            (0..=n).map(|i| l * i as f64 / n as f64).collect()
        };

        Self {
            dx: Array3::from_elem(cells, lengths.0 / nx as f64),
            dy: Array3::from_elem(cells, lengths.1 / ny as f64),
            dz: Array3::from_elem(cells, lengths.2 / nz as f64),
            nodes: [line(nx, lengths.0), line(ny, lengths.1), line(nz, lengths.2)],
        }
    }

    /// Create a grid from node coordinates along each axis.
    ///
    /// Nodes must be strictly increasing with at least two per axis.
    pub fn from_nodes(xn: &[f64], yn: &[f64], zn: &[f64]) -> Result<Self, AdvectionError> {
        for (axis, nodes) in Axis3::ALL.iter().zip([xn, yn, zn]) {
            if nodes.len() < 2 {
                return Err(AdvectionError::InvalidGrid(format!(
                    "need at least two nodes along {axis}, got {}",
                    nodes.len()
                )));
            }
            if nodes.windows(2).any(|w| w[1] <= w[0]) {
                return Err(AdvectionError::InvalidGrid(format!(
                    "nodes along {axis} must be strictly increasing"
                )));
            }
        }

        let cells = (xn.len() - 1, yn.len() - 1, zn.len() - 1);
        Ok(Self {
            dx: Array3::from_shape_fn(cells, |(i, _, _)| xn[i + 1] - xn[i]),
            dy: Array3::from_shape_fn(cells, |(_, j, _)| yn[j + 1] - yn[j]),
            dz: Array3::from_shape_fn(cells, |(_, _, k)| zn[k + 1] - zn[k]),
            nodes: [xn.to_vec(), yn.to_vec(), zn.to_vec()],
        })
    }

    /// Number of cells `(nx, ny, nz)`.
    pub fn cells(&self) -> Cells {
        self.dx.dim()
    }

    /// Total number of cells.
    pub fn n_cells(&self) -> usize {
        self.dx.len()
    }

    /// Cell extents along `axis`.
    pub fn extent(&self, axis: Axis3) -> &Array3<f64> {
        match axis {
            Axis3::X => &self.dx,
            Axis3::Y => &self.dy,
            Axis3::Z => &self.dz,
        }
    }

    /// Cell face areas normal to `axis` (product of the two other extents).
    pub fn area(&self, axis: Axis3) -> Array3<f64> {
        match axis {
            Axis3::X => &self.dy * &self.dz,
            Axis3::Y => &self.dx * &self.dz,
            Axis3::Z => &self.dx * &self.dy,
        }
    }

    /// Cell volumes.
    pub fn volume(&self) -> Array3<f64> {
        &(&self.dx * &self.dy) * &self.dz
    }

    /// Cell-center coordinates along `axis`.
    pub fn centers(&self, axis: Axis3) -> Vec<f64> {
        self.nodes[axis.index()]
            .windows(2)
            .map(|w| 0.5 * (w[0] + w[1]))
            .collect()
    }

    /// Smallest cell extent in the grid.
    pub fn h_min(&self) -> f64 {
        Axis3::ALL
            .iter()
            .flat_map(|&a| self.extent(a).iter().copied())
            .fold(f64::INFINITY, f64::min)
    }
}

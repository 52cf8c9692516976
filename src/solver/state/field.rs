//! Transported unknowns on the staggered grid.
//!
//! A [`ScalarField`] carries its current and previous-step values, its
//! placement, per-axis periodicity and one boundary array per face. The
//! boundary arrays double as the halo that the advection stencils read.

use ndarray::Array3;

use crate::flux::AdvectionError;
use crate::operators::slab;
use crate::types::{Axis3, AxisRole, Cells, Face, Faces, Position};

/// Boundary condition kind on one face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundaryKind {
    /// Prescribed value held in the boundary array.
    Dirichlet,
    /// Zero normal gradient; the boundary array mirrors the adjacent values.
    #[default]
    Neumann,
}

/// Kind and values of a field on one bounding face.
#[derive(Clone, Debug)]
pub struct Boundary {
    pub kind: BoundaryKind,
    /// Values on the face, one thick in the face-normal direction.
    pub val: Array3<f64>,
}

/// Shape of the boundary array on `face` for a field of `shape`.
pub fn boundary_shape(shape: Cells, face: Face) -> Cells {
    let (a, b, c) = shape;
    match face.axis() {
        Axis3::X => (1, b, c),
        Axis3::Y => (a, 1, c),
        Axis3::Z => (a, b, 1),
    }
}

/// A scalar unknown with boundary data.
///
/// # Example
///
/// ```
/// use tvd_transport::solver::{BoundaryKind, ScalarField};
/// use tvd_transport::types::{Axis3, Face, Position};
///
/// let t = ScalarField::new("t", Position::Center, (8, 4, 1), BoundaryKind::Neumann)
///     .with_boundary(Face::West, BoundaryKind::Dirichlet, 20.0)
///     .with_periodic(Axis3::Y);
/// assert_eq!(t.val.dim(), (8, 4, 1));
/// assert_eq!(t.bnd.west.val.dim(), (1, 4, 1));
/// assert!(t.is_periodic(Axis3::Y));
/// ```
#[derive(Clone, Debug)]
pub struct ScalarField {
    pub name: String,
    pub pos: Position,
    /// Periodicity along x, y, z
    pub per: [bool; 3],
    /// Current values
    pub val: Array3<f64>,
    /// Values at the previous time step
    pub old: Array3<f64>,
    pub bnd: Faces<Boundary>,
}

impl ScalarField {
    /// Create a zero field at `pos` on a block of `cells`, with `kind` on every face.
    pub fn new(name: impl Into<String>, pos: Position, cells: Cells, kind: BoundaryKind) -> Self {
        let shape = pos.shape(cells);
        Self {
            name: name.into(),
            pos,
            per: [false; 3],
            val: Array3::zeros(shape),
            old: Array3::zeros(shape),
            bnd: Faces::from_fn(|face| Boundary {
                kind,
                val: Array3::zeros(boundary_shape(shape, face)),
            }),
        }
    }

    /// Mark `axis` as periodic.
    pub fn with_periodic(mut self, axis: Axis3) -> Self {
        self.per[axis.index()] = true;
        self
    }

    /// Set a uniform boundary condition on `face`.
    pub fn with_boundary(mut self, face: Face, kind: BoundaryKind, value: f64) -> Self {
        self.set_boundary(face, kind, value);
        self
    }

    /// Set a uniform boundary condition on `face`.
    pub fn set_boundary(&mut self, face: Face, kind: BoundaryKind, value: f64) {
        let bnd = &mut self.bnd[face];
        bnd.kind = kind;
        bnd.val.fill(value);
    }

    /// Fill current and previous values with a constant.
    pub fn fill(&mut self, value: f64) {
        self.val.fill(value);
        self.old.fill(value);
    }

    /// Array shape of the values.
    pub fn shape(&self) -> Cells {
        self.val.dim()
    }

    pub fn is_periodic(&self, axis: Axis3) -> bool {
        self.per[axis.index()]
    }

    /// Copy current values into `old`, ready for the next time step.
    pub fn save_old(&mut self) {
        self.old.assign(&self.val);
    }

    /// Indices of the values that wrap around to the low and high end of a
    /// periodic `axis`, or `None` if the axis is not periodic or too short.
    ///
    /// Along its own staggered axis a field wraps with the last and first
    /// face values; otherwise the first and last entries overlap the
    /// opposite interior, so the wrap reads one entry further in.
    pub fn wrap_indices(&self, axis: Axis3) -> Option<(isize, isize)> {
        if !self.is_periodic(axis) {
            return None;
        }
        let n = self.val.len_of(axis.nd()) as isize;
        let (lo, hi) = match self.pos.role(axis) {
            AxisRole::Own => (n - 1, 0),
            _ => (n - 2, 1),
        };
        (lo >= 0 && hi < n).then_some((lo, hi))
    }

    /// Refresh boundary arrays along periodic axes from the opposite end.
    pub fn exchange(&mut self) {
        for axis in Axis3::ALL {
            if let Some((lo, hi)) = self.wrap_indices(axis) {
                let val = &self.val;
                self.bnd[axis.low_face()].val.assign(&slab(val, axis, lo));
                self.bnd[axis.high_face()].val.assign(&slab(val, axis, hi));
            }
        }
    }

    /// Check value and boundary shapes against a block of `cells`.
    pub fn validate(&self, cells: Cells) -> Result<(), AdvectionError> {
        let shape = self.pos.shape(cells);
        AdvectionError::check_shape(format!("{}.val", self.name), shape, self.val.dim())?;
        AdvectionError::check_shape(format!("{}.old", self.name), shape, self.old.dim())?;
        for (face, bnd) in self.bnd.iter() {
            AdvectionError::check_shape(
                format!("{}.bnd[{face}]", self.name),
                boundary_shape(shape, face),
                bnd.val.dim(),
            )?;
        }
        Ok(())
    }
}

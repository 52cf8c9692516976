//! Staggered velocity triple.

use crate::flux::AdvectionError;
use crate::types::{Axis3, Cells, Face, Position};

use super::field::{BoundaryKind, ScalarField};

/// Convecting velocity with each component on the faces normal to its axis.
#[derive(Clone, Debug)]
pub struct Velocity {
    pub u: ScalarField,
    pub v: ScalarField,
    pub w: ScalarField,
}

impl Velocity {
    /// Zero velocity on a block of `cells` with `kind` on every face.
    pub fn new(cells: Cells, kind: BoundaryKind) -> Self {
        Self {
            u: ScalarField::new("u", Position::X, cells, kind),
            v: ScalarField::new("v", Position::Y, cells, kind),
            w: ScalarField::new("w", Position::Z, cells, kind),
        }
    }

    /// Spatially uniform velocity, boundary values included.
    pub fn uniform(cells: Cells, (u, v, w): (f64, f64, f64)) -> Self {
        let mut vel = Self::new(cells, BoundaryKind::Dirichlet);
        for (axis, value) in Axis3::ALL.into_iter().zip([u, v, w]) {
            let c = vel.component_mut(axis);
            c.fill(value);
            for face in Face::ALL {
                c.bnd[face].val.fill(value);
            }
        }
        vel
    }

    /// Mark `axis` periodic on all three components.
    pub fn with_periodic(mut self, axis: Axis3) -> Self {
        for c in [&mut self.u, &mut self.v, &mut self.w] {
            c.per[axis.index()] = true;
        }
        self
    }

    /// Component normal to the faces of `axis`.
    pub fn component(&self, axis: Axis3) -> &ScalarField {
        match axis {
            Axis3::X => &self.u,
            Axis3::Y => &self.v,
            Axis3::Z => &self.w,
        }
    }

    pub fn component_mut(&mut self, axis: Axis3) -> &mut ScalarField {
        match axis {
            Axis3::X => &mut self.u,
            Axis3::Y => &mut self.v,
            Axis3::Z => &mut self.w,
        }
    }

    /// Refresh periodic boundary values of all components.
    pub fn exchange(&mut self) {
        self.u.exchange();
        self.v.exchange();
        self.w.exchange();
    }

    /// Check placements and shapes against a block of `cells`.
    pub fn validate(&self, cells: Cells) -> Result<(), AdvectionError> {
        for axis in Axis3::ALL {
            let c = self.component(axis);
            if c.pos != Position::face(axis) {
                return Err(AdvectionError::UnsupportedPosition(format!(
                    "velocity component {} placed at {}, expected {}",
                    c.name,
                    c.pos,
                    Position::face(axis)
                )));
            }
            c.validate(cells)?;
        }
        Ok(())
    }
}

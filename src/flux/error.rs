//! Error types for advection and grid setup.

use thiserror::Error;

use crate::types::{Axis3, Cells, Position};

/// Configuration and consistency errors reported by the advection core.
///
/// All of these are detected before any flux is computed.
#[derive(Error, Debug)]
pub enum AdvectionError {
    /// Limiter name not in {upwind, minmod, superbee, koren}.
    #[error("Unknown limiter: {0:?}")]
    UnknownLimiter(String),

    /// Variable placement not in {C, X, Y, Z}.
    #[error("Unsupported variable position: {0:?}")]
    UnsupportedPosition(String),

    /// Array extents do not agree with the grid or with each other.
    #[error("Shape mismatch for {what}: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        what: String,
        expected: (usize, usize, usize),
        actual: (usize, usize, usize),
    },

    /// An axis is too short for the placement or for the periodic stencil.
    #[error("Axis {axis} needs at least {needed} entries, got {actual}")]
    TooFewCells {
        axis: Axis3,
        needed: usize,
        actual: usize,
    },

    /// Time step must be positive and finite.
    #[error("Invalid time step: {0}")]
    InvalidTimeStep(f64),

    /// Grid geometry is not usable.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// Failure while assembling face arrays.
    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

impl AdvectionError {
    /// Create a shape mismatch error.
    pub fn shape_mismatch(
        what: impl Into<String>,
        expected: (usize, usize, usize),
        actual: (usize, usize, usize),
    ) -> Self {
        Self::ShapeMismatch {
            what: what.into(),
            expected,
            actual,
        }
    }

    /// Check that `actual` equals `expected`.
    pub(crate) fn check_shape(
        what: impl Into<String>,
        expected: (usize, usize, usize),
        actual: (usize, usize, usize),
    ) -> Result<(), Self> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::shape_mismatch(what, expected, actual))
        }
    }

    /// Check that a variable at `pos` has at least two cells along its
    /// staggered axis, so that it has interior faces to live on.
    pub(crate) fn check_placement(pos: Position, cells: Cells) -> Result<(), Self> {
        if let Some(axis) = pos.staggered_axis() {
            let actual = [cells.0, cells.1, cells.2][axis.index()];
            if actual < 2 {
                return Err(Self::TooFewCells {
                    axis,
                    needed: 2,
                    actual,
                });
            }
        }
        Ok(())
    }
}

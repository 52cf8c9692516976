//! Unknowns and the convecting velocity.
//!
//! - [`ScalarField`]: values, previous-step values, placement, periodicity
//!   and per-face boundary data of one transported quantity
//! - [`Velocity`]: three face-staggered components

mod field;
mod velocity;

pub use field::{Boundary, BoundaryKind, ScalarField, boundary_shape};
pub use velocity::Velocity;

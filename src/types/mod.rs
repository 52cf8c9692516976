//! Small strongly-typed building blocks shared by every module.
//!
//! - [`Axis3`]: x, y, z with their `ndarray` dimension and bounding faces
//! - [`Position`]: cell-centered or face-staggered placement of a variable
//! - [`Face`], [`Faces`]: the six bounding faces and per-face storage
//!
//! # Example
//!
//! ```
//! use tvd_transport::types::{Axis3, AxisRole, Face, Position};
//!
//! assert_eq!(Position::X.shape((8, 4, 2)), (7, 4, 2));
//! assert_eq!(Position::X.role(Axis3::Y), AxisRole::Transverse(Axis3::X));
//! assert_eq!(Axis3::Z.high_face(), Face::Top);
//! ```

mod axis;
mod faces;

pub use axis::{Axis3, AxisRole, Cells, Position};
pub use faces::{Face, Faces};

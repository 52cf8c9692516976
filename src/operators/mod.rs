//! Geometry and field accessors.
//!
//! Whole-array operators on cell or face data of a structured block:
//! - [`dif`]: consecutive differences along an axis
//! - [`avg`], [`avg_pos`]: neighbour averages, and averaging onto a placement
//! - [`cat`], [`first`], [`last`], [`slab`]: concatenation and edge slabs

mod staggered;

pub use staggered::{avg, avg_pos, cat, copy_slab, dif, first, last, slab, span};

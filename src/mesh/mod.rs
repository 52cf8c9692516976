//! Structured grid geometry.
//!
//! A [`Grid`] holds the cell extents of a single Cartesian block; face areas
//! and cell volumes are derived from them.

mod grid;

pub use grid::Grid;

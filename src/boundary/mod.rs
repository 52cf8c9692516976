//! Boundary handling of transported fields.
//!
//! Boundary values of a [`ScalarField`](crate::solver::ScalarField) live in
//! its per-face arrays; the advection stencils read them as ghost values.
//! After each solve they are refreshed:
//!
//! | Kind | Refresh |
//! |------|---------|
//! | Dirichlet | kept as prescribed |
//! | Neumann | copied from the adjacent slab |
//! | periodic axis | exchanged from the opposite end |

mod adjacent;

pub use adjacent::refresh_boundary_adjacent;

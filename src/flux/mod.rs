//! Advective fluxes on the staggered grid.
//!
//! - [`reconstruct`]: face density, area, centre distance and velocity of a
//!   variable at any placement
//! - [`upwind_flux`], [`antidiffusive_flux`]: pointwise donor-cell flux and
//!   its limited second-order correction
//! - [`advection_explicit`], [`advection_deferred`], [`compute_advection`]:
//!   finite-volume divergence of the limited flux, optionally with implicit
//!   donor-cell coefficients
//!
//! # Example
//!
//! ```
//! use ndarray::Array3;
//! use tvd_transport::flux::{AdvectionConfig, advection_explicit};
//! use tvd_transport::mesh::Grid;
//! use tvd_transport::solver::{BoundaryKind, Limiter, ScalarField, Velocity};
//! use tvd_transport::types::{Face, Position};
//!
//! let cells = (5, 1, 1);
//! let grid = Grid::uniform(cells, (5.0, 1.0, 1.0));
//! let mut uvw = Velocity::uniform(cells, (1.0, 0.0, 0.0));
//! let mut phi = ScalarField::new("phi", Position::Center, cells, BoundaryKind::Neumann)
//!     .with_boundary(Face::West, BoundaryKind::Dirichlet, 1.0);
//!
//! let c = advection_explicit(
//!     &Array3::ones(cells),
//!     &mut phi,
//!     &mut uvw,
//!     &grid,
//!     0.5,
//!     &Limiter::Koren,
//!     &AdvectionConfig::default(),
//! )
//! .unwrap();
//! // Inflow through the west face only fills the first cell.
//! assert!((c[[0, 0, 0]] + 1.0).abs() < 1e-12);
//! ```

mod advection;
mod error;
pub mod faces;
mod upwind;

pub use advection::{AdvectionConfig, advection_deferred, advection_explicit, compute_advection};
pub use error::AdvectionError;
pub use faces::{FaceData, reconstruct};
pub use upwind::{antidiffusive_flux, courant, upwind_difference, upwind_flux};

pub use crate::solver::limiters::TINY;

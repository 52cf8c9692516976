//! Solver components for the transport equation.
//!
//! # Submodules
//!
//! - [`state`]: Transported fields and the staggered velocity
//! - [`limiters`]: Flux limiters and gradient ratios
//! - [`system`]: Seven-band system matrix
//! - [`diffusion`]: Diffusion matrix assembly
//! - [`linear`]: Krylov and direct linear solvers
//! - [`diagnostics`]: Conserved content, bounds and Courant number
//!
//! # Limiter Traits
//!
//! The [`FluxLimiter`] trait provides a generic interface for limiter
//! functions, with [`Limiter`] as an enum for zero-cost dispatch. The
//! [`LinearSolver`] trait does the same for linear solvers, with
//! [`StandardSolver`] as its enum.

pub mod diagnostics;
pub mod diffusion;
pub mod limiters;
pub mod linear;
pub mod state;
pub mod system;

// Re-export state types
pub use state::{Boundary, BoundaryKind, ScalarField, Velocity, boundary_shape};

// Re-export limiter types
pub use limiters::{
    BoxedLimiter, FluxLimiter, Koren, Limiter, Minmod, Superbee, TINY, Upwind, create_limiter,
};

// Re-export system assembly and solvers
pub use diffusion::{create_matrix, face_conductance};
pub use linear::{
    BiCgStab, BoxedSolver, ConjugateGradient, DirectLu, LinearSolver, SolverError,
    StandardSolver, TOL, create_solver,
};
pub use system::SystemMatrix;

// Re-export diagnostics
pub use diagnostics::{
    DiagnosticsTracker, TransportDiagnostics, field_bounds, max_courant, stable_dt, total_content,
};

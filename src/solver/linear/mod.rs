//! Linear solvers for the seven-band system.
//!
//! - [`LinearSolver`]: trait implemented by every solver
//! - [`ConjugateGradient`], [`BiCgStab`]: Krylov solvers
//! - [`DirectLu`]: dense LU via faer, for small systems and reference solutions
//! - [`StandardSolver`]: enum for zero-cost dispatch

mod direct;
mod error;
mod krylov;
mod standard;
mod traits;

pub use direct::{DirectLu, MAX_DENSE_UNKNOWNS};
pub use error::SolverError;
pub use krylov::{BiCgStab, ConjugateGradient, MAX_ITERATIONS};
pub use standard::{StandardSolver, create_solver};
pub use traits::{BoxedSolver, LinearSolver, TOL};

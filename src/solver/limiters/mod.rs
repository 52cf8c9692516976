//! Limiter engine for TVD advection.
//!
//! - [`FluxLimiter`]: trait for limiter functions `psi(r)`
//! - [`Upwind`], [`Minmod`], [`Superbee`], [`Koren`]: concrete limiters
//! - [`Limiter`]: zero-cost dispatch enum, parsed from limiter names
//! - [`differences`], [`upwind_ratio`]: clamped gradients and their ratios

mod ratios;
mod standard;
mod traits;

pub use ratios::{TINY, clamp_tiny, differences, periodic_stencil_depth, upwind_ratio};
pub use standard::{Koren, Limiter, Minmod, Superbee, Upwind, create_limiter};
pub use traits::{BoxedLimiter, FluxLimiter};

//! Trait definition for flux limiters.

/// A TVD flux limiter `psi(r)`.
///
/// The limiter scales the antidiffusive (second-order) part of a face flux
/// from the ratio `r` of consecutive gradients around the face. `psi = 0`
/// falls back to first-order upwind, `psi = 1` recovers Lax-Wendroff.
///
/// # Implementation Notes
///
/// - Limiters are pure functions of `r`; they carry no state
/// - `psi` must stay finite and within `[0, 2]` for arbitrarily large `|r|`
///
/// # Extending
///
/// To add a new limiter:
/// 1. Create a zero-sized struct
/// 2. Implement `FluxLimiter` for it
/// 3. Optionally add it to the [`Limiter`](super::Limiter) enum for name-based selection
pub trait FluxLimiter: Send + Sync {
    /// Limiter value for gradient ratio `r`.
    fn psi(&self, r: f64) -> f64;

    /// Human-readable name for configuration and logging.
    fn name(&self) -> &'static str;

    /// Whether the limiter ever adds an antidiffusive correction.
    fn is_second_order(&self) -> bool {
        true
    }
}

/// Type alias for boxed limiter (runtime polymorphism).
pub type BoxedLimiter = Box<dyn FluxLimiter>;

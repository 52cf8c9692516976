//! Pointwise face fluxes for scalar advection.
//!
//! For the advection equation dphi/dt + d(u phi)/dx = 0 the upwind (donor
//! cell) flux through a face is:
//! F = u * phi_lo if u >= 0 (flow towards increasing index, use the low side)
//! F = u * phi_hi if u < 0  (flow towards decreasing index, use the high side)
//!
//! The second-order TVD flux adds a limited antidiffusive part,
//! 0.5 * |u| * (1 - |u| dt / delta) * psi(r) * d_up, where `d_up` is the
//! upwind-side difference of phi.

/// Donor-cell flux through a face with `lo` and `hi` neighbour values.
#[inline]
pub fn upwind_flux(lo: f64, hi: f64, u: f64) -> f64 {
    if u >= 0.0 { u * lo } else { u * hi }
}

/// Local Courant number `|u| dt / delta`.
#[inline]
pub fn courant(u: f64, dt: f64, delta: f64) -> f64 {
    u.abs() * dt / delta
}

/// Limited antidiffusive correction added to the donor-cell flux.
///
/// Vanishes for Courant number one, where the donor-cell scheme is exact.
#[inline]
pub fn antidiffusive_flux(u: f64, dt: f64, delta: f64, psi: f64, d_up: f64) -> f64 {
    0.5 * u.abs() * (1.0 - courant(u, dt, delta)) * psi * d_up
}

/// Upwind-side difference for a face, selected by the flow direction.
#[inline]
pub fn upwind_difference(d_lo: f64, d_mid: f64, u: f64) -> f64 {
    if u >= 0.0 { d_lo } else { d_mid }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-14;

    #[test]
    fn test_upwind_positive_velocity() {
        // Flow to the right uses the low-side value
        assert!((upwind_flux(2.0, 3.0, 1.5) - 3.0).abs() < TOL);
    }

    #[test]
    fn test_upwind_negative_velocity() {
        // Flow to the left uses the high-side value
        assert!((upwind_flux(2.0, 3.0, -1.0) - (-3.0)).abs() < TOL);
    }

    #[test]
    fn test_upwind_zero_velocity() {
        assert_eq!(upwind_flux(2.0, 3.0, 0.0), 0.0);
    }

    #[test]
    fn test_continuous_state() {
        // Both sides equal: flux is the physical flux in either direction
        for u in [-2.0, -0.5, 0.5, 2.0] {
            assert!((upwind_flux(4.0, 4.0, u) - 4.0 * u).abs() < TOL);
        }
    }

    #[test]
    fn test_antidiffusion_vanishes_at_unit_courant() {
        assert!(antidiffusive_flux(2.0, 0.5, 1.0, 1.0, 3.0).abs() < TOL);
        assert!(antidiffusive_flux(-2.0, 0.5, 1.0, 2.0, 3.0).abs() < TOL);
    }

    #[test]
    fn test_antidiffusion_lax_wendroff() {
        // psi = 1 recovers the Lax-Wendroff correction
        let u = 1.0;
        let dt = 0.5;
        let delta = 1.0;
        let f = antidiffusive_flux(u, dt, delta, 1.0, 1.0);
        assert!((f - 0.25).abs() < TOL);
        assert!((courant(-u, dt, delta) - 0.5).abs() < TOL);
    }

    #[test]
    fn test_upwind_difference_selection() {
        assert_eq!(upwind_difference(1.0, 2.0, 0.0), 1.0);
        assert_eq!(upwind_difference(1.0, 2.0, -0.1), 2.0);
    }
}

//! The standard TVD limiters and name-based selection.

use std::fmt;
use std::str::FromStr;

use super::traits::{BoxedLimiter, FluxLimiter};
use crate::flux::AdvectionError;

/// First-order upwind: no correction at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct Upwind;

impl FluxLimiter for Upwind {
    #[inline]
    fn psi(&self, _r: f64) -> f64 {
        0.0
    }

    fn name(&self) -> &'static str {
        "upwind"
    }

    fn is_second_order(&self) -> bool {
        false
    }
}

/// Minmod: `max(0, min(r, 1))`. The most dissipative TVD limiter.
#[derive(Clone, Copy, Debug, Default)]
pub struct Minmod;

impl FluxLimiter for Minmod {
    #[inline]
    fn psi(&self, r: f64) -> f64 {
        0.0_f64.max(r.min(1.0))
    }

    fn name(&self) -> &'static str {
        "minmod"
    }
}

/// Superbee (Roe): `max(0, min(2r, 1), min(r, 2))`. Compressive, keeps fronts sharp.
#[derive(Clone, Copy, Debug, Default)]
pub struct Superbee;

impl FluxLimiter for Superbee {
    #[inline]
    fn psi(&self, r: f64) -> f64 {
        0.0_f64.max((2.0 * r).min(1.0)).max(r.min(2.0))
    }

    fn name(&self) -> &'static str {
        "superbee"
    }
}

/// Koren: `max(0, min(2r, (2 + r) / 3, 2))`. Third-order accurate for smooth data.
#[derive(Clone, Copy, Debug, Default)]
pub struct Koren;

impl FluxLimiter for Koren {
    #[inline]
    fn psi(&self, r: f64) -> f64 {
        0.0_f64.max((2.0 * r).min((2.0 + r) / 3.0).min(2.0))
    }

    fn name(&self) -> &'static str {
        "koren"
    }
}

/// Enum wrapper for the built-in limiters.
///
/// Zero-cost dispatch when the limiter is picked from configuration;
/// parse one from its name with [`str::parse`].
///
/// ```
/// use tvd_transport::solver::{FluxLimiter, Limiter};
///
/// let lim: Limiter = "superbee".parse().unwrap();
/// assert_eq!(lim.psi(1.5), 1.5);
/// assert!("vanleer".parse::<Limiter>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Limiter {
    Upwind,
    #[default]
    Minmod,
    Superbee,
    Koren,
}

impl Limiter {
    /// All built-in limiters.
    pub const ALL: [Limiter; 4] = [
        Limiter::Upwind,
        Limiter::Minmod,
        Limiter::Superbee,
        Limiter::Koren,
    ];
}

impl FluxLimiter for Limiter {
    #[inline]
    fn psi(&self, r: f64) -> f64 {
        match self {
            Limiter::Upwind => Upwind.psi(r),
            Limiter::Minmod => Minmod.psi(r),
            Limiter::Superbee => Superbee.psi(r),
            Limiter::Koren => Koren.psi(r),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Limiter::Upwind => "upwind",
            Limiter::Minmod => "minmod",
            Limiter::Superbee => "superbee",
            Limiter::Koren => "koren",
        }
    }

    fn is_second_order(&self) -> bool {
        !matches!(self, Limiter::Upwind)
    }
}

impl fmt::Display for Limiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Limiter {
    type Err = AdvectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Limiter::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AdvectionError::UnknownLimiter(s.to_string()))
    }
}

/// Create a boxed limiter from the enum.
pub fn create_limiter(limiter: Limiter) -> BoxedLimiter {
    match limiter {
        Limiter::Upwind => Box::new(Upwind),
        Limiter::Minmod => Box::new(Minmod),
        Limiter::Superbee => Box::new(Superbee),
        Limiter::Koren => Box::new(Koren),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-14;

    fn sweep() -> Vec<f64> {
        let mut r: Vec<f64> = (-400..=400).map(|i| i as f64 * 0.025).collect();
        r.extend([-1e20, -1e6, -TOL, 0.0, TOL, 1e6, 1e20]);
        r
    }

    #[test]
    fn test_limiters_bounded() {
        for lim in Limiter::ALL {
            for &r in &sweep() {
                let psi = lim.psi(r);
                assert!(psi.is_finite(), "{lim} not finite at r = {r}");
                assert!((0.0..=2.0).contains(&psi), "{lim} psi({r}) = {psi}");
            }
        }
    }

    #[test]
    fn test_upwind_identically_zero() {
        assert!(sweep().iter().all(|&r| Upwind.psi(r) == 0.0));
        assert!(!Limiter::Upwind.is_second_order());
    }

    #[test]
    fn test_negative_ratio_gives_zero() {
        for lim in Limiter::ALL {
            assert_eq!(lim.psi(-0.5), 0.0);
            assert_eq!(lim.psi(-1e20), 0.0);
        }
    }

    #[test]
    fn test_known_values() {
        assert!((Minmod.psi(0.5) - 0.5).abs() < TOL);
        assert!((Minmod.psi(3.0) - 1.0).abs() < TOL);
        assert!((Superbee.psi(0.25) - 0.5).abs() < TOL);
        assert!((Superbee.psi(0.75) - 1.0).abs() < TOL);
        assert!((Superbee.psi(1.5) - 1.5).abs() < TOL);
        assert!((Superbee.psi(10.0) - 2.0).abs() < TOL);
        assert!((Koren.psi(0.25) - 0.5).abs() < TOL);
        assert!((Koren.psi(1.0) - 1.0).abs() < TOL);
        assert!((Koren.psi(10.0) - 2.0).abs() < TOL);
    }

    #[test]
    fn test_second_order_consistency() {
        // Every TVD limiter passes through psi(1) = 1.
        for lim in [Limiter::Minmod, Limiter::Superbee, Limiter::Koren] {
            assert!((lim.psi(1.0) - 1.0).abs() < TOL);
        }
    }

    #[test]
    fn test_parse_and_names() {
        for lim in Limiter::ALL {
            assert_eq!(lim.name().parse::<Limiter>().unwrap(), lim);
            assert_eq!(create_limiter(lim).name(), lim.name());
        }
        assert_eq!("  MinMod ".parse::<Limiter>().unwrap(), Limiter::Minmod);
        assert!(matches!(
            "van_albada".parse::<Limiter>(),
            Err(AdvectionError::UnknownLimiter(_))
        ));
    }

    #[test]
    fn test_enum_matches_concrete() {
        for &r in &sweep() {
            assert_eq!(Limiter::Koren.psi(r), Koren.psi(r));
            assert_eq!(Limiter::Superbee.psi(r), Superbee.psi(r));
        }
    }
}

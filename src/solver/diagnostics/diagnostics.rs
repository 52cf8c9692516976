//! Runtime diagnostics for transport simulations.
//!
//! Provides functions and types for computing and tracking:
//! - Conserved content (integral of rho * phi over the domain)
//! - Courant number and the time step reaching a target Courant number
//! - Solution bounds
//!
//! # Example
//!
//! ```
//! use ndarray::Array3;
//! use tvd_transport::mesh::Grid;
//! use tvd_transport::solver::{BoundaryKind, DiagnosticsTracker, ScalarField, TransportDiagnostics, Velocity};
//! use tvd_transport::types::Position;
//!
//! let cells = (10, 1, 1);
//! let grid = Grid::uniform(cells, (1.0, 1.0, 1.0));
//! let uvw = Velocity::uniform(cells, (2.0, 0.0, 0.0));
//! let rho = Array3::ones(cells);
//! let mut phi = ScalarField::new("phi", Position::Center, cells, BoundaryKind::Neumann);
//! phi.fill(1.0);
//!
//! let diag = TransportDiagnostics::compute(&phi, &uvw, &rho, &grid, 0.01);
//! assert!((diag.content - 1.0).abs() < 1e-12);
//! assert!((diag.courant - 0.2).abs() < 1e-12);
//!
//! let tracker = DiagnosticsTracker::new(diag);
//! assert!(tracker.is_stable());
//! ```

use ndarray::{Array3, Zip};

use crate::mesh::Grid;
use crate::operators::{avg_pos, cat, span};
use crate::solver::state::{ScalarField, Velocity};
use crate::types::{Axis3, AxisRole};

/// Diagnostic quantities of one transported field.
#[derive(Clone, Debug, PartialEq)]
pub struct TransportDiagnostics {
    /// Integral of rho * phi over the control volumes
    pub content: f64,
    /// Minimum value of the field
    pub min: f64,
    /// Maximum value of the field
    pub max: f64,
    /// Maximum cell Courant number
    pub courant: f64,
}

impl TransportDiagnostics {
    /// Compute all diagnostics from the current state.
    pub fn compute(
        phi: &ScalarField,
        uvw: &Velocity,
        rho: &Array3<f64>,
        grid: &Grid,
        dt: f64,
    ) -> Self {
        let (min, max) = field_bounds(phi);
        Self {
            content: total_content(phi, rho, grid),
            min,
            max,
            courant: max_courant(uvw, grid, dt),
        }
    }

    /// Format diagnostics as a single-line summary.
    pub fn summary_line(&self) -> String {
        format!(
            "Q={:.6e} phi=[{:.4},{:.4}] Co={:.3}",
            self.content, self.min, self.max, self.courant
        )
    }
}

/// Track diagnostics over time for monitoring conservation and boundedness.
#[derive(Clone, Debug)]
pub struct DiagnosticsTracker {
    /// Initial diagnostics (for conservation error computation)
    initial: TransportDiagnostics,
    /// Most recent diagnostics
    current: TransportDiagnostics,
    /// Time of most recent update
    current_time: f64,
    /// Number of updates
    n_updates: usize,
    /// Maximum Courant number seen during simulation
    max_courant_seen: f64,
    /// Extreme field values seen during simulation
    min_seen: f64,
    max_seen: f64,
}

impl DiagnosticsTracker {
    /// Create a new tracker with initial diagnostics.
    pub fn new(initial: TransportDiagnostics) -> Self {
        Self {
            current: initial.clone(),
            current_time: 0.0,
            n_updates: 0,
            max_courant_seen: initial.courant,
            min_seen: initial.min,
            max_seen: initial.max,
            initial,
        }
    }

    /// Update tracker with new diagnostics.
    pub fn update(&mut self, time: f64, diag: TransportDiagnostics) {
        self.current_time = time;
        self.n_updates += 1;
        self.max_courant_seen = self.max_courant_seen.max(diag.courant);
        self.min_seen = self.min_seen.min(diag.min);
        self.max_seen = self.max_seen.max(diag.max);
        self.current = diag;
    }

    /// Relative change of the content since the start.
    pub fn content_error(&self) -> f64 {
        let q0 = self.initial.content;
        let dq = (self.current.content - q0).abs();
        if q0.abs() > 1e-14 { dq / q0.abs() } else { dq }
    }

    /// Whether the field stayed within its initial bounds (up to `tol`).
    pub fn is_bounded(&self, tol: f64) -> bool {
        self.min_seen >= self.initial.min - tol && self.max_seen <= self.initial.max + tol
    }

    pub fn current(&self) -> &TransportDiagnostics {
        &self.current
    }

    pub fn initial(&self) -> &TransportDiagnostics {
        &self.initial
    }

    pub fn n_updates(&self) -> usize {
        self.n_updates
    }

    pub fn max_courant_seen(&self) -> f64 {
        self.max_courant_seen
    }

    /// Check if the simulation appears stable (no blow-up indicators).
    pub fn is_stable(&self) -> bool {
        let diag = &self.current;
        if !diag.content.is_finite() || !diag.min.is_finite() || !diag.max.is_finite() {
            return false;
        }
        // Explicit advection with limited fluxes needs Co <= 1
        diag.courant <= 1.0
    }

    /// Multi-line summary of the tracked run.
    pub fn summary(&self) -> String {
        format!(
            "t={:.4} ({} updates)\n  content error: {:.2e}\n  bounds seen:   [{:.4}, {:.4}]\n  max Courant:   {:.4}\n  current:       {}",
            self.current_time,
            self.n_updates,
            self.content_error(),
            self.min_seen,
            self.max_seen,
            self.max_courant_seen,
            self.current.summary_line()
        )
    }
}

/// Integral of `rho * phi` over the control volumes of `phi`.
///
/// Along a periodic axis whose last entry repeats the first (every axis
/// except the own axis of a staggered field) the last entry is left out, so
/// each control volume counts once.
pub fn total_content(phi: &ScalarField, rho: &Array3<f64>, grid: &Grid) -> f64 {
    let rho = avg_pos(phi.pos, rho);
    let vol = avg_pos(phi.pos, &grid.volume());

    let mut val = phi.val.view();
    let mut rho = rho.view();
    let mut vol = vol.view();
    for axis in Axis3::ALL {
        let ax = axis.nd();
        if phi.is_periodic(axis) && phi.pos.role(axis) != AxisRole::Own && val.len_of(ax) > 1 {
            val.slice_axis_inplace(ax, span(0, Some(-1)));
            rho.slice_axis_inplace(ax, span(0, Some(-1)));
            vol.slice_axis_inplace(ax, span(0, Some(-1)));
        }
    }

    Zip::from(&val)
        .and(&rho)
        .and(&vol)
        .fold(0.0, |acc, &p, &r, &v| acc + p * r * v)
}

/// Minimum and maximum of the field values.
pub fn field_bounds(phi: &ScalarField) -> (f64, f64) {
    phi.val
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

/// Largest `|u| / delta` over all cells and axes, with `u` the larger of
/// the two face velocities bounding a cell.
fn max_rate(uvw: &Velocity, grid: &Grid) -> f64 {
    let mut rate: f64 = 0.0;
    for axis in Axis3::ALL {
        let c = uvw.component(axis);
        let Ok(faces) = cat(
            axis,
            &[
                c.bnd[axis.low_face()].val.view(),
                c.val.view(),
                c.bnd[axis.high_face()].val.view(),
            ],
        ) else {
            continue;
        };
        let ax = axis.nd();
        let lo = faces.slice_axis(ax, span(0, Some(-1)));
        let hi = faces.slice_axis(ax, span(1, None));
        let width = grid.extent(axis);
        if lo.dim() != width.dim() {
            continue;
        }
        rate = Zip::from(&lo)
            .and(&hi)
            .and(width)
            .fold(rate, |m, &l, &h, &d| m.max(l.abs().max(h.abs()) / d));
    }
    rate
}

/// Maximum cell Courant number `|u| dt / delta`.
pub fn max_courant(uvw: &Velocity, grid: &Grid, dt: f64) -> f64 {
    max_rate(uvw, grid) * dt
}

/// Time step giving a maximum Courant number of `target`.
///
/// Infinite for a fluid at rest.
pub fn stable_dt(uvw: &Velocity, grid: &Grid, target: f64) -> f64 {
    let rate = max_rate(uvw, grid);
    if rate > 0.0 { target / rate } else { f64::INFINITY }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::state::BoundaryKind;
    use crate::types::{Face, Position};

    const TOL: f64 = 1e-12;

    #[test]
    fn test_content_of_staggered_field() {
        let cells = (4, 2, 1);
        let grid = Grid::uniform(cells, (4.0, 2.0, 1.0));
        let mut u = ScalarField::new("u", Position::X, cells, BoundaryKind::Neumann);
        u.fill(2.0);
        let rho = Array3::from_elem(cells, 3.0);
        // 3 x 2 faces, each with volume 1
        assert!((total_content(&u, &rho, &grid) - 36.0).abs() < TOL);
    }

    #[test]
    fn test_periodic_overlap_counted_once() {
        let cells = (5, 3, 1);
        let grid = Grid::uniform(cells, (5.0, 3.0, 1.0));
        let rho = Array3::ones(cells);

        // Period of 4 cells along x: entries 0 and 4 are the same cell.
        let mut c = ScalarField::new("c", Position::Center, cells, BoundaryKind::Neumann)
            .with_periodic(Axis3::X);
        c.fill(1.0);
        assert!((total_content(&c, &rho, &grid) - 12.0).abs() < TOL);

        // Own axis of a staggered field has no overlap.
        let mut u = ScalarField::new("u", Position::X, cells, BoundaryKind::Neumann)
            .with_periodic(Axis3::X);
        u.fill(1.0);
        assert!((total_content(&u, &rho, &grid) - 12.0).abs() < TOL);

        // Transverse periodic axis of a staggered field drops its last row.
        let mut v = ScalarField::new("v", Position::X, cells, BoundaryKind::Neumann)
            .with_periodic(Axis3::Y);
        v.fill(1.0);
        assert!((total_content(&v, &rho, &grid) - 8.0).abs() < TOL);
    }

    #[test]
    fn test_courant_uses_boundary_faces() {
        let cells = (4, 1, 1);
        let grid = Grid::uniform(cells, (4.0, 1.0, 1.0));
        let mut uvw = Velocity::uniform(cells, (1.0, 0.0, 0.0));
        uvw.u.set_boundary(Face::East, BoundaryKind::Dirichlet, -3.0);
        assert!((max_courant(&uvw, &grid, 0.1) - 0.3).abs() < TOL);
        assert!((stable_dt(&uvw, &grid, 0.9) - 0.3).abs() < TOL);
    }

    #[test]
    fn test_rest_has_infinite_step() {
        let cells = (3, 3, 3);
        let grid = Grid::uniform(cells, (1.0, 1.0, 1.0));
        let uvw = Velocity::new(cells, BoundaryKind::Dirichlet);
        assert_eq!(stable_dt(&uvw, &grid, 1.0), f64::INFINITY);
    }

    #[test]
    fn test_tracker_content_and_bounds() {
        let base = TransportDiagnostics {
            content: 10.0,
            min: 0.0,
            max: 1.0,
            courant: 0.5,
        };
        let mut tracker = DiagnosticsTracker::new(base.clone());
        tracker.update(
            1.0,
            TransportDiagnostics {
                content: 10.1,
                max: 1.05,
                ..base
            },
        );
        assert!((tracker.content_error() - 0.01).abs() < 1e-12);
        assert!(!tracker.is_bounded(1e-3));
        assert!(tracker.is_bounded(0.1));
        assert!(tracker.is_stable());
        assert_eq!(tracker.n_updates(), 1);
        assert!(tracker.summary().contains("1 updates"));
    }
}

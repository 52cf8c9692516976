//! Runtime diagnostics and progress tracking.
//!
//! - [`TransportDiagnostics`]: Content, bounds and Courant number of a field
//! - [`DiagnosticsTracker`]: Time series tracking

mod diagnostics;

pub use diagnostics::{
    DiagnosticsTracker, TransportDiagnostics, field_bounds, max_courant, stable_dt, total_content,
};

//! Time stepping of the generic transport equation.

mod transport;

pub use transport::{TransportConfig, TransportError, advance_transport, run_transport};

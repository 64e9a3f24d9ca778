//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the scan logic and the
//! outside world: the network and wherever results are reported.
//!
//! Implementations live in the `adapters` and `output` modules.

mod prober;
mod reporter;

pub use prober::Prober;
pub use reporter::ScanReporter;

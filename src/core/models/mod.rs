//! Domain models for sysup
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Target`] - One host/port pair to probe
//! - [`TargetList`] - The ordered checklist built from the inputs
//! - [`CheckOutcome`] - What probing one target found
//! - [`ScanSummary`] - Outcomes of a whole scan and the exit status

mod outcome;
mod summary;
mod target;

pub use outcome::{AddressError, CheckOutcome, CheckStatus};
pub use summary::{ScanRecord, ScanSummary};
pub use target::{BuildError, Port, Side, Target, TargetList};

//! Reachability checker port
//!
//! Defines the interface for probing one target.

use crate::core::models::{CheckOutcome, Target};

/// Reachability checker abstraction
///
/// Implementations make at most one attempt per call and must return
/// within a bounded time. Failures are reported through the returned
/// [`CheckOutcome`], never by panicking.
pub trait Prober {
    /// Probe a single target
    fn probe(&self, target: &Target) -> CheckOutcome;
}

impl<P: Prober + ?Sized> Prober for &P {
    fn probe(&self, target: &Target) -> CheckOutcome {
        (**self).probe(target)
    }
}

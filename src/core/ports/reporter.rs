//! Scan progress port
//!
//! Receives scan events in order as the scan runs.

use chrono::{DateTime, Local};

use crate::core::models::{CheckOutcome, ScanSummary, Target};

/// Sink for scan progress
///
/// Called from the scan loop on the scanning thread, in this order:
/// `scan_started`, then `checking`/`checked` per target, then `scan_finished`.
pub trait ScanReporter {
    /// The scan is about to start
    fn scan_started(&mut self, at: DateTime<Local>);

    /// `target` is about to be probed
    fn checking(&mut self, target: &Target);

    /// `target` was probed
    fn checked(&mut self, target: &Target, outcome: &CheckOutcome);

    /// Every target has been probed
    fn scan_finished(&mut self, _summary: &ScanSummary) {}
}

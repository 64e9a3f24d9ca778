//! Scan driver
//!
//! Probes each target once, strictly in list order, and aggregates the
//! outcomes. A failing target never stops the scan.

use chrono::Local;
use log::debug;

use crate::core::models::{ScanSummary, TargetList};
use crate::core::ports::{Prober, ScanReporter};

/// Probe every target in `targets` and report progress to `reporter`
///
/// Returns the outcomes in target order. The scan itself cannot fail; every
/// per-target problem is recorded in the summary.
pub fn run_scan<P, R>(targets: &TargetList, prober: &P, reporter: &mut R) -> ScanSummary
where
    P: Prober + ?Sized,
    R: ScanReporter + ?Sized,
{
    let mut summary = ScanSummary::new();
    reporter.scan_started(Local::now());

    for target in targets {
        reporter.checking(target);
        let outcome = prober.probe(target);
        debug!("{target}: {:?}", outcome.status());
        reporter.checked(target, &outcome);
        summary.record(target.clone(), outcome);
    }

    reporter.scan_finished(&summary);
    summary
}

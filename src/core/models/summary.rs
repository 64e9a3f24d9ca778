//! Aggregate result of a scan

use super::{CheckOutcome, Target};

/// Highest exit status a process can report without wrapping
const MAX_EXIT_CODE: u8 = u8::MAX;

/// One probed target and its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRecord {
    /// The probed target
    pub target: Target,
    /// What the probe found
    pub outcome: CheckOutcome,
}

/// Outcomes of a scan, in target order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    records: Vec<ScanRecord>,
}

impl ScanSummary {
    /// Create an empty summary
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append the outcome for the next target
    pub fn record(&mut self, target: Target, outcome: CheckOutcome) {
        self.records.push(ScanRecord { target, outcome });
    }

    /// All records in scan order
    #[must_use]
    pub fn records(&self) -> &[ScanRecord] {
        &self.records
    }

    /// Number of non-success outcomes
    #[must_use]
    pub fn failures(&self) -> usize {
        self.records.iter().filter(|r| !r.outcome.is_success()).count()
    }

    /// True when every target was reachable
    #[must_use]
    pub fn all_reachable(&self) -> bool {
        self.failures() == 0
    }

    /// Process exit status: the failure count, clamped so it never wraps to 0
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        u8::try_from(self.failures()).unwrap_or(MAX_EXIT_CODE)
    }
}

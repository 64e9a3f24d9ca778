//! Output formatting for human and JSON modes
//!
//! Both renderers implement [`ScanReporter`]. The human renderer streams one
//! line per event as the scan runs; the JSON renderer collects the outcomes
//! and writes a single document when the scan finishes.

use std::io::Write;

use chrono::{DateTime, Local};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::models::{CheckOutcome, CheckStatus, ScanSummary, Target};
use crate::core::ports::ScanReporter;

/// Separator printed around the scan banner
pub const RULE: &str = "-------------------------------------------------";

/// Layout of the scan start timestamp (same as C `asctime`)
pub const BANNER_TIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

impl std::str::FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output mode: {s}. Use: human, json")),
        }
    }
}

/// Build the reporter for `mode` writing to `out`
pub fn reporter<'a, W: Write + 'a>(mode: OutputMode, out: W) -> Box<dyn ScanReporter + 'a> {
    match mode {
        OutputMode::Human => Box::new(HumanReporter::new(out)),
        OutputMode::Json => Box::new(JsonReporter::new(out)),
    }
}

/// Streams the classic line-per-event report
#[derive(Debug)]
pub struct HumanReporter<W: Write> {
    out: W,
}

impl<W: Write> HumanReporter<W> {
    /// Create a reporter writing to `out`
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{text}").and_then(|()| self.out.flush()) {
            warn!("failed to write report: {err}");
        }
    }
}

impl<W: Write> ScanReporter for HumanReporter<W> {
    fn scan_started(&mut self, at: DateTime<Local>) {
        self.line(RULE);
        self.line(&format!("Starting system scan at {}", at.format(BANNER_TIME_FORMAT)));
        self.line(RULE);
    }

    fn checking(&mut self, target: &Target) {
        self.line(&format!("Checking port {} on {}", target.port, target.host));
    }

    fn checked(&mut self, _target: &Target, outcome: &CheckOutcome) {
        self.line(&outcome.to_string());
    }
}

/// One entry of the JSON report
#[derive(Debug, Serialize)]
pub struct TargetReport {
    /// Host as given
    pub host: String,
    /// Port as given
    pub port: String,
    /// Outcome class
    pub status: CheckStatus,
    /// Failure diagnostics, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// The whole JSON report
#[derive(Debug, Serialize)]
pub struct ScanReport {
    /// Scan start time (RFC 3339)
    pub started_at: String,
    /// Number of unreachable or invalid targets
    pub failures: usize,
    /// Per-target outcomes in scan order
    pub results: Vec<TargetReport>,
}

impl ScanReport {
    /// Build a report from a finished scan
    #[must_use]
    pub fn new(started_at: DateTime<Local>, summary: &ScanSummary) -> Self {
        Self {
            started_at: started_at.to_rfc3339(),
            failures: summary.failures(),
            results: summary
                .records()
                .iter()
                .map(|r| TargetReport {
                    host: r.target.host.clone(),
                    port: r.target.port.to_string(),
                    status: r.outcome.status(),
                    detail: r.outcome.detail(),
                })
                .collect(),
        }
    }
}

/// Writes a single JSON document once the scan is done
#[derive(Debug)]
pub struct JsonReporter<W: Write> {
    out: W,
    started_at: Option<DateTime<Local>>,
}

impl<W: Write> JsonReporter<W> {
    /// Create a reporter writing to `out`
    pub const fn new(out: W) -> Self {
        Self {
            out,
            started_at: None,
        }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ScanReporter for JsonReporter<W> {
    fn scan_started(&mut self, at: DateTime<Local>) {
        self.started_at = Some(at);
    }

    fn checking(&mut self, _target: &Target) {}

    fn checked(&mut self, _target: &Target, _outcome: &CheckOutcome) {}

    fn scan_finished(&mut self, summary: &ScanSummary) {
        let report = ScanReport::new(self.started_at.unwrap_or_else(Local::now), summary);
        let written = serde_json::to_string_pretty(&report)
            .map_err(std::io::Error::from)
            .and_then(|json| writeln!(self.out, "{json}"));
        if let Err(err) = written {
            warn!("failed to write report: {err}");
        }
    }
}

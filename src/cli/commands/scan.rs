//! Probe every host/port pair and print the report

use std::io;

use log::info;

use sysup::adapters::tcp::TcpProber;
use sysup::config::Config;
use sysup::core::models::ScanSummary;
use sysup::core::services::{build_target_list, run_scan};
use sysup::output;

/// Build the target list and scan it, reporting to stdout
///
/// Fails only on configuration problems, before any probe runs.
pub fn scan(hosts: &str, ports: &str, config: &Config) -> anyhow::Result<ScanSummary> {
    let targets = build_target_list(hosts, ports, config.max_targets)?;
    let prober = TcpProber::new(config.connect_timeout());

    let stdout = io::stdout();
    let mut reporter = output::reporter(config.output, stdout.lock());
    let summary = run_scan(&targets, &prober, reporter.as_mut());

    info!("{} of {} target(s) unreachable", summary.failures(), targets.len());
    Ok(summary)
}

//! Core domain logic for sysup
//!
//! Pairs hosts with ports and drives the scan. Network access is abstracted
//! through port traits so the logic can be tested without sockets.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Target, TargetList, CheckOutcome, ScanSummary)
//! - `services/` - Target list building and the scan loop
//! - `ports/` - Trait definitions for the prober and the progress reporter

pub mod models;
pub mod ports;
pub mod services;

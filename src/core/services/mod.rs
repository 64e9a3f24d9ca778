//! Scan services
//!
//! Orchestration logic that operates on domain models. The builder is pure;
//! the scanner reaches the network only through the [`Prober`] port.
//!
//! - [`builder`] - Turn the raw host and port lists into a [`TargetList`]
//! - [`scanner`] - Probe every target in order and aggregate the outcomes
//!
//! [`Prober`]: crate::core::ports::Prober
//! [`TargetList`]: crate::core::models::TargetList

pub mod builder;
pub mod scanner;

pub use builder::{DEFAULT_MAX_TARGETS, build_target_list, split_tokens};
pub use scanner::run_scan;

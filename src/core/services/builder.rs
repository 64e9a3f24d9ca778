//! Target list builder
//!
//! Splits the comma-delimited host and port inputs into tokens and pairs
//! them positionally.
//!
//! # Examples
//!
//! ```
//! use sysup::core::models::{BuildError, Port};
//! use sysup::core::services::build_target_list;
//!
//! let list = build_target_list("10.0.0.1, 10.0.0.2", "22,80", 64).unwrap();
//! assert_eq!(list.get(1).unwrap().port, Port::Number(80));
//!
//! let err = build_target_list("10.0.0.1", "22,80", 64).unwrap_err();
//! assert_eq!(err, BuildError::MismatchedCounts { hosts: 1, ports: 2 });
//! ```

use log::warn;

use crate::core::models::{BuildError, Port, Side, TargetList};

/// Token delimiter for both inputs
pub const DELIMITER: char = ',';

/// Default cap on tokens per side
pub const DEFAULT_MAX_TARGETS: usize = 64;

/// Build a target list from the raw `-i` and `-p` values
///
/// Each side keeps at most `max_tokens` tokens; the rest are dropped with a
/// warning and never stored. Malformed port tokens stay in place as
/// [`Port::Malformed`].
pub fn build_target_list(
    hosts_csv: &str,
    ports_csv: &str,
    max_tokens: usize,
) -> Result<TargetList, BuildError> {
    let hosts: Vec<String> =
        split_bounded(hosts_csv, max_tokens, Side::Hosts).map(str::to_string).collect();
    let ports: Vec<Port> = split_bounded(ports_csv, max_tokens, Side::Ports).map(Port::parse).collect();

    TargetList::from_tokens(hosts, ports)
}

/// Split `input` on the delimiter into trimmed, non-empty tokens
///
/// Order and duplicates are preserved. Tokens are produced lazily.
pub fn split_tokens(input: &str) -> impl Iterator<Item = &str> {
    input.split(DELIMITER).map(str::trim).filter(|t| !t.is_empty())
}

fn split_bounded(input: &str, max_tokens: usize, side: Side) -> impl Iterator<Item = &str> {
    let dropped = split_tokens(input).skip(max_tokens).count();
    if dropped > 0 {
        warn!("{} {side} given, only the first {max_tokens} are used", max_tokens + dropped);
    }
    split_tokens(input).take(max_tokens)
}

//! Probe targets
//!
//! A [`Target`] is one host/port pair. A [`TargetList`] is the ordered,
//! length-matched checklist built from the `-i` and `-p` inputs.
//!
//! # Examples
//!
//! ```
//! use sysup::core::models::{Port, Target, TargetList};
//!
//! let list = TargetList::from_tokens(
//!     vec!["10.0.0.1".to_string(), "10.0.0.2".to_string()],
//!     vec![Port::parse("22"), Port::parse("80")],
//! )
//! .unwrap();
//!
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.get(1), Some(&Target::new("10.0.0.2", Port::Number(80))));
//! ```

use std::fmt;

use thiserror::Error;

/// Which side of the input an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The `-i` host list
    Hosts,
    /// The `-p` port list
    Ports,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hosts => write!(f, "hosts"),
            Self::Ports => write!(f, "ports"),
        }
    }
}

/// Errors that prevent a target list from being built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    /// One side had no usable tokens
    #[error("no {side} given")]
    EmptyInput {
        /// The empty side
        side: Side,
    },

    /// Host and port counts differ
    #[error("{hosts} host(s) but {ports} port(s); each host needs exactly one port")]
    MismatchedCounts {
        /// Number of host tokens
        hosts: usize,
        /// Number of port tokens
        ports: usize,
    },
}

/// A port token
///
/// Malformed tokens keep their position in the list so that pairing stays
/// aligned. The checker rejects them without opening a socket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Port {
    /// A valid 16-bit port number
    Number(u16),
    /// A token that is not a 16-bit unsigned integer
    Malformed(String),
}

impl Port {
    /// Parse a single trimmed port token
    #[must_use]
    pub fn parse(token: &str) -> Self {
        token
            .parse::<u16>()
            .map_or_else(|_| Self::Malformed(token.to_string()), Self::Number)
    }

    /// The port number, if the token was valid
    #[must_use]
    pub const fn number(&self) -> Option<u16> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Malformed(_) => None,
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Malformed(raw) => write!(f, "{raw}"),
        }
    }
}

/// One host/port pair to be probed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    /// Host token as given (expected to be an IPv4 literal)
    pub host: String,
    /// Port token
    pub port: Port,
}

impl Target {
    /// Create a target
    pub fn new(host: impl Into<String>, port: Port) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Ordered, non-empty list of targets
///
/// Immutable once built. The i-th host is always paired with the i-th port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetList {
    targets: Vec<Target>,
}

impl TargetList {
    /// Pair host and port tokens positionally
    ///
    /// Fails when either side is empty or the counts differ.
    pub fn from_tokens(hosts: Vec<String>, ports: Vec<Port>) -> Result<Self, BuildError> {
        if hosts.is_empty() {
            return Err(BuildError::EmptyInput { side: Side::Hosts });
        }
        if ports.is_empty() {
            return Err(BuildError::EmptyInput { side: Side::Ports });
        }
        if hosts.len() != ports.len() {
            return Err(BuildError::MismatchedCounts {
                hosts: hosts.len(),
                ports: ports.len(),
            });
        }

        let targets = hosts.into_iter().zip(ports).map(|(host, port)| Target { host, port }).collect();
        Ok(Self { targets })
    }

    /// Number of targets (always at least one)
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Target at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Target> {
        self.targets.get(index)
    }

    /// Iterate targets in input order
    pub fn iter(&self) -> std::slice::Iter<'_, Target> {
        self.targets.iter()
    }

    /// Targets as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[Target] {
        &self.targets
    }
}

impl<'a> IntoIterator for &'a TargetList {
    type Item = &'a Target;
    type IntoIter = std::slice::Iter<'a, Target>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.iter()
    }
}

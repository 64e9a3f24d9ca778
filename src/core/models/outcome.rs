//! Per-target probe outcomes

use std::fmt;

use serde::Serialize;

/// Why a target was rejected before any connection attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Host is not an IPv4 literal
    Host(String),
    /// Port token is not a 16-bit unsigned integer
    Port(String),
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Host(host) => write!(f, "Invalid or unsupported network address: {host}"),
            Self::Port(port) => write!(f, "Invalid port: {port}"),
        }
    }
}

/// Result of probing one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// A TCP connection was established (and closed again)
    Success,
    /// The connection attempt failed; carries the OS error text
    ConnectionFailed {
        /// Error text from the socket layer
        reason: String,
    },
    /// The target could not be turned into a socket address
    InvalidAddress(AddressError),
}

/// Machine-readable status of a [`CheckOutcome`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// See [`CheckOutcome::Success`]
    Success,
    /// See [`CheckOutcome::ConnectionFailed`]
    ConnectionFailed,
    /// See [`CheckOutcome::InvalidAddress`]
    InvalidAddress,
}

impl CheckOutcome {
    /// Whether the target was reachable
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Status without the diagnostic payload
    #[must_use]
    pub const fn status(&self) -> CheckStatus {
        match self {
            Self::Success => CheckStatus::Success,
            Self::ConnectionFailed { .. } => CheckStatus::ConnectionFailed,
            Self::InvalidAddress(_) => CheckStatus::InvalidAddress,
        }
    }

    /// Diagnostic text for failures
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Success => None,
            Self::ConnectionFailed { reason } => Some(reason.clone()),
            Self::InvalidAddress(err) => Some(err.to_string()),
        }
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "Connection success, service is active!"),
            Self::ConnectionFailed { reason } => write!(f, "Connection failed ({reason})"),
            Self::InvalidAddress(err) => write!(f, "{err}"),
        }
    }
}

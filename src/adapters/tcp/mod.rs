//! TCP connect adapter
//!
//! Implements the `Prober` trait with a blocking connect that is bounded by
//! an explicit timeout. One socket per probe; it is shut down and dropped
//! before `probe` returns.

use std::net::{Ipv4Addr, Shutdown, SocketAddr, SocketAddrV4, TcpStream};
use std::time::{Duration, Instant};

use log::debug;

use crate::core::models::{AddressError, CheckOutcome, Port, Target};
use crate::core::ports::Prober;

/// Connect timeout used when none is configured
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(3000);

/// Probes targets with a single TCP connect attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TcpProber {
    connect_timeout: Duration,
}

impl TcpProber {
    /// Create a prober with the given connect timeout
    ///
    /// A zero timeout is bumped to one millisecond; the socket layer rejects
    /// zero outright.
    #[must_use]
    pub fn new(connect_timeout: Duration) -> Self {
        Self {
            connect_timeout: connect_timeout.max(Duration::from_millis(1)),
        }
    }

    /// The connect timeout in use
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Resolve a target into a socket address without touching the network
    pub fn socket_addr(target: &Target) -> Result<SocketAddrV4, AddressError> {
        let port = match &target.port {
            Port::Number(n) => *n,
            Port::Malformed(raw) => return Err(AddressError::Port(raw.clone())),
        };
        let ip: Ipv4Addr = target
            .host
            .parse()
            .map_err(|_| AddressError::Host(target.host.clone()))?;
        Ok(SocketAddrV4::new(ip, port))
    }
}

impl Default for TcpProber {
    fn default() -> Self {
        Self::new(DEFAULT_CONNECT_TIMEOUT)
    }
}

impl Prober for TcpProber {
    fn probe(&self, target: &Target) -> CheckOutcome {
        let addr = match Self::socket_addr(target) {
            Ok(addr) => addr,
            Err(err) => {
                debug!("skipping {target}: {err}");
                return CheckOutcome::InvalidAddress(err);
            },
        };

        let start = Instant::now();
        let result = TcpStream::connect_timeout(&SocketAddr::V4(addr), self.connect_timeout);
        debug!("connect to {addr} finished after {:?}", start.elapsed());

        match result {
            Ok(stream) => {
                // Peer may already have gone away; the probe still succeeded.
                let _ = stream.shutdown(Shutdown::Both);
                drop(stream);
                CheckOutcome::Success
            },
            Err(err) => CheckOutcome::ConnectionFailed {
                reason: err.to_string(),
            },
        }
    }
}

//! Tests for the TCP prober against loopback
//!
//! Only 127.0.0.1 is contacted.

use std::time::{Duration, Instant};

use sysup::adapters::tcp::{DEFAULT_CONNECT_TIMEOUT, TcpProber};
use sysup::core::models::{AddressError, CheckOutcome, Port, Target};
use sysup::core::ports::Prober;

use crate::common::fixtures::{OpenPort, closed_port};

#[test]
fn open_listener_is_reachable() {
    let open = OpenPort::new();
    let prober = TcpProber::default();

    let outcome = prober.probe(&Target::new("127.0.0.1", Port::Number(open.port())));

    assert_eq!(outcome, CheckOutcome::Success);
}

#[test]
fn repeated_probes_keep_succeeding() {
    let open = OpenPort::new();
    let prober = TcpProber::default();
    let target = Target::new("127.0.0.1", Port::Number(open.port()));

    for _ in 0..20 {
        assert_eq!(prober.probe(&target), CheckOutcome::Success);
    }
}

#[test]
fn closed_port_fails_within_timeout() {
    let port = closed_port();
    let prober = TcpProber::new(Duration::from_millis(2000));

    let start = Instant::now();
    let outcome = prober.probe(&Target::new("127.0.0.1", Port::Number(port)));

    match outcome {
        CheckOutcome::ConnectionFailed { reason } => assert!(!reason.is_empty()),
        other => panic!("expected ConnectionFailed, got {other:?}"),
    }
    assert!(start.elapsed() < Duration::from_millis(2000) + Duration::from_secs(1));
}

#[test]
fn unroutable_address_gives_up_after_timeout() {
    // TEST-NET-1 never answers; a sandbox may also refuse it as unreachable
    let timeout = Duration::from_millis(200);
    let prober = TcpProber::new(timeout);

    let start = Instant::now();
    let outcome = prober.probe(&Target::new("192.0.2.1", Port::Number(80)));

    assert!(matches!(outcome, CheckOutcome::ConnectionFailed { .. }), "{outcome:?}");
    assert!(start.elapsed() < timeout + Duration::from_secs(1));
}

#[test]
fn invalid_host_skips_the_network() {
    let prober = TcpProber::default();

    let outcome = prober.probe(&Target::new("not-an-ip", Port::Number(80)));

    assert_eq!(
        outcome,
        CheckOutcome::InvalidAddress(AddressError::Host("not-an-ip".to_string()))
    );
}

#[test]
fn malformed_port_skips_the_network() {
    let prober = TcpProber::default();

    let outcome = prober.probe(&Target::new("127.0.0.1", Port::Malformed("http".to_string())));

    assert_eq!(outcome, CheckOutcome::InvalidAddress(AddressError::Port("http".to_string())));
}

#[test]
fn default_timeout_is_bounded() {
    assert_eq!(TcpProber::default().connect_timeout(), DEFAULT_CONNECT_TIMEOUT);
    assert!(DEFAULT_CONNECT_TIMEOUT <= Duration::from_secs(10));
}

#[test]
fn prober_works_through_a_reference() {
    fn probe_with(prober: impl Prober, target: &Target) -> CheckOutcome {
        prober.probe(target)
    }

    let prober = TcpProber::default();
    let outcome = probe_with(&prober, &Target::new("x", Port::Number(1)));
    assert!(matches!(outcome, CheckOutcome::InvalidAddress(_)));
}

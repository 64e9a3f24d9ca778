//! End-to-end scans against loopback

use predicates::prelude::*;
use tempfile::TempDir;

use super::sysup;
use crate::common::fixtures::{OpenPort, closed_port};

#[test]
fn test_closed_then_open_exits_one() {
    let temp = TempDir::new().unwrap();
    let open = OpenPort::new();
    let closed = closed_port();

    let output = sysup(&temp)
        .args(["-i", "127.0.0.1,127.0.0.1", "-p", &format!("{closed},{}", open.port())])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert!(lines[1].starts_with("Starting system scan at "), "{stdout}");
    assert_eq!(lines[3], format!("Checking port {closed} on 127.0.0.1"));
    assert!(lines[4].starts_with("Connection failed ("), "{stdout}");
    assert_eq!(lines[5], format!("Checking port {} on 127.0.0.1", open.port()));
    assert_eq!(lines[6], "Connection success, service is active!");
    assert_eq!(lines.len(), 7);
}

#[test]
fn test_all_reachable_exits_zero() {
    let temp = TempDir::new().unwrap();
    let first = OpenPort::new();
    let second = OpenPort::new();

    sysup(&temp)
        .args(["-i", "127.0.0.1", "-i", "127.0.0.1"])
        .args(["-p", &first.port().to_string(), "-p", &second.port().to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Connection success").count(2));
}

#[test]
fn test_exit_code_counts_every_failure() {
    let temp = TempDir::new().unwrap();
    let closed = closed_port();

    sysup(&temp)
        .args(["-i", "not-an-ip,127.0.0.1,127.0.0.1"])
        .args(["-p", &format!("80,{closed},http")])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("Invalid or unsupported network address: not-an-ip"))
        .stdout(predicate::str::contains("Invalid port: http"));
}

#[test]
fn test_json_output() {
    let temp = TempDir::new().unwrap();
    let open = OpenPort::new();

    let output = sysup(&temp)
        .env("SYSUP_OUTPUT", "json")
        .args(["-i", "127.0.0.1,bogus", "-p", &format!("{},80", open.port())])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["failures"], 1);
    assert_eq!(json["results"][0]["status"], "success");
    assert_eq!(json["results"][1]["status"], "invalid_address");
}

#[test]
fn test_max_targets_truncates() {
    let temp = TempDir::new().unwrap();
    let open = OpenPort::new();
    let port = open.port().to_string();

    sysup(&temp)
        .env("SYSUP_MAX_TARGETS", "1")
        .args(["-i", "127.0.0.1,127.0.0.1", "-p", &format!("{port},{port}")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checking port").count(1));
}

//! Integration tests for the sysup CLI
//!
//! These tests run the real binary against loopback listeners. Every run
//! points `SYSUP_CONFIG` at a missing file so a user config cannot leak in.

#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;

mod scan_test;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a sysup command with an isolated config
fn sysup(config_dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("sysup"));
    cmd.env("SYSUP_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("SYSUP_CONNECT_TIMEOUT_MS")
        .env_remove("SYSUP_MAX_TARGETS")
        .env_remove("SYSUP_OUTPUT");
    cmd
}

const USAGE: &str = "-i IP-ADDRESS1,IP-ADDRESS2,IP-ADDRESSN -p PORT1,PORT2,PORTN";

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    sysup(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sysup"));
}

#[test]
fn test_help() {
    let temp = TempDir::new().unwrap();
    sysup(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("exit status is the number of targets"));
}

#[test]
fn test_no_args_prints_usage() {
    let temp = TempDir::new().unwrap();
    sysup(&temp)
        .assert()
        .code(255)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage:").and(predicate::str::contains(USAGE)));
}

#[test]
fn test_missing_ports_prints_usage() {
    let temp = TempDir::new().unwrap();
    sysup(&temp)
        .args(["-i", "127.0.0.1"])
        .assert()
        .code(255)
        .stderr(predicate::str::contains("no ports given"))
        .stderr(predicate::str::contains(USAGE));
}

#[test]
fn test_mismatched_counts_prints_usage_and_scans_nothing() {
    let temp = TempDir::new().unwrap();
    sysup(&temp)
        .args(["-i", "127.0.0.1,127.0.0.2", "-p", "80"])
        .assert()
        .code(255)
        .stdout(predicate::str::contains("Checking").not())
        .stderr(predicate::str::contains("2 host(s) but 1 port(s)"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    let temp = TempDir::new().unwrap();
    sysup(&temp)
        .args(["-i", "127.0.0.1", "-p", "80", "-t", "5"])
        .assert()
        .code(255)
        .stderr(predicate::str::contains(USAGE));
}

#[test]
fn test_bad_config_is_reported() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "connect_timeout_ms = 0\n").unwrap();

    sysup(&temp)
        .args(["-i", "127.0.0.1", "-p", "80"])
        .assert()
        .code(255)
        .stderr(predicate::str::contains("connect_timeout_ms must be greater than 0"));
}

//! Integration tests for the qup-vault CLI.
//!
//! Everything here runs offline: help and version output, the reward
//! calculator, and failures that happen before any RPC call goes out.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("qup-vault").unwrap()
}

// --- Help and Version ---

#[test]
fn test_no_args_shows_usage_hint() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_help_lists_every_command() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("balance"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("stake"))
        .stdout(predicate::str::contains("unstake"))
        .stdout(predicate::str::contains("claim"));
}

#[test]
fn test_version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("qup-vault"))
        .stdout(predicate::str::contains("1.0.0"));
}

// --- Offline command behavior ---

#[test]
fn test_plan_is_computed_without_a_network() {
    cmd()
        .args(["plan", "100", "--days", "365", "--apy", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily rewards:"))
        .stdout(predicate::str::contains("110.00 QUP"));
}

#[test]
fn test_plan_rejects_zero_amount() {
    cmd()
        .args(["plan", "0", "--days", "30", "--apy", "10"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn test_plan_requires_days_and_apy() {
    cmd()
        .args(["plan", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_balance_with_invalid_address_reports_it() {
    cmd()
        .args(["balance", "not-a-valid-address"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid address"));
}

#[test]
fn test_stake_without_keypair_file_fails() {
    cmd()
        .args(["--keypair", "/nonexistent/id.json", "stake", "10", "--days", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wallet keypair not found"));
}

#[test]
fn test_balance_defaults_to_missing_keypair_error() {
    cmd()
        .args(["--keypair", "/nonexistent/id.json", "balance"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wallet keypair not found"));
}

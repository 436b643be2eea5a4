//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_root_help_lists_serve() {
    let mut cmd = Command::cargo_bin("notectl").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("notectl").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--database-url"))
        .stdout(predicate::str::contains("--statement-timeout-secs"))
        .stdout(predicate::str::contains("DATABASE_URL"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("notectl").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_subcommand_fails() {
    let mut cmd = Command::cargo_bin("notectl").unwrap();
    cmd.arg("frobnicate");

    cmd.assert().failure();
}

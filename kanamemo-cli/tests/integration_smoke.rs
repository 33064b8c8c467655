//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help_lists_commands() {
    let mut cmd = Command::cargo_bin("kanamemo").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("kanamemo").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_migrate_help() {
    let mut cmd = Command::cargo_bin("kanamemo").unwrap();
    cmd.arg("migrate").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--max-connections"));
}

#[test]
fn test_serve_rejects_bad_bind_address() {
    let mut cmd = Command::cargo_bin("kanamemo").unwrap();
    cmd.env_remove("KANAMEMO_BIND")
        .args(["serve", "--bind", "not-an-address"]);

    cmd.assert().failure();
}

#[test]
fn test_bad_env_values_fall_back_to_defaults() {
    // closed port: the command gets past argument parsing, then fails to connect
    let mut cmd = Command::cargo_bin("kanamemo").unwrap();
    cmd.env_remove("RUST_LOG")
        .env("KANAMEMO_MAX_CONNECTIONS", "many")
        .env("KANAMEMO_BIND", "not-an-address")
        .args(["migrate", "--database-url", "postgres://nobody@127.0.0.1:1/none"])
        .timeout(std::time::Duration::from_secs(60));

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("invalid config value"))
        .stderr(predicate::str::contains("Failed to create database pool"))
        .stderr(predicate::str::contains("invalid value").not());
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("kanamemo").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

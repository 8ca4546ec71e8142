//! # hotelrs CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! ## Overview
//!
//! Top-level behavior of the `hotelrs` binary: standard flags, subcommand
//! help, and argument errors reported by Clap before any data is touched.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    hotelrs_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("search")
                .and(predicate::str::contains("book"))
                .and(predicate::str::contains("menu")),
        );
}

#[test]
fn test_version_flag() {
    hotelrs_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_subcommand_fails() {
    hotelrs_cmd().assert().failure();
}

#[test]
fn test_bad_date_is_rejected_by_parser() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["search", "--from", "2024/01/01", "--to", "2024-01-03"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--from"));
    assert!(!sandbox.data_file().exists());
}

#[test]
fn test_data_file_from_environment() {
    let sandbox = Sandbox::new();
    sandbox
        .bare_cmd()
        .env("HOTELRS_DATA_FILE", sandbox.data_file())
        .args(["book", "-g", "Env", "-r", "103", "--from", "2024-01-01", "--to", "2024-01-02"])
        .assert()
        .success();
    assert!(sandbox.data_file().exists());
}

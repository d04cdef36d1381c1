//! # Orchard CLI Top-Level Integration Tests
//!
//! File: cli/tests/cli.rs
//!
//! ## Overview
//!
//! Top-level behaviour of the `orchard` binary: standard flags, module and
//! action lookup, and the exit codes for setup, lookup and action failures.
//!
mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_help_flag() {
    let home = tempdir().unwrap();
    orchard_cmd(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("module"));
}

#[test]
fn test_version_flag() {
    let home = tempdir().unwrap();
    orchard_cmd(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_config_exits_one() {
    let home = tempdir().unwrap();
    orchard_cmd(home.path())
        .args(["local", "status"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("orchard config init"));
}

#[test]
fn test_unknown_module_lists_modules() {
    let home = initialized_home();
    orchard_cmd(home.path())
        .args(["badmodule", "status"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Available modules: config, local, update",
        ));
}

#[test]
fn test_unknown_action_lists_actions() {
    let home = initialized_home();
    orchard_cmd(home.path())
        .args(["config", "explode"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown action 'explode'"))
        .stderr(predicate::str::contains("create, default, init, list"));
}

#[test]
fn test_home_flag_overrides_environment() {
    let env_home = tempdir().unwrap();
    let flag_home = tempdir().unwrap();

    orchard_cmd(env_home.path())
        .arg("--home")
        .arg(flag_home.path())
        .args(["config", "init"])
        .assert()
        .success();

    assert!(flag_home.path().join("Config.yaml").is_file());
    assert!(!env_home.path().join("Config.yaml").exists());
}

#[test]
fn test_update_check_with_unreachable_releases_fails() {
    let home = initialized_home();
    orchard_cmd(home.path())
        .env("ORCHARD_RELEASES_URL", "http://127.0.0.1:9")
        .args(["update", "check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Update failed"));
}

//! # Orchard Config Integration Tests
//!
//! File: cli/tests/config.rs
//!
//! ## Overview
//!
//! Integration tests for the `orchard config` module. None of these need a
//! Docker daemon; they only read and write YAML under a temporary root.
//!
mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_init_writes_config_and_default_profile() {
    let home = tempdir().unwrap();

    orchard_cmd(home.path())
        .args(["config", "init", "--prefix", "registry.local/team"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized profile 'default'"));

    let config = fs::read_to_string(home.path().join("Config.yaml")).unwrap();
    assert!(config.contains("Profile: default"));
    assert!(config.contains("RepositoryPrefix: registry.local/team"));

    let profile = fs::read_to_string(home.path().join("profile-default.yaml")).unwrap();
    assert!(profile.contains("Components:"));
    assert!(profile.contains("dockerId: orchard-db"));
}

#[test]
fn test_second_init_requires_force() {
    let home = initialized_home();

    orchard_cmd(home.path())
        .args(["config", "init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    orchard_cmd(home.path())
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_list_marks_active_profile() {
    let home = initialized_home();
    orchard_cmd(home.path())
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("*  default"));
}

#[test]
fn test_create_and_switch_profiles() {
    let home = initialized_home();

    orchard_cmd(home.path())
        .args(["config", "create", "mine"])
        .assert()
        .success();
    assert!(home.path().join("profile-mine.yaml").is_file());

    orchard_cmd(home.path())
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("*  mine"));

    orchard_cmd(home.path())
        .args(["config", "switch", "default"])
        .assert()
        .success();

    let config = fs::read_to_string(home.path().join("Config.yaml")).unwrap();
    assert!(config.contains("Profile: default"));
}

#[test]
fn test_create_existing_profile_fails() {
    let home = initialized_home();
    orchard_cmd(home.path())
        .args(["config", "create", "default"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_switch_to_unknown_profile_fails() {
    let home = initialized_home();
    orchard_cmd(home.path())
        .args(["config", "switch", "nope"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Profile 'nope' not found"));
}

#[test]
fn test_show_prints_active_profile() {
    let home = initialized_home();
    orchard_cmd(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("image: postgres:16"));
}

#[test]
fn test_repository_sets_prefix() {
    let home = initialized_home();
    orchard_cmd(home.path())
        .args(["config", "repository", "registry.local/"])
        .assert()
        .success();

    let config = fs::read_to_string(home.path().join("Config.yaml")).unwrap();
    assert!(config.contains("RepositoryPrefix: registry.local\n"));
}

#[test]
fn test_duplicate_component_names_are_rejected_at_load() {
    let home = initialized_home();
    fs::write(
        home.path().join("profile-default.yaml"),
        "Components:\n\
         - name: db\n  dockerId: a\n  image: postgres:16\n\
         - name: db\n  dockerId: b\n  image: postgres:15\n",
    )
    .unwrap();

    orchard_cmd(home.path())
        .args(["local", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("appears more than once"));
}

#[test]
fn test_init_keeps_invalid_default_profile_untouched() {
    let home = tempdir().unwrap();
    let user_profile = "Components:\n\
                        - name: db\n  dockerId: a\n  image: postgres:16\n\
                        - name: db\n  dockerId: b\n  image: postgres:15\n\
                        - name: api\n  dockerId: c\n  image: api:1\n";
    let path = home.path().join("profile-default.yaml");
    fs::write(&path, user_profile).unwrap();

    orchard_cmd(home.path())
        .args(["config", "init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    assert_eq!(fs::read_to_string(&path).unwrap(), user_profile);
    assert!(!home.path().join("Config.yaml").exists());
}

//! # Orchard CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`cli.rs`, `config.rs`,
//! `local.rs`). Every command runs against a throwaway config root so tests
//! never read or write the real `~/.orchard`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// # Get Orchard Command (`orchard_cmd`)
///
/// An `assert_cmd::Command` for the compiled `orchard` binary with its config
/// root set to `home` and the environment cleared of Orchard overrides.
///
/// ## Panics
/// Panics if the `orchard` binary cannot be found via `Command::cargo_bin`.
pub fn orchard_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("orchard").expect("Failed to find orchard binary for testing");
    cmd.env("ORCHARD_HOME", home)
        .env_remove("ORCHARD_RELEASES_URL")
        .env_remove("RUST_LOG");
    cmd
}

/// A temporary config root that has already been through `config init`.
pub fn initialized_home() -> TempDir {
    let home = tempfile::tempdir().expect("Failed to create temp dir");
    orchard_cmd(home.path())
        .args(["config", "init"])
        .assert()
        .success();
    home
}

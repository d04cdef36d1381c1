//! # Orchard Update Command Group
//!
//! File: cli/src/commands/update/mod.rs
//!
//! ## Overview
//!
//! Self-update from a releases page laid out like GitHub releases:
//!
//! - `<releases>/latest/download/VERSION`: the newest version, one line
//! - `<releases>/download/v<version>/orchard-<arch>-<os>.tar.gz`: the binary
//!
//! `<releases>` defaults to `DEFAULT_RELEASES_URL` and can be pointed at a
//! mirror with `ORCHARD_RELEASES_URL`.
//!
//! ## Actions
//!
//! - `check`: report whether a newer version is published
//! - `install [--force]` (default): download and replace the running binary
//!
use crate::core::dispatch::{ActionMap, Module, DEFAULT_ACTION};

mod install;
mod version;

pub const DEFAULT_RELEASES_URL: &str = "https://github.com/orchard-cli/orchard/releases";
pub const RELEASES_URL_VAR: &str = "ORCHARD_RELEASES_URL";

pub struct UpdateModule;

impl Module for UpdateModule {
    fn name(&self) -> &'static str {
        "update"
    }

    fn actions(&self) -> ActionMap {
        let mut actions = ActionMap::new();
        actions.insert("check", Box::new(install::handle_check));
        actions.insert("install", Box::new(install::handle_install));
        actions.insert(DEFAULT_ACTION, Box::new(install::handle_install));
        actions
    }
}

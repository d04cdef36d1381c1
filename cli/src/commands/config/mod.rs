//! # Orchard Config Command Group
//!
//! File: cli/src/commands/config/mod.rs
//!
//! ## Overview
//!
//! The `config` module manages profiles and the process-wide `Config.yaml`.
//! These are the only actions that write configuration back to disk.
//!
//! ## Actions
//!
//! - `init [--prefix <url>] [--force]`: write the starter profile and `Config.yaml`
//! - `switch <name>`: make another profile active
//! - `create <name> [--from <profile>]`: copy a profile and switch to the copy
//! - `list` (default): known profiles, active one marked
//! - `show`: the active profile as YAML
//! - `repository <url>`: set the repository prefix for tagged images
//!
//! `init` is dispatched even when the configuration failed to load; `main`
//! checks `commands::is_init` before giving up.
//!
use crate::core::dispatch::{ActionMap, Module, DEFAULT_ACTION};

mod init;
mod profiles;
mod repository;

pub const MODULE: &str = "config";
pub const INIT: &str = "init";

pub struct ConfigModule;

impl Module for ConfigModule {
    fn name(&self) -> &'static str {
        MODULE
    }

    fn actions(&self) -> ActionMap {
        let mut actions = ActionMap::new();
        actions.insert(INIT, Box::new(init::handle_init));
        actions.insert("switch", Box::new(profiles::handle_switch));
        actions.insert("create", Box::new(profiles::handle_create));
        actions.insert("list", Box::new(profiles::handle_list));
        actions.insert(DEFAULT_ACTION, Box::new(profiles::handle_list));
        actions.insert("show", Box::new(profiles::handle_show));
        actions.insert("repository", Box::new(repository::handle_repository));
        actions
    }
}

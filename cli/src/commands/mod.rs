//! # Orchard Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the command groups the Orchard CLI exposes and
//! builds the static `Registry` the dispatcher resolves `<module> [action]`
//! against.
//!
//! ## Command Groups
//!
//! - `local`: container lifecycle and status for the active profile's components
//! - `config`: profile management (`init`, `switch`, `create`, `list`, ...)
//! - `update`: self-update from the releases page
//!
//! Each group implements `core::dispatch::Module` and returns its action map.
//! Actions receive the raw trailing arguments; those with flags parse them
//! with `clap` through `parse_args`.
//!
use crate::core::dispatch::Registry;
use crate::core::error::{OrchardError, Result};
use anyhow::anyhow;
use clap::error::ErrorKind;
use clap::Parser;

/// Profile management. Includes `init`, `switch`, `create`, `list`, `show`, `repository`.
pub mod config;
/// Component lifecycle. Includes `create`, `start`, `raise`, `replace`, `status`, `logs`.
pub mod local;
/// Self-update. Includes `check` and `install`.
pub mod update;

/// Every module the CLI dispatches to.
pub fn registry() -> Registry {
    Registry::new()
        .register(local::LocalModule)
        .register(config::ConfigModule)
        .register(update::UpdateModule)
}

/// True for the one invocation that must run without a loadable config.
pub fn is_init(module: &str, action: &str) -> bool {
    module == config::MODULE && action == config::INIT
}

/// Parses an action's trailing arguments with `clap`.
///
/// `--help` prints the action's usage and exits, like the top-level parser.
/// Any other parse failure becomes `OrchardError::ArgumentParsing`.
pub(crate) fn parse_args<T: Parser>(action: &str, args: &[String]) -> Result<T> {
    let argv = std::iter::once(action.to_string()).chain(args.iter().cloned());
    T::try_parse_from(argv).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => anyhow!(OrchardError::ArgumentParsing(
            e.to_string().trim_end().to_string()
        )),
    })
}

//! # Orchard Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file is the entry point for the Orchard CLI. It handles:
//! - Command-line parsing with Clap (`<module> [action] [args...]`)
//! - Setting up logging based on `--verbose` and `RUST_LOG`
//! - Loading the configuration and building the invocation `Context`
//! - Dispatching to the selected module action and mapping the outcome to an exit code
//!
//! ## Examples
//!
//! ```bash
//! orchard config init
//! orchard local raise all
//! orchard --verbose --verbose local status -v
//! orchard --home /tmp/orchard config list
//! ```
//!
//! ## Exit codes
//!
//! - `0`: success
//! - `1`: configuration could not be loaded, or unknown module/action
//! - `2`: the action failed
//!
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Module actions (local, config, update).
mod common; // Docker, HTTP, archive and table helpers.
mod core; // Dispatch, resolution, config store and errors.

use crate::common::docker::DockerRunner;
use crate::core::config::{self, ConfigProvider, FileConfigProvider};
use crate::core::context::Context;
use crate::core::dispatch::{self, DispatchError, DEFAULT_ACTION, EXIT_SUCCESS};

/// Top-level command line. Everything after `<module> [action]` is handed to
/// the action untouched.
#[derive(Parser, Debug)]
#[command(
    name = "orchard",
    about = "Orchard: manage your local development components as Docker containers",
    long_about = "Runs module actions against the components of the active profile.\n\
                  Modules: local (containers), config (profiles), update (self-update).",
    version
)]
struct Cli {
    /// Increase log verbosity (repeat for more).
    #[arg(long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration directory (default: ~/.orchard).
    #[arg(long, env = "ORCHARD_HOME", value_name = "DIR")]
    home: Option<PathBuf>,

    /// Module to run: local, config or update.
    module: String,

    /// Action within the module (default: `default`), then its arguments.
    #[arg(
        value_name = "ACTION",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    rest: Vec<String>,
}

impl Cli {
    /// The action name and the arguments that follow it, untouched.
    fn action(&self) -> (&str, &[String]) {
        match self.rest.split_first() {
            Some((action, args)) => (action.as_str(), args),
            None => (DEFAULT_ACTION, &[]),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    debug!("Parsed CLI arguments: {:?}", cli);

    let code = match run(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::error!("Command execution failed: {:?}", e.error());
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<(), DispatchError> {
    let (action, args) = cli.action();

    let root = config::resolve_root(cli.home.clone()).map_err(DispatchError::Setup)?;
    let mut provider = FileConfigProvider::new(root);
    if let Err(e) = provider.load_config() {
        if !commands::is_init(&cli.module, action) {
            return Err(DispatchError::Setup(e));
        }
        debug!("No usable configuration yet, continuing with init: {:#}", e);
    }

    let runner = DockerRunner::new().map_err(DispatchError::Setup)?;
    let mut ctx = Context::new(Box::new(provider), Box::new(runner));

    dispatch::dispatch(
        &mut ctx,
        &commands::registry(),
        &cli.module,
        action,
        args,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_trailing_arguments_are_passed_verbatim() {
        let cli = Cli::try_parse_from([
            "orchard", "--verbose", "local", "status", "-v", "-f", "3", "db",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 1);
        assert_eq!(cli.module, "local");
        assert_eq!(cli.action(), ("status", &args(&["-v", "-f", "3", "db"])[..]));
    }

    #[test]
    fn test_global_flags_after_the_action_belong_to_the_action() {
        let cli = Cli::try_parse_from([
            "orchard", "local", "status", "--verbose", "--home", "/tmp/x",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 0);
        assert_eq!(
            cli.action(),
            ("status", &args(&["--verbose", "--home", "/tmp/x"])[..])
        );
    }

    #[test]
    fn test_action_is_optional() {
        let cli = Cli::try_parse_from(["orchard", "config"]).unwrap();
        assert_eq!(cli.module, "config");
        assert_eq!(cli.action(), (DEFAULT_ACTION, &[][..]));
    }

    #[test]
    fn test_module_is_required() {
        assert!(Cli::try_parse_from(["orchard"]).is_err());
    }
}

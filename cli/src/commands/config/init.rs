//! # Orchard Config Init
//!
//! File: cli/src/commands/config/init.rs
//!
//! ## Overview
//!
//! `orchard config init` bootstraps a config root:
//!
//! 1. Refuse if `Config.yaml` already exists, unless `--force` is given.
//! 2. Write `profile-default.yaml` with the starter catalog. An existing
//!    default profile is kept unless `--force` is given; one that fails to
//!    load is an error rather than being replaced.
//! 3. Activate `default`, apply `--prefix` if given, and write `Config.yaml`.
//!
//! ## Usage
//!
//! ```bash
//! orchard config init
//! orchard config init --prefix registry.example.com/team
//! orchard --home /tmp/orchard config init --force
//! ```
//!
use crate::commands::parse_args;
use crate::core::config::{starter_profile, DEFAULT_PROFILE};
use crate::core::context::Context;
use crate::core::error::{OrchardError, Result};
use anyhow::anyhow;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Create the default profile and Config.yaml")]
pub struct InitArgs {
    /// Repository prefix for images of components with a `repository` tag.
    #[arg(long, value_name = "URL")]
    prefix: Option<String>,

    /// Overwrite an existing configuration and default profile.
    #[arg(long)]
    force: bool,
}

pub fn handle_init(ctx: &mut Context, args: &[String]) -> Result<()> {
    let args: InitArgs = parse_args("init", args)?;
    let provider = ctx.provider_mut();

    if provider.config_exists() && !args.force {
        return Err(anyhow!(OrchardError::Config(
            "Configuration already exists. Use 'orchard config init --force' to overwrite it."
                .into()
        )));
    }

    let existing = if args.force {
        None
    } else {
        match provider.load_profile(DEFAULT_PROFILE) {
            Ok(profile) => Some(profile),
            Err(e) if is_profile_not_found(&e) => None,
            Err(e) => {
                return Err(e.context(format!(
                    "Existing profile '{}' is invalid. Fix it or use 'orchard config init --force' to replace it",
                    DEFAULT_PROFILE
                )))
            }
        }
    };
    let profile = match existing {
        Some(profile) => {
            info!("Keeping existing profile '{}'", DEFAULT_PROFILE);
            profile
        }
        None => {
            let starter = starter_profile();
            provider.save_profile(DEFAULT_PROFILE, &starter)?;
            starter
        }
    };

    let count = profile.components.len();
    provider.set_profile(DEFAULT_PROFILE, profile);
    if let Some(prefix) = &args.prefix {
        provider.set_repository_prefix(prefix);
    }
    provider.save_config()?;

    println!(
        "Initialized profile '{}' with {} component(s).",
        DEFAULT_PROFILE, count
    );
    Ok(())
}

fn is_profile_not_found(e: &anyhow::Error) -> bool {
    matches!(
        e.downcast_ref::<OrchardError>(),
        Some(OrchardError::ProfileNotFound { .. })
    )
}

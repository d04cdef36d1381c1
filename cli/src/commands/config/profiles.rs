//! # Orchard Profile Actions
//!
//! File: cli/src/commands/config/profiles.rs
//!
//! `switch`, `create`, `list` and `show` for named profiles. Switching and
//! creating persist `Config.yaml` immediately.
//!
use crate::commands::parse_args;
use crate::common::ui::Table;
use crate::core::context::Context;
use crate::core::error::{OrchardError, Result};
use anyhow::{anyhow, Context as _};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Make another profile active")]
pub struct SwitchArgs {
    /// Profile to activate.
    name: String,
}

#[derive(Parser, Debug)]
#[command(about = "Copy a profile under a new name and switch to it")]
pub struct CreateArgs {
    /// Name of the new profile.
    name: String,

    /// Profile to copy (default: the active one).
    #[arg(long, value_name = "PROFILE")]
    from: Option<String>,
}

pub fn handle_switch(ctx: &mut Context, args: &[String]) -> Result<()> {
    let args: SwitchArgs = parse_args("switch", args)?;
    let provider = ctx.provider_mut();

    let profile = provider.load_profile(&args.name)?;
    provider.set_profile(&args.name, profile);
    provider.save_config()?;

    println!("Switched to profile '{}'.", args.name);
    Ok(())
}

pub fn handle_create(ctx: &mut Context, args: &[String]) -> Result<()> {
    let args: CreateArgs = parse_args("create", args)?;
    let provider = ctx.provider_mut();

    if provider.available_profiles()?.contains(&args.name) {
        return Err(anyhow!(OrchardError::ProfileExists { name: args.name }));
    }

    let source = match &args.from {
        Some(from) => provider.load_profile(from)?,
        None => provider.current_profile().clone(),
    };
    info!(
        "Creating profile '{}' from '{}'",
        args.name,
        args.from.as_deref().unwrap_or(&provider.config().profile)
    );
    provider.save_profile(&args.name, &source)?;
    provider.set_profile(&args.name, source);
    provider.save_config()?;

    println!("Created profile '{}' and switched to it.", args.name);
    Ok(())
}

pub fn handle_list(ctx: &mut Context, args: &[String]) -> Result<()> {
    if !args.is_empty() {
        return Err(anyhow!(OrchardError::ArgumentParsing(
            "'list' takes no arguments".into()
        )));
    }
    print!("{}", render_profiles(ctx)?);
    Ok(())
}

fn render_profiles(ctx: &Context) -> Result<String> {
    let active = &ctx.config().profile;
    let mut table = Table::new(["", "PROFILE"]);
    for name in ctx.provider().available_profiles()? {
        let marker = if &name == active { "*" } else { "" };
        table.add_row([marker.to_string(), name]);
    }
    Ok(table.render())
}

pub fn handle_show(ctx: &mut Context, _args: &[String]) -> Result<()> {
    let yaml = serde_yaml::to_string(ctx.profile()).context("Failed to serialize profile")?;
    println!("# profile: {}", ctx.config().profile);
    print!("{}", yaml);
    Ok(())
}

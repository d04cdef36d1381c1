//! # Orchard Component Lifecycle Handlers
//!
//! File: cli/src/commands/local/lifecycle.rs
//!
//! ## Overview
//!
//! One function per single-step operation on a resolved component. Each is a
//! `ComponentHandler` (a plain `fn(&Context, &Component) -> Result<()>`), so
//! the module can wrap it in a `ComponentAction` directly or chain several
//! into a `Composite`.
//!
//! Image references are computed here from the component and the active
//! `RepositoryPrefix`, so the runner never needs to see the config.
//!
use crate::common::network::health;
use crate::core::component::Component;
use crate::core::context::Context;
use crate::core::error::Result;
use tracing::info;

/// Lines of container output printed by `local logs`.
pub const LOG_TAIL: usize = 100;

fn image_ref(ctx: &Context, component: &Component) -> String {
    component.image_ref(&ctx.config().repository_prefix)
}

pub fn create(ctx: &Context, component: &Component) -> Result<()> {
    let image = image_ref(ctx, component);
    info!("Creating '{}' from {}", component.docker_id, image);
    ctx.runner().create(component, &image)?;
    println!("Created {} ({})", component.name, component.docker_id);
    Ok(())
}

pub fn start(ctx: &Context, component: &Component) -> Result<()> {
    ctx.runner().start(component)?;
    println!("Started {}", component.name);
    Ok(())
}

pub fn stop(ctx: &Context, component: &Component) -> Result<()> {
    ctx.runner().stop(component)?;
    println!("Stopped {}", component.name);
    Ok(())
}

pub fn remove(ctx: &Context, component: &Component) -> Result<()> {
    ctx.runner().remove(component)?;
    println!("Removed {}", component.name);
    Ok(())
}

pub fn pull(ctx: &Context, component: &Component) -> Result<()> {
    let image = image_ref(ctx, component);
    ctx.runner().pull(component, &image)?;
    println!("Pulled {}", image);
    Ok(())
}

pub fn logs(ctx: &Context, component: &Component) -> Result<()> {
    ctx.runner().logs(component, LOG_TAIL)
}

/// Health check. A component without a test URL passes.
pub fn test(_ctx: &Context, component: &Component) -> Result<()> {
    if component.test_url.is_empty() {
        println!("{}: no health check", component.name);
        return Ok(());
    }
    health::ping(&component.test_url)?;
    println!("{}: healthy ({})", component.name, component.test_url);
    Ok(())
}

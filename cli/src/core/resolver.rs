//! # Component Resolver
//!
//! File: cli/src/core/resolver.rs
//!
//! ## Overview
//!
//! Turns the component names given on the command line into handler calls
//! against the active profile, and decides which failures reach the caller.
//!
//! ## Policy
//!
//! | Arguments            | Unknown name            | Handler failure        | Result  |
//! |----------------------|-------------------------|------------------------|---------|
//! | none                 | n/a                     | n/a                    | `MissingArgument` |
//! | `all`                | n/a                     | logged as warning      | `Ok`    |
//! | one name             | `ComponentNotFound`     | returned as is         | handler's |
//! | several names        | logged, skipped         | logged as warning      | `Ok`    |
//!
//! A single target is strict because the caller asked for exactly that
//! component. Batches are best effort so one broken component does not block
//! the rest. Iteration follows catalog order for `all` and argument order
//! otherwise. The profile is read on every call and never modified.
//!
use crate::core::action::ComponentHandler;
use crate::core::component::Component;
use crate::core::context::Context;
use crate::core::error::{OrchardError, Result};
use anyhow::anyhow;
use tracing::{info, warn};

/// Wildcard selecting every component of the active profile.
pub const ALL: &str = "all";

pub fn for_each_component(
    ctx: &Context,
    names: &[String],
    handler: &dyn ComponentHandler,
) -> Result<()> {
    let components = &ctx.profile().components;

    match names {
        [] => Err(anyhow!(OrchardError::MissingArgument {
            available: ctx.profile().names(),
        })),
        [only] if only == ALL => {
            for component in components {
                run_lenient(ctx, component, handler);
            }
            Ok(())
        }
        [only] => {
            let component = find(components, only).ok_or_else(|| {
                anyhow!(OrchardError::ComponentNotFound { name: only.clone() })
            })?;
            info!("Running on component '{}'", component.name);
            handler.handle(ctx, component)
        }
        many => {
            for name in many {
                match find(components, name) {
                    Some(component) => run_lenient(ctx, component, handler),
                    None => warn!(
                        "{}",
                        OrchardError::ComponentNotFound { name: name.clone() }
                    ),
                }
            }
            Ok(())
        }
    }
}

fn find<'a>(components: &'a [Component], name: &str) -> Option<&'a Component> {
    components.iter().find(|c| c.name == name)
}

fn run_lenient(ctx: &Context, component: &Component, handler: &dyn ComponentHandler) {
    info!("Running on component '{}'", component.name);
    if let Err(e) = handler.handle(ctx, component) {
        warn!("Component '{}' failed: {:#}", component.name, e);
    }
}

//! # Orchard Repository Prefix
//!
//! File: cli/src/commands/config/repository.rs
//!
//! `orchard config repository <url>` stores the registry prefix used for
//! components that carry a `repository` tag. An empty string clears it.
//!
use crate::commands::parse_args;
use crate::core::context::Context;
use crate::core::error::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Set the registry prefix for tagged component images")]
pub struct RepositoryArgs {
    /// Registry prefix, e.g. `registry.example.com/team`.
    url: String,
}

pub fn handle_repository(ctx: &mut Context, args: &[String]) -> Result<()> {
    let args: RepositoryArgs = parse_args("repository", args)?;
    let url = args.url.trim().trim_end_matches('/');

    let provider = ctx.provider_mut();
    provider.set_repository_prefix(url);
    provider.save_config()?;

    if url.is_empty() {
        println!("Cleared repository prefix.");
    } else {
        println!("Repository prefix set to '{}'.", url);
    }
    Ok(())
}

//! # Orchard Local List
//!
//! File: cli/src/commands/local/list.rs
//!
//! `orchard local list` prints the active profile's component catalog
//! without touching Docker.
//!
use crate::common::ui::Table;
use crate::core::context::Context;
use crate::core::error::{OrchardError, Result};
use anyhow::anyhow;

pub fn handle_list(ctx: &mut Context, args: &[String]) -> Result<()> {
    if !args.is_empty() {
        return Err(anyhow!(OrchardError::ArgumentParsing(format!(
            "'list' takes no arguments, got: {}",
            args.join(" ")
        ))));
    }
    println!("Profile: {}", ctx.config().profile);
    print!("{}", render(ctx));
    Ok(())
}

fn render(ctx: &Context) -> String {
    let mut table = Table::new(["NAME", "CONTAINER", "IMAGE", "PORTS", "TEST URL"]);
    let prefix = &ctx.config().repository_prefix;
    for c in &ctx.profile().components {
        let ports = c
            .port_mapping()
            .map(|(host, container)| format!("{}:{}", host, container))
            .unwrap_or_else(|| "-".into());
        let test_url = if c.test_url.is_empty() {
            "-".to_string()
        } else {
            c.test_url.clone()
        };
        table.add_row([
            c.name.clone(),
            c.docker_id.clone(),
            c.image_ref(prefix),
            ports,
            test_url,
        ]);
    }
    table.render()
}

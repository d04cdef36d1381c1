//! # Orchard Local Status
//!
//! File: cli/src/commands/local/status.rs
//!
//! ## Overview
//!
//! Implements `orchard local status` (also the module's default action): one
//! table row per component with its container state, uptime and published
//! ports. Unlike the lifecycle actions, status never fails on a single bad
//! component. Unknown names are warned about and skipped, and a runner
//! error shows up in the STATE column.
//!
//! ## Usage
//!
//! ```bash
//! orchard local status              # every component
//! orchard local status db redis     # just these
//! orchard local status -v           # add TEST URL and HEALTH columns
//! orchard local status -f 10        # refresh every second, ten times
//! orchard local status db -f        # refresh until interrupted
//! ```
//!
//! Follow mode stops after the requested number of refreshes. With no count
//! (or `0`) it runs until the process is terminated.
//!
use crate::commands::parse_args;
use crate::common::network::health;
use crate::common::ui::Table;
use crate::core::component::Component;
use crate::core::context::Context;
use crate::core::error::{OrchardError, Result};
use crate::core::resolver::ALL;
use chrono::{DateTime, Utc};
use clap::Parser;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

const REFRESH_INTERVAL: Duration = Duration::from_secs(1);
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const NONE: &str = "-";

#[derive(Parser, Debug)]
#[command(
    about = "Show the container status of components",
    long_about = "Prints one row per component of the active profile.\n\
                  Without names every component is shown."
)]
pub struct StatusArgs {
    /// Also show test URLs and ping them.
    #[arg(short, long)]
    verbose: bool,

    /// Refresh every second. Optional count of refreshes; 0 or none means forever.
    #[arg(short, long, value_name = "N", num_args = 0..=1, default_missing_value = "0")]
    follow: Option<u64>,

    /// Components to show (default: all).
    names: Vec<String>,
}

pub fn handle_status(ctx: &mut Context, args: &[String]) -> Result<()> {
    let args: StatusArgs = parse_args("status", args)?;
    debug!("Status args: {:?}", args);
    let targets = select(ctx, &args.names);

    let Some(count) = args.follow else {
        print!("{}", render(ctx, &targets, args.verbose));
        return Ok(());
    };

    let mut shown: u64 = 0;
    loop {
        print!("{}{}", CLEAR_SCREEN, render(ctx, &targets, args.verbose));
        shown += 1;
        if count != 0 && shown >= count {
            return Ok(());
        }
        thread::sleep(REFRESH_INTERVAL);
    }
}

/// Components to show, in catalog order for `all`/no names, else argument order.
fn select(ctx: &Context, names: &[String]) -> Vec<Component> {
    let profile = ctx.profile();
    if names.is_empty() || (names.len() == 1 && names[0] == ALL) {
        return profile.components.clone();
    }
    names
        .iter()
        .filter_map(|name| {
            let found = profile.find(name).cloned();
            if found.is_none() {
                warn!("{}", OrchardError::ComponentNotFound { name: name.clone() });
            }
            found
        })
        .collect()
}

fn render(ctx: &Context, components: &[Component], verbose: bool) -> String {
    let mut headers = vec!["NAME", "CONTAINER", "IMAGE", "STATE", "UPTIME", "PORTS"];
    if verbose {
        headers.extend(["TEST URL", "HEALTH"]);
    }
    let mut table = Table::new(headers);
    let now = Utc::now();
    let prefix = &ctx.config().repository_prefix;

    for component in components {
        let mut row = vec![
            component.name.clone(),
            component.docker_id.clone(),
            component.image_ref(prefix),
        ];
        let running = match ctx.runner().status(component) {
            Ok(status) => {
                let uptime = match (&status.started_at, status.is_running()) {
                    (Some(started), true) => format_uptime(started, now),
                    _ => NONE.to_string(),
                };
                let ports = if status.ports.is_empty() {
                    NONE.to_string()
                } else {
                    status.ports.join(", ")
                };
                row.extend([status.state.clone(), uptime, ports]);
                status.is_running()
            }
            Err(e) => {
                warn!("Status of '{}' failed: {:#}", component.name, e);
                row.extend(["error".to_string(), NONE.to_string(), NONE.to_string()]);
                false
            }
        };
        if verbose {
            row.push(if component.test_url.is_empty() {
                NONE.to_string()
            } else {
                component.test_url.clone()
            });
            row.push(if running {
                health::check(component).to_string()
            } else {
                NONE.to_string()
            });
        }
        table.add_row(row);
    }
    table.render()
}

/// Compact elapsed time since an RFC 3339 timestamp, e.g. `2d 3h` or `4m 10s`.
fn format_uptime(started_at: &str, now: DateTime<Utc>) -> String {
    let Ok(started) = DateTime::parse_from_rfc3339(started_at) else {
        return NONE.to_string();
    };
    let secs = (now - started.with_timezone(&Utc)).num_seconds().max(0);
    let (days, hours, mins) = (secs / 86_400, secs % 86_400 / 3_600, secs % 3_600 / 60);
    match (days, hours, mins) {
        (d, h, _) if d > 0 => format!("{}d {}h", d, h),
        (_, h, m) if h > 0 => format!("{}h {}m", h, m),
        (_, _, m) if m > 0 => format!("{}m {}s", m, secs % 60),
        _ => format!("{}s", secs),
    }
}

//! # Orchard Self-Update
//!
//! File: cli/src/commands/update/install.rs
//!
//! ## Overview
//!
//! `update check` and `update install`. Installation works as follows:
//!
//! 1. Fetch the published version and compare it with this build.
//! 2. Download the release archive for this platform.
//! 3. Extract the `orchard` binary into a staging directory next to the
//!    running executable, so the final rename stays on one filesystem.
//! 4. Mark it executable (Unix) and rename it over the running executable.
//!
use super::version::VersionTriplet;
use super::{DEFAULT_RELEASES_URL, RELEASES_URL_VAR};
use crate::commands::parse_args;
use crate::common::archive::tar::extract_file;
use crate::common::network::http_client;
use crate::core::context::Context;
use crate::core::error::{OrchardError, Result};
use anyhow::{anyhow, Context as _};
use clap::Parser;
use reqwest::blocking::Client;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

const BINARY_NAME: &str = "orchard";
const VERSION_TIMEOUT: Duration = Duration::from_secs(10);
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Parser, Debug)]
#[command(about = "Download and install the latest Orchard release")]
pub struct InstallArgs {
    /// Reinstall even when already up to date.
    #[arg(long)]
    force: bool,
}

pub fn handle_check(_ctx: &mut Context, args: &[String]) -> Result<()> {
    if !args.is_empty() {
        return Err(anyhow!(OrchardError::ArgumentParsing(
            "'check' takes no arguments".into()
        )));
    }
    let current = current_version()?;
    let latest = fetch_latest(&releases_base())?;

    if latest > current {
        println!(
            "Orchard {} is available (installed: {}). Run 'orchard update install'.",
            latest, current
        );
    } else {
        println!("Orchard {} is up to date.", current);
    }
    Ok(())
}

pub fn handle_install(_ctx: &mut Context, args: &[String]) -> Result<()> {
    let args: InstallArgs = parse_args("install", args)?;
    let base = releases_base();
    let current = current_version()?;
    let latest = fetch_latest(&base)?;

    if latest <= current && !args.force {
        println!("Orchard {} is up to date.", current);
        return Ok(());
    }

    let url = asset_url(&base, latest, std::env::consts::ARCH, std::env::consts::OS);
    info!("Downloading {}", url);
    let client = http_client(DOWNLOAD_TIMEOUT)?;
    let archive = get(&client, &url)?
        .bytes()
        .map_err(|e| update_error(&url, e))?;
    debug!("Downloaded {} bytes", archive.len());

    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    install_binary(&archive, &exe)?;

    println!("Updated Orchard {} -> {}.", current, latest);
    Ok(())
}

/// Replaces `target` with the `orchard` binary from a release archive.
fn install_binary(archive: &[u8], target: &Path) -> Result<()> {
    let dir = target.parent().ok_or_else(|| {
        anyhow!(OrchardError::Update(format!(
            "'{}' has no parent directory",
            target.display()
        )))
    })?;
    let staging = tempfile::Builder::new()
        .prefix(".orchard-update")
        .tempdir_in(dir)
        .with_context(|| format!("Failed to create staging directory in {}", dir.display()))?;

    let extracted = extract_file(archive, BINARY_NAME, staging.path())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&extracted, fs::Permissions::from_mode(0o755))
            .with_context(|| format!("Failed to mark {} executable", extracted.display()))?;
    }

    fs::rename(&extracted, target)
        .with_context(|| format!("Failed to replace {}", target.display()))?;
    info!("Installed new binary at {}", target.display());
    Ok(())
}

fn releases_base() -> String {
    releases_base_from(std::env::var(RELEASES_URL_VAR).ok())
}

fn releases_base_from(value: Option<String>) -> String {
    value
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_RELEASES_URL.to_string())
}

fn current_version() -> Result<VersionTriplet> {
    VersionTriplet::current().ok_or_else(|| {
        anyhow!(OrchardError::Update(format!(
            "Current version '{}' is not a valid version.",
            env!("CARGO_PKG_VERSION")
        )))
    })
}

fn fetch_latest(base: &str) -> Result<VersionTriplet> {
    let url = format!("{}/latest/download/VERSION", base);
    debug!("Fetching {}", url);
    let client = http_client(VERSION_TIMEOUT)?;
    let body = get(&client, &url)?
        .text()
        .map_err(|e| update_error(&url, e))?;
    VersionTriplet::parse(&body).ok_or_else(|| {
        anyhow!(OrchardError::Update(format!(
            "'{}' does not contain a version: {:?}",
            url,
            body.trim()
        )))
    })
}

fn get(client: &Client, url: &str) -> Result<reqwest::blocking::Response> {
    client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| update_error(url, e))
}

fn update_error(url: &str, e: reqwest::Error) -> anyhow::Error {
    anyhow!(OrchardError::Update(format!("{}: {}", url, e)))
}

fn asset_url(base: &str, version: VersionTriplet, arch: &str, os: &str) -> String {
    format!(
        "{}/download/v{}/{}-{}-{}.tar.gz",
        base, version, BINARY_NAME, arch, os
    )
}

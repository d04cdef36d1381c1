//! # Orchard Network Utilities
//!
//! File: cli/src/common/network/mod.rs
//!
//! HTTP access shared by the CLI: health pings against component test URLs
//! (`health`) and the blocking client used for release downloads.
//!
use crate::core::error::Result;
use anyhow::Context;
use reqwest::blocking::Client;
use std::time::Duration;

pub mod health;

/// Blocking HTTP client with a per-request timeout and an Orchard user agent.
pub fn http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("orchard/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to create HTTP client")
}

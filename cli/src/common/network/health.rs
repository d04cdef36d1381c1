//! # Component Health Checks
//!
//! File: cli/src/common/network/health.rs
//!
//! A component is healthy when `GET testUrl` answers with any 2xx status
//! within `HEALTH_TIMEOUT`. Components without a `testUrl` have no check.
//!
use crate::core::component::Component;
use crate::core::error::{OrchardError, Result};
use anyhow::anyhow;
use std::fmt;
use std::time::Duration;
use tracing::debug;

use super::http_client;

pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Health {
    Healthy,
    Unhealthy(String),
    NoCheck,
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Health::Healthy => write!(f, "healthy"),
            Health::Unhealthy(reason) => write!(f, "unhealthy ({})", reason),
            Health::NoCheck => write!(f, "-"),
        }
    }
}

/// Pings the component's test URL. Never fails; failures become `Unhealthy`.
pub fn check(component: &Component) -> Health {
    if component.test_url.is_empty() {
        return Health::NoCheck;
    }
    match ping(&component.test_url) {
        Ok(()) => Health::Healthy,
        Err(e) => Health::Unhealthy(e.to_string()),
    }
}

/// `GET url`, succeeding only on a 2xx response.
pub fn ping(url: &str) -> Result<()> {
    let client = http_client(HEALTH_TIMEOUT)?;
    debug!("Pinging {}", url);
    let response = client.get(url).send().map_err(|e| {
        anyhow!(OrchardError::HealthCheck {
            url: url.to_string(),
            reason: e.to_string(),
        })
    })?;
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(anyhow!(OrchardError::HealthCheck {
            url: url.to_string(),
            reason: format!("HTTP {}", status),
        }))
    }
}

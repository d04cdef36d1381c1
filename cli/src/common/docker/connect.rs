//! # Orchard Docker Connection
//!
//! File: cli/src/common/docker/connect.rs
//!
//! Establishes the `bollard` client for the local Docker daemon. The client is
//! created once per invocation by `DockerRunner` and reused for every call.
//!
use crate::core::error::{OrchardError, Result};
use anyhow::{anyhow, Context};
use bollard::Docker;
use tracing::instrument;

/// Connects to the local Docker daemon using bollard's platform defaults
/// (`DOCKER_HOST`, else the Unix socket or Windows named pipe).
///
/// # Errors
///
/// Returns `OrchardError::DockerApi` with a hint about the daemon when the
/// client cannot be constructed.
#[instrument]
pub async fn connect_docker() -> Result<Docker> {
    Docker::connect_with_local_defaults()
        .map_err(|e| anyhow!(OrchardError::DockerApi { source: e }))
        .context("Failed to connect to Docker daemon. Is it running and accessible?")
}

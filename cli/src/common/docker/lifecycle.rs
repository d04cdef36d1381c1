//! # Orchard Container Lifecycle
//!
//! File: cli/src/common/docker/lifecycle.rs
//!
//! ## Overview
//!
//! Start, stop and remove a container by name, mapping engine status codes to
//! outcomes the CLI cares about:
//!
//! | Call   | 304 (already in state) | 404 (absent)                 |
//! |--------|------------------------|------------------------------|
//! | start  | success                | `OrchardError::Docker`       |
//! | stop   | success                | `OrchardError::Docker`       |
//! | remove | n/a                    | success (goal is absence)    |
//!
use crate::core::error::{OrchardError, Result};
use anyhow::anyhow;
use bollard::{
    container::{RemoveContainerOptions, StartContainerOptions, StopContainerOptions},
    Docker,
};
use tracing::{error, info, instrument, warn};

/// Seconds Docker waits after SIGTERM before killing the container.
pub const STOP_TIMEOUT_SECS: i64 = 10;

#[instrument(skip(docker, name_or_id), fields(container = %name_or_id))]
pub async fn start_container(docker: &Docker, name_or_id: &str) -> Result<()> {
    info!("Starting container '{}'...", name_or_id);

    match docker
        .start_container(name_or_id, None::<StartContainerOptions<String>>)
        .await
    {
        Ok(_) => {
            info!("Container '{}' started successfully.", name_or_id);
            Ok(())
        }
        Err(bollard::errors::Error::DockerResponseServerError {
            status_code: 304, ..
        }) => {
            info!("Container '{}' was already started.", name_or_id);
            Ok(())
        }
        Err(bollard::errors::Error::DockerResponseServerError {
            status_code: 404, ..
        }) => {
            warn!("Start failed because container '{}' was not found.", name_or_id);
            Err(not_created(name_or_id))
        }
        Err(e) => {
            error!("Failed to start container '{}': {:?}", name_or_id, e);
            Err(anyhow!(OrchardError::DockerApi { source: e })
                .context(format!("Failed to start container '{}'", name_or_id)))
        }
    }
}

#[instrument(skip(docker, name_or_id), fields(container = %name_or_id))]
pub async fn stop_container(docker: &Docker, name_or_id: &str) -> Result<()> {
    info!(
        "Stopping container '{}' (timeout {}s)...",
        name_or_id, STOP_TIMEOUT_SECS
    );
    let options = Some(StopContainerOptions {
        t: STOP_TIMEOUT_SECS,
    });

    match docker.stop_container(name_or_id, options).await {
        Ok(_) => {
            info!("Container '{}' stopped successfully.", name_or_id);
            Ok(())
        }
        Err(bollard::errors::Error::DockerResponseServerError {
            status_code: 304, ..
        }) => {
            info!("Container '{}' was already stopped.", name_or_id);
            Ok(())
        }
        Err(bollard::errors::Error::DockerResponseServerError {
            status_code: 404, ..
        }) => {
            warn!("Stop failed because container '{}' was not found.", name_or_id);
            Err(not_created(name_or_id))
        }
        Err(e) => {
            error!("Failed to stop container '{}': {:?}", name_or_id, e);
            Err(anyhow!(OrchardError::DockerApi { source: e })
                .context(format!("Failed to stop container '{}'", name_or_id)))
        }
    }
}

/// Force-removes the container; an absent container counts as removed.
#[instrument(skip(docker, name_or_id), fields(container = %name_or_id))]
pub async fn remove_container(docker: &Docker, name_or_id: &str) -> Result<()> {
    info!("Removing container '{}'...", name_or_id);
    let options = Some(RemoveContainerOptions {
        force: true,
        v: false,
        link: false,
    });

    match docker.remove_container(name_or_id, options).await {
        Ok(_) => {
            info!("Container '{}' removed successfully.", name_or_id);
            Ok(())
        }
        Err(bollard::errors::Error::DockerResponseServerError {
            status_code: 404, ..
        }) => {
            info!("Container '{}' not found, nothing to remove.", name_or_id);
            Ok(())
        }
        Err(bollard::errors::Error::DockerResponseServerError {
            status_code: 409,
            message,
        }) => {
            error!("Conflict removing container '{}': {}", name_or_id, message);
            Err(anyhow!(OrchardError::Docker(format!(
                "Conflict removing container '{}': {}",
                name_or_id, message
            ))))
        }
        Err(e) => {
            error!("Failed to remove container '{}': {:?}", name_or_id, e);
            Err(anyhow!(OrchardError::DockerApi { source: e })
                .context(format!("Failed to remove container '{}'", name_or_id)))
        }
    }
}

fn not_created(name_or_id: &str) -> anyhow::Error {
    anyhow!(OrchardError::Docker(format!(
        "Container '{}' does not exist. Create it first with 'orchard local create'.",
        name_or_id
    )))
}

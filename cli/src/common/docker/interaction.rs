//! # Orchard Container Output
//!
//! File: cli/src/common/docker/interaction.rs
//!
//! Streams the tail of a container's stdout/stderr to the host's matching
//! streams. Output is not followed; the call returns once the engine has
//! sent the requested lines.
//!
use crate::core::error::{OrchardError, Result};
use anyhow::anyhow;
use bollard::{
    container::{LogOutput, LogsOptions},
    Docker,
};
use futures_util::StreamExt;
use std::io::{self, Write};
use tracing::{debug, instrument, warn};

#[instrument(skip(docker, name_or_id), fields(container = %name_or_id))]
pub async fn get_container_logs(docker: &Docker, name_or_id: &str, tail: usize) -> Result<()> {
    let options = Some(LogsOptions::<String> {
        follow: false,
        stdout: true,
        stderr: true,
        tail: tail.to_string(),
        ..Default::default()
    });

    let mut stream = docker.logs(name_or_id, options);
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    while let Some(item) = stream.next().await {
        match item {
            Ok(LogOutput::StdOut { message }) | Ok(LogOutput::Console { message }) => {
                stdout.write_all(&message)?;
            }
            Ok(LogOutput::StdErr { message }) => {
                stderr.write_all(&message)?;
            }
            Ok(LogOutput::StdIn { .. }) => {}
            Err(bollard::errors::Error::DockerResponseServerError {
                status_code: 404, ..
            }) => {
                warn!("Logs requested for missing container '{}'.", name_or_id);
                return Err(anyhow!(OrchardError::Docker(format!(
                    "Container '{}' does not exist.",
                    name_or_id
                ))));
            }
            Err(e) => {
                return Err(anyhow!(OrchardError::DockerApi { source: e })
                    .context(format!("Failed to read logs of container '{}'", name_or_id)));
            }
        }
    }

    stdout.flush()?;
    stderr.flush()?;
    debug!("Log stream for '{}' finished.", name_or_id);
    Ok(())
}

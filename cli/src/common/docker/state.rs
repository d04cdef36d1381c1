//! # Orchard Docker State Querying
//!
//! File: cli/src/common/docker/state.rs
//!
//! ## Overview
//!
//! Read-only queries against the engine:
//! - **`container_exists`**: inspect and treat 404 as `false`.
//! - **`container_status`**: inspect and reduce the response to a
//!   `ContainerStatus` (state, start time, published ports). An absent
//!   container yields the `missing` state rather than an error.
//!
use crate::core::error::{OrchardError, Result};
use crate::core::runner::ContainerStatus;
use anyhow::anyhow;
use bollard::{
    container::InspectContainerOptions,
    models::{ContainerInspectResponse, ContainerStateStatusEnum},
    Docker,
};
use tracing::{debug, error, instrument};

#[instrument(skip(docker, name_or_id), fields(container = %name_or_id))]
pub async fn container_exists(docker: &Docker, name_or_id: &str) -> Result<bool> {
    debug!("Checking existence for container: {}", name_or_id);

    match docker
        .inspect_container(name_or_id, None::<InspectContainerOptions>)
        .await
    {
        Ok(_) => Ok(true),
        Err(bollard::errors::Error::DockerResponseServerError {
            status_code: 404, ..
        }) => {
            debug!("Container '{}' does not exist (404).", name_or_id);
            Ok(false)
        }
        Err(e) => {
            error!(
                "Failed to inspect container '{}' during existence check: {:?}",
                name_or_id, e
            );
            Err(anyhow!(OrchardError::DockerApi { source: e })
                .context(format!("Failed to inspect container '{}'", name_or_id)))
        }
    }
}

#[instrument(skip(docker, name_or_id), fields(container = %name_or_id))]
pub async fn container_status(docker: &Docker, name_or_id: &str) -> Result<ContainerStatus> {
    match docker
        .inspect_container(name_or_id, None::<InspectContainerOptions>)
        .await
    {
        Ok(details) => Ok(summarize(&details)),
        Err(bollard::errors::Error::DockerResponseServerError {
            status_code: 404, ..
        }) => Ok(ContainerStatus::missing()),
        Err(e) => Err(anyhow!(OrchardError::DockerApi { source: e })
            .context(format!("Failed to inspect container '{}'", name_or_id))),
    }
}

fn summarize(details: &ContainerInspectResponse) -> ContainerStatus {
    let state = details.state.as_ref();
    let status = state
        .and_then(|s| s.status.clone())
        .unwrap_or(ContainerStateStatusEnum::EMPTY);
    let started_at = if status == ContainerStateStatusEnum::RUNNING {
        state.and_then(|s| s.started_at.clone())
    } else {
        None
    };

    let mut ports: Vec<String> = details
        .network_settings
        .as_ref()
        .and_then(|n| n.ports.as_ref())
        .map(|ports| {
            ports
                .iter()
                .flat_map(|(container_port, bindings)| {
                    bindings
                        .iter()
                        .flatten()
                        .filter_map(move |b| {
                            b.host_port
                                .as_ref()
                                .map(|host| format!("{}->{}", host, container_port))
                        })
                })
                .collect()
        })
        .unwrap_or_default();
    ports.sort();
    ports.dedup();

    ContainerStatus {
        state: if status == ContainerStateStatusEnum::EMPTY {
            "unknown".to_string()
        } else {
            status.to_string()
        },
        started_at,
        ports,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bollard::models::{ContainerState, NetworkSettings, PortBinding};
    use std::collections::HashMap;

    #[test]
    fn test_summarize_running_container() {
        let mut port_map = HashMap::new();
        port_map.insert(
            "5432/tcp".to_string(),
            Some(vec![
                PortBinding {
                    host_ip: Some("0.0.0.0".into()),
                    host_port: Some("15432".into()),
                },
                PortBinding {
                    host_ip: Some("::".into()),
                    host_port: Some("15432".into()),
                },
            ]),
        );
        let details = ContainerInspectResponse {
            state: Some(ContainerState {
                status: Some(ContainerStateStatusEnum::RUNNING),
                started_at: Some("2026-10-01T10:00:00Z".into()),
                ..Default::default()
            }),
            network_settings: Some(NetworkSettings {
                ports: Some(port_map),
                ..Default::default()
            }),
            ..Default::default()
        };

        let status = summarize(&details);
        assert!(status.is_running());
        assert_eq!(status.started_at.as_deref(), Some("2026-10-01T10:00:00Z"));
        assert_eq!(status.ports, vec!["15432->5432/tcp"]);
    }

    #[test]
    fn test_summarize_exited_container_has_no_start_time() {
        let details = ContainerInspectResponse {
            state: Some(ContainerState {
                status: Some(ContainerStateStatusEnum::EXITED),
                started_at: Some("2026-10-01T10:00:00Z".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let status = summarize(&details);
        assert_eq!(status.state, "exited");
        assert_eq!(status.started_at, None);
        assert!(status.ports.is_empty());
    }
}

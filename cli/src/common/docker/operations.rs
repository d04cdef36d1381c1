//! # Orchard Container Creation
//!
//! File: cli/src/common/docker/operations.rs
//!
//! ## Overview
//!
//! Translates a `Component` into the `bollard` create-container request:
//! - container name: `dockerId`
//! - environment: `env` entries as given
//! - links: `links` entries as given
//! - binds: `mounts` entries with `~` expanded in the host part
//! - one TCP port binding when both `hostPort` and `containerPort` are set
//!
//! Creating never starts the container; `lifecycle::start_container` does that.
//!
use crate::core::component::Component;
use crate::core::error::{OrchardError, Result};
use anyhow::{anyhow, Context};
use bollard::{
    container::{Config as ContainerConfig, CreateContainerOptions},
    models::{HostConfig, PortBinding},
    Docker,
};
use std::collections::HashMap;
use tracing::{error, info, instrument};

use super::state::container_exists;

/// Creates (without starting) the container described by `component`.
///
/// # Errors
///
/// - `OrchardError::Docker` if a container with the same name already exists
///   or the image is not available locally.
/// - `OrchardError::Config` for malformed mount entries.
/// - `OrchardError::DockerApi` for any other engine failure.
#[instrument(skip(docker, component), fields(container = %component.docker_id))]
pub async fn create_container(docker: &Docker, component: &Component, image_ref: &str) -> Result<()> {
    let name = component.docker_id.as_str();

    if container_exists(docker, name).await? {
        error!("Container '{}' already exists.", name);
        return Err(anyhow!(OrchardError::Docker(format!(
            "Container '{}' already exists. Remove it first or use 'replace'.",
            name
        ))));
    }

    let (exposed_ports, port_bindings) = port_config(component);
    let binds = expand_mounts(&component.mounts)?;

    let host_config = HostConfig {
        port_bindings: if port_bindings.is_empty() {
            None
        } else {
            Some(port_bindings)
        },
        binds: if binds.is_empty() { None } else { Some(binds) },
        links: if component.links.is_empty() {
            None
        } else {
            Some(component.links.clone())
        },
        ..Default::default()
    };

    let config = ContainerConfig {
        image: Some(image_ref.to_string()),
        env: if component.env.is_empty() {
            None
        } else {
            Some(component.env.clone())
        },
        exposed_ports: if exposed_ports.is_empty() {
            None
        } else {
            Some(exposed_ports)
        },
        host_config: Some(host_config),
        ..Default::default()
    };

    info!("Creating container '{}' from image '{}'", name, image_ref);
    let options = Some(CreateContainerOptions {
        name: name.to_string(),
        platform: None,
    });

    match docker.create_container(options, config).await {
        Ok(response) => {
            for warning in &response.warnings {
                info!("Docker warning for '{}': {}", name, warning);
            }
            info!("Container '{}' created (ID: {}).", name, response.id);
            Ok(())
        }
        Err(bollard::errors::Error::DockerResponseServerError {
            status_code: 404, ..
        }) => Err(anyhow!(OrchardError::Docker(format!(
            "Image '{}' is not available locally. Pull it first with 'orchard local pull {}'.",
            image_ref, component.name
        )))),
        Err(e) => Err(anyhow!(OrchardError::DockerApi { source: e }))
            .with_context(|| format!("Failed to create container '{}'", name)),
    }
}

type ExposedPorts = HashMap<String, HashMap<(), ()>>;
type PortBindings = HashMap<String, Option<Vec<PortBinding>>>;

fn port_config(component: &Component) -> (ExposedPorts, PortBindings) {
    let mut exposed_ports = HashMap::new();
    let mut port_bindings = HashMap::new();
    if let Some((host, container)) = component.port_mapping() {
        let key = format!("{}/tcp", container);
        exposed_ports.insert(key.clone(), HashMap::new());
        port_bindings.insert(
            key,
            Some(vec![PortBinding {
                host_ip: None,
                host_port: Some(host.to_string()),
            }]),
        );
    }
    (exposed_ports, port_bindings)
}

/// Expands `~` in the host part of each `host:container[:mode]` entry.
fn expand_mounts(mounts: &[String]) -> Result<Vec<String>> {
    mounts
        .iter()
        .map(|mount| {
            let (host, rest) = mount.split_once(':').ok_or_else(|| {
                anyhow!(OrchardError::Config(format!(
                    "Mount '{}' must have the form HOST:CONTAINER[:MODE].",
                    mount
                )))
            })?;
            if host.is_empty() || rest.is_empty() {
                return Err(anyhow!(OrchardError::Config(format!(
                    "Mount '{}' has an empty host or container path.",
                    mount
                ))));
            }
            Ok(format!("{}:{}", shellexpand::tilde(host), rest))
        })
        .collect::<Result<Vec<_>>>()
        .context("Failed to prepare container mounts")
}

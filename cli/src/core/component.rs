//! # Orchard Data Model
//!
//! File: cli/src/core/component.rs
//!
//! ## Overview
//!
//! Records persisted by the configuration store:
//! - `Component`: one container-backed unit (identity, image, networking,
//!   health-check URL).
//! - `Profile`: an ordered catalog of components, saved as `profile-<name>.yaml`.
//! - `Config`: the active profile name and repository prefix, saved as `Config.yaml`.
//!
//! Field names on disk follow the established file format, so the Rust names
//! are mapped with `serde(rename_all)`. Optional fields are left out of the
//! YAML when empty.
//!
use crate::core::error::{OrchardError, Result};
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One manageable unit of the development environment.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Unique key within a profile.
    pub name: String,
    /// Container name used for every Docker call.
    pub docker_id: String,
    /// Health-check URL. Empty means no health check.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub test_url: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub container_port: u16,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub host_port: u16,
    /// Auth strategy tag for pulls; also opts the image into the repository prefix.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub repository: String,
    /// `KEY=VALUE` entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<String>,
    /// `container[:alias]` entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<String>,
    /// `host:container[:ro]` bind entries.
    #[serde(default, alias = "volumes", skip_serializing_if = "Vec::is_empty")]
    pub mounts: Vec<String>,
}

fn is_zero(port: &u16) -> bool {
    *port == 0
}

impl Component {
    /// `(host, container)` when both ports are set.
    pub fn port_mapping(&self) -> Option<(u16, u16)> {
        if self.host_port > 0 && self.container_port > 0 {
            Some((self.host_port, self.container_port))
        } else {
            None
        }
    }

    /// Image reference to pull and run.
    ///
    /// Components tagged with a `repository` are served from the configured
    /// prefix; everything else uses `image` unchanged.
    pub fn image_ref(&self, repository_prefix: &str) -> String {
        let prefix = repository_prefix.trim_end_matches('/');
        if self.repository.is_empty() || prefix.is_empty() {
            self.image.clone()
        } else {
            format!("{}/{}", prefix, self.image)
        }
    }
}

/// A named catalog of components.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Profile {
    #[serde(default)]
    pub components: Vec<Component>,
    /// Where the profile's component definitions originate, if tracked.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub repository: String,
}

impl Profile {
    pub fn find(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Component names in catalog order.
    pub fn names(&self) -> Vec<String> {
        self.components.iter().map(|c| c.name.clone()).collect()
    }

    /// Rejects duplicate names and components missing a required field.
    pub fn validate(&self, profile_name: &str) -> Result<()> {
        let mut seen = HashSet::new();
        for (index, c) in self.components.iter().enumerate() {
            if c.name.trim().is_empty() {
                return Err(anyhow!(OrchardError::Config(format!(
                    "Component #{} in profile '{}' has an empty name.",
                    index + 1,
                    profile_name
                ))));
            }
            if c.docker_id.trim().is_empty() || c.image.trim().is_empty() {
                return Err(anyhow!(OrchardError::Config(format!(
                    "Component '{}' in profile '{}' needs both dockerId and image.",
                    c.name, profile_name
                ))));
            }
            if !seen.insert(c.name.as_str()) {
                return Err(anyhow!(OrchardError::DuplicateComponent {
                    name: c.name.clone(),
                    profile: profile_name.to_string(),
                }));
            }
        }
        Ok(())
    }
}

/// Process-wide settings: which profile is active and where tagged images live.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Config {
    #[serde(default)]
    pub profile: String,
    #[serde(default)]
    pub repository_prefix: String,
}

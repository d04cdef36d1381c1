//! # Orchard Image Pulls
//!
//! File: cli/src/common/docker/images.rs
//!
//! ## Overview
//!
//! Pulls component images and picks registry credentials from the
//! component's `repository` tag:
//! - empty: anonymous pull
//! - `env`: `ORCHARD_REGISTRY_USERNAME` / `ORCHARD_REGISTRY_PASSWORD`
//! - anything else: unsupported, logged, anonymous pull
//!
use crate::core::error::{OrchardError, Result};
use anyhow::anyhow;
use bollard::{auth::DockerCredentials, image::CreateImageOptions, Docker};
use futures_util::stream::StreamExt;
use tracing::{debug, info, instrument, warn};

pub const ENV_AUTH: &str = "env";
pub const USERNAME_VAR: &str = "ORCHARD_REGISTRY_USERNAME";
pub const PASSWORD_VAR: &str = "ORCHARD_REGISTRY_PASSWORD";

#[instrument(skip(docker, credentials), fields(image = %image_ref))]
pub async fn pull_image(
    docker: &Docker,
    image_ref: &str,
    credentials: Option<DockerCredentials>,
) -> Result<()> {
    let (repository, tag) = split_image_ref(image_ref);
    info!("Pulling image '{}:{}'...", repository, tag);

    let options = Some(CreateImageOptions {
        from_image: repository.to_string(),
        tag: tag.to_string(),
        ..Default::default()
    });
    let mut stream = docker.create_image(options, None, credentials);

    while let Some(event) = stream.next().await {
        match event {
            Ok(info) => {
                if let Some(status) = info.status {
                    debug!(
                        "{} {} {}",
                        info.id.unwrap_or_default(),
                        status,
                        info.progress.unwrap_or_default()
                    );
                }
            }
            Err(e) => {
                return Err(anyhow!(OrchardError::DockerApi { source: e })
                    .context(format!("Failed to pull image '{}'", image_ref)));
            }
        }
    }

    info!("Image '{}' is up to date.", image_ref);
    Ok(())
}

/// Splits `name[:tag]` into name and tag, defaulting the tag to `latest`.
/// Digest references are passed through whole with an empty tag.
pub fn split_image_ref(image_ref: &str) -> (&str, &str) {
    if image_ref.contains('@') {
        return (image_ref, "");
    }
    let last_segment_start = image_ref.rfind('/').map_or(0, |i| i + 1);
    match image_ref[last_segment_start..].rfind(':') {
        Some(i) => {
            let split = last_segment_start + i;
            (&image_ref[..split], &image_ref[split + 1..])
        }
        None => (image_ref, "latest"),
    }
}

/// Credentials for the component's auth tag, if any apply.
pub fn registry_credentials(auth_tag: &str, image_ref: &str) -> Option<DockerCredentials> {
    match auth_tag {
        "" => None,
        ENV_AUTH => {
            let username = std::env::var(USERNAME_VAR).ok();
            let password = std::env::var(PASSWORD_VAR).ok();
            if username.is_none() || password.is_none() {
                warn!(
                    "Repository auth 'env' selected but {} / {} are not set; pulling anonymously.",
                    USERNAME_VAR, PASSWORD_VAR
                );
                return None;
            }
            Some(DockerCredentials {
                username,
                password,
                serveraddress: registry_host(image_ref).map(String::from),
                ..Default::default()
            })
        }
        other => {
            warn!(
                "Unsupported repository auth '{}'; pulling '{}' anonymously.",
                other, image_ref
            );
            None
        }
    }
}

/// Registry host of a reference, when its first segment names one.
fn registry_host(image_ref: &str) -> Option<&str> {
    let (first, _) = image_ref.split_once('/')?;
    if first.contains('.') || first.contains(':') || first == "localhost" {
        Some(first)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_image_ref() {
        assert_eq!(split_image_ref("redis"), ("redis", "latest"));
        assert_eq!(split_image_ref("redis:7"), ("redis", "7"));
        assert_eq!(
            split_image_ref("registry.local:5000/team/api"),
            ("registry.local:5000/team/api", "latest")
        );
        assert_eq!(
            split_image_ref("registry.local:5000/team/api:1.2"),
            ("registry.local:5000/team/api", "1.2")
        );
        assert_eq!(
            split_image_ref("redis@sha256:abcd"),
            ("redis@sha256:abcd", "")
        );
    }

    #[test]
    fn test_registry_host() {
        assert_eq!(
            registry_host("registry.local:5000/team/api"),
            Some("registry.local:5000")
        );
        assert_eq!(registry_host("localhost/api"), Some("localhost"));
        assert_eq!(registry_host("team/api"), None);
        assert_eq!(registry_host("api"), None);
    }

    #[test]
    fn test_no_credentials_without_auth_tag() {
        assert!(registry_credentials("", "redis:7").is_none());
        assert!(registry_credentials("ecr-eu-west-1", "redis:7").is_none());
    }
}

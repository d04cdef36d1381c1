//! # Orchard Configuration Store
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module persists and loads profiles and the process-wide `Config`.
//! Callers talk to the `ConfigProvider` trait; `FileConfigProvider` is the
//! on-disk implementation used by the binary.
//!
//! ## Layout
//!
//! The config root (default `~/.orchard`) contains:
//! - `Config.yaml`: `{Profile, RepositoryPrefix}`
//! - `profile-<name>.yaml`: `{Components: [...]}` per known profile
//!
//! The root is resolved once at startup (`--home`, then `ORCHARD_HOME`, then
//! the home directory). `Config.yaml` is loaded once per invocation and only
//! written back by the `config` module's actions.
//!
use crate::core::component::{Component, Config, Profile};
use crate::core::error::{OrchardError, Result};
use anyhow::{anyhow, Context};
use std::{fs, path::PathBuf};
use tracing::{debug, info};

pub const CONFIG_FILENAME: &str = "Config.yaml";
pub const DEFAULT_PROFILE: &str = "default";
const PROFILE_PREFIX: &str = "profile-";
const PROFILE_SUFFIX: &str = ".yaml";
const DEFAULT_DIR_NAME: &str = ".orchard";

/// Persistence and lookup of profiles and the active `Config`.
pub trait ConfigProvider {
    /// Reads `Config.yaml` and the profile it names.
    fn load_config(&mut self) -> Result<()>;
    fn save_config(&self) -> Result<()>;
    fn config_exists(&self) -> bool;
    fn load_profile(&self, name: &str) -> Result<Profile>;
    fn save_profile(&self, name: &str, profile: &Profile) -> Result<()>;
    fn current_profile(&self) -> &Profile;
    /// Makes `profile` the active one in memory; persist with `save_config`.
    fn set_profile(&mut self, name: &str, profile: Profile);
    /// Known profile names, sorted.
    fn available_profiles(&self) -> Result<Vec<String>>;
    fn config(&self) -> &Config;
    fn set_repository_prefix(&mut self, url: &str);
}

/// Resolves the config root: explicit override, else `~/.orchard`.
pub fn resolve_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(PathBuf::from(
            shellexpand::tilde(&path.to_string_lossy()).into_owned(),
        ));
    }
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_DIR_NAME))
        .ok_or_else(|| {
            anyhow!(OrchardError::Config(
                "Could not determine the home directory. Use --home or ORCHARD_HOME.".into()
            ))
        })
}

/// YAML-file backed `ConfigProvider`.
#[derive(Debug)]
pub struct FileConfigProvider {
    root: PathBuf,
    config: Config,
    profile: Profile,
}

impl FileConfigProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config: Config::default(),
            profile: Profile::default(),
        }
    }

    fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILENAME)
    }

    fn profile_path(&self, name: &str) -> PathBuf {
        self.root
            .join(format!("{}{}{}", PROFILE_PREFIX, name, PROFILE_SUFFIX))
    }
}

impl ConfigProvider for FileConfigProvider {
    fn load_config(&mut self) -> Result<()> {
        let path = self.config_path();
        let load_err = |reason: String| {
            anyhow!(OrchardError::ConfigLoad {
                path: path.display().to_string(),
                reason,
            })
        };

        let content = fs::read_to_string(&path).map_err(|e| {
            load_err(format!("{}. Run 'orchard config init' to create it.", e))
        })?;
        let config: Config =
            serde_yaml::from_str(&content).map_err(|e| load_err(e.to_string()))?;
        if config.profile.trim().is_empty() {
            return Err(load_err("no active profile is set".into()));
        }

        let profile = self
            .load_profile(&config.profile)
            .map_err(|e| load_err(format!("{:#}", e)))?;
        debug!(
            "Loaded config from {} (profile '{}', {} components)",
            path.display(),
            config.profile,
            profile.components.len()
        );
        self.config = config;
        self.profile = profile;
        Ok(())
    }

    fn save_config(&self) -> Result<()> {
        fs::create_dir_all(&self.root).with_context(|| {
            format!("Failed to create config directory: {}", self.root.display())
        })?;
        let path = self.config_path();
        let content =
            serde_yaml::to_string(&self.config).context("Failed to serialize configuration")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;
        info!("Saved configuration to {}", path.display());
        Ok(())
    }

    fn config_exists(&self) -> bool {
        self.config_path().is_file()
    }

    fn load_profile(&self, name: &str) -> Result<Profile> {
        validate_profile_name(name)?;
        let path = self.profile_path(name);
        if !path.is_file() {
            return Err(anyhow!(OrchardError::ProfileNotFound {
                name: name.to_string()
            }));
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read profile file: {}", path.display()))?;
        let profile: Profile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML from file: {}", path.display()))?;
        profile.validate(name)?;
        Ok(profile)
    }

    fn save_profile(&self, name: &str, profile: &Profile) -> Result<()> {
        validate_profile_name(name)?;
        profile.validate(name)?;
        fs::create_dir_all(&self.root).with_context(|| {
            format!("Failed to create config directory: {}", self.root.display())
        })?;
        let path = self.profile_path(name);
        let content = serde_yaml::to_string(profile)
            .with_context(|| format!("Failed to serialize profile '{}'", name))?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write profile file: {}", path.display()))?;
        info!("Saved profile '{}' to {}", name, path.display());
        Ok(())
    }

    fn current_profile(&self) -> &Profile {
        &self.profile
    }

    fn set_profile(&mut self, name: &str, profile: Profile) {
        self.config.profile = name.to_string();
        self.profile = profile;
    }

    fn available_profiles(&self) -> Result<Vec<String>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(&self.root)
            .with_context(|| format!("Failed to list config directory: {}", self.root.display()))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();
            if let Some(name) = file_name
                .strip_prefix(PROFILE_PREFIX)
                .and_then(|rest| rest.strip_suffix(PROFILE_SUFFIX))
            {
                if !name.is_empty() {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn config(&self) -> &Config {
        &self.config
    }

    fn set_repository_prefix(&mut self, url: &str) {
        self.config.repository_prefix = url.to_string();
    }
}

/// Profile names become file names, so keep them to one path segment.
pub fn validate_profile_name(name: &str) -> Result<()> {
    if name.trim().is_empty()
        || name.contains('/')
        || name.contains('\\')
        || name == "."
        || name == ".."
    {
        return Err(anyhow!(OrchardError::Config(format!(
            "Invalid profile name '{}'.",
            name
        ))));
    }
    Ok(())
}

/// The catalog written by `config init`.
pub fn starter_profile() -> Profile {
    Profile {
        components: vec![
            Component {
                name: "db".into(),
                docker_id: "orchard-db".into(),
                image: "postgres:16".into(),
                container_port: 5432,
                host_port: 5432,
                env: vec!["POSTGRES_PASSWORD=orchard".into()],
                ..Default::default()
            },
            Component {
                name: "redis".into(),
                docker_id: "orchard-redis".into(),
                image: "redis:7".into(),
                container_port: 6379,
                host_port: 6379,
                ..Default::default()
            },
        ],
        ..Default::default()
    }
}

//! In-memory collaborators for unit tests: a config provider that never
//! touches disk and a runner that records every call.

use crate::core::component::{Component, Config, Profile};
use crate::core::config::ConfigProvider;
use crate::core::context::Context;
use crate::core::error::{OrchardError, Result};
use crate::core::runner::{ComponentRunner, ContainerStatus};
use anyhow::anyhow;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::rc::Rc;

pub fn component(name: &str) -> Component {
    Component {
        name: name.into(),
        docker_id: format!("orchard-{}", name),
        image: format!("{}:latest", name),
        ..Default::default()
    }
}

pub fn profile(names: &[&str]) -> Profile {
    Profile {
        components: names.iter().map(|n| component(n)).collect(),
        ..Default::default()
    }
}

#[derive(Default)]
pub struct MemoryConfigProvider {
    pub config: Config,
    pub profile: Profile,
    pub stored: RefCell<BTreeMap<String, Profile>>,
    pub saved_configs: Rc<RefCell<Vec<Config>>>,
}

impl MemoryConfigProvider {
    pub fn with_profile(name: &str, profile: Profile) -> Self {
        let provider = Self {
            config: Config {
                profile: name.into(),
                repository_prefix: String::new(),
            },
            profile: profile.clone(),
            ..Default::default()
        };
        provider.stored.borrow_mut().insert(name.into(), profile);
        provider
    }
}

impl ConfigProvider for MemoryConfigProvider {
    fn load_config(&mut self) -> Result<()> {
        Ok(())
    }

    fn save_config(&self) -> Result<()> {
        self.saved_configs.borrow_mut().push(self.config.clone());
        Ok(())
    }

    fn config_exists(&self) -> bool {
        !self.saved_configs.borrow().is_empty()
    }

    fn load_profile(&self, name: &str) -> Result<Profile> {
        let profile = self.stored.borrow().get(name).cloned().ok_or_else(|| {
            anyhow!(OrchardError::ProfileNotFound {
                name: name.to_string()
            })
        })?;
        profile.validate(name)?;
        Ok(profile)
    }

    fn save_profile(&self, name: &str, profile: &Profile) -> Result<()> {
        profile.validate(name)?;
        self.stored
            .borrow_mut()
            .insert(name.to_string(), profile.clone());
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
        Ok(self.stored.borrow().keys().cloned().collect())
    }

    fn config(&self) -> &Config {
        &self.config
    }

    fn set_repository_prefix(&mut self, url: &str) {
        self.config.repository_prefix = url.to_string();
    }
}

/// Records `"<op> <name>"` for every call; fails the pairs listed in `failures`.
#[derive(Default, Clone)]
pub struct RecordingRunner {
    pub calls: Rc<RefCell<Vec<String>>>,
    pub failures: HashSet<String>,
}

impl RecordingRunner {
    pub fn failing(ops: &[&str]) -> Self {
        Self {
            failures: ops.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn record(&self, op: &str, component: &Component) -> Result<()> {
        let call = format!("{} {}", op, component.name);
        self.calls.borrow_mut().push(call.clone());
        if self.failures.contains(&call) {
            Err(anyhow!(OrchardError::Docker(format!("{} failed", call))))
        } else {
            Ok(())
        }
    }
}

impl ComponentRunner for RecordingRunner {
    fn pull(&self, component: &Component, _image_ref: &str) -> Result<()> {
        self.record("pull", component)
    }

    fn create(&self, component: &Component, _image_ref: &str) -> Result<()> {
        self.record("create", component)
    }

    fn start(&self, component: &Component) -> Result<()> {
        self.record("start", component)
    }

    fn stop(&self, component: &Component) -> Result<()> {
        self.record("stop", component)
    }

    fn remove(&self, component: &Component) -> Result<()> {
        self.record("remove", component)
    }

    fn logs(&self, component: &Component, _tail: usize) -> Result<()> {
        self.record("logs", component)
    }

    fn status(&self, component: &Component) -> Result<ContainerStatus> {
        self.record("status", component)?;
        Ok(ContainerStatus {
            state: "running".into(),
            started_at: None,
            ports: vec![],
        })
    }
}

/// Context over `names` in a profile called `default`, plus the runner's call log.
pub fn context(names: &[&str], runner: RecordingRunner) -> (Context, Rc<RefCell<Vec<String>>>) {
    let calls = runner.calls.clone();
    let provider = MemoryConfigProvider::with_profile("default", profile(names));
    (Context::new(Box::new(provider), Box::new(runner)), calls)
}

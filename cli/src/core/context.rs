//! # Invocation Context
//!
//! File: cli/src/core/context.rs
//!
//! A `Context` bundles the collaborators one CLI invocation needs: the
//! configuration provider and the component runner. It is built once in
//! `main` and passed explicitly to every action and handler. Logging goes
//! through `tracing`'s global subscriber instead of a field here.
//!
use crate::core::component::{Config, Profile};
use crate::core::config::ConfigProvider;
use crate::core::runner::ComponentRunner;

pub struct Context {
    config: Box<dyn ConfigProvider>,
    runner: Box<dyn ComponentRunner>,
}

impl Context {
    pub fn new(config: Box<dyn ConfigProvider>, runner: Box<dyn ComponentRunner>) -> Self {
        Self { config, runner }
    }

    pub fn provider(&self) -> &dyn ConfigProvider {
        self.config.as_ref()
    }

    pub fn provider_mut(&mut self) -> &mut dyn ConfigProvider {
        self.config.as_mut()
    }

    pub fn runner(&self) -> &dyn ComponentRunner {
        self.runner.as_ref()
    }

    /// Shorthand for `provider().config()`.
    pub fn config(&self) -> &Config {
        self.config.config()
    }

    /// Shorthand for `provider().current_profile()`.
    pub fn profile(&self) -> &Profile {
        self.config.current_profile()
    }
}

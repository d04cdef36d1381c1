//! # Component Runner Interface
//!
//! File: cli/src/core/runner.rs
//!
//! The container-engine seam. Handlers in the `local` module only ever talk
//! to a `ComponentRunner`; the Docker implementation lives in
//! `common::docker::runner`, and tests substitute a recording fake.
//!
use crate::core::component::Component;
use crate::core::error::Result;

/// Container lifecycle operations for a single component.
pub trait ComponentRunner {
    fn pull(&self, component: &Component, image_ref: &str) -> Result<()>;
    fn create(&self, component: &Component, image_ref: &str) -> Result<()>;
    fn start(&self, component: &Component) -> Result<()>;
    fn stop(&self, component: &Component) -> Result<()>;
    fn remove(&self, component: &Component) -> Result<()>;
    /// Prints the last `tail` lines of the container's output.
    fn logs(&self, component: &Component, tail: usize) -> Result<()>;
    fn status(&self, component: &Component) -> Result<ContainerStatus>;
}

/// Snapshot of one component's container, as shown by `local status`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerStatus {
    /// Engine state (`running`, `exited`, ...) or `missing`.
    pub state: String,
    /// RFC 3339 start time, when the engine reports one.
    pub started_at: Option<String>,
    /// Published ports, rendered as `host->container/proto`.
    pub ports: Vec<String>,
}

impl ContainerStatus {
    pub const MISSING: &'static str = "missing";

    pub fn missing() -> Self {
        Self {
            state: Self::MISSING.to_string(),
            ..Default::default()
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == "running"
    }
}

//! # Docker Component Runner
//!
//! File: cli/src/common/docker/runner.rs
//!
//! ## Overview
//!
//! `DockerRunner` implements `ComponentRunner` on top of the async helpers in
//! this module. It owns a current-thread `tokio` runtime and blocks on each
//! call, so every component operation completes before the next begins and
//! the rest of the CLI stays synchronous.
//!
//! The daemon connection is made lazily on the first Docker call; commands
//! that never touch a container (`config ...`, `update ...`) do not need a
//! daemon at all.
//!
use crate::core::component::Component;
use crate::core::error::Result;
use crate::core::runner::{ComponentRunner, ContainerStatus};
use anyhow::Context;
use bollard::Docker;
use std::cell::OnceCell;
use std::future::Future;
use tokio::runtime::{Builder, Runtime};

use super::{connect, images, interaction, lifecycle, operations, state};

pub struct DockerRunner {
    runtime: Runtime,
    docker: OnceCell<Docker>,
}

impl DockerRunner {
    pub fn new() -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start the async runtime for Docker calls")?;
        Ok(Self {
            runtime,
            docker: OnceCell::new(),
        })
    }

    fn docker(&self) -> Result<&Docker> {
        if let Some(docker) = self.docker.get() {
            return Ok(docker);
        }
        let docker = self.block_on(connect::connect_docker())?;
        Ok(self.docker.get_or_init(|| docker))
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}

impl ComponentRunner for DockerRunner {
    fn pull(&self, component: &Component, image_ref: &str) -> Result<()> {
        let docker = self.docker()?;
        let credentials = images::registry_credentials(&component.repository, image_ref);
        self.block_on(images::pull_image(docker, image_ref, credentials))
    }

    fn create(&self, component: &Component, image_ref: &str) -> Result<()> {
        let docker = self.docker()?;
        self.block_on(operations::create_container(docker, component, image_ref))
    }

    fn start(&self, component: &Component) -> Result<()> {
        let docker = self.docker()?;
        self.block_on(lifecycle::start_container(docker, &component.docker_id))
    }

    fn stop(&self, component: &Component) -> Result<()> {
        let docker = self.docker()?;
        self.block_on(lifecycle::stop_container(docker, &component.docker_id))
    }

    fn remove(&self, component: &Component) -> Result<()> {
        let docker = self.docker()?;
        self.block_on(lifecycle::remove_container(docker, &component.docker_id))
    }

    fn logs(&self, component: &Component, tail: usize) -> Result<()> {
        let docker = self.docker()?;
        self.block_on(interaction::get_container_logs(
            docker,
            &component.docker_id,
            tail,
        ))
    }

    fn status(&self, component: &Component) -> Result<ContainerStatus> {
        let docker = self.docker()?;
        self.block_on(state::container_status(docker, &component.docker_id))
    }
}

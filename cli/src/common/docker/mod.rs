//! # Orchard Docker Utilities
//!
//! File: cli/src/common/docker/mod.rs
//!
//! ## Overview
//!
//! Everything that talks to the Docker Engine API through `bollard`. The
//! async helpers take a borrowed `Docker` client; `runner::DockerRunner`
//! owns the client and the runtime and exposes them as a `ComponentRunner`.
//!

/// Establishing the daemon connection.
pub mod connect;
/// Image pulls and registry credentials.
pub mod images;
/// Reading container output.
pub mod interaction;
/// Start, stop and remove.
pub mod lifecycle;
/// Building the create-container request from a component.
pub mod operations;
/// The `ComponentRunner` implementation.
pub mod runner;
/// Existence and status queries.
pub mod state;

pub use runner::DockerRunner;

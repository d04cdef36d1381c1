//! # Orchard Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared plumbing used by the command modules, kept apart from the
//! dispatch/resolution core in `core::`:
//!
//! - **`archive`**: extracting files from gzipped tarballs (self-update).
//! - **`docker`**: the `bollard`-based container runner.
//! - **`network`**: HTTP client construction and component health checks.
//! - **`ui`**: plain-text table rendering.
//!

/// Reading release archives.
pub mod archive;
/// Docker Engine access and the `DockerRunner`.
pub mod docker;
/// HTTP client and health pings.
pub mod network;
/// Terminal tables.
pub mod ui;

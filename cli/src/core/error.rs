//! # Orchard Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error taxonomy used throughout Orchard. Specific
//! failures are variants of `OrchardError` (derived with `thiserror`); everything
//! travels as `anyhow::Error` so callers can attach context on the way up.
//!
//! ## Architecture
//!
//! - `OrchardError`: the typed failures callers may want to match on
//!   (component resolution, dispatch lookups, config store problems, Docker).
//! - `Result<T>`: alias for `anyhow::Result<T>`.
//!
//! Lookup errors carry the list of valid alternatives so the message printed
//! to the user already tells them what they could have typed.
//!
//! ## Examples
//!
//! ```rust
//! match result {
//!     Err(e) if e.downcast_ref::<OrchardError>().is_some_and(|oe| matches!(oe, OrchardError::ComponentNotFound { .. })) => {
//!         println!("No such component");
//!     }
//!     other => other?,
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the Orchard application.
#[derive(Error, Debug)]
pub enum OrchardError {
    #[error("Failed to load configuration from '{path}': {reason}")]
    ConfigLoad { path: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing component name. Available components: {}", join_or_none(.available))]
    MissingArgument { available: Vec<String> },

    #[error("Component '{name}' not found in the active profile.")]
    ComponentNotFound { name: String },

    #[error("Component name '{name}' appears more than once in profile '{profile}'.")]
    DuplicateComponent { name: String, profile: String },

    #[error("Profile '{name}' not found.")]
    ProfileNotFound { name: String },

    #[error("Profile '{name}' already exists.")]
    ProfileExists { name: String },

    #[error("Unknown module '{name}'. Available modules: {}", join_or_none(.available))]
    UnknownModule { name: String, available: Vec<String> },

    #[error("Unknown action '{name}' for module '{module}'. Available actions: {}", join_or_none(.available))]
    UnknownAction {
        module: String,
        name: String,
        available: Vec<String>,
    },

    #[error("Docker error: {0}")]
    Docker(String),

    #[error("Docker API interaction failed: {source}")]
    DockerApi {
        #[from]
        source: bollard::errors::Error,
    },

    #[error("Health check failed for '{url}': {reason}")]
    HealthCheck { url: String, reason: String },

    #[error("Update failed: {0}")]
    Update(String),

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "<none>".to_string()
    } else {
        items.join(", ")
    }
}

/// Type alias for Result using anyhow::Error.
pub type Result<T> = anyhow::Result<T>;

//! # Module Dispatcher
//!
//! File: cli/src/core/dispatch.rs
//!
//! ## Overview
//!
//! Resolves `<module> [action]` against a static `Registry` and runs the
//! selected `Action` with the remaining arguments.
//!
//! ## Exit codes
//!
//! - `0`: the action succeeded
//! - `1`: configuration could not be loaded, or the module/action is unknown
//! - `2`: the action ran and returned an error
//!
//! `DispatchError` keeps lookup failures apart from action failures so `main`
//! can map each to its exit code.
//!
use crate::core::action::Action;
use crate::core::context::Context;
use crate::core::error::{OrchardError, Result};
use anyhow::anyhow;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Instant;
use tracing::{debug, info};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_DISPATCH_FAILURE: i32 = 1;
pub const EXIT_ACTION_FAILURE: i32 = 2;

/// Action used when the command line names only a module.
pub const DEFAULT_ACTION: &str = "default";

/// Actions of one module, keyed by the name typed on the command line.
pub type ActionMap = BTreeMap<&'static str, Box<dyn Action>>;

/// A named group of related actions.
pub trait Module {
    fn name(&self) -> &'static str;
    fn actions(&self) -> ActionMap;
}

/// Static table of the modules the CLI exposes.
#[derive(Default)]
pub struct Registry {
    modules: BTreeMap<&'static str, Box<dyn Module>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, module: impl Module + 'static) -> Self {
        self.modules.insert(module.name(), Box::new(module));
        self
    }

    /// Registered module names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.modules.keys().map(|k| k.to_string()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&dyn Module> {
        self.modules.get(name).map(|m| m.as_ref())
    }
}

#[derive(Debug)]
pub enum DispatchError {
    /// Configuration or runtime setup failed before dispatch.
    Setup(anyhow::Error),
    /// Unknown module or action.
    Lookup(anyhow::Error),
    /// The action itself failed.
    Action(anyhow::Error),
}

impl DispatchError {
    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchError::Setup(_) | DispatchError::Lookup(_) => EXIT_DISPATCH_FAILURE,
            DispatchError::Action(_) => EXIT_ACTION_FAILURE,
        }
    }

    pub fn error(&self) -> &anyhow::Error {
        match self {
            DispatchError::Setup(e) | DispatchError::Lookup(e) | DispatchError::Action(e) => e,
        }
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#}", self.error())
    }
}

pub fn dispatch(
    ctx: &mut Context,
    registry: &Registry,
    module_name: &str,
    action_name: &str,
    args: &[String],
) -> std::result::Result<(), DispatchError> {
    let module = registry.get(module_name).ok_or_else(|| {
        DispatchError::Lookup(anyhow!(OrchardError::UnknownModule {
            name: module_name.to_string(),
            available: registry.names(),
        }))
    })?;

    let actions = module.actions();
    let action = actions.get(action_name).ok_or_else(|| {
        DispatchError::Lookup(anyhow!(OrchardError::UnknownAction {
            module: module_name.to_string(),
            name: action_name.to_string(),
            available: actions.keys().map(|k| k.to_string()).collect(),
        }))
    })?;

    debug!("Dispatching {} {} with args {:?}", module_name, action_name, args);
    let started = Instant::now();
    let result: Result<()> = action.run(ctx, args);
    info!(
        "{} {} finished in {:.2?}",
        module_name,
        action_name,
        started.elapsed()
    );
    result.map_err(DispatchError::Action)
}

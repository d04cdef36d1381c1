//! # Orchard Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! The pieces every command builds on:
//! - `component`: the Component / Profile / Config records
//! - `config`: the `ConfigProvider` trait and its YAML-file implementation
//! - `context`: the per-invocation bundle of collaborators
//! - `runner`: the `ComponentRunner` seam over the container engine
//! - `action`: the `Action` / `ComponentHandler` abstractions and `Composite`
//! - `resolver`: name resolution with single-strict / batch-lenient error policy
//! - `dispatch`: module/action lookup and exit-code mapping
//! - `error`: the `OrchardError` taxonomy
//!
pub mod action;
pub mod component;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod resolver;
pub mod runner;

#[cfg(test)]
pub mod testing;

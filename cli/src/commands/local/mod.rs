//! # Orchard Local Command Group
//!
//! File: cli/src/commands/local/mod.rs
//!
//! ## Overview
//!
//! The `local` module manages the active profile's components as containers
//! on this machine. Component-scoped actions take names (or `all`) and go
//! through the resolver, so a single name fails loudly while batches are
//! best effort.
//!
//! ## Actions
//!
//! | Action    | Steps                                   |
//! |-----------|-----------------------------------------|
//! | `create`  | create                                  |
//! | `start`   | start                                   |
//! | `stop`    | stop                                    |
//! | `remove`  | remove                                  |
//! | `pull`    | pull                                    |
//! | `logs`    | print the last lines of output          |
//! | `test`    | ping the component's test URL           |
//! | `raise`   | create, start                           |
//! | `replace` | stop, remove, create, start             |
//! | `update`  | pull, stop, remove, create, start       |
//! | `status`  | status table (`default`)                |
//! | `list`    | the component catalog                   |
//!
//! ## Examples
//!
//! ```bash
//! orchard local raise db
//! orchard local replace db redis
//! orchard local status -v -f 10
//! ```
//!
use crate::core::action::{ComponentAction, ComponentHandler, Composite};
use crate::core::dispatch::{ActionMap, Module, DEFAULT_ACTION};

/// Single-step handlers and the composites built from them.
mod lifecycle;
/// `local list`.
mod list;
/// `local status`.
mod status;

pub struct LocalModule;

impl Module for LocalModule {
    fn name(&self) -> &'static str {
        "local"
    }

    fn actions(&self) -> ActionMap {
        let mut actions = ActionMap::new();
        actions.insert("create", Box::new(ComponentAction::new(lifecycle::create)));
        actions.insert("start", Box::new(ComponentAction::new(lifecycle::start)));
        actions.insert("stop", Box::new(ComponentAction::new(lifecycle::stop)));
        actions.insert("remove", Box::new(ComponentAction::new(lifecycle::remove)));
        actions.insert("pull", Box::new(ComponentAction::new(lifecycle::pull)));
        actions.insert("logs", Box::new(ComponentAction::new(lifecycle::logs)));
        actions.insert("test", Box::new(ComponentAction::new(lifecycle::test)));
        actions.insert("raise", Box::new(ComponentAction::new(raise())));
        actions.insert("replace", Box::new(ComponentAction::new(replace())));
        actions.insert("update", Box::new(ComponentAction::new(update())));
        actions.insert("status", Box::new(status::handle_status));
        actions.insert(DEFAULT_ACTION, Box::new(status::handle_status));
        actions.insert("list", Box::new(list::handle_list));
        actions
    }
}

fn step<H: ComponentHandler + 'static>(handler: H) -> Box<dyn ComponentHandler> {
    Box::new(handler)
}

/// Create then start.
fn raise() -> Composite {
    Composite::new(vec![step(lifecycle::create), step(lifecycle::start)])
}

/// Recreate the container from the current image.
fn replace() -> Composite {
    Composite::new(vec![
        step(lifecycle::stop),
        step(lifecycle::remove),
        step(lifecycle::create),
        step(lifecycle::start),
    ])
}

/// Recreate the container from a freshly pulled image.
fn update() -> Composite {
    Composite::new(vec![
        step(lifecycle::pull),
        step(lifecycle::stop),
        step(lifecycle::remove),
        step(lifecycle::create),
        step(lifecycle::start),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dispatch::dispatch;
    use crate::core::testing::{self, RecordingRunner};

    fn run(names: &[&str], runner: RecordingRunner, action: &str, args: &[&str]) -> (bool, Vec<String>) {
        let (mut ctx, calls) = testing::context(names, runner);
        let registry = crate::commands::registry();
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let ok = dispatch(&mut ctx, &registry, "local", action, &args).is_ok();
        let calls = calls.borrow().clone();
        (ok, calls)
    }

    #[test]
    fn test_raise_creates_then_starts() {
        let (ok, calls) = run(&["db"], RecordingRunner::default(), "raise", &["db"]);
        assert!(ok);
        assert_eq!(calls, vec!["create db", "start db"]);
    }

    #[test]
    fn test_replace_runs_four_steps_in_order() {
        let (ok, calls) = run(&["db"], RecordingRunner::default(), "replace", &["db"]);
        assert!(ok);
        assert_eq!(calls, vec!["stop db", "remove db", "create db", "start db"]);
    }

    #[test]
    fn test_update_pulls_first() {
        let (ok, calls) = run(&["db"], RecordingRunner::default(), "update", &["db"]);
        assert!(ok);
        assert_eq!(
            calls,
            vec!["pull db", "stop db", "remove db", "create db", "start db"]
        );
    }

    #[test]
    fn test_replace_stops_at_failed_remove_for_single_target() {
        let (ok, calls) = run(
            &["db"],
            RecordingRunner::failing(&["remove db"]),
            "replace",
            &["db"],
        );
        assert!(!ok);
        assert_eq!(calls, vec!["stop db", "remove db"]);
    }

    #[test]
    fn test_replace_batch_continues_with_next_component() {
        let (ok, calls) = run(
            &["db", "redis"],
            RecordingRunner::failing(&["remove db"]),
            "replace",
            &["db", "redis"],
        );
        assert!(ok);
        assert_eq!(
            calls,
            vec![
                "stop db",
                "remove db",
                "stop redis",
                "remove redis",
                "create redis",
                "start redis"
            ]
        );
    }

    #[test]
    fn test_start_without_names_fails() {
        let (ok, calls) = run(&["db"], RecordingRunner::default(), "start", &[]);
        assert!(!ok);
        assert!(calls.is_empty());
    }
}

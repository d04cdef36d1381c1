//! # Actions and Component Handlers
//!
//! File: cli/src/core/action.rs
//!
//! ## Overview
//!
//! Two small traits let the dispatcher and the resolver treat every kind of
//! behaviour the same way:
//!
//! - `Action`: anything the dispatcher can invoke with the raw CLI arguments.
//!   Plain closures `Fn(&mut Context, &[String]) -> Result<()>` qualify.
//! - `ComponentHandler`: an operation on one resolved `Component`.
//!   Plain closures `Fn(&Context, &Component) -> Result<()>` qualify.
//!
//! `ComponentAction` adapts a handler into an action by running the argument
//! list through the resolver, and `Composite` chains several handlers into one.
//!
//! ## Examples
//!
//! ```rust
//! let raise = ComponentAction::new(Composite::new(vec![
//!     Box::new(handlers::create),
//!     Box::new(handlers::start),
//! ]));
//! raise.run(&mut ctx, &["db".to_string()])?;
//! ```
//!
use crate::core::component::Component;
use crate::core::context::Context;
use crate::core::error::Result;
use crate::core::resolver;

/// A uniform unit of CLI behaviour.
pub trait Action {
    fn run(&self, ctx: &mut Context, args: &[String]) -> Result<()>;
}

impl<F> Action for F
where
    F: Fn(&mut Context, &[String]) -> Result<()>,
{
    fn run(&self, ctx: &mut Context, args: &[String]) -> Result<()> {
        self(ctx, args)
    }
}

/// An operation applied to a single component.
pub trait ComponentHandler {
    fn handle(&self, ctx: &Context, component: &Component) -> Result<()>;
}

impl<F> ComponentHandler for F
where
    F: Fn(&Context, &Component) -> Result<()>,
{
    fn handle(&self, ctx: &Context, component: &Component) -> Result<()> {
        self(ctx, component)
    }
}

/// Runs its handler over the components named in the action arguments.
pub struct ComponentAction<H> {
    handler: H,
}

impl<H: ComponentHandler> ComponentAction<H> {
    pub fn new(handler: H) -> Self {
        Self { handler }
    }
}

impl<H: ComponentHandler> Action for ComponentAction<H> {
    fn run(&self, ctx: &mut Context, args: &[String]) -> Result<()> {
        resolver::for_each_component(ctx, args, &self.handler)
    }
}

/// Ordered handlers applied to the same component, stopping at the first failure.
pub struct Composite {
    steps: Vec<Box<dyn ComponentHandler>>,
}

impl Composite {
    pub fn new(steps: Vec<Box<dyn ComponentHandler>>) -> Self {
        Self { steps }
    }
}

impl ComponentHandler for Composite {
    fn handle(&self, ctx: &Context, component: &Component) -> Result<()> {
        for step in &self.steps {
            step.handle(ctx, component)?;
        }
        Ok(())
    }
}

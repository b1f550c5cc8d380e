//! The render runtime.
//!
//! A render pass walks a [`View`] tree and writes markup. Along the way
//! components register event listeners and request animations on the
//! [`RenderContext`]; both are committed only when the pass completes.
//!
//! - [`Renderer`]: Owns templates and the variant table, runs passes
//! - [`Root`]: A mounted tree that dispatches events and drives animations
//! - [`Environment`]: Reload and animation capabilities of the host
//! - [`RenderFault`]: The error a failing component raises
//!
//! Faults propagate as `Err` up the render call stack. An
//! [`ErrorBoundary`](crate::ErrorBoundary) in the path intercepts them;
//! anything else reaches the caller of the pass.

mod context;
mod environment;
mod event;
mod fault;
pub(crate) mod render;
mod renderer;
mod root;
mod templates;
mod view;

pub use context::RenderContext;
pub use environment::{
    Animation, AnimationHandle, Environment, Keyframe, RecordingEnvironment, Repeat, Timing,
};
pub use event::{handler, Event, EventError, EventHandler, Listener, RegisteredHandler};
pub use fault::{CapturedFault, FaultOrigin, RenderFault};
pub use renderer::Renderer;
pub use root::Root;
pub use templates::{TemplateView, Templates};
pub use view::{component_fn, Component, Element, FnComponent, View};

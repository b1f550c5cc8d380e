//! Per-pass render state.

use super::environment::Animation;
use super::event::{Listener, RegisteredHandler};
use super::fault::FaultOrigin;
use super::fault::RenderFault;
use super::render::render_view;
use super::renderer::Renderer;
use super::view::View;
use super::templates::Templates;
use crate::variant::VariantTable;

/// State collected while a render pass walks the view tree.
///
/// Handlers and animations registered here are only committed if the pass
/// completes; a boundary that intercepts a fault rolls back whatever its
/// failed subtree registered.
pub struct RenderContext<'a> {
    renderer: &'a Renderer,
    handlers: Vec<RegisteredHandler>,
    animations: Vec<Animation>,
    stack: Vec<&'static str>,
    origin: Option<FaultOrigin>,
    next_id: usize,
}

/// Registration counts at a point in the pass.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Checkpoint {
    handlers: usize,
    animations: usize,
}

impl<'a> RenderContext<'a> {
    pub(crate) fn new(renderer: &'a Renderer) -> Self {
        Self {
            renderer,
            handlers: Vec::new(),
            animations: Vec::new(),
            stack: Vec::new(),
            origin: None,
            next_id: 0,
        }
    }

    pub fn templates(&self) -> &'a Templates {
        self.renderer.templates()
    }

    /// The button variant table components resolve classes against.
    pub fn variants(&self) -> &'a VariantTable {
        self.renderer.variants()
    }

    /// Registers a listener and returns its handler id.
    pub fn register(&mut self, listener: Listener) -> String {
        let id = format!("h{}", self.next_id);
        self.next_id += 1;
        self.handlers.push(RegisteredHandler {
            id: id.clone(),
            listener,
        });
        id
    }

    /// Renders a child view to markup within this pass.
    ///
    /// Components use this to keep their children across passes: the child
    /// stays owned by the component and its markup is handed to a template
    /// slot. Listeners and faults behave as if the child were rendered in
    /// place.
    pub fn render(&mut self, view: &mut View) -> Result<String, RenderFault> {
        let mut out = String::new();
        render_view(view, self, &mut out)?;
        Ok(out)
    }

    /// Requests an animation, started when the pass is committed.
    pub fn animate(&mut self, animation: Animation) {
        self.animations.push(animation);
    }

    pub(crate) fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            handlers: self.handlers.len(),
            animations: self.animations.len(),
        }
    }

    pub(crate) fn rollback(&mut self, checkpoint: Checkpoint) {
        self.handlers.truncate(checkpoint.handlers);
        self.animations.truncate(checkpoint.animations);
    }

    pub(crate) fn enter(&mut self, name: &'static str) {
        self.stack.push(name);
    }

    pub(crate) fn leave(&mut self) {
        self.stack.pop();
    }

    /// Records the current component stack as the fault origin, unless a
    /// deeper frame already recorded one.
    pub(crate) fn note_fault(&mut self) {
        if self.origin.is_none() {
            let stack = self.stack.iter().map(|name| name.to_string()).collect();
            self.origin = Some(FaultOrigin::new(stack));
        }
    }

    /// Takes the pending fault origin out of the pass so a component can
    /// start with a clean slot.
    pub(crate) fn stash_origin(&mut self) -> Option<FaultOrigin> {
        self.origin.take()
    }

    /// Puts back an origin taken with [`stash_origin`](Self::stash_origin),
    /// dropping whatever the component's descendants recorded meanwhile.
    pub(crate) fn restore_origin(&mut self, origin: Option<FaultOrigin>) {
        self.origin = origin;
    }

    /// Current depth of the component stack.
    pub(crate) fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Takes the recorded fault origin, dropping the frames above `depth`.
    pub(crate) fn take_origin(&mut self, depth: usize) -> FaultOrigin {
        self.origin
            .take()
            .map(|origin| origin.below(depth))
            .unwrap_or_default()
    }

    pub(crate) fn finish(self) -> (Vec<RegisteredHandler>, Vec<Animation>) {
        (self.handlers, self.animations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{handler, Keyframe, Timing};

    fn listener() -> Listener {
        Listener::click(handler(|_| Ok(())))
    }

    #[test]
    fn test_register_assigns_sequential_ids() {
        let renderer = Renderer::new();
        let mut cx = RenderContext::new(&renderer);
        assert_eq!(cx.register(listener()), "h0");
        assert_eq!(cx.register(listener()), "h1");
    }

    #[test]
    fn test_rollback_discards_later_registrations() {
        let renderer = Renderer::new();
        let mut cx = RenderContext::new(&renderer);
        cx.register(listener());
        let checkpoint = cx.checkpoint();
        cx.register(listener());
        cx.animate(Animation::new(
            ".dot",
            Keyframe::default(),
            Keyframe::default(),
            Timing::default(),
        ));
        cx.rollback(checkpoint);

        let (handlers, animations) = cx.finish();
        assert_eq!(handlers.len(), 1);
        assert!(animations.is_empty());
    }

    #[test]
    fn test_note_fault_keeps_deepest_stack() {
        let renderer = Renderer::new();
        let mut cx = RenderContext::new(&renderer);
        cx.enter("Outer");
        cx.enter("Inner");
        cx.note_fault();
        cx.leave();
        cx.note_fault();

        let origin = cx.take_origin(1);
        assert_eq!(origin.component(), Some("Inner"));
        assert_eq!(origin.stack(), ["Inner"]);
        assert_eq!(cx.take_origin(0), FaultOrigin::default());
    }

    #[test]
    fn test_restore_origin_drops_recovered_fault() {
        let renderer = Renderer::new();
        let mut cx = RenderContext::new(&renderer);
        cx.enter("Recovering");
        let saved = cx.stash_origin();
        cx.enter("Child");
        cx.note_fault();
        cx.leave();
        cx.restore_origin(saved);
        cx.leave();

        cx.enter("Sibling");
        cx.note_fault();
        cx.leave();
        assert_eq!(cx.take_origin(0).stack(), ["Sibling"]);
    }
}

//! A mounted view tree.

use tracing::debug;

use super::environment::{Animation, AnimationHandle, Environment};
use super::event::{Event, EventError, RegisteredHandler};
use super::fault::RenderFault;
use super::renderer::{Pass, Renderer};
use super::view::View;

/// A view tree kept alive between render passes.
///
/// The root owns the tree, the markup of the last committed pass, and the
/// handlers and animations that pass registered. Events are dispatched
/// through the root; after a handler runs the tree is rendered again.
///
/// Call [`unmount`](Self::unmount) to revert running animations.
pub struct Root<E: Environment> {
    renderer: Renderer,
    view: View,
    environment: E,
    html: String,
    handlers: Vec<RegisteredHandler>,
    animations: Vec<(Animation, AnimationHandle)>,
}

impl<E: Environment> Root<E> {
    /// Renders `view` with a default [`Renderer`] and commits it.
    ///
    /// # Errors
    ///
    /// Returns the fault if one escapes every error boundary.
    pub fn mount(view: View, environment: E) -> Result<Self, RenderFault> {
        Self::with_renderer(Renderer::new(), view, environment)
    }

    /// Renders `view` with the given renderer and commits it.
    pub fn with_renderer(
        renderer: Renderer,
        mut view: View,
        environment: E,
    ) -> Result<Self, RenderFault> {
        let pass = renderer.pass(&mut view)?;
        let mut root = Self {
            renderer,
            view,
            environment,
            html: String::new(),
            handlers: Vec::new(),
            animations: Vec::new(),
        };
        root.commit(pass);
        debug!(bytes = root.html.len(), "mounted view tree");
        Ok(root)
    }

    /// Markup of the last committed pass.
    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn environment(&self) -> &E {
        &self.environment
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Handlers registered by the last committed pass, in document order.
    pub fn handlers(&self) -> impl Iterator<Item = &RegisteredHandler> {
        self.handlers.iter()
    }

    /// Renders the tree again and commits the result.
    ///
    /// # Errors
    ///
    /// Returns the fault if one escapes every error boundary; the previous
    /// pass stays committed in that case.
    pub fn rerender(&mut self) -> Result<(), RenderFault> {
        let pass = self.renderer.pass(&mut self.view)?;
        self.commit(pass);
        Ok(())
    }

    /// Delivers an event to the handler with the given id.
    ///
    /// Returns `Ok(false)` if the target is disabled and nothing ran.
    ///
    /// # Errors
    ///
    /// Handler failures are returned as-is: they happen outside the render
    /// phase, so no error boundary sees them.
    pub fn dispatch(&mut self, id: &str, value: Option<&str>) -> Result<bool, EventError> {
        let registered = self
            .handlers
            .iter()
            .find(|h| h.id == id)
            .cloned()
            .ok_or_else(|| EventError::UnknownHandler(id.to_string()))?;
        self.fire(&registered, value)
    }

    /// Clicks the first element whose click listener is named `action`.
    pub fn click(&mut self, action: &str) -> Result<bool, EventError> {
        self.fire_action("click", action, None)
    }

    /// Sends a `change` event carrying `value` to the listener named `action`.
    pub fn change(&mut self, action: &str, value: &str) -> Result<bool, EventError> {
        self.fire_action("change", action, Some(value))
    }

    /// Sends a `keydown` event for `key` to the listener named `action`.
    pub fn keydown(&mut self, action: &str, key: &str) -> Result<bool, EventError> {
        self.fire_action("keydown", action, Some(key))
    }

    /// Reverts running animations and hands the environment back.
    pub fn unmount(self) -> E {
        for (_, handle) in &self.animations {
            self.environment.revert_animation(*handle);
        }
        debug!(animations = self.animations.len(), "unmounted view tree");
        self.environment
    }

    fn fire_action(
        &mut self,
        kind: &str,
        action: &str,
        value: Option<&str>,
    ) -> Result<bool, EventError> {
        let registered = self
            .handlers
            .iter()
            .find(|h| h.kind() == kind && h.action() == Some(action))
            .cloned()
            .ok_or_else(|| EventError::UnknownHandler(format!("{kind}:{action}")))?;
        self.fire(&registered, value)
    }

    fn fire(&mut self, registered: &RegisteredHandler, value: Option<&str>) -> Result<bool, EventError> {
        if registered.is_disabled() {
            debug!(id = registered.id(), "ignored event on disabled target");
            return Ok(false);
        }

        {
            let event = Event {
                kind: registered.kind(),
                value,
                environment: &self.environment,
            };
            let mut handler = registered.listener.handler.borrow_mut();
            (&mut *handler)(&event)?;
        }

        self.rerender()?;
        Ok(true)
    }

    fn commit(&mut self, pass: Pass) {
        self.html = pass.html;
        self.handlers = pass.handlers;

        let unchanged = self.animations.len() == pass.animations.len()
            && self
                .animations
                .iter()
                .zip(&pass.animations)
                .all(|((running, _), requested)| running == requested);
        if unchanged {
            return;
        }

        for (_, handle) in self.animations.drain(..) {
            self.environment.revert_animation(handle);
        }
        for animation in pass.animations {
            let handle = self.environment.start_animation(&animation);
            self.animations.push((animation, handle));
        }
        debug!(animations = self.animations.len(), "started animations");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{
        component_fn, handler, Element, Keyframe, Listener, RecordingEnvironment, Timing,
    };
    use std::cell::Cell;
    use std::rc::Rc;

    fn fade(target: &str) -> Animation {
        Animation::new(target, Keyframe::default(), Keyframe::default(), Timing::default())
    }

    #[test]
    fn test_click_runs_handler_and_rerenders() {
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        let shown = Rc::clone(&clicks);

        let view = View::component(component_fn("Counter", move |_| {
            let counter = Rc::clone(&counter);
            Ok(Element::new("button")
                .on(Listener::click(handler(move |_| {
                    counter.set(counter.get() + 1);
                    Ok(())
                }))
                .action("inc"))
                .child(shown.get().to_string())
                .into())
        }));

        let mut root = Renderer::new()
            .mount(view, RecordingEnvironment::new())
            .unwrap();
        assert!(root.html().contains(">0<"));

        assert!(root.click("inc").unwrap());
        assert_eq!(clicks.get(), 1);
        assert!(root.html().contains(">1<"));
    }

    #[test]
    fn test_disabled_target_ignores_events() {
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        let view = Element::new("button")
            .flag("disabled", true)
            .on(Listener::click(handler(move |_| {
                flag.set(true);
                Ok(())
            }))
            .action("go"));

        let mut root = Renderer::new()
            .mount(view.into(), RecordingEnvironment::new())
            .unwrap();
        assert!(!root.click("go").unwrap());
        assert!(!fired.get());
    }

    #[test]
    fn test_unknown_action_is_an_error() {
        let mut root = Renderer::new()
            .mount(View::text("x"), RecordingEnvironment::new())
            .unwrap();
        assert!(matches!(
            root.click("missing"),
            Err(EventError::UnknownHandler(_))
        ));
        assert!(matches!(
            root.dispatch("h9", None),
            Err(EventError::UnknownHandler(_))
        ));
    }

    #[test]
    fn test_handler_errors_propagate() {
        let view = Element::new("button")
            .on(Listener::click(handler(|_| Err(EventError::failed("nope")))).action("fail"));
        let mut root = Renderer::new()
            .mount(view.into(), RecordingEnvironment::new())
            .unwrap();
        assert!(matches!(root.click("fail"), Err(EventError::Failed(_))));
    }

    #[test]
    fn test_dispatch_by_id_passes_value() {
        let seen = Rc::new(std::cell::RefCell::new(String::new()));
        let sink = Rc::clone(&seen);
        let view = Element::new("input").on(Listener::change(handler(move |event| {
            *sink.borrow_mut() = event.value.unwrap_or_default().to_string();
            Ok(())
        })));
        let mut root = Renderer::new()
            .mount(view.into(), RecordingEnvironment::new())
            .unwrap();

        let id = root.handlers().next().unwrap().id().to_string();
        root.dispatch(&id, Some("typed")).unwrap();
        assert_eq!(*seen.borrow(), "typed");
    }

    #[test]
    fn test_mount_fault_outside_boundary_is_returned() {
        let view = View::component(component_fn("Broken", |_| Err(RenderFault::new("boom"))));
        let result = Renderer::new().mount(view, RecordingEnvironment::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_animations_start_once_and_revert_on_unmount() {
        let env = Rc::new(RecordingEnvironment::new());
        let view = View::component(component_fn("Pulse", |cx| {
            cx.animate(fade(".dot"));
            Ok(View::Empty)
        }));

        let mut root = Renderer::new().mount(view, Rc::clone(&env)).unwrap();
        assert_eq!(env.started().len(), 1);

        root.rerender().unwrap();
        assert_eq!(env.started().len(), 1, "unchanged animations keep running");

        root.unmount();
        assert_eq!(env.running(), 0);
    }

    #[test]
    fn test_changed_animations_are_restarted() {
        let env = Rc::new(RecordingEnvironment::new());
        let target = Rc::new(Cell::new(".a"));
        let current = Rc::clone(&target);
        let view = View::component(component_fn("Pulse", move |cx| {
            cx.animate(fade(current.get()));
            Ok(View::Empty)
        }));

        let mut root = Renderer::new().mount(view, Rc::clone(&env)).unwrap();
        target.set(".b");
        root.rerender().unwrap();

        assert_eq!(env.started().len(), 2);
        assert_eq!(env.reverted().len(), 1);
        assert_eq!(env.running(), 1);
    }
}

//! Event handlers and listeners.
//!
//! Handlers are shared closures (`Rc<RefCell<dyn FnMut>>`) so the same
//! handler can be registered again on every render pass while keeping any
//! state it captured.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

use super::environment::Environment;
use super::fault::RenderFault;

/// An event delivered to a handler.
pub struct Event<'a> {
    /// Event kind, such as `click`, `change` or `keydown`.
    pub kind: &'a str,
    /// Payload: the new value for `change`, the key name for `keydown`.
    pub value: Option<&'a str>,
    pub environment: &'a dyn Environment,
}

/// Shared, mutable event handler.
pub type EventHandler = Rc<RefCell<dyn FnMut(&Event<'_>) -> Result<(), EventError>>>;

/// Wraps a closure as an [`EventHandler`].
pub fn handler<F>(f: F) -> EventHandler
where
    F: FnMut(&Event<'_>) -> Result<(), EventError> + 'static,
{
    Rc::new(RefCell::new(f))
}

/// Error returned from event dispatch.
///
/// Faults raised while handling an event happen outside the render phase, so
/// no error boundary intercepts them.
#[derive(Debug, Error)]
pub enum EventError {
    /// No registered handler matches the requested id or action
    #[error("no handler registered for '{0}'")]
    UnknownHandler(String),

    /// The handler itself failed
    #[error("event handler failed: {0}")]
    Failed(String),

    /// The re-render after the event faulted outside every boundary
    #[error("re-render after event failed: {0}")]
    Render(#[from] RenderFault),
}

impl EventError {
    pub fn failed(message: impl Into<String>) -> Self {
        EventError::Failed(message.into())
    }
}

/// A handler bound to an event kind, as attached to an element.
#[derive(Clone)]
pub struct Listener {
    pub(crate) kind: String,
    pub(crate) action: Option<String>,
    pub(crate) disabled: bool,
    pub(crate) handler: EventHandler,
}

impl Listener {
    pub fn new(kind: impl Into<String>, handler: EventHandler) -> Self {
        Self {
            kind: kind.into(),
            action: None,
            disabled: false,
            handler,
        }
    }

    pub fn click(handler: EventHandler) -> Self {
        Self::new("click", handler)
    }

    pub fn change(handler: EventHandler) -> Self {
        Self::new("change", handler)
    }

    pub fn keydown(handler: EventHandler) -> Self {
        Self::new("keydown", handler)
    }

    /// Names the listener so it can be targeted with
    /// [`Root::click`](crate::Root::click) and friends.
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// A disabled listener is registered but ignores events.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("kind", &self.kind)
            .field("action", &self.action)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

/// A listener registered during a render pass, addressable by id.
#[derive(Clone)]
pub struct RegisteredHandler {
    pub(crate) id: String,
    pub(crate) listener: Listener,
}

impl RegisteredHandler {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> &str {
        &self.listener.kind
    }

    pub fn action(&self) -> Option<&str> {
        self.listener.action.as_deref()
    }

    pub fn is_disabled(&self) -> bool {
        self.listener.disabled
    }
}

impl fmt::Debug for RegisteredHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredHandler")
            .field("id", &self.id)
            .field("listener", &self.listener)
            .finish()
    }
}

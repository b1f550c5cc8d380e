//! Error boundaries: fault containment for a view subtree.
//!
//! An [`ErrorBoundary`] renders its children until one of them raises a
//! [`RenderFault`]. The fault is captured, reported to the boundary's
//! [`FaultSink`], and from then on the boundary renders its fallback
//! instead. There is no way back while the boundary is mounted; build a new
//! boundary (or reload the environment) to recover.
//!
//! Only faults raised during the render pass are intercepted. Errors from
//! event handlers are returned by [`Root::dispatch`](crate::Root::dispatch)
//! and friends.

mod sink;

pub use sink::{FaultSink, TracingSink};

use serde::Serialize;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use tracing::{debug, warn};

use crate::components::Button;
use crate::runtime::render::render_view;
use crate::runtime::{
    handler, CapturedFault, RenderContext, RenderFault, TemplateView, View,
};

/// Heading of the built-in fallback.
pub const FALLBACK_HEADING: &str = "Something went wrong";
/// Message of the built-in fallback.
pub const FALLBACK_MESSAGE: &str = "An error occurred while loading this page";
/// Label of the built-in fallback's reload button.
pub const FALLBACK_ACTION: &str = "Reload page";

/// Fault state owned by one boundary. Once set, never cleared.
#[derive(Debug, Default)]
pub struct FaultState {
    fault: Option<CapturedFault>,
}

impl FaultState {
    pub fn has_fault(&self) -> bool {
        self.fault.is_some()
    }

    pub fn fault(&self) -> Option<&CapturedFault> {
        self.fault.as_ref()
    }
}

/// Contains render faults raised anywhere below it.
///
/// # Example
///
/// ```rust
/// use outfit::{component_fn, ErrorBoundary, RenderFault, Renderer, View};
///
/// let broken = component_fn("ThrowError", |_| Err(RenderFault::new("Test error")));
/// let mut view = View::from(
///     ErrorBoundary::new(View::component(broken))
///         .fallback("Custom error message")
///         .sink(|_: &outfit::CapturedFault| {}),
/// );
///
/// let html = Renderer::new().render_to_string(&mut view).unwrap();
/// assert_eq!(html, "Custom error message");
/// ```
pub struct ErrorBoundary {
    children: View,
    fallback: Option<View>,
    state: FaultState,
    sink: Rc<dyn FaultSink>,
}

impl ErrorBoundary {
    pub fn new(children: impl Into<View>) -> Self {
        Self {
            children: children.into(),
            fallback: None,
            state: FaultState::default(),
            sink: Rc::new(TracingSink),
        }
    }

    /// Replaces the built-in fallback.
    pub fn fallback(mut self, fallback: impl Into<View>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Replaces the default [`TracingSink`].
    pub fn sink(mut self, sink: impl FaultSink + 'static) -> Self {
        self.sink = Rc::new(sink);
        self
    }

    pub fn state(&self) -> &FaultState {
        &self.state
    }

    pub fn has_fault(&self) -> bool {
        self.state.has_fault()
    }

    pub fn fault(&self) -> Option<&CapturedFault> {
        self.state.fault()
    }

    pub(crate) fn render(
        &mut self,
        cx: &mut RenderContext<'_>,
        out: &mut String,
    ) -> Result<(), RenderFault> {
        let depth = cx.depth();
        cx.enter("ErrorBoundary");
        let result = self.render_inner(depth, cx, out);
        cx.leave();
        result
    }

    fn render_inner(
        &mut self,
        depth: usize,
        cx: &mut RenderContext<'_>,
        out: &mut String,
    ) -> Result<(), RenderFault> {
        if !self.state.has_fault() {
            let checkpoint = cx.checkpoint();
            let mut scratch = String::new();
            match render_view(&mut self.children, cx, &mut scratch) {
                Ok(()) => {
                    out.push_str(&scratch);
                    return Ok(());
                }
                Err(fault) => {
                    cx.rollback(checkpoint);
                    cx.note_fault();
                    let origin = cx.take_origin(depth);
                    self.capture(CapturedFault::new(fault, origin));
                }
            }
        }

        match &mut self.fallback {
            Some(fallback) => render_view(fallback, cx, out),
            None => render_view(&mut default_fallback(), cx, out),
        }
    }

    fn capture(&mut self, fault: CapturedFault) {
        debug!(origin = %fault.origin(), "boundary switched to fallback");
        let sink = Rc::clone(&self.sink);
        let fault = self.state.fault.insert(fault);
        if panic::catch_unwind(AssertUnwindSafe(|| sink.report(fault))).is_err() {
            warn!(origin = %fault.origin(), "fault sink panicked; rendering fallback anyway");
        }
    }
}

impl fmt::Debug for ErrorBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorBoundary")
            .field("children", &self.children)
            .field("fallback", &self.fallback)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct FallbackProps {
    heading: &'static str,
    message: &'static str,
}

/// The built-in fallback: heading, message and a reload button.
pub fn default_fallback() -> View {
    let reload = Button::new(FALLBACK_ACTION)
        .class("mt-6")
        .action("reload")
        .on_click(handler(|event| {
            event.environment.reload();
            Ok(())
        }));

    TemplateView::new(
        "error_fallback.html",
        &FallbackProps {
            heading: FALLBACK_HEADING,
            message: FALLBACK_MESSAGE,
        },
    )
    .slot("action", reload)
    .into()
}

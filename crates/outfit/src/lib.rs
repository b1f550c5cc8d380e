//! Presentational UI components rendered to HTML.
//!
//! `outfit` renders a tree of components to markup, wires DOM-style events
//! back to the handlers that produced them, resolves button style variants
//! to utility classes and contains render faults behind error boundaries.
//!
//! # Modules
//!
//! - [`runtime`]: Views, components, the render pass and the mounted [`Root`]
//! - [`boundary`]: [`ErrorBoundary`] and the fault sinks it reports to
//! - [`variant`]: Button variant, size and effect resolution
//! - [`class`]: Class-token lists with utility-aware merging
//! - [`components`]: Buttons, inputs, dialogs, loaders and the rest
//!
//! # Example
//!
//! ```rust
//! use outfit::{component_fn, ErrorBoundary, RecordingEnvironment, RenderFault, Renderer, View};
//!
//! let broken = component_fn("Chart", |_cx| Err(RenderFault::new("no data")));
//! let page = ErrorBoundary::new(View::component(broken));
//!
//! let mut root = Renderer::new()
//!     .mount(page.into(), RecordingEnvironment::new())
//!     .unwrap();
//! assert!(root.html().contains("Something went wrong"));
//!
//! root.click("reload").unwrap();
//! assert_eq!(root.environment().reloads(), 1);
//! ```
//!
//! Rendering is single-threaded: component state shared with event handlers
//! lives in `Rc<Cell<_>>` and `Rc<RefCell<_>>`.

pub mod boundary;
pub mod class;
pub mod components;
pub mod runtime;
pub mod variant;

pub use boundary::{default_fallback, ErrorBoundary, FaultSink, FaultState, TracingSink};
pub use class::{cn, ClassList};
pub use components::{
    country, fuzzy_score, normalize_e164, Align, Button, Command, CommandDialog, CommandGroup,
    CommandItem, Country, Dialog, Icon, IconName, IconPlacement, Input, Loader, OpenState,
    PasswordInput, PhoneInput, Popover, ScrollArea, ScrollOrientation, TypewriterEffect, Word,
    COUNTRIES,
};
pub use runtime::{
    component_fn, handler, Animation, AnimationHandle, CapturedFault, Component, Element,
    Environment, Event, EventError, EventHandler, FaultOrigin, FnComponent, Keyframe, Listener,
    RecordingEnvironment, RegisteredHandler, RenderContext, RenderFault, Renderer, Repeat, Root,
    TemplateView, Templates, Timing, View,
};
pub use variant::{
    button_variants, ButtonEffect, ButtonSize, ButtonVariant, VariantError, VariantRequest,
    VariantTable,
};

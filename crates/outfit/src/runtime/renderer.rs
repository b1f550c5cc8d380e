//! Renderer: templates plus the variant table, shared by every pass.

use super::context::RenderContext;
use super::environment::{Animation, Environment};
use super::event::RegisteredHandler;
use super::fault::RenderFault;
use super::render::render_view;
use super::root::Root;
use super::templates::Templates;
use super::view::View;
use crate::variant::VariantTable;

/// Renders view trees to HTML.
///
/// Use [`render_to_string`](Self::render_to_string) for one-off server-side
/// rendering, or [`mount`](Self::mount) to keep a live tree that handles
/// events and drives animations through an [`Environment`].
///
/// # Example
///
/// ```rust
/// use outfit::{Button, ButtonVariant, Renderer, View};
///
/// let renderer = Renderer::new();
/// let mut view = View::from(Button::new("Delete").variant(ButtonVariant::Destructive));
/// let html = renderer.render_to_string(&mut view).unwrap();
/// assert!(html.contains("bg-destructive"));
/// ```
pub struct Renderer {
    templates: Templates,
    variants: VariantTable,
}

/// The output of one successful pass, not yet committed.
pub(crate) struct Pass {
    pub(crate) html: String,
    pub(crate) handlers: Vec<RegisteredHandler>,
    pub(crate) animations: Vec<Animation>,
}

impl Renderer {
    /// Creates a renderer with the built-in templates and variant table.
    pub fn new() -> Self {
        Self::with_variants(VariantTable::default())
    }

    /// Creates a renderer that resolves button classes against `variants`.
    pub fn with_variants(variants: VariantTable) -> Self {
        Self {
            templates: Templates::new(),
            variants,
        }
    }

    pub fn templates(&self) -> &Templates {
        &self.templates
    }

    pub fn variants(&self) -> &VariantTable {
        &self.variants
    }

    /// Registers a named template for custom components.
    ///
    /// The template is compiled immediately; errors are returned if syntax is invalid.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), minijinja::Error> {
        self.templates.add_template(name, source)
    }

    /// Renders a view once. Handlers and animations are discarded.
    ///
    /// # Errors
    ///
    /// Returns the fault if one escapes every error boundary.
    pub fn render_to_string(&self, view: &mut View) -> Result<String, RenderFault> {
        self.pass(view).map(|pass| pass.html)
    }

    /// Renders a view and keeps it mounted.
    ///
    /// # Errors
    ///
    /// Returns the fault if one escapes every error boundary; nothing is
    /// committed in that case.
    pub fn mount<E: Environment>(self, view: View, environment: E) -> Result<Root<E>, RenderFault> {
        Root::with_renderer(self, view, environment)
    }

    pub(crate) fn pass(&self, view: &mut View) -> Result<Pass, RenderFault> {
        let mut cx = RenderContext::new(self);
        let mut html = String::new();
        render_view(view, &mut cx, &mut html)?;
        let (handlers, animations) = cx.finish();
        Ok(Pass {
            html,
            handlers,
            animations,
        })
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

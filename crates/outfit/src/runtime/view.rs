//! The view tree.

use std::borrow::Cow;
use std::fmt;

use super::context::RenderContext;
use super::event::Listener;
use super::fault::RenderFault;
use super::templates::TemplateView;
use crate::boundary::ErrorBoundary;
use crate::class::ClassList;

/// Elements that never have children or a closing tag.
pub(crate) const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Something that renders into a [`View`].
///
/// Components own their state; a component placed in a mounted tree keeps
/// its fields across render passes. Views returned from `render` are rebuilt
/// on every pass.
pub trait Component {
    /// Name used in fault diagnostics. Defaults to the type name.
    fn name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }

    /// Produces this component's view. Returning an error raises a render
    /// fault that the nearest [`ErrorBoundary`] intercepts.
    fn render(&mut self, cx: &mut RenderContext<'_>) -> Result<View, RenderFault>;
}

fn short_type_name(full: &'static str) -> &'static str {
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or(path)
}

/// A component backed by a closure.
pub struct FnComponent<F> {
    name: &'static str,
    render: F,
}

/// Wraps a closure as a named [`Component`].
///
/// # Example
///
/// ```rust
/// use outfit::{component_fn, RenderFault, View};
///
/// let broken = component_fn("ThrowError", |_cx| Err(RenderFault::new("Test error")));
/// let view = View::component(broken);
/// ```
pub fn component_fn<F>(name: &'static str, render: F) -> FnComponent<F>
where
    F: FnMut(&mut RenderContext<'_>) -> Result<View, RenderFault>,
{
    FnComponent { name, render }
}

impl<F> Component for FnComponent<F>
where
    F: FnMut(&mut RenderContext<'_>) -> Result<View, RenderFault>,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn render(&mut self, cx: &mut RenderContext<'_>) -> Result<View, RenderFault> {
        (self.render)(cx)
    }
}

/// A node in the render tree.
pub enum View {
    Empty,
    /// Plain text, escaped on output.
    Text(String),
    /// Trusted markup, written verbatim.
    Markup(Cow<'static, str>),
    Element(Element),
    Fragment(Vec<View>),
    Template(TemplateView),
    Component(Box<dyn Component>),
    Boundary(Box<ErrorBoundary>),
}

impl View {
    pub fn text(text: impl Into<String>) -> Self {
        View::Text(text.into())
    }

    /// Trusted markup. Never pass user input here.
    pub fn markup(markup: impl Into<Cow<'static, str>>) -> Self {
        View::Markup(markup.into())
    }

    pub fn component<C: Component + 'static>(component: C) -> Self {
        View::Component(Box::new(component))
    }

    pub fn fragment(views: impl IntoIterator<Item = View>) -> Self {
        View::Fragment(views.into_iter().collect())
    }
}

impl Default for View {
    fn default() -> Self {
        View::Empty
    }
}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Empty => f.write_str("Empty"),
            View::Text(text) => f.debug_tuple("Text").field(text).finish(),
            View::Markup(markup) => f.debug_tuple("Markup").field(markup).finish(),
            View::Element(el) => f.debug_tuple("Element").field(&el.tag).finish(),
            View::Fragment(views) => f.debug_tuple("Fragment").field(views).finish(),
            View::Template(t) => f.debug_tuple("Template").field(&t.name).finish(),
            View::Component(c) => f.debug_tuple("Component").field(&c.name()).finish(),
            View::Boundary(_) => f.write_str("Boundary"),
        }
    }
}

impl From<&str> for View {
    fn from(text: &str) -> Self {
        View::Text(text.to_string())
    }
}

impl From<String> for View {
    fn from(text: String) -> Self {
        View::Text(text)
    }
}

impl From<Element> for View {
    fn from(el: Element) -> Self {
        View::Element(el)
    }
}

impl From<TemplateView> for View {
    fn from(t: TemplateView) -> Self {
        View::Template(t)
    }
}

impl From<ErrorBoundary> for View {
    fn from(boundary: ErrorBoundary) -> Self {
        View::Boundary(Box::new(boundary))
    }
}

impl From<Vec<View>> for View {
    fn from(views: Vec<View>) -> Self {
        View::Fragment(views)
    }
}

impl<V: Into<View>> From<Option<V>> for View {
    fn from(view: Option<V>) -> Self {
        view.map_or(View::Empty, Into::into)
    }
}

/// An HTML element built in code.
///
/// # Example
///
/// ```rust
/// use outfit::{Element, Renderer, View};
///
/// let mut view = View::from(
///     Element::new("div")
///         .class("mt-4 text-gray-600")
///         .child("An error occurred"),
/// );
/// let html = Renderer::new().render_to_string(&mut view).unwrap();
/// assert_eq!(html, r#"<div class="mt-4 text-gray-600">An error occurred</div>"#);
/// ```
pub struct Element {
    pub(crate) tag: Cow<'static, str>,
    pub(crate) class: ClassList,
    pub(crate) attrs: Vec<(Cow<'static, str>, Option<String>)>,
    pub(crate) listeners: Vec<Listener>,
    pub(crate) children: Vec<View>,
    pub(crate) disabled: bool,
}

impl Element {
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tag: tag.into(),
            class: ClassList::new(),
            attrs: Vec::new(),
            listeners: Vec::new(),
            children: Vec::new(),
            disabled: false,
        }
    }

    /// Merges class tokens into the element's class list.
    pub fn class(mut self, classes: impl AsRef<str>) -> Self {
        self.class.push(classes.as_ref());
        self
    }

    pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), Some(value.into())));
        self
    }

    /// Sets a boolean attribute such as `disabled` or `required`.
    pub fn flag(mut self, name: impl Into<Cow<'static, str>>, on: bool) -> Self {
        if on {
            let name = name.into();
            if name == "disabled" {
                self.disabled = true;
            }
            self.attrs.push((name, None));
        }
        self
    }

    /// Attaches a listener. Listeners on a disabled element ignore events.
    pub fn on(mut self, listener: Listener) -> Self {
        self.listeners.push(listener);
        self
    }

    pub fn child(mut self, child: impl Into<View>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = View>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_ref())
    }
}

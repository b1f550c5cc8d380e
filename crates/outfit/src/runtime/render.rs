//! The render pass: walks a view tree and writes markup.

use minijinja::context;
use std::collections::BTreeMap;

use super::context::RenderContext;
use super::fault::RenderFault;
use super::templates::TemplateView;
use super::view::{Element, View};

/// Renders a view into `out`.
///
/// Faults propagate to the caller unless an [`ErrorBoundary`] in the path
/// intercepts them. Markup written for a faulted subtree is left in `out`;
/// boundaries render children into a scratch buffer for that reason.
///
/// [`ErrorBoundary`]: crate::ErrorBoundary
pub(crate) fn render_view(
    view: &mut View,
    cx: &mut RenderContext<'_>,
    out: &mut String,
) -> Result<(), RenderFault> {
    match view {
        View::Empty => Ok(()),
        View::Text(text) => {
            escape_into(out, text);
            Ok(())
        }
        View::Markup(markup) => {
            out.push_str(markup);
            Ok(())
        }
        View::Fragment(views) => {
            for child in views {
                render_view(child, cx, out)?;
            }
            Ok(())
        }
        View::Element(el) => render_element(el, cx, out),
        View::Template(t) => render_template(t, cx, out),
        View::Component(component) => {
            cx.enter(component.name());
            let pending = cx.stash_origin();
            let result = component
                .render(cx)
                .and_then(|mut child| render_view(&mut child, cx, out));
            match &result {
                // Faults the component recovered from leave no origin behind.
                Ok(()) => cx.restore_origin(pending),
                Err(_) => cx.note_fault(),
            }
            cx.leave();
            result
        }
        View::Boundary(boundary) => boundary.render(cx, out),
    }
}

fn render_element(
    el: &mut Element,
    cx: &mut RenderContext<'_>,
    out: &mut String,
) -> Result<(), RenderFault> {
    out.push('<');
    out.push_str(&el.tag);

    if !el.class.is_empty() {
        out.push_str(" class=\"");
        escape_into(out, &el.class.to_string());
        out.push('"');
    }
    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        if let Some(value) = value {
            out.push_str("=\"");
            escape_into(out, value);
            out.push('"');
        }
    }
    let mut action = None;
    for listener in &el.listeners {
        let kind = listener.kind.clone();
        action = action.or_else(|| listener.action.clone());
        let id = cx.register(listener.clone().disabled(listener.disabled || el.disabled));
        out.push_str(" data-on-");
        out.push_str(&kind);
        out.push_str("=\"");
        out.push_str(&id);
        out.push('"');
    }
    if let Some(action) = action {
        out.push_str(" data-action=\"");
        escape_into(out, &action);
        out.push('"');
    }
    out.push('>');

    if el.is_void() {
        return Ok(());
    }
    for child in &mut el.children {
        render_view(child, cx, out)?;
    }
    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
    Ok(())
}

fn render_template(
    t: &mut TemplateView,
    cx: &mut RenderContext<'_>,
    out: &mut String,
) -> Result<(), RenderFault> {
    let mut slots = BTreeMap::new();
    for (name, view) in &mut t.slots {
        let mut html = String::new();
        render_view(view, cx, &mut html)?;
        slots.insert(name.clone(), html);
    }

    let mut handlers = BTreeMap::new();
    for (name, listener) in &t.listeners {
        handlers.insert(name.clone(), cx.register(listener.clone()));
    }

    let ctx = context! {
        props => t.props.clone(),
        slots => slots,
        handlers => handlers,
    };
    out.push_str(&cx.templates().render(&t.name, ctx)?);
    Ok(())
}

/// Writes `text` with HTML special characters escaped.
pub(crate) fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
}

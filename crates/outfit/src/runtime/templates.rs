//! Component templates.
//!
//! Built-in components render through MiniJinja templates named `*.html`,
//! which turns on HTML auto-escaping. Built-ins are served by a loader, so a
//! template registered under the same name with
//! [`Templates::add_template`] takes precedence over the built-in one.
//!
//! Every template receives three values:
//!
//! - `props`: the component's serialized properties
//! - `slots`: pre-rendered child markup by slot name (print with `|safe`)
//! - `handlers`: registered handler ids by slot name

use minijinja::value::{Rest, ValueKind};
use minijinja::{AutoEscape, Output, State, Value};
use std::borrow::Cow;

use super::event::Listener;
use super::fault::RenderFault;
use super::render::escape_into;
use super::view::View;
use crate::class::ClassList;

const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("button.html", include_str!("../../templates/button.html")),
    ("input.html", include_str!("../../templates/input.html")),
    ("loader.html", include_str!("../../templates/loader.html")),
    ("dialog.html", include_str!("../../templates/dialog.html")),
    ("popover.html", include_str!("../../templates/popover.html")),
    ("scroll_area.html", include_str!("../../templates/scroll_area.html")),
    ("command.html", include_str!("../../templates/command.html")),
    ("phone_input.html", include_str!("../../templates/phone_input.html")),
    ("typewriter.html", include_str!("../../templates/typewriter.html")),
    ("error_fallback.html", include_str!("../../templates/error_fallback.html")),
];

/// The template environment used by a [`Renderer`](crate::Renderer).
pub struct Templates {
    env: minijinja::Environment<'static>,
}

impl Templates {
    /// Creates an environment serving the built-in component templates.
    pub fn new() -> Self {
        let mut env = minijinja::Environment::new();
        env.set_loader(|name| {
            Ok(BUILTIN_TEMPLATES
                .iter()
                .find(|(builtin, _)| *builtin == name)
                .map(|(_, source)| source.to_string()))
        });
        env.set_formatter(format_value);
        register_filters(&mut env);
        Self { env }
    }

    /// Registers a named template, replacing any built-in of the same name.
    ///
    /// Use a `.html` suffix to get HTML auto-escaping.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), minijinja::Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a template with the given context.
    pub(crate) fn render(&self, name: &str, ctx: Value) -> Result<String, RenderFault> {
        let fault = |source| RenderFault::Template {
            name: name.to_string(),
            source,
        };
        let tmpl = self.env.get_template(name).map_err(fault)?;
        tmpl.render(ctx).map_err(fault)
    }
}

impl Default for Templates {
    fn default() -> Self {
        Self::new()
    }
}

/// Escapes HTML output the same way code-built elements are escaped, so
/// class tokens like `hover:bg-primary/90` survive verbatim. Booleans print
/// as `true`/`false` to match ARIA and `data-*` attribute values.
fn format_value(out: &mut Output, state: &State, value: &Value) -> Result<(), minijinja::Error> {
    if matches!(state.auto_escape(), AutoEscape::Html) && !value.is_safe() {
        if let Some(s) = value.as_str() {
            let mut escaped = String::new();
            escape_into(&mut escaped, s);
            out.write_str(&escaped)?;
            return Ok(());
        }
    }
    if value.kind() == ValueKind::Bool {
        out.write_str(if value.is_true() { "true" } else { "false" })?;
        return Ok(());
    }
    minijinja::escape_formatter(out, state, value)
}

/// Registers the filters available to component templates.
fn register_filters(env: &mut minijinja::Environment<'static>) {
    // Merges class fragments the same way `cn` does: `{{ "px-4"|cn(props.class) }}`.
    // None and undefined fragments are skipped.
    env.add_filter("cn", |base: String, fragments: Rest<Value>| -> String {
        let mut classes = ClassList::parse(&base);
        for fragment in fragments.iter() {
            if fragment.is_none() || fragment.is_undefined() {
                continue;
            }
            match fragment.as_str() {
                Some(s) => classes.push(s),
                None => classes.push(&fragment.to_string()),
            }
        }
        classes.to_string()
    });
}

/// A view rendered through a named template.
pub struct TemplateView {
    pub(crate) name: Cow<'static, str>,
    pub(crate) props: Value,
    pub(crate) slots: Vec<(String, View)>,
    pub(crate) listeners: Vec<(String, Listener)>,
}

impl TemplateView {
    /// Creates a template view, serializing `props` for the template.
    pub fn new<P: serde::Serialize>(name: impl Into<Cow<'static, str>>, props: &P) -> Self {
        Self {
            name: name.into(),
            props: Value::from_serialize(props),
            slots: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Adds a child view, rendered before the template and exposed as
    /// `slots.<name>`.
    pub fn slot(mut self, name: impl Into<String>, view: impl Into<View>) -> Self {
        self.slots.push((name.into(), view.into()));
        self
    }

    /// Registers a listener, exposing its handler id as `handlers.<name>`.
    pub fn listen(mut self, name: impl Into<String>, listener: Listener) -> Self {
        self.listeners.push((name.into(), listener));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_builtin_templates_load() {
        let templates = Templates::new();
        for (name, _) in BUILTIN_TEMPLATES {
            assert!(templates.env.get_template(name).is_ok(), "{name} failed to load");
        }
    }

    #[test]
    fn test_unknown_template_is_a_fault() {
        let templates = Templates::new();
        let result = templates.render("missing.html", context! {});
        assert!(matches!(result, Err(RenderFault::Template { name, .. }) if name == "missing.html"));
    }

    #[test]
    fn test_custom_template_overrides_builtin() {
        let mut templates = Templates::new();
        templates
            .add_template("loader.html", "<p>loading</p>")
            .unwrap();
        let html = templates.render("loader.html", context! {}).unwrap();
        assert_eq!(html, "<p>loading</p>");
    }

    #[test]
    fn test_html_templates_escape_props() {
        let mut templates = Templates::new();
        templates
            .add_template("echo.html", "{{ props.text }}")
            .unwrap();
        let html = templates
            .render("echo.html", context! { props => context! { text => "<b>" } })
            .unwrap();
        assert_eq!(html, "&lt;b&gt;");
    }

    #[test]
    fn test_slashes_are_not_escaped() {
        let mut templates = Templates::new();
        templates
            .add_template("cls.html", r#"<b class="{{ props.class }}"></b>"#)
            .unwrap();
        let html = templates
            .render(
                "cls.html",
                context! { props => context! { class => "hover:bg-primary/90 \"x\"" } },
            )
            .unwrap();
        assert_eq!(html, r#"<b class="hover:bg-primary/90 &quot;x&quot;"></b>"#);
    }

    #[test]
    fn test_booleans_render_lowercase() {
        let mut templates = Templates::new();
        templates
            .add_template(
                "flag.html",
                r#"{{ true }} <b aria-expanded="{{ props.open }}" data-disabled="{{ props.disabled }}"></b>"#,
            )
            .unwrap();
        let html = templates
            .render(
                "flag.html",
                context! { props => context! { open => true, disabled => false } },
            )
            .unwrap();
        assert_eq!(html, r#"true <b aria-expanded="true" data-disabled="false"></b>"#);
    }

    #[test]
    fn test_numbers_pass_through() {
        let mut templates = Templates::new();
        templates
            .add_template("num.html", "{{ props.count }}/{{ props.ratio }}")
            .unwrap();
        let html = templates
            .render("num.html", context! { props => context! { count => 3, ratio => 0.5 } })
            .unwrap();
        assert_eq!(html, "3/0.5");
    }

    #[test]
    fn test_cn_filter_merges_and_skips_none() {
        let mut templates = Templates::new();
        templates
            .add_template("cn.txt", r#"{{ "h-10 px-4"|cn(none, extra) }}"#)
            .unwrap();
        let out = templates
            .render("cn.txt", context! { extra => "h-12" })
            .unwrap();
        assert_eq!(out, "px-4 h-12");
    }

    #[test]
    fn test_syntax_error_surfaces_at_registration() {
        let mut templates = Templates::new();
        assert!(templates.add_template("bad.html", "{{ unclosed").is_err());
    }
}

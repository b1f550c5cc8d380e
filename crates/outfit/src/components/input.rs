//! Text input.

use serde::Serialize;

use crate::class::cn;
use crate::runtime::{
    Component, EventHandler, Listener, RenderContext, RenderFault, TemplateView, View,
};

pub(crate) const INPUT_BASE: &str = "flex h-10 w-full rounded-md border border-input \
    bg-background px-3 py-2 text-sm ring-offset-background file:border-0 file:bg-transparent \
    file:text-sm file:font-medium placeholder:text-muted-foreground focus-visible:outline-none \
    focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 \
    disabled:cursor-not-allowed disabled:opacity-50";

/// A single-line input.
///
/// `change` events carry the new value; register a handler with
/// [`on_change`](Self::on_change) to receive them.
#[derive(Clone)]
pub struct Input {
    input_type: String,
    id: Option<String>,
    name: Option<String>,
    placeholder: Option<String>,
    value: Option<String>,
    autocomplete: Option<String>,
    aria_label: Option<String>,
    required: bool,
    disabled: bool,
    class: Option<String>,
    action: Option<String>,
    on_change: Option<EventHandler>,
    on_keydown: Option<EventHandler>,
}

#[derive(Serialize)]
struct InputProps<'a> {
    #[serde(rename = "type")]
    input_type: &'a str,
    class: String,
    id: Option<&'a str>,
    name: Option<&'a str>,
    placeholder: Option<&'a str>,
    value: Option<&'a str>,
    autocomplete: Option<&'a str>,
    aria_label: Option<&'a str>,
    required: bool,
    disabled: bool,
    action: Option<&'a str>,
}

impl Input {
    pub fn new() -> Self {
        Self {
            input_type: "text".to_string(),
            id: None,
            name: None,
            placeholder: None,
            value: None,
            autocomplete: None,
            aria_label: None,
            required: false,
            disabled: false,
            class: None,
            action: None,
            on_change: None,
            on_keydown: None,
        }
    }

    /// The `type` attribute, `text` by default.
    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = input_type.into();
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn autocomplete(mut self, autocomplete: impl Into<String>) -> Self {
        self.autocomplete = Some(autocomplete.into());
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.class = Some(match self.class.take() {
            Some(existing) => format!("{existing} {class}"),
            None => class,
        });
        self
    }

    /// Names the input's listeners, rendered as `data-action`.
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn on_change(mut self, handler: EventHandler) -> Self {
        self.on_change = Some(handler);
        self
    }

    pub fn on_keydown(mut self, handler: EventHandler) -> Self {
        self.on_keydown = Some(handler);
        self
    }

    pub(crate) fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn listener(&self, kind: &str, handler: &EventHandler) -> Listener {
        let listener = Listener::new(kind, handler.clone()).disabled(self.disabled);
        match &self.action {
            Some(action) => listener.action(action.clone()),
            None => listener,
        }
    }

    /// Builds the template view without going through the component stack.
    pub(crate) fn view(&self) -> TemplateView {
        let props = InputProps {
            input_type: &self.input_type,
            class: cn([INPUT_BASE, self.class.as_deref().unwrap_or_default()]).to_string(),
            id: self.id.as_deref(),
            name: self.name.as_deref(),
            placeholder: self.placeholder.as_deref(),
            value: self.value.as_deref(),
            autocomplete: self.autocomplete.as_deref(),
            aria_label: self.aria_label.as_deref(),
            required: self.required,
            disabled: self.disabled,
            action: self.action.as_deref(),
        };

        let mut view = TemplateView::new("input.html", &props);
        if let Some(handler) = &self.on_change {
            view = view.listen("change", self.listener("change", handler));
        }
        if let Some(handler) = &self.on_keydown {
            view = view.listen("keydown", self.listener("keydown", handler));
        }
        view
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Input {
    fn name(&self) -> &'static str {
        "Input"
    }

    fn render(&mut self, _cx: &mut RenderContext<'_>) -> Result<View, RenderFault> {
        Ok(self.view().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{handler, RecordingEnvironment, Renderer};
    use std::cell::Cell;
    use std::rc::Rc;

    fn render(input: Input) -> String {
        Renderer::new()
            .render_to_string(&mut View::from(input))
            .unwrap()
    }

    #[test]
    fn test_default_input() {
        let html = render(Input::new().placeholder("Enter text"));
        assert!(html.starts_with(r#"<input type="text" class="flex h-10 w-full rounded-md border"#));
        assert!(html.contains(r#"placeholder="Enter text""#));
        assert!(!html.contains("value="));
        assert!(!html.contains("</input>"));
    }

    #[test]
    fn test_input_attributes() {
        let html = render(
            Input::new()
                .input_type("email")
                .name("email")
                .value("test value")
                .required(true)
                .disabled(true)
                .class("custom-class"),
        );
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains(r#"name="email""#));
        assert!(html.contains(r#"value="test value""#));
        assert!(html.contains(" required"));
        assert!(html.contains(" disabled"));
        assert!(html.contains("custom-class"));
        assert!(html.contains("disabled:cursor-not-allowed"));
    }

    #[test]
    fn test_value_is_escaped() {
        let html = render(Input::new().value("\"><script>"));
        assert!(html.contains(r#"value="&quot;&gt;&lt;script&gt;""#));
    }

    #[test]
    fn test_change_events_reach_handler() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let input = Input::new().action("name").on_change(handler(move |event| {
            assert_eq!(event.value, Some("new value"));
            counter.set(counter.get() + 1);
            Ok(())
        }));

        let mut root = Renderer::new()
            .mount(input.into(), RecordingEnvironment::new())
            .unwrap();
        assert!(root.change("name", "new value").unwrap());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_disabled_input_ignores_change() {
        let input = Input::new()
            .action("name")
            .disabled(true)
            .on_change(handler(|_| Err(crate::EventError::failed("should not run"))));
        let mut root = Renderer::new()
            .mount(input.into(), RecordingEnvironment::new())
            .unwrap();
        assert!(!root.change("name", "x").unwrap());
    }
}

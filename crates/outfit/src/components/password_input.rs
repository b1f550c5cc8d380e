//! Password input with a visibility toggle.

use std::cell::Cell;
use std::rc::Rc;

use super::button::Button;
use super::icons::{Icon, IconName};
use super::input::Input;
use crate::runtime::{
    handler, Component, Element, EventHandler, RenderContext, RenderFault, View,
};
use crate::variant::{ButtonSize, ButtonVariant};

const TOGGLE_CLASS: &str = "absolute right-0 top-0 h-full px-3 py-2 hover:bg-transparent";

// Hides the reveal buttons some browsers add to password fields.
const HIDE_NATIVE_TOGGLE: &str = "<style>.hide-password-toggle::-ms-reveal, \
    .hide-password-toggle::-ms-clear { visibility: hidden; pointer-events: none; display: none; }</style>";

/// A password field that can be switched to plain text.
///
/// The toggle is disabled along with the input. A disabled field always
/// shows the eye-off icon.
pub struct PasswordInput {
    input: Input,
    class: Option<String>,
    action: Option<String>,
    visible: Rc<Cell<bool>>,
}

impl PasswordInput {
    pub fn new() -> Self {
        Self {
            input: Input::new(),
            class: None,
            action: None,
            visible: Rc::new(Cell::new(false)),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.input = self.input.id(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.input = self.input.name(name);
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.input = self.input.placeholder(placeholder);
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.input = self.input.value(value);
        self
    }

    pub fn autocomplete(mut self, autocomplete: impl Into<String>) -> Self {
        self.input = self.input.autocomplete(autocomplete);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.input = self.input.required(required);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.input = self.input.disabled(disabled);
        self
    }

    /// Classes merged onto the input element.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.class = Some(match self.class.take() {
            Some(existing) => format!("{existing} {class}"),
            None => class,
        });
        self
    }

    /// Names the input's change listener. The toggle is named
    /// `<action>:toggle`.
    pub fn action(mut self, action: impl Into<String>) -> Self {
        let action = action.into();
        self.input = self.input.action(action.clone());
        self.action = Some(action);
        self
    }

    pub fn on_change(mut self, handler: EventHandler) -> Self {
        self.input = self.input.on_change(handler);
        self
    }

    /// Shared visibility flag; `true` while the password is shown.
    pub fn visibility(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.visible)
    }

    fn toggle_action(&self) -> String {
        format!("{}:toggle", self.action.as_deref().unwrap_or("password"))
    }
}

impl Default for PasswordInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for PasswordInput {
    fn name(&self) -> &'static str {
        "PasswordInput"
    }

    fn render(&mut self, _cx: &mut RenderContext<'_>) -> Result<View, RenderFault> {
        let disabled = self.input.is_disabled();
        let visible = self.visible.get();

        let mut input = self
            .input
            .clone()
            .input_type(if visible { "text" } else { "password" })
            .class("hide-password-toggle pr-10");
        if let Some(class) = &self.class {
            input = input.class(class.clone());
        }

        let icon = if visible && !disabled {
            IconName::Eye
        } else {
            IconName::EyeOff
        };
        let label = if visible {
            "Hide password"
        } else {
            "Show password"
        };

        let flag = Rc::clone(&self.visible);
        let toggle = Button::new(View::fragment([
            View::from(Icon::new(icon)),
            View::from(Element::new("span").class("sr-only").child(label)),
        ]))
        .variant(ButtonVariant::Ghost)
        .size(ButtonSize::Sm)
        .class(TOGGLE_CLASS)
        .disabled(disabled)
        .action(self.toggle_action())
        .on_click(handler(move |_| {
            flag.set(!flag.get());
            Ok(())
        }));

        Ok(Element::new("div")
            .class("relative")
            .child(input.view())
            .child(toggle)
            .child(View::markup(HIDE_NATIVE_TOGGLE))
            .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{RecordingEnvironment, Renderer};

    fn render(input: PasswordInput) -> String {
        Renderer::new()
            .render_to_string(&mut View::from(input))
            .unwrap()
    }

    #[test]
    fn test_hidden_by_default() {
        let html = render(PasswordInput::new().placeholder("Enter password"));
        assert!(html.contains(r#"<input type="password""#));
        assert!(html.contains("hide-password-toggle"));
        assert!(html.contains("Show password"));
        assert!(html.contains("lucide-eye-off"));
    }

    #[test]
    fn test_toggle_switches_type_and_label() {
        let mut root = Renderer::new()
            .mount(PasswordInput::new().into(), RecordingEnvironment::new())
            .unwrap();

        assert!(root.click("password:toggle").unwrap());
        assert!(root.html().contains(r#"<input type="text""#));
        assert!(root.html().contains("Hide password"));
        assert!(root.html().contains("lucide-eye "));

        root.click("password:toggle").unwrap();
        assert!(root.html().contains(r#"<input type="password""#));
    }

    #[test]
    fn test_toggle_button_styling() {
        let html = render(PasswordInput::new());
        assert!(html.contains("absolute right-0"));
        assert!(html.contains("hover:bg-transparent"));
        assert!(!html.contains("hover:bg-accent"));
    }

    #[test]
    fn test_disabled_disables_toggle() {
        let mut root = Renderer::new()
            .mount(
                PasswordInput::new().disabled(true).into(),
                RecordingEnvironment::new(),
            )
            .unwrap();
        assert_eq!(root.html().matches(r#"" disabled"#).count(), 2);
        assert!(!root.click("password:toggle").unwrap());
        assert!(root.html().contains("lucide-eye-off"));
    }

    #[test]
    fn test_custom_class_lands_on_input() {
        let html = render(PasswordInput::new().class("custom-class pr-4"));
        let start = html.find("<input").unwrap();
        let input = &html[start..start + html[start..].find('>').unwrap()];
        assert!(input.contains("custom-class"));
        assert!(input.contains("pr-4"));
        assert!(!input.contains("pr-10"));
    }
}

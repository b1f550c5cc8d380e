//! Button with variant, size and effect styling.

use serde::Serialize;

use crate::runtime::{
    Component, EventHandler, Listener, RenderContext, RenderFault, TemplateView, View,
};
use crate::variant::{ButtonEffect, ButtonSize, ButtonVariant, VariantError, VariantRequest};

const EXPAND_LEFT: &str = "w-0 translate-x-[0%] pr-0 opacity-0 transition-all duration-200 \
    group-hover:w-5 group-hover:translate-x-100 group-hover:pr-2 group-hover:opacity-100";
const EXPAND_RIGHT: &str = "w-0 translate-x-[100%] pl-0 opacity-0 transition-all duration-200 \
    group-hover:w-5 group-hover:translate-x-0 group-hover:pl-2 group-hover:opacity-100";

/// Which side of the label an icon goes on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IconPlacement {
    #[default]
    Left,
    Right,
}

impl IconPlacement {
    fn as_str(self) -> &'static str {
        match self {
            IconPlacement::Left => "left",
            IconPlacement::Right => "right",
        }
    }
}

/// A button.
///
/// Classes come from the renderer's [`VariantTable`](crate::VariantTable),
/// so a theme loaded into the renderer restyles every button.
///
/// # Example
///
/// ```rust
/// use outfit::{Button, ButtonSize, ButtonVariant, Renderer, View};
///
/// let mut view = View::from(
///     Button::new("Delete")
///         .variant(ButtonVariant::Destructive)
///         .size(ButtonSize::Sm),
/// );
/// let html = Renderer::new().render_to_string(&mut view).unwrap();
/// assert!(html.starts_with(r#"<button type="button""#));
/// assert!(html.contains("h-9"));
/// ```
pub struct Button {
    children: View,
    request: VariantRequest,
    button_type: &'static str,
    disabled: bool,
    href: Option<String>,
    action: Option<String>,
    aria_label: Option<String>,
    on_click: Option<EventHandler>,
    icon: Option<View>,
    icon_placement: IconPlacement,
}

#[derive(Serialize)]
struct ButtonProps<'a> {
    class: String,
    #[serde(rename = "type")]
    button_type: &'a str,
    disabled: bool,
    href: Option<&'a str>,
    action: Option<&'a str>,
    aria_label: Option<&'a str>,
    icon_placement: &'a str,
    icon_wrap: Option<&'a str>,
}

impl Button {
    pub fn new(children: impl Into<View>) -> Self {
        Self {
            children: children.into(),
            request: VariantRequest::new(),
            button_type: "button",
            disabled: false,
            href: None,
            action: None,
            aria_label: None,
            on_click: None,
            icon: None,
            icon_placement: IconPlacement::Left,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.request = self.request.variant(variant);
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.request = self.request.size(size);
        self
    }

    pub fn effect(mut self, effect: ButtonEffect) -> Self {
        self.request = self.request.effect(effect);
        self
    }

    /// Sets style keys from strings, failing on unknown names.
    pub fn keys(
        mut self,
        variant: Option<&str>,
        size: Option<&str>,
        effect: Option<&str>,
    ) -> Result<Self, VariantError> {
        let parsed = VariantRequest::parse(variant, size, effect)?;
        self.request.variant = parsed.variant.or(self.request.variant);
        self.request.size = parsed.size.or(self.request.size);
        self.request.effect = parsed.effect.or(self.request.effect);
        Ok(self)
    }

    /// Extra classes, merged after the variant table's tokens.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.request = self.request.class(class);
        self
    }

    /// The `type` attribute: `button` (default), `submit` or `reset`.
    pub fn button_type(mut self, button_type: &'static str) -> Self {
        self.button_type = button_type;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Renders an `<a href>` carrying the button's classes instead of a
    /// `<button>`.
    pub fn as_link(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Names the click listener, rendered as `data-action`.
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn on_click(mut self, handler: EventHandler) -> Self {
        self.on_click = Some(handler);
        self
    }

    /// Adds an icon. With the `expandIcon` effect the icon is hidden until
    /// the button is hovered.
    pub fn icon(mut self, icon: impl Into<View>, placement: IconPlacement) -> Self {
        self.icon = Some(icon.into());
        self.icon_placement = placement;
        self
    }

    pub fn request(&self) -> &VariantRequest {
        &self.request
    }
}

impl Component for Button {
    fn name(&self) -> &'static str {
        "Button"
    }

    fn render(&mut self, cx: &mut RenderContext<'_>) -> Result<View, RenderFault> {
        let class = cx.variants().resolve(&self.request).to_string();
        let children = cx.render(&mut self.children)?;
        let icon = match &mut self.icon {
            Some(icon) => Some(cx.render(icon)?),
            None => None,
        };

        let icon_wrap = match (self.request.effect, self.icon_placement) {
            (Some(ButtonEffect::ExpandIcon), IconPlacement::Left) => Some(EXPAND_LEFT),
            (Some(ButtonEffect::ExpandIcon), IconPlacement::Right) => Some(EXPAND_RIGHT),
            _ => None,
        };
        let props = ButtonProps {
            class,
            button_type: self.button_type,
            disabled: self.disabled,
            href: self.href.as_deref(),
            action: self.action.as_deref(),
            aria_label: self.aria_label.as_deref(),
            icon_placement: self.icon_placement.as_str(),
            icon_wrap,
        };

        let mut view =
            TemplateView::new("button.html", &props).slot("children", View::markup(children));
        if let Some(icon) = icon {
            view = view.slot("icon", View::markup(icon));
        }
        if let Some(handler) = &self.on_click {
            let mut listener = Listener::click(handler.clone()).disabled(self.disabled);
            if let Some(action) = &self.action {
                listener = listener.action(action.clone());
            }
            view = view.listen("click", listener);
        }
        Ok(view.into())
    }
}

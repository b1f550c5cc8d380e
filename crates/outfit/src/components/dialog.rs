//! Modal dialog.

use serde::Serialize;

use super::icons::{Icon, IconName};
use super::OpenState;
use crate::class::cn;
use crate::runtime::{
    handler, Component, Listener, RenderContext, RenderFault, TemplateView, View,
};

const CONTENT_BASE: &str = "fixed left-[50%] top-[50%] z-50 grid w-full max-w-lg \
    translate-x-[-50%] translate-y-[-50%] gap-4 border bg-background p-6 shadow-lg duration-200 \
    data-[state=open]:animate-in data-[state=closed]:animate-out \
    data-[state=closed]:fade-out-0 data-[state=open]:fade-in-0 \
    data-[state=closed]:zoom-out-95 data-[state=open]:zoom-in-95 \
    data-[state=closed]:slide-out-to-left-1/2 data-[state=closed]:slide-out-to-top-[48%] \
    data-[state=open]:slide-in-from-left-1/2 data-[state=open]:slide-in-from-top-[48%] \
    sm:rounded-lg";

/// A dialog opened by its trigger.
///
/// The trigger toggles the dialog open; the close button and an `Escape`
/// keydown on the content close it. Actions are named after the dialog id:
/// `<id>:open`, `<id>:close` and `<id>:escape`.
///
/// # Example
///
/// ```rust
/// use outfit::{Dialog, RecordingEnvironment, Renderer};
///
/// let dialog = Dialog::new("settings", "Open")
///     .title("Edit profile")
///     .description("Make changes to your profile here.");
/// let mut root = Renderer::new()
///     .mount(dialog.into(), RecordingEnvironment::new())
///     .unwrap();
/// assert!(!root.html().contains("Edit profile"));
///
/// root.click("settings:open").unwrap();
/// assert!(root.html().contains("Edit profile"));
/// ```
pub struct Dialog {
    id: String,
    trigger: View,
    trigger_class: Option<String>,
    title: Option<String>,
    description: Option<String>,
    body: View,
    footer: View,
    class: Option<String>,
    state: OpenState,
}

#[derive(Serialize)]
struct DialogProps<'a> {
    id: &'a str,
    open: bool,
    state: &'a str,
    trigger_class: Option<&'a str>,
    content_class: String,
    title: Option<&'a str>,
    description: Option<&'a str>,
}

impl Dialog {
    pub fn new(id: impl Into<String>, trigger: impl Into<View>) -> Self {
        Self {
            id: id.into(),
            trigger: trigger.into(),
            trigger_class: None,
            title: None,
            description: None,
            body: View::Empty,
            footer: View::Empty,
            class: None,
            state: OpenState::default(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn body(mut self, body: impl Into<View>) -> Self {
        self.body = body.into();
        self
    }

    pub fn footer(mut self, footer: impl Into<View>) -> Self {
        self.footer = footer.into();
        self
    }

    /// Classes for the trigger button.
    pub fn trigger_class(mut self, class: impl Into<String>) -> Self {
        self.trigger_class = Some(class.into());
        self
    }

    /// Classes merged onto the dialog content.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn open(self, open: bool) -> Self {
        self.state.set(open);
        self
    }

    /// Handle to the open state, shared with the mounted dialog.
    pub fn state(&self) -> OpenState {
        self.state.clone()
    }
}

impl Component for Dialog {
    fn name(&self) -> &'static str {
        "Dialog"
    }

    fn render(&mut self, cx: &mut RenderContext<'_>) -> Result<View, RenderFault> {
        let open = self.state.is_open();
        let trigger = cx.render(&mut self.trigger)?;

        let props = DialogProps {
            id: &self.id,
            open,
            state: self.state.data_state(),
            trigger_class: self.trigger_class.as_deref(),
            content_class: cn([CONTENT_BASE, self.class.as_deref().unwrap_or_default()])
                .to_string(),
            title: self.title.as_deref(),
            description: self.description.as_deref(),
        };

        let toggler = self.state.clone();
        let mut view = TemplateView::new("dialog.html", &props)
            .slot("trigger", View::markup(trigger))
            .listen(
                "open",
                Listener::click(handler(move |_| {
                    toggler.toggle();
                    Ok(())
                }))
                .action(format!("{}:open", self.id)),
            );

        // Content is only rendered, and its listeners only registered, while open.
        if open {
            let body = cx.render(&mut self.body)?;
            let footer = cx.render(&mut self.footer)?;
            let closer = self.state.clone();
            let escaper = self.state.clone();
            view = view
                .slot("body", View::markup(body))
                .slot("close_icon", Icon::new(IconName::X))
                .listen(
                    "close",
                    Listener::click(handler(move |_| {
                        closer.set(false);
                        Ok(())
                    }))
                    .action(format!("{}:close", self.id)),
                )
                .listen(
                    "escape",
                    Listener::keydown(handler(move |event| {
                        if event.value == Some("Escape") {
                            escaper.set(false);
                        }
                        Ok(())
                    }))
                    .action(format!("{}:escape", self.id)),
                );
            if !footer.is_empty() {
                view = view.slot("footer", View::markup(footer));
            }
        }
        Ok(view.into())
    }
}

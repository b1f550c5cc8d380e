//! Popover anchored to a trigger.

use serde::Serialize;

use super::OpenState;
use crate::class::cn;
use crate::runtime::{
    handler, Component, Listener, RenderContext, RenderFault, TemplateView, View,
};

const CONTENT_BASE: &str = "z-50 w-72 rounded-md border bg-popover p-4 \
    text-popover-foreground shadow-md outline-none data-[state=open]:animate-in \
    data-[state=closed]:animate-out data-[state=closed]:fade-out-0 data-[state=open]:fade-in-0 \
    data-[state=closed]:zoom-out-95 data-[state=open]:zoom-in-95 \
    data-[side=bottom]:slide-in-from-top-2 data-[side=left]:slide-in-from-right-2 \
    data-[side=right]:slide-in-from-left-2 data-[side=top]:slide-in-from-bottom-2";

/// Horizontal alignment of the content relative to the trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Start,
    #[default]
    Center,
    End,
}

/// Floating content toggled by its trigger (`<id>:toggle`). An `Escape`
/// keydown on the content (`<id>:escape`) closes it.
pub struct Popover {
    id: String,
    trigger: View,
    trigger_class: Option<String>,
    content: View,
    align: Align,
    side_offset: u32,
    class: Option<String>,
    state: OpenState,
}

#[derive(Serialize)]
struct PopoverProps<'a> {
    id: &'a str,
    open: bool,
    state: &'a str,
    align: Align,
    side_offset: u32,
    trigger_class: Option<&'a str>,
    class: String,
}

impl Popover {
    pub fn new(id: impl Into<String>, trigger: impl Into<View>, content: impl Into<View>) -> Self {
        Self {
            id: id.into(),
            trigger: trigger.into(),
            trigger_class: None,
            content: content.into(),
            align: Align::Center,
            side_offset: 4,
            class: None,
            state: OpenState::default(),
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Distance from the trigger in pixels, 4 by default.
    pub fn side_offset(mut self, offset: u32) -> Self {
        self.side_offset = offset;
        self
    }

    pub fn trigger_class(mut self, class: impl Into<String>) -> Self {
        self.trigger_class = Some(class.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn open(self, open: bool) -> Self {
        self.state.set(open);
        self
    }

    pub fn state(&self) -> OpenState {
        self.state.clone()
    }
}

impl Component for Popover {
    fn name(&self) -> &'static str {
        "Popover"
    }

    fn render(&mut self, cx: &mut RenderContext<'_>) -> Result<View, RenderFault> {
        let open = self.state.is_open();
        let trigger = cx.render(&mut self.trigger)?;
        let props = PopoverProps {
            id: &self.id,
            open,
            state: self.state.data_state(),
            align: self.align,
            side_offset: self.side_offset,
            trigger_class: self.trigger_class.as_deref(),
            class: cn([CONTENT_BASE, self.class.as_deref().unwrap_or_default()]).to_string(),
        };

        let toggle = self.state.clone();
        let mut view = TemplateView::new("popover.html", &props)
            .slot("trigger", View::markup(trigger))
            .listen(
                "toggle",
                Listener::click(handler(move |_| {
                    toggle.toggle();
                    Ok(())
                }))
                .action(format!("{}:toggle", self.id)),
            );
        if open {
            let content = cx.render(&mut self.content)?;
            let escaper = self.state.clone();
            view = view.slot("content", View::markup(content)).listen(
                "escape",
                Listener::keydown(handler(move |event| {
                    if event.value == Some("Escape") {
                        escaper.set(false);
                    }
                    Ok(())
                }))
                .action(format!("{}:escape", self.id)),
            );
        }
        Ok(view.into())
    }
}

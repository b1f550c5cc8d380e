//! Scrollable region with styled scrollbars.

use serde::Serialize;

use crate::runtime::{Component, RenderContext, RenderFault, TemplateView, View};

/// Which scrollbars a [`ScrollArea`] shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollOrientation {
    #[default]
    Vertical,
    Horizontal,
    Both,
}

pub struct ScrollArea {
    children: View,
    orientation: ScrollOrientation,
    class: Option<String>,
}

#[derive(Serialize)]
struct ScrollAreaProps<'a> {
    class: Option<&'a str>,
    vertical: bool,
    horizontal: bool,
}

impl ScrollArea {
    pub fn new(children: impl Into<View>) -> Self {
        Self {
            children: children.into(),
            orientation: ScrollOrientation::Vertical,
            class: None,
        }
    }

    pub fn orientation(mut self, orientation: ScrollOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Component for ScrollArea {
    fn name(&self) -> &'static str {
        "ScrollArea"
    }

    fn render(&mut self, cx: &mut RenderContext<'_>) -> Result<View, RenderFault> {
        let children = cx.render(&mut self.children)?;
        let props = ScrollAreaProps {
            class: self.class.as_deref(),
            vertical: self.orientation != ScrollOrientation::Horizontal,
            horizontal: self.orientation != ScrollOrientation::Vertical,
        };
        Ok(TemplateView::new("scroll_area.html", &props)
            .slot("children", View::markup(children))
            .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{Element, Renderer};

    fn render(area: ScrollArea) -> String {
        Renderer::new()
            .render_to_string(&mut View::from(area))
            .unwrap()
    }

    #[test]
    fn test_vertical_by_default() {
        let html = render(
            ScrollArea::new(Element::new("p").child("Tags")).class("h-72 w-48 rounded-md border"),
        );
        assert!(html.starts_with(r#"<div class="relative overflow-hidden h-72 w-48 rounded-md border">"#));
        assert!(html.contains("<p>Tags</p>"));
        assert!(html.contains(r#"data-orientation="vertical""#));
        assert!(!html.contains(r#"data-orientation="horizontal""#));
    }

    #[test]
    fn test_both_scrollbars() {
        let html = render(ScrollArea::new("x").orientation(ScrollOrientation::Both));
        assert!(html.contains(r#"data-orientation="vertical""#));
        assert!(html.contains(r#"data-orientation="horizontal""#));
        assert!(html.contains("overflow: scroll"));
    }
}

//! Inline SVG icons (Lucide outlines).

use crate::class::ClassList;
use crate::runtime::{Element, View};

/// Icons used by the built-in components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    ArrowRight,
    Check,
    ChevronsUpDown,
    Eye,
    EyeOff,
    Search,
    X,
}

impl IconName {
    fn slug(self) -> &'static str {
        match self {
            IconName::ArrowRight => "arrow-right",
            IconName::Check => "check",
            IconName::ChevronsUpDown => "chevrons-up-down",
            IconName::Eye => "eye",
            IconName::EyeOff => "eye-off",
            IconName::Search => "search",
            IconName::X => "x",
        }
    }

    fn paths(self) -> &'static str {
        match self {
            IconName::ArrowRight => r#"<path d="M5 12h14"></path><path d="m12 5 7 7-7 7"></path>"#,
            IconName::Check => r#"<path d="M20 6 9 17l-5-5"></path>"#,
            IconName::ChevronsUpDown => {
                r#"<path d="m7 15 5 5 5-5"></path><path d="m7 9 5-5 5 5"></path>"#
            }
            IconName::Eye => {
                r#"<path d="M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z"></path><circle cx="12" cy="12" r="3"></circle>"#
            }
            IconName::EyeOff => concat!(
                r#"<path d="M9.88 9.88a3 3 0 1 0 4.24 4.24"></path>"#,
                r#"<path d="M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68"></path>"#,
                r#"<path d="M6.61 6.61A13.526 13.526 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61"></path>"#,
                r#"<line x1="2" x2="22" y1="2" y2="22"></line>"#,
            ),
            IconName::Search => {
                r#"<circle cx="11" cy="11" r="8"></circle><path d="m21 21-4.3-4.3"></path>"#
            }
            IconName::X => r#"<path d="M18 6 6 18"></path><path d="m6 6 12 12"></path>"#,
        }
    }
}

/// An icon with its classes. Always `aria-hidden`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    name: IconName,
    class: ClassList,
}

impl Icon {
    pub fn new(name: IconName) -> Self {
        Self {
            name,
            class: ClassList::parse("h-4 w-4"),
        }
    }

    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        self.class.push(class.as_ref());
        self
    }

    pub fn name(&self) -> IconName {
        self.name
    }
}

impl From<IconName> for Icon {
    fn from(name: IconName) -> Self {
        Icon::new(name)
    }
}

impl From<Icon> for View {
    fn from(icon: Icon) -> Self {
        let class = ClassList::parse("lucide")
            .with(format!("lucide-{}", icon.name.slug()))
            .with(icon.class.to_string());
        Element::new("svg")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("width", "24")
            .attr("height", "24")
            .attr("viewBox", "0 0 24 24")
            .attr("fill", "none")
            .attr("stroke", "currentColor")
            .attr("stroke-width", "2")
            .attr("stroke-linecap", "round")
            .attr("stroke-linejoin", "round")
            .class(class.to_string())
            .attr("aria-hidden", "true")
            .child(View::markup(icon.name.paths()))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::Renderer;

    #[test]
    fn test_icon_markup() {
        let mut view = View::from(Icon::new(IconName::EyeOff).class("mr-2"));
        let html = Renderer::new().render_to_string(&mut view).unwrap();
        assert!(html.starts_with("<svg "));
        assert!(html.contains(r#"class="lucide lucide-eye-off h-4 w-4 mr-2""#));
        assert!(html.contains(r#"aria-hidden="true""#));
        assert!(html.ends_with("</svg>"));
    }

    #[test]
    fn test_icon_class_overrides_size() {
        let mut view = View::from(Icon::new(IconName::X).class("h-6 w-6"));
        let html = Renderer::new().render_to_string(&mut view).unwrap();
        assert!(html.contains(r#"class="lucide lucide-x h-6 w-6""#));
    }
}

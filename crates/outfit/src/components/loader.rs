//! Three pulsing dots.

use serde::Serialize;

use crate::runtime::{
    Animation, Component, Keyframe, RenderContext, RenderFault, Repeat, TemplateView, Timing,
    View,
};

const DOTS: [&str; 3] = ["bg-primary", "bg-secondary", "bg-primary"];

/// A loading indicator.
///
/// Requests a looping pulse on its `.dot` elements; the animation starts when
/// the pass is committed and is reverted when the tree unmounts.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    class: Option<String>,
    label: Option<String>,
}

#[derive(Serialize)]
struct LoaderProps<'a> {
    class: Option<&'a str>,
    label: &'a str,
    dots: [&'a str; 3],
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Accessible label, `Loading` by default.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The pulse animation requested on every pass.
    pub fn animation() -> Animation {
        Animation::new(
            ".dot",
            Keyframe {
                scale: Some(0.8),
                opacity: Some(0.5),
                ..Keyframe::default()
            },
            Keyframe {
                scale: Some(1.2),
                opacity: Some(1.0),
                ..Keyframe::default()
            },
            Timing {
                duration: 0.6,
                stagger: 0.2,
                repeat: Repeat::Infinite,
                yoyo: true,
                ease: Some("power1.inOut".to_string()),
                ..Timing::default()
            },
        )
    }
}

impl Component for Loader {
    fn name(&self) -> &'static str {
        "Loader"
    }

    fn render(&mut self, cx: &mut RenderContext<'_>) -> Result<View, RenderFault> {
        cx.animate(Self::animation());
        let props = LoaderProps {
            class: self.class.as_deref(),
            label: self.label.as_deref().unwrap_or("Loading"),
            dots: DOTS,
        };
        Ok(TemplateView::new("loader.html", &props).into())
    }
}

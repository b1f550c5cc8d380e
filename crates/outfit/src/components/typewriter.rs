//! Typewriter text reveal.

use serde::Serialize;

use crate::runtime::{
    Animation, Component, Keyframe, RenderContext, RenderFault, Repeat, TemplateView, Timing,
    View,
};

/// One word of a [`TypewriterEffect`], with optional classes for its letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    class: Option<String>,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: None,
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Word::new(text)
    }
}

/// Words revealed one character at a time, followed by a blinking cursor.
///
/// Each character renders hidden; the reveal is an animation the
/// environment plays on `.typewriter-char`.
#[derive(Debug, Clone, Default)]
pub struct TypewriterEffect {
    words: Vec<Word>,
    class: Option<String>,
    cursor_class: Option<String>,
}

#[derive(Serialize)]
struct WordProps<'a> {
    chars: Vec<String>,
    class: Option<&'a str>,
}

#[derive(Serialize)]
struct TypewriterProps<'a> {
    words: Vec<WordProps<'a>>,
    class: Option<&'a str>,
    cursor_class: Option<&'a str>,
}

impl TypewriterEffect {
    pub fn new<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<Word>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            class: None,
            cursor_class: None,
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn cursor_class(mut self, class: impl Into<String>) -> Self {
        self.cursor_class = Some(class.into());
        self
    }

    /// Reveals every character in turn.
    pub fn reveal() -> Animation {
        Animation::new(
            ".typewriter-char",
            Keyframe::default(),
            Keyframe {
                display: Some("inline-block".to_string()),
                opacity: Some(1.0),
                width: Some("fit-content".to_string()),
                ..Keyframe::default()
            },
            Timing {
                duration: 0.3,
                stagger: 0.1,
                ease: Some("easeInOut".to_string()),
                ..Timing::default()
            },
        )
    }

    /// Blinks the cursor forever.
    pub fn blink() -> Animation {
        Animation::new(
            ".typewriter-cursor",
            Keyframe {
                opacity: Some(0.0),
                ..Keyframe::default()
            },
            Keyframe {
                opacity: Some(1.0),
                ..Keyframe::default()
            },
            Timing {
                duration: 0.8,
                repeat: Repeat::Infinite,
                yoyo: true,
                ..Timing::default()
            },
        )
    }
}

impl Component for TypewriterEffect {
    fn name(&self) -> &'static str {
        "TypewriterEffect"
    }

    fn render(&mut self, cx: &mut RenderContext<'_>) -> Result<View, RenderFault> {
        cx.animate(Self::reveal());
        cx.animate(Self::blink());

        let props = TypewriterProps {
            words: self
                .words
                .iter()
                .map(|word| WordProps {
                    chars: word.text.chars().map(String::from).collect(),
                    class: word.class.as_deref(),
                })
                .collect(),
            class: self.class.as_deref(),
            cursor_class: self.cursor_class.as_deref(),
        };
        Ok(TemplateView::new("typewriter.html", &props).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{RecordingEnvironment, Renderer};

    #[test]
    fn test_one_span_per_character() {
        let effect = TypewriterEffect::new(["Build", "awesome"]);
        let html = Renderer::new()
            .render_to_string(&mut View::from(effect))
            .unwrap();
        assert_eq!(html.matches("typewriter-char").count(), 12);
        assert!(html.contains(">B</span>"));
        assert!(html.contains("typewriter-cursor"));
    }

    #[test]
    fn test_word_class_overrides_text_color() {
        let effect = TypewriterEffect::new([Word::new("Aceternity").class("text-blue-500")]);
        let html = Renderer::new()
            .render_to_string(&mut View::from(effect))
            .unwrap();
        assert!(html.contains("text-blue-500"));
        assert!(!html.contains(" text-black"));
    }

    #[test]
    fn test_characters_are_escaped() {
        let effect = TypewriterEffect::new(["<&>"]);
        let html = Renderer::new()
            .render_to_string(&mut View::from(effect))
            .unwrap();
        assert!(html.contains(">&lt;</span>"));
        assert!(html.contains(">&amp;</span>"));
    }

    #[test]
    fn test_requests_reveal_and_blink() {
        let env = RecordingEnvironment::new();
        let root = Renderer::new()
            .mount(TypewriterEffect::new(["hi"]).into(), env)
            .unwrap();
        let env = root.unmount();
        let targets: Vec<String> = env.started().into_iter().map(|a| a.target).collect();
        assert_eq!(targets, [".typewriter-char", ".typewriter-cursor"]);
        assert_eq!(env.running(), 0);
    }
}

//! Subcommand implementations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use minijinja::{context, Environment as Templates};
use outfit::{
    component_fn, Animation, Button, ErrorBoundary, Input, Loader, PasswordInput, RenderFault,
    Renderer, TypewriterEffect, VariantRequest, VariantTable, View,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::environment::PreviewEnvironment;

const DOCUMENT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{ title }}</title>
<script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="p-8">
{{ body|safe }}
</body>
</html>
"#;

/// Style keys shared by `classes` and `render button`.
#[derive(Args, Debug, Clone, Default)]
pub struct StyleArgs {
    /// Variant: default, destructive, outline, secondary, ghost or link
    #[arg(long)]
    pub variant: Option<String>,

    /// Size: default, sm, lg or icon
    #[arg(long)]
    pub size: Option<String>,

    /// Effect, such as ringHover, shine or gooeyRight
    #[arg(long)]
    pub effect: Option<String>,

    /// Extra classes, merged last
    #[arg(long)]
    pub class: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Button,
    Input,
    Password,
    Loader,
    Typewriter,
    /// The error boundary's default fallback
    Fallback,
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Component to render
    #[arg(value_enum)]
    pub component: ComponentKind,

    #[command(flatten)]
    pub style: StyleArgs,

    /// Button label
    #[arg(long, default_value = "Button")]
    pub label: String,

    /// Input placeholder
    #[arg(long)]
    pub placeholder: Option<String>,

    /// Input type
    #[arg(long = "type", value_name = "TYPE")]
    pub input_type: Option<String>,

    /// Typewriter word; repeat for more words
    #[arg(long = "word", value_name = "WORD")]
    pub words: Vec<String>,

    #[arg(long)]
    pub disabled: bool,

    /// Wrap the markup in a standalone HTML document
    #[arg(long, conflicts_with = "json")]
    pub document: bool,

    /// Print JSON with the markup and the requested animations
    #[arg(long)]
    pub json: bool,
}

/// Output of `render --json`.
#[derive(Debug, Serialize)]
pub struct Rendered {
    pub html: String,
    pub animations: Vec<Animation>,
}

/// Loads the variant table, layering a theme file over the built-in one.
pub fn load_variants(theme: Option<&Path>) -> Result<VariantTable> {
    let Some(path) = theme else {
        return Ok(VariantTable::button());
    };
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read theme {}", path.display()))?;
    let table = VariantTable::from_yaml(&source)
        .with_context(|| format!("Failed to load theme {}", path.display()))?;
    info!(theme = %path.display(), "loaded theme");
    Ok(table)
}

/// `outfit classes`: prints the resolved class string.
pub fn classes(variants: &VariantTable, args: &StyleArgs) -> Result<String> {
    let mut request = VariantRequest::parse(
        args.variant.as_deref(),
        args.size.as_deref(),
        args.effect.as_deref(),
    )?;
    if let Some(class) = &args.class {
        request = request.class(class.clone());
    }
    Ok(variants.resolve(&request).to_string())
}

fn build_view(args: &RenderArgs) -> Result<View> {
    let class = args.style.class.clone();
    let view = match args.component {
        ComponentKind::Button => {
            let mut button = Button::new(args.label.as_str())
                .keys(
                    args.style.variant.as_deref(),
                    args.style.size.as_deref(),
                    args.style.effect.as_deref(),
                )?
                .disabled(args.disabled);
            if let Some(class) = class {
                button = button.class(class);
            }
            button.into()
        }
        ComponentKind::Input => {
            let mut input = Input::new().disabled(args.disabled);
            if let Some(input_type) = &args.input_type {
                input = input.input_type(input_type.clone());
            }
            if let Some(placeholder) = &args.placeholder {
                input = input.placeholder(placeholder.clone());
            }
            if let Some(class) = class {
                input = input.class(class);
            }
            input.into()
        }
        ComponentKind::Password => {
            let mut password = PasswordInput::new().disabled(args.disabled);
            if let Some(placeholder) = &args.placeholder {
                password = password.placeholder(placeholder.clone());
            }
            if let Some(class) = class {
                password = password.class(class);
            }
            password.into()
        }
        ComponentKind::Loader => {
            let mut loader = Loader::new();
            if let Some(class) = class {
                loader = loader.class(class);
            }
            loader.into()
        }
        ComponentKind::Typewriter => {
            let words: Vec<&str> = if args.words.is_empty() {
                vec!["Build", "awesome", "apps"]
            } else {
                args.words.iter().map(String::as_str).collect()
            };
            let mut typewriter = TypewriterEffect::new(words);
            if let Some(class) = class {
                typewriter = typewriter.class(class);
            }
            typewriter.into()
        }
        ComponentKind::Fallback => {
            let preview = component_fn("Preview", |_| {
                Err(RenderFault::new("fallback preview"))
            });
            ErrorBoundary::new(View::component(preview))
                .sink(|_: &outfit::CapturedFault| {})
                .into()
        }
    };
    Ok(view)
}

/// Mounts the requested component and collects its markup and animations.
pub fn render(renderer: Renderer, args: &RenderArgs) -> Result<Rendered> {
    let view = build_view(args)?;
    let root = renderer
        .mount(view, PreviewEnvironment::new())
        .with_context(|| format!("Failed to render {:?}", args.component))?;
    debug!(handlers = root.handlers().count(), "rendered preview");

    let html = root.html().to_string();
    let animations = root.environment().animations();
    root.unmount();
    Ok(Rendered { html, animations })
}

/// Formats a render result the way the flags ask for.
pub fn format_output(rendered: &Rendered, args: &RenderArgs) -> Result<String> {
    if args.json {
        return serde_json::to_string_pretty(rendered).context("Failed to serialize output");
    }
    if args.document {
        return document(&format!("outfit: {:?}", args.component).to_lowercase(), &rendered.html);
    }
    Ok(rendered.html.clone())
}

fn document(title: &str, body: &str) -> Result<String> {
    let mut env = Templates::new();
    env.add_template("document.html", DOCUMENT)
        .context("Failed to load document template")?;
    let template = env.get_template("document.html")?;
    template
        .render(context! { title, body })
        .context("Failed to render document")
}

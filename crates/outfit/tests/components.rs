//! Integration tests composing several components in one mounted tree.

use std::cell::RefCell;
use std::rc::Rc;

use outfit::{
    handler, Button, ButtonVariant, Command, CommandDialog, CommandGroup, CommandItem, Element,
    Input, Loader, PasswordInput, RecordingEnvironment, Renderer, TemplateView, TypewriterEffect,
    VariantTable, View,
};
use serde_json::json;

fn mount(view: impl Into<View>) -> outfit::Root<RecordingEnvironment> {
    Renderer::new()
        .mount(view.into(), RecordingEnvironment::new())
        .unwrap()
}

#[test]
fn test_login_form() {
    let submitted = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&submitted);
    let password = Rc::new(RefCell::new(String::new()));
    let typed = Rc::clone(&password);

    let form = Element::new("form")
        .class("space-y-4")
        .child(Input::new().input_type("email").name("email").placeholder("you@example.com"))
        .child(
            PasswordInput::new()
                .name("password")
                .action("password")
                .on_change(handler(move |event| {
                    *typed.borrow_mut() = event.value.unwrap_or_default().to_string();
                    Ok(())
                })),
        )
        .child(
            Button::new("Sign in")
                .button_type("submit")
                .action("submit")
                .on_click(handler(move |_| {
                    sink.borrow_mut().push("submit");
                    Ok(())
                })),
        );
    let mut root = mount(form);

    let html = root.html();
    assert!(html.starts_with(r#"<form class="space-y-4">"#));
    assert!(html.contains(r#"type="email""#));
    assert!(html.contains(r#"type="password""#));
    assert!(html.contains(r#"placeholder="you@example.com""#));

    root.change("password", "hunter2").unwrap();
    assert_eq!(*password.borrow(), "hunter2");

    root.click("password:toggle").unwrap();
    assert!(root.html().contains(r#"type="text""#));
    assert!(root.html().contains("Hide password"));

    root.click("submit").unwrap();
    assert_eq!(*submitted.borrow(), ["submit"]);
}

#[test]
fn test_theme_overrides_button_classes() {
    let table = VariantTable::from_yaml(
        "variants:\n  destructive: \"bg-red-600 text-white hover:bg-red-700\"\n",
    )
    .unwrap();
    let renderer = Renderer::with_variants(table);
    let mut view = View::from(Button::new("Delete").variant(ButtonVariant::Destructive));
    let html = renderer.render_to_string(&mut view).unwrap();

    assert!(html.contains("bg-red-600"));
    assert!(!html.contains("bg-destructive"));
    assert!(html.contains("inline-flex"));
}

#[test]
fn test_custom_template_component() {
    let mut renderer = Renderer::new();
    renderer
        .add_template(
            "badge.html",
            r#"<span class="{{ "rounded px-2 text-xs"|cn(props.class) }}">{{ props.label }}</span>"#,
        )
        .unwrap();

    let mut view = View::from(TemplateView::new(
        "badge.html",
        &json!({ "label": "<new>", "class": "px-3" }),
    ));
    let html = renderer.render_to_string(&mut view).unwrap();
    assert_eq!(html, r#"<span class="rounded text-xs px-3">&lt;new&gt;</span>"#);
}

#[test]
fn test_unknown_template_is_a_fault() {
    let mut view = View::from(TemplateView::new("missing.html", &json!({})));
    let err = Renderer::new().render_to_string(&mut view).unwrap_err();
    assert!(err.to_string().contains("missing.html"));
}

#[test]
fn test_command_palette_in_dialog() {
    let chosen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&chosen);
    let command = Command::new("cmd").placeholder("Type a command or search...").group(
        CommandGroup::new("Suggestions")
            .item(CommandItem::new("Calendar"))
            .item(CommandItem::new("Search Emoji").on_select(handler(move |event| {
                *sink.borrow_mut() = event.value.map(str::to_string);
                Ok(())
            }))),
    );
    let mut root = mount(CommandDialog::new("palette", "Open", command));
    assert!(!root.html().contains("data-command"));

    root.click("palette:open").unwrap();
    assert!(root.html().contains("Type a command or search..."));

    root.change("cmd:query", "emoji").unwrap();
    assert!(!root.html().contains("Calendar"));
    root.keydown("cmd:query", "Enter").unwrap();
    assert_eq!(chosen.borrow().as_deref(), Some("search-emoji"));

    root.keydown("palette:escape", "Escape").unwrap();
    assert!(!root.html().contains("data-command"));
}

#[test]
fn test_animations_follow_the_tree() {
    let mut root = mount(
        Element::new("div")
            .child(Loader::new())
            .child(TypewriterEffect::new(["Build", "awesome", "apps"])),
    );
    assert_eq!(root.environment().running(), 3);

    root.rerender().unwrap();
    assert_eq!(root.environment().started().len(), 3);

    let env = root.unmount();
    assert_eq!(env.running(), 0);
    assert_eq!(env.reverted().len(), 3);
}

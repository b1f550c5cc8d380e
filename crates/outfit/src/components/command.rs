//! Command palette with fuzzy filtering.

use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

use super::dialog::Dialog;
use super::icons::{Icon, IconName};
use super::OpenState;
use crate::runtime::{
    handler, Component, Event, EventError, EventHandler, Listener, RenderContext, RenderFault,
    TemplateView, View,
};

/// Scores `candidate` against `query` as a case-insensitive subsequence.
///
/// Returns `None` when some query character is missing. Matches at word
/// starts and runs of consecutive matches score higher; a prefix match gets
/// a further bonus. An empty query matches everything with score 0.
///
/// ```rust
/// use outfit::fuzzy_score;
///
/// assert!(fuzzy_score("cal", "Calendar").unwrap() > fuzzy_score("cal", "Musical").unwrap());
/// assert_eq!(fuzzy_score("xyz", "Calendar"), None);
/// ```
pub fn fuzzy_score(query: &str, candidate: &str) -> Option<u32> {
    let query: Vec<char> = query.trim().chars().flat_map(char::to_lowercase).collect();
    if query.is_empty() {
        return Some(0);
    }

    let mut score = 0;
    let mut next = 0;
    let mut previous_match: Option<usize> = None;
    let mut previous_char: Option<char> = None;

    for (index, c) in candidate.chars().flat_map(char::to_lowercase).enumerate() {
        if next < query.len() && c == query[next] {
            score += 1;
            if previous_match.is_some_and(|p| p + 1 == index) {
                score += 5;
            }
            if previous_char.map_or(true, |p| matches!(p, ' ' | '-' | '_' | '/' | '.')) {
                score += 8;
            }
            previous_match = Some(index);
            next += 1;
        }
        previous_char = Some(c);
    }

    if next < query.len() {
        return None;
    }
    if previous_match == Some(query.len() - 1) {
        score += 10;
    }
    Some(score)
}

/// One selectable entry.
#[derive(Clone)]
pub struct CommandItem {
    value: String,
    label: String,
    keywords: Vec<String>,
    shortcut: Option<String>,
    icon: Option<Icon>,
    disabled: bool,
    on_select: Option<EventHandler>,
}

impl CommandItem {
    /// Creates an item; `label` doubles as the match value.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: label.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-"),
            label,
            keywords: Vec::new(),
            shortcut: None,
            icon: None,
            disabled: false,
            on_select: None,
        }
    }

    /// Overrides the value used for actions and `data-value`.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Extra terms the query is matched against.
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    pub fn shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into().class("mr-2"));
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Runs when the item is clicked or chosen with `Enter`. The handler sees
    /// a `select` event whose value is the item's value.
    pub fn on_select(mut self, handler: EventHandler) -> Self {
        self.on_select = Some(handler);
        self
    }

    fn score(&self, query: &str) -> Option<u32> {
        std::iter::once(self.label.as_str())
            .chain(std::iter::once(self.value.as_str()))
            .chain(self.keywords.iter().map(String::as_str))
            .filter_map(|candidate| fuzzy_score(query, candidate))
            .max()
    }
}

/// Items under an optional heading.
#[derive(Clone, Default)]
pub struct CommandGroup {
    heading: Option<String>,
    items: Vec<CommandItem>,
}

impl CommandGroup {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: Some(heading.into()),
            items: Vec::new(),
        }
    }

    /// A group without a heading.
    pub fn untitled() -> Self {
        Self::default()
    }

    pub fn item(mut self, item: CommandItem) -> Self {
        self.items.push(item);
        self
    }
}

#[derive(Clone)]
enum Entry {
    Group(CommandGroup),
    Separator,
}

#[derive(Debug, Default)]
struct CommandState {
    query: String,
    selected: usize,
}

/// A searchable list of commands.
///
/// The query input is named `<id>:query`: `change` events update the query
/// and `keydown` events move the selection (`ArrowDown`, `ArrowUp`) or run
/// the selected item (`Enter`). Items are named `<id>:<value>`.
pub struct Command {
    id: String,
    placeholder: String,
    empty_text: String,
    entries: Vec<Entry>,
    class: Option<String>,
    state: Rc<RefCell<CommandState>>,
}

#[derive(Serialize)]
struct ItemProps<'a> {
    key: String,
    value: &'a str,
    label: &'a str,
    shortcut: Option<&'a str>,
    disabled: bool,
    selected: bool,
}

#[derive(Serialize)]
struct EntryProps<'a> {
    separator: bool,
    heading: Option<&'a str>,
    items: Vec<ItemProps<'a>>,
}

#[derive(Serialize)]
struct CommandProps<'a> {
    id: &'a str,
    placeholder: &'a str,
    query: &'a str,
    empty: bool,
    empty_text: &'a str,
    class: Option<&'a str>,
    entries: Vec<EntryProps<'a>>,
}

impl Command {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            placeholder: "Type a command or search...".to_string(),
            empty_text: "No results found.".to_string(),
            entries: Vec::new(),
            class: None,
            state: Rc::new(RefCell::new(CommandState::default())),
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    pub fn group(mut self, group: CommandGroup) -> Self {
        self.entries.push(Entry::Group(group));
        self
    }

    /// A divider between groups. Hidden while a query is active.
    pub fn separator(mut self) -> Self {
        self.entries.push(Entry::Separator);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Current query text.
    pub fn query(&self) -> String {
        self.state.borrow().query.clone()
    }

    /// Matching items per group, best match first. Groups without matches
    /// are dropped; separators survive only while the query is empty.
    fn visible(&self, query: &str) -> Vec<(Option<&CommandGroup>, Vec<&CommandItem>)> {
        let searching = !query.trim().is_empty();
        let mut visible = Vec::new();
        for entry in &self.entries {
            match entry {
                Entry::Separator if !searching => visible.push((None, Vec::new())),
                Entry::Separator => {}
                Entry::Group(group) => {
                    let mut scored: Vec<(u32, &CommandItem)> = group
                        .items
                        .iter()
                        .filter_map(|item| item.score(query).map(|score| (score, item)))
                        .collect();
                    if scored.is_empty() {
                        continue;
                    }
                    // Stable sort keeps declaration order among equal scores.
                    scored.sort_by(|a, b| b.0.cmp(&a.0));
                    visible.push((Some(group), scored.into_iter().map(|(_, item)| item).collect()));
                }
            }
        }
        visible
    }
}

/// Wraps an item's handler so it sees a `select` event carrying its value.
fn select_handler(item: &CommandItem, on_select: &EventHandler) -> EventHandler {
    let value = item.value.clone();
    let on_select = Rc::clone(on_select);
    handler(move |event| run_select(&on_select, &value, event))
}

fn run_select(
    on_select: &EventHandler,
    value: &str,
    event: &Event<'_>,
) -> Result<(), EventError> {
    let select = Event {
        kind: "select",
        value: Some(value),
        environment: event.environment,
    };
    let mut on_select = on_select.borrow_mut();
    (&mut *on_select)(&select)
}

impl Component for Command {
    fn name(&self) -> &'static str {
        "Command"
    }

    fn render(&mut self, _cx: &mut RenderContext<'_>) -> Result<View, RenderFault> {
        let (query, selected) = {
            let state = self.state.borrow();
            (state.query.clone(), state.selected)
        };
        let visible = self.visible(&query);

        let selectable: Vec<&CommandItem> = visible
            .iter()
            .flat_map(|(_, items)| items.iter().copied())
            .filter(|item| !item.disabled)
            .collect();
        let selected = selected.min(selectable.len().saturating_sub(1));
        let selected_value = selectable.get(selected).map(|item| item.value.as_str());

        let mut slots = Vec::new();
        let mut listeners = Vec::new();
        let mut entries = Vec::new();
        let mut index = 0;
        for (group, items) in &visible {
            let Some(group) = group else {
                entries.push(EntryProps {
                    separator: true,
                    heading: None,
                    items: Vec::new(),
                });
                continue;
            };
            let mut item_props = Vec::new();
            for item in items {
                let key = format!("item{index}");
                index += 1;
                if let Some(icon) = &item.icon {
                    slots.push((key.clone(), View::from(icon.clone())));
                }
                if let Some(on_select) = &item.on_select {
                    let listener = Listener::click(select_handler(item, on_select))
                        .action(format!("{}:{}", self.id, item.value))
                        .disabled(item.disabled);
                    listeners.push((key.clone(), listener));
                }
                item_props.push(ItemProps {
                    key,
                    value: &item.value,
                    label: &item.label,
                    shortcut: item.shortcut.as_deref(),
                    disabled: item.disabled,
                    selected: !item.disabled && Some(item.value.as_str()) == selected_value,
                });
            }
            entries.push(EntryProps {
                separator: false,
                heading: group.heading.as_deref(),
                items: item_props,
            });
        }

        let props = CommandProps {
            id: &self.id,
            placeholder: &self.placeholder,
            query: &query,
            empty: index == 0,
            empty_text: &self.empty_text,
            class: self.class.as_deref(),
            entries,
        };

        let targets: Vec<(String, Option<EventHandler>)> = selectable
            .iter()
            .map(|item| (item.value.clone(), item.on_select.clone()))
            .collect();
        let query_state = Rc::clone(&self.state);
        let nav_state = Rc::clone(&self.state);
        let action = format!("{}:query", self.id);

        let mut view = TemplateView::new("command.html", &props)
            .slot("search_icon", Icon::new(IconName::Search).class("mr-2 shrink-0 opacity-50"))
            .listen(
                "query",
                Listener::change(handler(move |event| {
                    let mut state = query_state.borrow_mut();
                    state.query = event.value.unwrap_or_default().to_string();
                    state.selected = 0;
                    Ok(())
                }))
                .action(action.clone()),
            )
            .listen(
                "navigate",
                Listener::keydown(handler(move |event| {
                    if targets.is_empty() {
                        return Ok(());
                    }
                    let current = nav_state.borrow().selected.min(targets.len() - 1);
                    match event.value {
                        Some("ArrowDown") => {
                            nav_state.borrow_mut().selected = (current + 1) % targets.len();
                        }
                        Some("ArrowUp") => {
                            nav_state.borrow_mut().selected =
                                (current + targets.len() - 1) % targets.len();
                        }
                        Some("Enter") => {
                            if let (value, Some(on_select)) = &targets[current] {
                                run_select(on_select, value, event)?;
                            }
                        }
                        _ => {}
                    }
                    Ok(())
                }))
                .action(action),
            );
        for (name, slot) in slots {
            view = view.slot(name, slot);
        }
        for (name, listener) in listeners {
            view = view.listen(name, listener);
        }
        Ok(view.into())
    }
}

/// A [`Command`] palette inside a [`Dialog`].
pub struct CommandDialog {
    dialog: Dialog,
}

impl CommandDialog {
    pub fn new(id: impl Into<String>, trigger: impl Into<View>, command: Command) -> Self {
        Self {
            dialog: Dialog::new(id, trigger)
                .class("overflow-hidden p-0 shadow-lg")
                .body(command),
        }
    }

    pub fn open(mut self, open: bool) -> Self {
        self.dialog = self.dialog.open(open);
        self
    }

    pub fn state(&self) -> OpenState {
        self.dialog.state()
    }
}

impl Component for CommandDialog {
    fn name(&self) -> &'static str {
        "CommandDialog"
    }

    fn render(&mut self, cx: &mut RenderContext<'_>) -> Result<View, RenderFault> {
        self.dialog.render(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{RecordingEnvironment, Renderer, Root};
    use std::cell::Cell;

    fn palette() -> Command {
        Command::new("cmd")
            .group(
                CommandGroup::new("Suggestions")
                    .item(CommandItem::new("Calendar").icon(IconName::Check))
                    .item(CommandItem::new("Search Emoji"))
                    .item(CommandItem::new("Calculator").disabled(true)),
            )
            .separator()
            .group(
                CommandGroup::new("Settings")
                    .item(CommandItem::new("Profile").shortcut("⌘P"))
                    .item(CommandItem::new("Billing").shortcut("⌘B").keywords(["invoice"])),
            )
    }

    fn mount(command: Command) -> Root<RecordingEnvironment> {
        Renderer::new()
            .mount(command.into(), RecordingEnvironment::new())
            .unwrap()
    }

    #[test]
    fn test_fuzzy_score_subsequence() {
        assert!(fuzzy_score("sem", "Search Emoji").is_some());
        assert!(fuzzy_score("CAL", "calendar").is_some());
        assert_eq!(fuzzy_score("zz", "Calendar"), None);
        assert_eq!(fuzzy_score("", "anything"), Some(0));
    }

    #[test]
    fn test_fuzzy_score_prefers_word_starts() {
        let start = fuzzy_score("pro", "Profile").unwrap();
        let middle = fuzzy_score("pro", "Reproduce").unwrap();
        assert!(start > middle);
    }

    #[test]
    fn test_everything_visible_without_query() {
        let root = mount(palette());
        let html = root.html();
        assert!(html.contains("Calendar"));
        assert!(html.contains("Billing"));
        assert!(html.contains(r#"role="separator""#));
        assert!(html.contains("⌘P"));
        assert!(!html.contains("No results found."));
        assert_eq!(html.matches(r#"data-selected="true""#).count(), 1);
    }

    #[test]
    fn test_query_filters_and_hides_empty_groups() {
        let mut root = mount(palette());
        root.change("cmd:query", "bil").unwrap();
        let html = root.html();
        assert!(html.contains("Billing"));
        assert!(!html.contains("Calendar"));
        assert!(!html.contains("Suggestions"));
        assert!(!html.contains(r#"role="separator""#));
        assert!(html.contains(r#"value="bil""#));
    }

    #[test]
    fn test_keywords_match() {
        let mut root = mount(palette());
        root.change("cmd:query", "invoice").unwrap();
        assert!(root.html().contains("Billing"));
    }

    #[test]
    fn test_no_matches_shows_empty_text() {
        let mut root = mount(palette());
        root.change("cmd:query", "qqq").unwrap();
        assert!(root.html().contains("No results found."));
    }

    #[test]
    fn test_ranking_within_group() {
        let command = Command::new("cmd").group(
            CommandGroup::untitled()
                .item(CommandItem::new("Musical"))
                .item(CommandItem::new("Calendar")),
        );
        let mut root = mount(command);
        root.change("cmd:query", "cal").unwrap();
        let html = root.html();
        assert!(html.find("Calendar").unwrap() < html.find("Musical").unwrap());
    }

    #[test]
    fn test_enter_runs_selected_item() {
        let chosen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&chosen);
        let pick = handler(move |event| {
            sink.borrow_mut().push(event.value.unwrap_or_default().to_string());
            Ok(())
        });
        let command = Command::new("cmd").group(
            CommandGroup::untitled()
                .item(CommandItem::new("First").on_select(Rc::clone(&pick)))
                .item(CommandItem::new("Second").on_select(pick)),
        );
        let mut root = mount(command);

        root.keydown("cmd:query", "ArrowDown").unwrap();
        root.keydown("cmd:query", "Enter").unwrap();
        root.click("cmd:first").unwrap();
        assert_eq!(*chosen.borrow(), vec!["second".to_string(), "first".to_string()]);
    }

    #[test]
    fn test_disabled_item_ignores_clicks() {
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        let command = Command::new("cmd").group(CommandGroup::untitled().item(
            CommandItem::new("Locked").disabled(true).on_select(handler(move |_| {
                flag.set(true);
                Ok(())
            })),
        ));
        let mut root = mount(command);
        assert!(!root.click("cmd:locked").unwrap());
        assert!(!fired.get());
    }

    #[test]
    fn test_command_dialog_wraps_palette() {
        let dialog = CommandDialog::new("palette", "Open", palette()).open(true);
        let html = Renderer::new()
            .render_to_string(&mut View::from(dialog))
            .unwrap();
        assert!(html.contains(r#"role="dialog""#));
        assert!(html.contains("data-command"));
        assert!(html.contains("overflow-hidden p-0 shadow-lg"));
    }
}

//! Conflict detection between utility class tokens.
//!
//! Every token is split into its modifier prefix (`hover:`, `md:`, `!`) and
//! its utility. Utilities that set the same CSS property fall into the same
//! group; two tokens conflict when their modifiers match and their groups are
//! equal, or when the later group subsumes the earlier one (`p-4` replaces
//! `px-2`, but `px-2` leaves `p-4` alone).

/// The identity under which a token competes with other tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ConflictKey {
    modifiers: String,
    group: &'static str,
}

impl ConflictKey {
    /// Returns true if a token with this key removes a token with `earlier`.
    pub(crate) fn overrides(&self, earlier: &ConflictKey) -> bool {
        self.modifiers == earlier.modifiers
            && (self.group == earlier.group || subsumes(self.group, earlier.group))
    }
}

const EXACT: &[(&str, &str)] = &[
    ("block", "display"),
    ("inline-block", "display"),
    ("inline", "display"),
    ("flex", "display"),
    ("inline-flex", "display"),
    ("grid", "display"),
    ("inline-grid", "display"),
    ("contents", "display"),
    ("table", "display"),
    ("hidden", "display"),
    ("static", "position"),
    ("fixed", "position"),
    ("absolute", "position"),
    ("relative", "position"),
    ("sticky", "position"),
    ("visible", "visibility"),
    ("invisible", "visibility"),
    ("underline", "text-decoration"),
    ("overline", "text-decoration"),
    ("line-through", "text-decoration"),
    ("no-underline", "text-decoration"),
    ("uppercase", "text-transform"),
    ("lowercase", "text-transform"),
    ("capitalize", "text-transform"),
    ("normal-case", "text-transform"),
    ("italic", "font-style"),
    ("not-italic", "font-style"),
    ("sr-only", "screen-reader"),
    ("not-sr-only", "screen-reader"),
    ("border", "border-width"),
    ("ring", "ring-width"),
    ("rounded", "rounded"),
    ("shadow", "shadow"),
    ("transition", "transition"),
    ("grow", "grow"),
    ("shrink", "shrink"),
];

// Longest prefixes first so `min-h-` is tried before `h-`.
const PREFIXES: &[(&str, &str)] = &[
    ("underline-offset-", "underline-offset"),
    ("pointer-events-", "pointer-events"),
    ("translate-x-", "translate-x"),
    ("translate-y-", "translate-y"),
    ("overflow-x-", "overflow-x"),
    ("overflow-y-", "overflow-y"),
    ("whitespace-", "whitespace"),
    ("grid-cols-", "grid-cols"),
    ("col-span-", "col-span"),
    ("space-x-", "space-x"),
    ("space-y-", "space-y"),
    ("overflow-", "overflow"),
    ("duration-", "duration"),
    ("tracking-", "tracking"),
    ("scale-x-", "scale-x"),
    ("scale-y-", "scale-y"),
    ("leading-", "leading"),
    ("opacity-", "opacity"),
    ("animate-", "animate"),
    ("justify-", "justify-content"),
    ("content-", "align-content"),
    ("rotate-", "rotate"),
    ("origin-", "origin"),
    ("bottom-", "bottom"),
    ("cursor-", "cursor"),
    ("select-", "select"),
    ("shadow-", "shadow"),
    ("min-h-", "min-h"),
    ("min-w-", "min-w"),
    ("max-h-", "max-h"),
    ("max-w-", "max-w"),
    ("gap-x-", "gap-x"),
    ("gap-y-", "gap-y"),
    ("inset-", "inset"),
    ("scale-", "scale"),
    ("delay-", "delay"),
    ("items-", "align-items"),
    ("right-", "right"),
    ("self-", "align-self"),
    ("size-", "size"),
    ("left-", "left"),
    ("ease-", "ease"),
    ("gap-", "gap"),
    ("top-", "top"),
    ("px-", "px"),
    ("py-", "py"),
    ("pt-", "pt"),
    ("pr-", "pr"),
    ("pb-", "pb"),
    ("pl-", "pl"),
    ("mx-", "mx"),
    ("my-", "my"),
    ("mt-", "mt"),
    ("mr-", "mr"),
    ("mb-", "mb"),
    ("ml-", "ml"),
    ("z-", "z"),
    ("h-", "h"),
    ("w-", "w"),
    ("p-", "p"),
    ("m-", "m"),
];

const SUBSUMES: &[(&str, &[&str])] = &[
    ("p", &["px", "py", "pt", "pr", "pb", "pl"]),
    ("px", &["pr", "pl"]),
    ("py", &["pt", "pb"]),
    ("m", &["mx", "my", "mt", "mr", "mb", "ml"]),
    ("mx", &["mr", "ml"]),
    ("my", &["mt", "mb"]),
    ("inset", &["top", "right", "bottom", "left"]),
    ("size", &["h", "w"]),
    ("gap", &["gap-x", "gap-y"]),
    ("overflow", &["overflow-x", "overflow-y"]),
    ("scale", &["scale-x", "scale-y"]),
];

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const WIDTH_STEPS: &[&str] = &["0", "1", "2", "4", "8"];
const BORDER_SIDES: &[&str] = &["x", "y", "t", "r", "b", "l", "s", "e"];
const ROUNDED_SIDES: &[&str] = &["t", "r", "b", "l", "s", "e", "tl", "tr", "br", "bl", "ss", "se", "es", "ee"];

fn subsumes(group: &str, other: &str) -> bool {
    SUBSUMES
        .iter()
        .any(|(g, subs)| *g == group && subs.contains(&other))
}

/// Computes the conflict key for a single token.
///
/// Returns `None` for tokens outside the known utility groups, including
/// arbitrary values whose property cannot be told from the prefix alone
/// (`bg-[...]`, `text-[...]`). Such tokens only collapse with exact
/// duplicates.
pub(crate) fn conflict_key(token: &str) -> Option<ConflictKey> {
    let (modifiers, utility) = split_modifiers(token);
    let mut modifiers = modifiers.to_string();

    let utility = match utility.strip_prefix('!') {
        Some(rest) => {
            modifiers.push('!');
            rest
        }
        None => utility,
    };
    let utility = utility.strip_prefix('-').unwrap_or(utility);

    utility_group(utility).map(|group| ConflictKey { modifiers, group })
}

/// Splits `hover:md:bg-primary` into (`hover:md:`, `bg-primary`), ignoring
/// colons inside brackets such as `bg-[length:250%]`.
fn split_modifiers(token: &str) -> (&str, &str) {
    let mut depth = 0usize;
    let mut split = None;
    for (i, c) in token.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => split = Some(i),
            _ => {}
        }
    }
    match split {
        Some(i) => (&token[..=i], &token[i + 1..]),
        None => ("", token),
    }
}

fn utility_group(utility: &str) -> Option<&'static str> {
    if let Some((_, group)) = EXACT.iter().find(|(name, _)| *name == utility) {
        return Some(group);
    }

    if let Some(rest) = utility.strip_prefix("text-") {
        return text_group(rest);
    }
    if let Some(rest) = utility.strip_prefix("font-") {
        return font_group(rest);
    }
    if let Some(rest) = utility.strip_prefix("bg-") {
        return bg_group(rest);
    }
    if let Some(rest) = utility.strip_prefix("border-") {
        return border_group(rest);
    }
    if let Some(rest) = utility.strip_prefix("ring-offset-") {
        return Some(if WIDTH_STEPS.contains(&rest) {
            "ring-offset-width"
        } else {
            "ring-offset-color"
        });
    }
    if let Some(rest) = utility.strip_prefix("ring-") {
        return match rest {
            "inset" => None,
            _ if WIDTH_STEPS.contains(&rest) => Some("ring-width"),
            _ => Some("ring-color"),
        };
    }
    if let Some(rest) = utility.strip_prefix("flex-") {
        return flex_group(rest);
    }
    if let Some(rest) = utility.strip_prefix("rounded-") {
        let side = rest.split('-').next().unwrap_or_default();
        return (!ROUNDED_SIDES.contains(&side)).then_some("rounded");
    }
    if utility.starts_with("transition-") {
        return Some("transition");
    }

    PREFIXES
        .iter()
        .find(|(prefix, _)| utility.starts_with(prefix))
        .map(|(_, group)| *group)
}

fn text_group(rest: &str) -> Option<&'static str> {
    if rest.starts_with('[') {
        None
    } else if FONT_SIZES.contains(&rest) {
        Some("font-size")
    } else if TEXT_ALIGN.contains(&rest) {
        Some("text-align")
    } else {
        Some("text-color")
    }
}

fn font_group(rest: &str) -> Option<&'static str> {
    if FONT_WEIGHTS.contains(&rest) {
        Some("font-weight")
    } else if matches!(rest, "sans" | "serif" | "mono") {
        Some("font-family")
    } else {
        None
    }
}

fn bg_group(rest: &str) -> Option<&'static str> {
    match rest {
        _ if rest.starts_with('[') => None,
        _ if rest.starts_with("gradient-to-") || rest == "none" => Some("bg-image"),
        _ if rest.starts_with("clip-") => Some("bg-clip"),
        "fixed" | "local" | "scroll" => Some("bg-attachment"),
        "repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
            Some("bg-repeat")
        }
        "auto" | "cover" | "contain" => Some("bg-size"),
        "bottom" | "center" | "left" | "left-bottom" | "left-top" | "right" | "right-bottom"
        | "right-top" | "top" => Some("bg-position"),
        _ => Some("bg-color"),
    }
}

fn border_group(rest: &str) -> Option<&'static str> {
    let head = rest.split('-').next().unwrap_or_default();
    match rest {
        _ if rest.starts_with('[') => None,
        _ if BORDER_SIDES.contains(&head) => None,
        _ if WIDTH_STEPS.contains(&rest) => Some("border-width"),
        "solid" | "dashed" | "dotted" | "double" | "hidden" | "none" => Some("border-style"),
        "collapse" | "separate" => None,
        _ => Some("border-color"),
    }
}

fn flex_group(rest: &str) -> Option<&'static str> {
    match rest {
        "row" | "row-reverse" | "col" | "col-reverse" => Some("flex-direction"),
        "wrap" | "wrap-reverse" | "nowrap" => Some("flex-wrap"),
        "1" | "auto" | "initial" | "none" => Some("flex"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(token: &str) -> ConflictKey {
        conflict_key(token).unwrap_or_else(|| panic!("no key for {token}"))
    }

    #[test]
    fn test_split_modifiers() {
        assert_eq!(split_modifiers("hover:bg-accent"), ("hover:", "bg-accent"));
        assert_eq!(
            split_modifiers("focus-visible:ring-2"),
            ("focus-visible:", "ring-2")
        );
        assert_eq!(split_modifiers("h-10"), ("", "h-10"));
    }

    #[test]
    fn test_split_modifiers_ignores_bracket_colons() {
        assert_eq!(
            split_modifiers("before:bg-[length:250%_250%]"),
            ("before:", "bg-[length:250%_250%]")
        );
    }

    #[test]
    fn test_same_group_overrides() {
        assert!(key("h-9").overrides(&key("h-10")));
        assert!(key("bg-destructive").overrides(&key("bg-primary")));
        assert!(key("transition-all").overrides(&key("transition-colors")));
    }

    #[test]
    fn test_modifiers_must_match() {
        assert!(!key("hover:bg-accent").overrides(&key("bg-background")));
        assert!(key("hover:bg-accent").overrides(&key("hover:bg-primary/90")));
    }

    #[test]
    fn test_text_size_and_color_are_distinct() {
        assert!(!key("text-primary").overrides(&key("text-sm")));
        assert!(key("text-lg").overrides(&key("text-sm")));
        assert!(key("text-center").overrides(&key("text-left")));
    }

    #[test]
    fn test_border_width_and_color_are_distinct() {
        assert!(!key("border-input").overrides(&key("border")));
        assert!(key("border-2").overrides(&key("border")));
        assert!(conflict_key("border-t-2").is_none());
    }

    #[test]
    fn test_ring_groups() {
        assert!(key("ring-2").overrides(&key("ring")));
        assert!(!key("ring-ring").overrides(&key("ring-2")));
        assert!(!key("ring-offset-2").overrides(&key("ring-offset-background")));
    }

    #[test]
    fn test_padding_subsumption_is_one_way() {
        assert!(key("p-4").overrides(&key("px-2")));
        assert!(!key("px-2").overrides(&key("p-4")));
        assert!(key("px-3").overrides(&key("pr-10")));
    }

    #[test]
    fn test_longest_prefix_wins() {
        assert!(!key("h-10").overrides(&key("min-h-[50vh]")));
        assert!(key("min-h-screen").overrides(&key("min-h-[50vh]")));
    }

    #[test]
    fn test_negative_and_important() {
        assert!(key("-z-10").overrides(&key("z-0")));
        assert!(!key("!no-underline").overrides(&key("underline")));
        assert!(key("no-underline").overrides(&key("underline")));
    }

    #[test]
    fn test_ambiguous_arbitrary_values_have_no_key() {
        assert!(conflict_key("bg-[linear-gradient(45deg,transparent_25%)]").is_none());
        assert!(conflict_key("text-[13px]").is_none());
        assert!(conflict_key("h-[1px]").is_some());
    }

    #[test]
    fn test_unknown_utilities_have_no_key() {
        assert!(conflict_key("dot").is_none());
        assert!(conflict_key("hide-password-toggle").is_none());
        assert!(conflict_key("group").is_none());
    }

    #[test]
    fn test_rounded_sides_do_not_conflict_with_rounded() {
        assert!(key("rounded-full").overrides(&key("rounded-md")));
        assert!(conflict_key("rounded-t-md").is_none());
        assert!(key("rounded-[inherit]").overrides(&key("rounded")));
    }
}

//! Button variant table and resolution.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::error::VariantError;
use super::keys::{ButtonEffect, ButtonSize, ButtonVariant};
use crate::class::ClassList;

const BASE: &str = "inline-flex items-center justify-center whitespace-nowrap rounded-md text-sm \
    font-medium ring-offset-background transition-colors focus-visible:outline-none \
    focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 \
    disabled:pointer-events-none disabled:opacity-50";

const VARIANTS: &[(ButtonVariant, &str)] = &[
    (
        ButtonVariant::Default,
        "bg-primary text-primary-foreground hover:bg-primary/90",
    ),
    (
        ButtonVariant::Destructive,
        "bg-destructive text-destructive-foreground hover:bg-destructive/90",
    ),
    (
        ButtonVariant::Outline,
        "border border-input bg-background hover:bg-accent hover:text-accent-foreground",
    ),
    (
        ButtonVariant::Secondary,
        "bg-secondary text-secondary-foreground hover:bg-secondary/80",
    ),
    (
        ButtonVariant::Ghost,
        "hover:bg-accent hover:text-accent-foreground",
    ),
    (
        ButtonVariant::Link,
        "text-primary underline-offset-4 hover:underline",
    ),
];

const SIZES: &[(ButtonSize, &str)] = &[
    (ButtonSize::Default, "h-10 px-4 py-2"),
    (ButtonSize::Sm, "h-9 rounded-md px-3"),
    (ButtonSize::Lg, "h-11 rounded-md px-8"),
    (ButtonSize::Icon, "h-10 w-10"),
];

const EFFECTS: &[(ButtonEffect, &str)] = &[
    (ButtonEffect::ExpandIcon, "group gap-0 relative"),
    (
        ButtonEffect::RingHover,
        "transition-all duration-300 hover:ring-2 hover:ring-primary/90 hover:ring-offset-2",
    ),
    (
        ButtonEffect::Shine,
        "before:animate-shine relative overflow-hidden before:absolute before:inset-0 \
         before:rounded-[inherit] \
         before:bg-[linear-gradient(45deg,transparent_25%,rgba(255,255,255,0.5)_50%,transparent_75%,transparent_100%)] \
         before:bg-[length:250%_250%,100%_100%] before:bg-no-repeat",
    ),
    (
        ButtonEffect::ShineHover,
        "relative overflow-hidden before:absolute before:inset-0 before:rounded-[inherit] \
         before:bg-[linear-gradient(45deg,transparent_25%,rgba(255,255,255,0.5)_50%,transparent_75%,transparent_100%)] \
         before:bg-[length:250%_250%,100%_100%] before:bg-[position:200%_0,0_0] before:bg-no-repeat \
         before:transition-[background-position_0s_ease] hover:before:bg-[position:-100%_0,0_0] \
         before:duration-1000",
    ),
    (
        ButtonEffect::GooeyRight,
        "relative z-0 overflow-hidden transition-all duration-500 before:absolute before:inset-0 \
         before:-z-10 before:translate-x-[150%] before:translate-y-[150%] before:scale-[2.5] \
         before:rounded-[100%] before:bg-gradient-to-r from-primary/50 before:transition-transform \
         before:duration-1000 hover:before:translate-x-[0%] hover:before:translate-y-[0%]",
    ),
    (
        ButtonEffect::GooeyLeft,
        "relative z-0 overflow-hidden transition-all duration-500 after:absolute after:inset-0 \
         after:-z-10 after:translate-x-[-150%] after:translate-y-[150%] after:scale-[2.5] \
         after:rounded-[100%] after:bg-gradient-to-l from-primary/50 after:transition-transform \
         after:duration-1000 hover:after:translate-x-[0%] hover:after:translate-y-[0%]",
    ),
    (
        ButtonEffect::Underline,
        "relative !no-underline after:absolute after:bg-primary after:bottom-2 after:h-[1px] \
         after:w-2/3 after:origin-bottom-left after:scale-x-100 hover:after:origin-bottom-right \
         hover:after:scale-x-0 after:transition-transform after:ease-in-out after:duration-300",
    ),
    (
        ButtonEffect::HoverUnderline,
        "relative !no-underline after:absolute after:bg-primary after:bottom-2 after:h-[1px] \
         after:w-2/3 after:origin-bottom-right after:scale-x-0 hover:after:origin-bottom-left \
         hover:after:scale-x-100 after:transition-transform after:ease-in-out after:duration-300",
    ),
    (
        ButtonEffect::GradientSlideShow,
        "bg-[size:400%] \
         bg-[linear-gradient(-45deg,var(--gradient-lime),var(--gradient-ocean),var(--gradient-wine),var(--gradient-rust))] \
         animate-gradient-flow",
    ),
];

static BUTTON_VARIANTS: Lazy<VariantTable> = Lazy::new(VariantTable::button);

/// A request for button classes.
///
/// Absent fields fall back to `variant = default`, `size = default` and no
/// effect. `class` holds caller tokens appended last so they win the cascade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VariantRequest {
    pub variant: Option<ButtonVariant>,
    pub size: Option<ButtonSize>,
    pub effect: Option<ButtonEffect>,
    pub class: Option<String>,
}

impl VariantRequest {
    /// Creates a request with every field defaulted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a request from string keys, failing fast on unknown names.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outfit::{VariantError, VariantRequest};
    ///
    /// let req = VariantRequest::parse(Some("destructive"), Some("sm"), None).unwrap();
    /// assert!(req.variant.is_some());
    ///
    /// let err = VariantRequest::parse(Some("unknown"), None, None).unwrap_err();
    /// assert!(matches!(err, VariantError::InvalidVariant(..)));
    /// ```
    pub fn parse(
        variant: Option<&str>,
        size: Option<&str>,
        effect: Option<&str>,
    ) -> Result<Self, VariantError> {
        Ok(Self {
            variant: variant.map(str::parse).transpose()?,
            size: size.map(str::parse).transpose()?,
            effect: effect.map(str::parse).transpose()?,
            class: None,
        })
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn effect(mut self, effect: ButtonEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Appends caller tokens applied after the table's tokens.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.class = Some(match self.class.take() {
            Some(existing) => format!("{existing} {class}"),
            None => class,
        });
        self
    }
}

/// Class tokens for every button variant, size and effect.
///
/// [`VariantTable::button`] holds the built-in tokens; themes loaded with
/// [`VariantTable::from_yaml`] replace individual entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantTable {
    base: ClassList,
    variants: BTreeMap<ButtonVariant, ClassList>,
    sizes: BTreeMap<ButtonSize, ClassList>,
    effects: BTreeMap<ButtonEffect, ClassList>,
}

/// On-disk theme layout. Keys are parsed into style keys after loading so
/// unknown names report the same errors as requests do.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ThemeFile {
    base: Option<String>,
    variants: BTreeMap<String, String>,
    sizes: BTreeMap<String, String>,
    effects: BTreeMap<String, String>,
}

impl VariantTable {
    /// The built-in button table.
    pub fn button() -> Self {
        fn table<K: Ord + Copy>(entries: &[(K, &str)]) -> BTreeMap<K, ClassList> {
            entries
                .iter()
                .map(|(key, classes)| (*key, ClassList::parse(classes)))
                .collect()
        }

        Self {
            base: ClassList::parse(BASE),
            variants: table(VARIANTS),
            sizes: table(SIZES),
            effects: table(EFFECTS),
        }
    }

    /// Loads a theme from YAML, layering its entries over the built-in table.
    ///
    /// ```yaml
    /// base: "inline-flex items-center rounded-lg"
    /// variants:
    ///   destructive: "bg-red-600 text-white"
    /// sizes:
    ///   sm: "h-8 px-2"
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`VariantError::Theme`] for malformed YAML or unknown sections,
    /// and `InvalidVariant`/`InvalidSize`/`InvalidEffect` for unknown keys.
    pub fn from_yaml(source: &str) -> Result<Self, VariantError> {
        let theme: ThemeFile = serde_yaml::from_str(source)?;
        let mut table = Self::button();

        if let Some(base) = theme.base {
            table.base = ClassList::parse(&base);
        }
        for (key, classes) in theme.variants {
            table.variants.insert(key.parse()?, ClassList::parse(&classes));
        }
        for (key, classes) in theme.sizes {
            table.sizes.insert(key.parse()?, ClassList::parse(&classes));
        }
        for (key, classes) in theme.effects {
            table.effects.insert(key.parse()?, ClassList::parse(&classes));
        }
        Ok(table)
    }

    /// Tokens shared by every variant.
    pub fn base(&self) -> &ClassList {
        &self.base
    }

    /// Tokens for a single variant.
    pub fn variant(&self, variant: ButtonVariant) -> Option<&ClassList> {
        self.variants.get(&variant)
    }

    /// Tokens for a single size.
    pub fn size(&self, size: ButtonSize) -> Option<&ClassList> {
        self.sizes.get(&size)
    }

    /// Tokens for a single effect.
    pub fn effect(&self, effect: ButtonEffect) -> Option<&ClassList> {
        self.effects.get(&effect)
    }

    /// Resolves a request into the merged class list.
    ///
    /// Tokens are appended as base, variant, size, effect and finally the
    /// request's own classes, so later layers override earlier ones.
    pub fn resolve(&self, request: &VariantRequest) -> ClassList {
        let mut classes = self.base.clone();

        if let Some(tokens) = self.variant(request.variant.unwrap_or_default()) {
            classes.extend(tokens);
        }
        if let Some(tokens) = self.size(request.size.unwrap_or_default()) {
            classes.extend(tokens);
        }
        if let Some(tokens) = request.effect.and_then(|effect| self.effect(effect)) {
            classes.extend(tokens);
        }
        if let Some(extra) = &request.class {
            classes.push(extra);
        }
        classes
    }
}

impl Default for VariantTable {
    fn default() -> Self {
        BUTTON_VARIANTS.clone()
    }
}

/// Resolves a request against the built-in button table.
///
/// # Example
///
/// ```rust
/// use outfit::{button_variants, ButtonSize, VariantRequest};
///
/// let classes = button_variants(&VariantRequest::new().size(ButtonSize::Icon));
/// assert!(classes.contains("w-10"));
/// assert!(classes.contains("inline-flex"));
/// ```
pub fn button_variants(request: &VariantRequest) -> ClassList {
    BUTTON_VARIANTS.resolve(request)
}

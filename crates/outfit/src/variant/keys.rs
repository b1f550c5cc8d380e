//! Style keys accepted by the button variant table.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::error::VariantError;

/// Normalizes a key so `ringHover`, `ring-hover` and `ring_hover` compare equal.
fn normalize(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

macro_rules! style_keys {
    (
        $(#[$meta:meta])*
        $name:ident => $error:ident {
            $first:ident => $first_key:literal
            $(, $variant:ident => $key:literal)* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $first,
            $($variant,)*
        }

        impl $name {
            /// Every key, in table order.
            pub const ALL: &'static [$name] = &[$name::$first $(, $name::$variant)*];

            const EXPECTED: &'static str = concat!($first_key $(, ", ", $key)*);

            /// Returns the canonical camelCase name.
            pub fn as_str(self) -> &'static str {
                match self {
                    $name::$first => $first_key,
                    $($name::$variant => $key,)*
                }
            }
        }

        impl FromStr for $name {
            type Err = VariantError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = normalize(s);
                $name::ALL
                    .iter()
                    .copied()
                    .find(|key| normalize(key.as_str()) == wanted)
                    .ok_or_else(|| VariantError::$error(s.to_string(), Self::EXPECTED))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

style_keys! {
    /// A named visual style preset.
    ButtonVariant => InvalidVariant {
        Default => "default",
        Destructive => "destructive",
        Outline => "outline",
        Secondary => "secondary",
        Ghost => "ghost",
        Link => "link",
    }
}

style_keys! {
    /// Button dimensions.
    ButtonSize => InvalidSize {
        Default => "default",
        Sm => "sm",
        Lg => "lg",
        Icon => "icon",
    }
}

style_keys! {
    /// Decorative hover and motion effects layered over a variant.
    ButtonEffect => InvalidEffect {
        ExpandIcon => "expandIcon",
        RingHover => "ringHover",
        Shine => "shine",
        ShineHover => "shineHover",
        GooeyRight => "gooeyRight",
        GooeyLeft => "gooeyLeft",
        Underline => "underline",
        HoverUnderline => "hoverUnderline",
        GradientSlideShow => "gradientSlideShow",
    }
}

impl Default for ButtonVariant {
    fn default() -> Self {
        ButtonVariant::Default
    }
}

impl Default for ButtonSize {
    fn default() -> Self {
        ButtonSize::Default
    }
}

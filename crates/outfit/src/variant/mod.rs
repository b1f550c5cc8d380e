//! Style-variant resolution for buttons.
//!
//! This module maps a `(variant, size, effect)` request to the class tokens a
//! button should carry:
//!
//! - [`VariantRequest`]: The requested keys plus caller classes
//! - [`VariantTable`]: Token sets per key, built in or loaded from a YAML theme
//! - [`button_variants`]: Resolution against the built-in table
//! - [`VariantError`]: Unknown keys and malformed themes
//!
//! Resolution is pure: the same request always yields the same tokens in the
//! same order.

mod error;
mod keys;
mod table;

pub use error::VariantError;
pub use keys::{ButtonEffect, ButtonSize, ButtonVariant};
pub use table::{button_variants, VariantRequest, VariantTable};

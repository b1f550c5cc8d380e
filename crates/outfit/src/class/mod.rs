//! Class-token lists with utility-aware merging.
//!
//! This module provides the primitives every component uses to build its
//! `class` attribute:
//!
//! - [`ClassList`]: An ordered list of class tokens that merges as it grows
//! - [`cn`]: Joins any number of class fragments into one merged list
//!
//! Merging follows the styling cascade: a token added later wins over an
//! earlier token that sets the same property under the same modifiers, so
//! caller-supplied classes can override a component's defaults.

mod list;
mod merge;

pub use list::{cn, ClassList};

//! Built-in components.
//!
//! Every component is a builder that implements [`Component`] and converts
//! into a [`View`]. Classes passed with `.class(...)` are merged last, so
//! they override the component's own tokens.
//!
//! Components with local state (open dialogs, password visibility, command
//! queries) keep it in a shared cell so event handlers registered during a
//! pass can update it for the next one.
//!
//! [`Component`]: crate::Component

mod button;
mod command;
mod dialog;
mod icons;
mod input;
mod loader;
mod password_input;
mod phone_input;
mod popover;
mod scroll_area;
mod typewriter;

pub use button::{Button, IconPlacement};
pub use command::{fuzzy_score, Command, CommandDialog, CommandGroup, CommandItem};
pub use dialog::Dialog;
pub use icons::{Icon, IconName};
pub use input::Input;
pub use loader::Loader;
pub use password_input::PasswordInput;
pub use phone_input::{country, normalize_e164, Country, PhoneInput, COUNTRIES};
pub use popover::{Align, Popover};
pub use scroll_area::{ScrollArea, ScrollOrientation};
pub use typewriter::{TypewriterEffect, Word};

use std::cell::Cell;
use std::rc::Rc;

/// Shared open/closed state of a dialog or popover.
///
/// Clones share the same cell, so application code can keep a handle and
/// open or close the component between passes.
#[derive(Debug, Clone, Default)]
pub struct OpenState(Rc<Cell<bool>>);

impl OpenState {
    pub fn new(open: bool) -> Self {
        Self(Rc::new(Cell::new(open)))
    }

    pub fn is_open(&self) -> bool {
        self.0.get()
    }

    pub fn set(&self, open: bool) {
        self.0.set(open)
    }

    pub fn toggle(&self) {
        self.0.set(!self.0.get())
    }

    /// `data-state` value for the current state.
    pub(crate) fn data_state(&self) -> &'static str {
        if self.is_open() {
            "open"
        } else {
            "closed"
        }
    }
}

/// Implements `From<$component> for View` by boxing the component.
macro_rules! into_view {
    ($($component:ty),+ $(,)?) => {
        $(
            impl From<$component> for crate::runtime::View {
                fn from(component: $component) -> Self {
                    crate::runtime::View::component(component)
                }
            }
        )+
    };
}

into_view!(
    Button,
    Command,
    CommandDialog,
    Dialog,
    Input,
    Loader,
    PasswordInput,
    PhoneInput,
    Popover,
    ScrollArea,
    TypewriterEffect,
);

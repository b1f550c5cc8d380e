//! International phone number input.

use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

use super::input::Input;
use crate::runtime::{
    handler, Component, Event, EventError, EventHandler, Listener, RenderContext,
    RenderFault, TemplateView, View,
};

/// Longest number E.164 allows, excluding the `+`.
const MAX_DIGITS: usize = 15;

/// A calling region: ISO 3166 code, display name and dial code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    pub iso: &'static str,
    pub name: &'static str,
    pub dial: &'static str,
}

const fn c(iso: &'static str, name: &'static str, dial: &'static str) -> Country {
    Country { iso, name, dial }
}

/// Countries offered by the selector, in display order.
pub const COUNTRIES: &[Country] = &[
    c("US", "United States", "1"),
    c("CA", "Canada", "1"),
    c("GB", "United Kingdom", "44"),
    c("IE", "Ireland", "353"),
    c("FR", "France", "33"),
    c("DE", "Germany", "49"),
    c("ES", "Spain", "34"),
    c("PT", "Portugal", "351"),
    c("IT", "Italy", "39"),
    c("NL", "Netherlands", "31"),
    c("BE", "Belgium", "32"),
    c("CH", "Switzerland", "41"),
    c("AT", "Austria", "43"),
    c("SE", "Sweden", "46"),
    c("NO", "Norway", "47"),
    c("DK", "Denmark", "45"),
    c("FI", "Finland", "358"),
    c("PL", "Poland", "48"),
    c("CZ", "Czechia", "420"),
    c("GR", "Greece", "30"),
    c("TR", "Turkey", "90"),
    c("IL", "Israel", "972"),
    c("AE", "United Arab Emirates", "971"),
    c("IN", "India", "91"),
    c("CN", "China", "86"),
    c("JP", "Japan", "81"),
    c("KR", "South Korea", "82"),
    c("SG", "Singapore", "65"),
    c("AU", "Australia", "61"),
    c("NZ", "New Zealand", "64"),
    c("BR", "Brazil", "55"),
    c("MX", "Mexico", "52"),
    c("AR", "Argentina", "54"),
    c("ZA", "South Africa", "27"),
    c("NG", "Nigeria", "234"),
];

/// Looks up a country by ISO code, ignoring case.
pub fn country(iso: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.iso.eq_ignore_ascii_case(iso))
}

/// The country whose dial code is the longest prefix of `digits`. Shared
/// codes resolve to the first country listed.
fn detect(digits: &str) -> Option<&'static Country> {
    COUNTRIES
        .iter()
        .filter(|c| digits.starts_with(c.dial))
        .fold(None, |best: Option<&'static Country>, c| match best {
            Some(b) if b.dial.len() >= c.dial.len() => Some(b),
            _ => Some(c),
        })
}

/// Normalizes a typed number to E.164 (`+` followed by up to 15 digits).
///
/// Numbers starting with `+` are taken as international; anything else is
/// national and gets `country`'s dial code, dropping one leading trunk `0`.
/// Non-digits are ignored. Returns `None` when there are no digits or too
/// many.
///
/// ```rust
/// use outfit::{country, normalize_e164};
///
/// let gb = country("gb").unwrap();
/// assert_eq!(normalize_e164(gb, "020 7946 0958").as_deref(), Some("+442079460958"));
/// assert_eq!(normalize_e164(gb, "+1 (555) 010-9999").as_deref(), Some("+15550109999"));
/// ```
pub fn normalize_e164(country: &Country, raw: &str) -> Option<String> {
    let raw = raw.trim();
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    let full = if raw.starts_with('+') {
        digits
    } else {
        let national = digits.strip_prefix('0').unwrap_or(&digits);
        if national.is_empty() {
            return None;
        }
        format!("{}{}", country.dial, national)
    };
    if full.len() > MAX_DIGITS {
        return None;
    }
    Some(format!("+{full}"))
}

#[derive(Debug)]
struct PhoneState {
    country: &'static Country,
    number: String,
}

impl PhoneState {
    fn value(&self) -> Option<String> {
        normalize_e164(self.country, &self.number)
    }
}

/// A country selector next to a `tel` input.
///
/// The selector is named `<id>:country` and the number input `<id>:number`.
/// Typing a number that starts with `+` switches the selector to the
/// matching country. [`on_change`](Self::on_change) handlers receive the
/// E.164 value, or no value while the number is empty.
pub struct PhoneInput {
    id: String,
    name: Option<String>,
    placeholder: Option<String>,
    disabled: bool,
    class: Option<String>,
    on_change: Option<EventHandler>,
    state: Rc<RefCell<PhoneState>>,
}

#[derive(Serialize)]
struct PhoneProps<'a> {
    id: &'a str,
    name: Option<&'a str>,
    class: Option<&'a str>,
    disabled: bool,
    country: &'a str,
    countries: &'a [Country],
    value: Option<String>,
}

impl PhoneInput {
    pub fn new(id: impl Into<String>) -> Self {
        let default = &COUNTRIES[0];
        Self {
            id: id.into(),
            name: None,
            placeholder: None,
            disabled: false,
            class: None,
            on_change: None,
            state: Rc::new(RefCell::new(PhoneState {
                country: default,
                number: String::new(),
            })),
        }
    }

    /// Selects the initial country. Unknown codes keep the default.
    pub fn default_country(self, iso: &str) -> Self {
        if let Some(country) = country(iso) {
            self.state.borrow_mut().country = country;
        }
        self
    }

    /// Sets the initial number, national or international.
    pub fn number(self, number: impl Into<String>) -> Self {
        set_number(&mut self.state.borrow_mut(), number.into());
        self
    }

    /// Form field name of the hidden input carrying the E.164 value.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn on_change(mut self, handler: EventHandler) -> Self {
        self.on_change = Some(handler);
        self
    }

    /// Current value in E.164 form.
    pub fn value(&self) -> Option<String> {
        self.state.borrow().value()
    }

    pub fn selected_country(&self) -> &'static Country {
        self.state.borrow().country
    }
}

fn set_number(state: &mut PhoneState, number: String) {
    if number.trim_start().starts_with('+') {
        let digits: String = number.chars().filter(char::is_ascii_digit).collect();
        if let Some(country) = detect(&digits) {
            // Keep an explicit choice among countries sharing a dial code.
            if state.country.dial != country.dial {
                state.country = country;
            }
        }
    }
    state.number = number;
}

/// Tells the caller's handler about the new value.
fn notify(
    on_change: &Option<EventHandler>,
    state: &Rc<RefCell<PhoneState>>,
    event: &Event<'_>,
) -> Result<(), EventError> {
    let Some(on_change) = on_change else {
        return Ok(());
    };
    let value = state.borrow().value();
    let change = Event {
        kind: "change",
        value: value.as_deref(),
        environment: event.environment,
    };
    let mut on_change = on_change.borrow_mut();
    (&mut *on_change)(&change)
}

impl Component for PhoneInput {
    fn name(&self) -> &'static str {
        "PhoneInput"
    }

    fn render(&mut self, cx: &mut RenderContext<'_>) -> Result<View, RenderFault> {
        let (country, number, value) = {
            let state = self.state.borrow();
            (state.country, state.number.clone(), state.value())
        };

        let number_state = Rc::clone(&self.state);
        let number_notify = self.on_change.clone();
        let mut input = Input::new()
            .input_type("tel")
            .autocomplete("tel")
            .value(number)
            .class("rounded-e-lg rounded-s-none")
            .disabled(self.disabled)
            .action(format!("{}:number", self.id))
            .on_change(handler(move |event| {
                set_number(
                    &mut number_state.borrow_mut(),
                    event.value.unwrap_or_default().to_string(),
                );
                notify(&number_notify, &number_state, event)
            }));
        if let Some(placeholder) = &self.placeholder {
            input = input.placeholder(placeholder.clone());
        }
        let input = cx.render(&mut View::from(input.view()))?;

        let props = PhoneProps {
            id: &self.id,
            name: self.name.as_deref(),
            class: self.class.as_deref(),
            disabled: self.disabled,
            country: country.iso,
            countries: COUNTRIES,
            value,
        };

        let country_state = Rc::clone(&self.state);
        let country_notify = self.on_change.clone();
        let select = Listener::change(handler(move |event| {
            if let Some(country) = event.value.and_then(self::country) {
                country_state.borrow_mut().country = country;
            }
            notify(&country_notify, &country_state, event)
        }))
        .action(format!("{}:country", self.id))
        .disabled(self.disabled);

        Ok(TemplateView::new("phone_input.html", &props)
            .slot("input", View::markup(input))
            .listen("country", select)
            .into())
    }
}

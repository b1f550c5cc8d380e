//! Ordered class-token list.

use serde::{Serialize, Serializer};
use std::fmt;

use super::merge::{conflict_key, ConflictKey};

/// An ordered, merged list of class tokens.
///
/// Tokens are appended in cascade order. Each append drops exact duplicates
/// and earlier tokens that the new token overrides, so the list always
/// reflects what the styling cascade would apply.
///
/// # Example
///
/// ```rust
/// use outfit::ClassList;
///
/// let classes = ClassList::parse("h-10 px-4 py-2").with("h-12 px-4");
/// assert_eq!(classes.to_string(), "py-2 h-12 px-4");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<Token>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    text: String,
    key: Option<ConflictKey>,
}

impl ClassList {
    /// Creates an empty class list.
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Parses a whitespace-separated class string.
    pub fn parse(classes: &str) -> Self {
        let mut list = Self::new();
        list.push(classes);
        list
    }

    /// Appends a whitespace-separated fragment, merging each token.
    pub fn push(&mut self, fragment: &str) {
        for token in fragment.split_whitespace() {
            self.push_token(token);
        }
    }

    /// Appends a fragment, returning the list for chaining.
    pub fn with(mut self, fragment: impl AsRef<str>) -> Self {
        self.push(fragment.as_ref());
        self
    }

    /// Appends every token of another list in order.
    pub fn extend(&mut self, other: &ClassList) {
        for token in &other.tokens {
            self.push_token(&token.text);
        }
    }

    fn push_token(&mut self, text: &str) {
        let key = conflict_key(text);
        self.tokens.retain(|existing| {
            if existing.text == text {
                return false;
            }
            match (&key, &existing.key) {
                (Some(new), Some(old)) => !new.overrides(old),
                _ => true,
            }
        });
        self.tokens.push(Token {
            text: text.to_string(),
            key,
        });
    }

    /// Returns true if the list contains the exact token.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t.text == token)
    }

    /// Iterates over the tokens in cascade order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.text.as_str())
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the list has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&token.text)?;
        }
        Ok(())
    }
}

impl From<&str> for ClassList {
    fn from(classes: &str) -> Self {
        Self::parse(classes)
    }
}

impl From<String> for ClassList {
    fn from(classes: String) -> Self {
        Self::parse(&classes)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for fragment in iter {
            list.push(fragment.as_ref());
        }
        list
    }
}

impl Serialize for ClassList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Merges class fragments into a single [`ClassList`].
///
/// Later fragments override earlier ones; empty fragments are skipped.
///
/// # Example
///
/// ```rust
/// use outfit::cn;
///
/// let classes = cn(["rounded-md bg-primary", "", "bg-destructive"]);
/// assert_eq!(classes.to_string(), "rounded-md bg-destructive");
/// ```
pub fn cn<I, S>(fragments: I) -> ClassList
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fragments.into_iter().collect()
}

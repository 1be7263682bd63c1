//! Entry and lookup result types.

use serde::Serialize;

use crate::domain::Title;

/// A single named document: a title and its raw markdown body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    title: Title,
    body: String,
}

impl Entry {
    pub fn new(title: Title, body: impl Into<String>) -> Self {
        Self {
            title,
            body: body.into(),
        }
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Outcome of looking up an entry by title.
///
/// Absence is an expected outcome, not an error: callers decide how to
/// report a missing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The raw body stored under the title.
    Found(String),
    /// Nothing is stored under the title.
    NotFound,
}

impl Lookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn into_option(self) -> Option<String> {
        match self {
            Lookup::Found(body) => Some(body),
            Lookup::NotFound => None,
        }
    }
}

impl From<Option<String>> for Lookup {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(body) => Lookup::Found(body),
            None => Lookup::NotFound,
        }
    }
}

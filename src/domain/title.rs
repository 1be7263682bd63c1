//! Case-preserving entry title.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The title of a wiki entry.
///
/// Titles are the entry's identity: each title maps to exactly one stored
/// body, and a title is also the stem of the file that holds it. Comparison
/// is case-sensitive, so `Python` and `python` are different entries.
///
/// # Validation Rules
/// - Non-empty after trimming surrounding whitespace
/// - Must not contain `/`, `\` or NUL
/// - Must not start with `.`
/// - At most [`MAX_TITLE_BYTES`] bytes of UTF-8, so `<title>.md` fits in a
///   255-byte file name
///
/// # Examples
///
/// ```
/// use encyclopedia::domain::Title;
///
/// let title = Title::new("  Monty Python ").unwrap();
/// assert_eq!(title.as_str(), "Monty Python");
///
/// assert!(Title::new("").is_err());
/// assert!(Title::new("a/b").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Title(String);

/// Longest title in bytes: 255-byte file name limit minus `.md`.
pub const MAX_TITLE_BYTES: usize = 252;

/// Error returned when parsing an invalid title.
#[derive(Debug, Clone)]
pub struct ParseTitleError(String);

impl fmt::Display for ParseTitleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTitleError {}

impl Title {
    /// Creates a new Title from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseTitleError` if:
    /// - The title is empty or whitespace-only
    /// - The title contains a path separator or NUL
    /// - The title starts with a dot
    /// - The title is longer than [`MAX_TITLE_BYTES`] bytes
    pub fn new(s: &str) -> Result<Self, ParseTitleError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ParseTitleError("title cannot be empty".to_string()));
        }

        if let Some(c) = trimmed.chars().find(|c| matches!(c, '/' | '\\' | '\0')) {
            return Err(ParseTitleError(format!(
                "invalid title '{}': titles cannot contain {:?}",
                trimmed, c
            )));
        }

        if trimmed.starts_with('.') {
            return Err(ParseTitleError(format!(
                "invalid title '{}': titles cannot start with '.'",
                trimmed
            )));
        }

        if trimmed.len() > MAX_TITLE_BYTES {
            return Err(ParseTitleError(format!(
                "invalid title: {} bytes exceeds the {}-byte limit",
                trimmed.len(),
                MAX_TITLE_BYTES
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the lowercased title contains the lowercased query.
    pub fn contains_ignore_case(&self, query: &str) -> bool {
        self.0.to_lowercase().contains(&query.to_lowercase())
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Title(\"{}\")", self.0)
    }
}

impl FromStr for Title {
    type Err = ParseTitleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Title {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Title {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for Title {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Title {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

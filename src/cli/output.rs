//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::Title;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single entry, with its source and rendered HTML.
#[derive(Debug, Serialize)]
pub struct EntryListing<'a> {
    pub title: &'a Title,
    pub body: &'a str,
    pub html: &'a str,
}

/// Search output: either the exact entry or a list of suggestions.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchListing<'a> {
    Exact {
        #[serde(flatten)]
        entry: EntryListing<'a>,
    },
    Suggestions {
        query: &'a str,
        suggestions: &'a [Title],
    },
}

/// Result of deleting an entry.
#[derive(Debug, Serialize)]
pub struct DeleteListing<'a> {
    pub deleted: &'a Title,
    pub entries: &'a [Title],
}

//! Wiki operations: lookup, suggestions, random pick, and create/edit/delete.
//!
//! [`Wiki`] is what an outer surface (the CLI here) calls into. It owns an
//! [`EntryStore`], renders bodies through [`crate::render`], and turns the
//! store's unconditional overwrite into a duplicate-checked create.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{Lookup, Title};
use crate::render::{markdown_to_html, render_with_heading};
use crate::store::{EntryStore, StoreError};

/// Errors from wiki operations.
#[derive(Debug, Error)]
pub enum WikiError {
    /// An entry with this title already exists.
    #[error("entry already exists: '{title}'")]
    Duplicate { title: Title },

    /// Random selection was requested from a store with no entries.
    #[error("no entries to choose from")]
    EmptyStore,

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type WikiResult<T> = Result<T, WikiError>;

/// An entry with its markdown source and rendered HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedEntry {
    pub title: Title,
    pub body: String,
    pub html: String,
}

/// Result of [`Wiki::lookup_or_suggest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query is exactly an entry's title.
    Exact { title: Title, body: String },
    /// Titles containing the query, ignoring case, in store order.
    Suggestions(Vec<Title>),
}

/// Wiki operations over an entry store.
pub struct Wiki<S> {
    store: S,
}

impl<S: EntryStore> Wiki<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All entry titles, in store order.
    pub fn index(&self) -> WikiResult<Vec<Title>> {
        Ok(self.store.list_entries()?)
    }

    /// Raw markdown for a title, for editing.
    pub fn source(&self, title: &Title) -> WikiResult<Lookup> {
        Ok(self.store.get_entry(title)?)
    }

    /// Looks up and renders an entry. `None` if absent.
    pub fn entry(&self, title: &Title) -> WikiResult<Option<RenderedEntry>> {
        Ok(self
            .store
            .get_entry(title)?
            .into_option()
            .map(|body| RenderedEntry {
                title: title.clone(),
                html: markdown_to_html(&body),
                body,
            }))
    }

    /// Exact-match lookup, falling back to case-insensitive substring suggestions.
    ///
    /// An exact, case-sensitive title match wins. Otherwise every title whose
    /// lowercase form contains the lowercase query is suggested, in the order
    /// the store enumerates them. A query that is not a valid title (such as
    /// an empty one) skips the exact match.
    pub fn lookup_or_suggest(&self, query: &str) -> WikiResult<SearchOutcome> {
        if let Ok(title) = Title::new(query)
            && title.as_str() == query
            && let Lookup::Found(body) = self.store.get_entry(&title)?
        {
            debug!(%title, "exact match");
            return Ok(SearchOutcome::Exact { title, body });
        }

        let suggestions: Vec<Title> = self
            .store
            .list_entries()?
            .into_iter()
            .filter(|t| t.contains_ignore_case(query))
            .collect();

        debug!(query, count = suggestions.len(), "suggestions");
        Ok(SearchOutcome::Suggestions(suggestions))
    }

    /// Picks a title uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns `WikiError::EmptyStore` if there are no entries.
    pub fn pick_random(&self) -> WikiResult<Title> {
        self.pick_random_with(&mut rand::thread_rng())
    }

    /// Like [`Wiki::pick_random`] with a caller-supplied generator.
    pub fn pick_random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> WikiResult<Title> {
        let titles = self.store.list_entries()?;
        titles.choose(rng).cloned().ok_or(WikiError::EmptyStore)
    }

    /// Picks a random entry and renders it.
    pub fn random_entry(&self) -> WikiResult<RenderedEntry> {
        self.random_entry_with(&mut rand::thread_rng())
    }

    /// Like [`Wiki::random_entry`] with a caller-supplied generator.
    ///
    /// A title whose entry is gone by the time it is read is dropped and
    /// another is picked; `WikiError::EmptyStore` once none remain.
    pub fn random_entry_with<R: Rng + ?Sized>(&self, rng: &mut R) -> WikiResult<RenderedEntry> {
        let mut titles = self.store.list_entries()?;

        while let Some(title) = titles.choose(rng).cloned() {
            if let Lookup::Found(body) = self.store.get_entry(&title)? {
                return Ok(RenderedEntry {
                    html: markdown_to_html(&body),
                    title,
                    body,
                });
            }
            debug!(%title, "entry vanished before it was read");
            titles.retain(|t| t != &title);
        }

        Err(WikiError::EmptyStore)
    }

    /// Creates a new entry, rejecting titles that already exist.
    ///
    /// The returned HTML has the title prepended as an `<h1>`.
    pub fn create(&mut self, title: &Title, body: &str) -> WikiResult<RenderedEntry> {
        if self.store.contains(title)? {
            return Err(WikiError::Duplicate {
                title: title.clone(),
            });
        }

        self.store.save_entry(title, body)?;
        info!(%title, "created entry");

        Ok(RenderedEntry {
            title: title.clone(),
            body: body.to_string(),
            html: render_with_heading(title.as_str(), body),
        })
    }

    /// Overwrites an entry (creating it if absent) and renders the result.
    pub fn save_edit(&mut self, title: &Title, body: &str) -> WikiResult<RenderedEntry> {
        self.store.save_entry(title, body)?;
        info!(%title, "saved entry");

        Ok(RenderedEntry {
            title: title.clone(),
            body: body.to_string(),
            html: markdown_to_html(body),
        })
    }

    /// Deletes an entry if present and returns the remaining titles.
    pub fn delete(&mut self, title: &Title) -> WikiResult<Vec<Title>> {
        self.store.delete_entry(title)?;
        info!(%title, "deleted entry");
        self.index()
    }
}

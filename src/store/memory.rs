//! In-process entry store.

use crate::domain::{Entry, Lookup, Title};
use crate::store::repository::{EntryStore, StoreResult};

/// Entry store held in memory, enumerated in insertion order.
///
/// Overwriting an entry keeps its original position; deleting and saving
/// again moves it to the end.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<Entry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, title: &Title) -> Option<usize> {
        self.entries.iter().position(|e| e.title() == title)
    }
}

impl FromIterator<Entry> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut store = Self::new();
        for entry in iter {
            // Infallible for the in-memory backend.
            let _ = store.save_entry(entry.title(), entry.body());
        }
        store
    }
}

impl EntryStore for MemoryStore {
    fn get_entry(&self, title: &Title) -> StoreResult<Lookup> {
        Ok(self
            .entries
            .iter()
            .find(|e| e.title() == title)
            .map(|e| e.body().to_string())
            .into())
    }

    fn save_entry(&mut self, title: &Title, body: &str) -> StoreResult<()> {
        let entry = Entry::new(title.clone(), body);
        match self.position(title) {
            Some(i) => self.entries[i] = entry,
            None => self.entries.push(entry),
        }
        Ok(())
    }

    fn delete_entry(&mut self, title: &Title) -> StoreResult<()> {
        if let Some(i) = self.position(title) {
            self.entries.remove(i);
        }
        Ok(())
    }

    fn list_entries(&self) -> StoreResult<Vec<Title>> {
        Ok(self.entries.iter().map(|e| e.title().clone()).collect())
    }
}

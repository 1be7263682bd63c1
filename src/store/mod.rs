//! Entry persistence: the EntryStore trait and its backends

mod file;
mod memory;
mod repository;

pub use file::{FileStore, StoreConfig};
pub use memory::MemoryStore;
pub use repository::{EntryStore, StoreError, StoreResult};

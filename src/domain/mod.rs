//! Core types: Title, Entry, Lookup

mod entry;
mod title;

pub use entry::{Entry, Lookup};
pub use title::{MAX_TITLE_BYTES, ParseTitleError, Title};

//! File-backed entry store with atomic writes.
//!
//! Each entry lives in `<entries_dir>/<title>.md` and the whole file is the
//! raw markdown body.

use std::fs;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::domain::{Lookup, Title};
use crate::store::repository::{EntryStore, StoreError, StoreResult};

const ENTRY_EXTENSION: &str = "md";

/// Where and how a [`FileStore`] keeps its entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding one markdown file per entry.
    pub entries_dir: PathBuf,
    /// Create the directory (and parents) if it does not exist.
    pub create_missing: bool,
}

impl StoreConfig {
    pub fn new(entries_dir: impl Into<PathBuf>) -> Self {
        Self {
            entries_dir: entries_dir.into(),
            create_missing: false,
        }
    }

    pub fn create_missing(mut self, create: bool) -> Self {
        self.create_missing = create;
        self
    }
}

/// Entry store backed by a flat directory of markdown files.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens the store described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DirectoryNotFound` if the directory is missing and
    /// `create_missing` is off, and `StoreError::NotADirectory` if the path
    /// exists but is not a directory.
    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        let dir = &config.entries_dir;

        if !dir.exists() {
            if !config.create_missing {
                return Err(StoreError::DirectoryNotFound { path: dir.clone() });
            }
            fs::create_dir_all(dir).map_err(|e| StoreError::from_io(dir, e))?;
            debug!(dir = %dir.display(), "created entries directory");
        }

        if !dir.is_dir() {
            return Err(StoreError::NotADirectory { path: dir.clone() });
        }

        Ok(Self { dir: dir.clone() })
    }

    /// Returns the entries directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file path an entry with this title is stored at.
    pub fn entry_path(&self, title: &Title) -> PathBuf {
        self.dir.join(Self::file_name(title))
    }
}

/// What occupies an entry's path on disk.
enum Slot {
    /// A regular file whose name is exactly the title's file name.
    Entry(PathBuf),
    /// Nothing at the path.
    Vacant,
    /// A regular file reached through a differently-cased name.
    Collision(PathBuf),
    /// A directory or other non-file.
    Occupied(PathBuf),
}

impl FileStore {
    fn file_name(title: &Title) -> String {
        format!("{}.{}", title.as_str(), ENTRY_EXTENSION)
    }

    /// Resolves the title to its file, matching the name case-sensitively even
    /// on filesystems that do not.
    fn slot(&self, title: &Title) -> StoreResult<Slot> {
        let path = self.entry_path(title);
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Slot::Vacant),
            Err(e) => return Err(StoreError::from_io(&path, e)),
        };

        if !metadata.is_file() {
            return Ok(Slot::Occupied(path));
        }

        if self.has_exact_name(&Self::file_name(title))? {
            Ok(Slot::Entry(path))
        } else {
            Ok(Slot::Collision(path))
        }
    }

    fn has_exact_name(&self, file_name: &str) -> StoreResult<bool> {
        for entry in WalkDir::new(&self.dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| StoreError::Io {
                path: self.dir.clone(),
                source: e.into(),
            })?;
            if entry.file_name() == file_name {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl EntryStore for FileStore {
    fn get_entry(&self, title: &Title) -> StoreResult<Lookup> {
        let path = match self.slot(title)? {
            Slot::Entry(path) => path,
            Slot::Vacant | Slot::Collision(_) | Slot::Occupied(_) => {
                debug!(%title, "entry not found");
                return Ok(Lookup::NotFound);
            }
        };

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            // Removed since the slot was resolved.
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Lookup::NotFound),
            Err(e) => return Err(StoreError::from_io(&path, e)),
        };

        let body = decode_body(bytes, &path)?;
        debug!(%title, bytes = body.len(), "read entry");
        Ok(Lookup::Found(body))
    }

    fn save_entry(&mut self, title: &Title, body: &str) -> StoreResult<()> {
        let path = match self.slot(title)? {
            Slot::Entry(path) => path,
            Slot::Vacant => self.entry_path(title),
            Slot::Collision(path) => {
                return Err(StoreError::NameCollision {
                    title: title.clone(),
                    path,
                });
            }
            Slot::Occupied(path) => return Err(StoreError::NotAFile { path }),
        };

        let mut temp = NamedTempFile::new_in(&self.dir).map_err(|e| StoreError::Io {
            path: path.clone(),
            source: e,
        })?;

        temp.write_all(body.as_bytes()).map_err(|e| StoreError::Io {
            path: path.clone(),
            source: e,
        })?;

        temp.persist(&path).map_err(|e| StoreError::AtomicWrite {
            path: path.clone(),
            source: e.error,
        })?;

        debug!(%title, bytes = body.len(), "saved entry");
        Ok(())
    }

    fn delete_entry(&mut self, title: &Title) -> StoreResult<()> {
        let Slot::Entry(path) = self.slot(title)? else {
            return Ok(());
        };
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(%title, "deleted entry");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::from_io(&path, e)),
        }
    }

    /// Lists entry titles sorted alphabetically.
    ///
    /// Only top-level `.md` files are entries. Hidden files, subdirectories,
    /// and files whose names are not valid titles are skipped.
    fn list_entries(&self) -> StoreResult<Vec<Title>> {
        if !self.dir.is_dir() {
            return Err(StoreError::DirectoryNotFound {
                path: self.dir.clone(),
            });
        }

        let mut titles: Vec<Title> = WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!(error = %err, "skipping unreadable directory entry");
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .filter(|e| !is_hidden(e))
            .filter(has_md_extension)
            .filter_map(|e| title_from_entry(&e))
            .collect();

        titles.sort();
        Ok(titles)
    }
}

/// Decodes a stored body, stripping a UTF-8 BOM and rejecting other encodings.
fn decode_body(bytes: Vec<u8>, path: &Path) -> StoreResult<String> {
    if bytes.starts_with(&[0xFF, 0xFE]) || bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(StoreError::InvalidEncoding {
            path: path.into(),
            detail: "UTF-16 byte order mark detected; convert to UTF-8".into(),
        });
    }

    let content = String::from_utf8(bytes).map_err(|e| StoreError::InvalidEncoding {
        path: path.into(),
        detail: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
    })?;

    match content.strip_prefix('\u{FEFF}') {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(content),
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

fn has_md_extension(entry: &DirEntry) -> bool {
    entry
        .path()
        .extension()
        .is_some_and(|e| e == ENTRY_EXTENSION)
}

fn title_from_entry(entry: &DirEntry) -> Option<Title> {
    let Some(stem) = entry.path().file_stem().and_then(|s| s.to_str()) else {
        warn!(path = %entry.path().display(), "skipping file with non-UTF-8 name");
        return None;
    };

    match Title::new(stem) {
        // A stem with surrounding whitespace would not round-trip to this file.
        Ok(title) if title.as_str() == stem => Some(title),
        _ => {
            warn!(path = %entry.path().display(), "skipping file whose name is not a valid title");
            None
        }
    }
}

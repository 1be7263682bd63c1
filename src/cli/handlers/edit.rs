//! Edit command handler.

use anyhow::{Context, Result, bail};
use std::io::Write;
use std::path::Path;
use std::process::Command;

use super::{open_wiki, parse_title};
use crate::cli::EditArgs;
use crate::cli::config::Config;
use crate::domain::Lookup;
use crate::store::{EntryStore, StoreConfig};
use crate::wiki::Wiki;

/// Trait for launching an editor (allows mocking in tests).
pub trait EditorLauncher {
    fn open(&self, path: &Path) -> Result<()>;
}

/// What happened to the entry after the editor exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Saved,
    Unchanged,
}

/// Opens a file in the user's configured editor.
pub(crate) fn open_in_editor(path: &Path, config: &Config) -> Result<()> {
    let editor = config.editor();

    // May include args, e.g. "code --wait"
    let parts: Vec<&str> = editor.split_whitespace().collect();
    let Some((cmd, args)) = parts.split_first() else {
        bail!("editor command is empty");
    };

    let status = Command::new(cmd)
        .args(args)
        .arg(path)
        .status()
        .with_context(|| format!("failed to launch editor '{}'", editor))?;

    if !status.success() {
        bail!("editor '{}' exited with non-zero status", editor);
    }

    Ok(())
}

/// Edits an entry's source through a temporary file.
///
/// The body is copied to a scratch `.md` file, the editor runs on it, and
/// the result is saved back only if it changed.
pub fn handle_edit_impl<S: EntryStore, E: EditorLauncher>(
    args: &EditArgs,
    wiki: &mut Wiki<S>,
    editor: &E,
) -> Result<EditOutcome> {
    let title = parse_title(&args.title)?;

    let original = match wiki
        .source(&title)
        .with_context(|| format!("failed to read entry '{}'", title))?
    {
        Lookup::Found(body) => body,
        Lookup::NotFound => bail!("entry not found: '{}' (use `wiki new` to create it)", title),
    };

    let mut scratch = tempfile::Builder::new()
        .prefix("wiki-")
        .suffix(".md")
        .tempfile()
        .context("failed to create scratch file")?;
    scratch
        .write_all(original.as_bytes())
        .and_then(|_| scratch.flush())
        .context("failed to write scratch file")?;

    editor.open(scratch.path())?;

    // Editors may replace the file rather than write in place; read by path.
    let edited = std::fs::read_to_string(scratch.path())
        .context("failed to read scratch file after editing")?;

    if edited == original {
        return Ok(EditOutcome::Unchanged);
    }

    wiki.save_edit(&title, &edited)?;
    Ok(EditOutcome::Saved)
}

pub fn handle_edit(args: &EditArgs, store_config: &StoreConfig, config: &Config) -> Result<()> {
    struct RealEditor<'a>(&'a Config);
    impl EditorLauncher for RealEditor<'_> {
        fn open(&self, path: &Path) -> Result<()> {
            open_in_editor(path, self.0)
        }
    }

    let mut wiki = open_wiki(store_config)?;
    match handle_edit_impl(args, &mut wiki, &RealEditor(config))? {
        EditOutcome::Saved => println!("Edited: {}", args.title.trim()),
        EditOutcome::Unchanged => println!("No changes: {}", args.title.trim()),
    }
    Ok(())
}

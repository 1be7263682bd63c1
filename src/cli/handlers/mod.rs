//! Command handlers for the CLI.

mod delete;
mod edit;
mod export;
mod list;
mod new;
mod search;
mod show;


use anyhow::{Context, Result};
use std::io::Read;

use super::output::{EntryListing, Output, OutputFormat};
use super::{BodyArgs, DisplayArgs};
use crate::domain::Title;
use crate::store::{FileStore, StoreConfig};
use crate::wiki::{RenderedEntry, Wiki};

// Re-export public items
pub use delete::handle_delete;
pub use edit::{EditOutcome, EditorLauncher, handle_edit, handle_edit_impl};
pub use export::{handle_export, handle_site};
pub use list::handle_list;
pub use new::{handle_new, handle_save};
pub use search::handle_search;
pub use show::{handle_random, handle_show};

// ===========================================
// Shared Utilities
// ===========================================

/// Opens the wiki over the configured entries directory.
pub(crate) fn open_wiki(config: &StoreConfig) -> Result<Wiki<FileStore>> {
    let store = FileStore::open(config).with_context(|| {
        format!(
            "failed to open entries directory: {}",
            config.entries_dir.display()
        )
    })?;
    Ok(Wiki::new(store))
}

/// Parses a user-supplied title.
pub(crate) fn parse_title(s: &str) -> Result<Title> {
    Title::new(s).with_context(|| format!("invalid title: '{}'", s))
}

/// Reads the body for `new`/`save` from `--body`, `--file`, or stdin.
pub(crate) fn read_body<R: Read>(args: &BodyArgs, stdin: R) -> Result<String> {
    if let Some(body) = &args.body {
        return Ok(body.clone());
    }

    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }

    std::io::read_to_string(stdin).context("failed to read entry body from stdin")
}

/// Formats an entry for the terminal: underlined title, blank line, source.
pub(crate) fn format_entry_human(title: &Title, body: &str) -> String {
    let mut out = String::new();
    out.push_str(title.as_str());
    out.push('\n');
    out.push_str(&"=".repeat(title.as_str().chars().count()));
    out.push('\n');
    if !body.is_empty() {
        out.push('\n');
        out.push_str(body.trim_end());
        out.push('\n');
    }
    out
}

/// Prints an entry in the requested format.
pub(crate) fn print_entry(entry: &RenderedEntry, display: &DisplayArgs) -> Result<()> {
    if display.html {
        print!("{}", entry.html);
        return Ok(());
    }

    match display.format {
        OutputFormat::Human => print!("{}", format_entry_human(&entry.title, &entry.body)),
        OutputFormat::Json => {
            let output = Output::new(EntryListing {
                title: &entry.title,
                body: &entry.body,
                html: &entry.html,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

/// Prints a list of titles, one per line, or as JSON.
pub(crate) fn print_titles(
    titles: &[Title],
    format: OutputFormat,
    empty_message: &str,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if titles.is_empty() {
                println!("{}", empty_message);
            } else {
                for title in titles {
                    println!("{}", title);
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(titles))?);
        }
    }
    Ok(())
}

//! New and Save command handlers.

use anyhow::{Result, bail};

use super::{open_wiki, parse_title, print_entry, read_body};
use crate::cli::output::OutputFormat;
use crate::cli::{DisplayArgs, NewArgs, SaveArgs};
use crate::store::StoreConfig;
use crate::wiki::{RenderedEntry, WikiError};

/// Prints the outcome of a write: a one-line confirmation for humans, the
/// entry itself for `--html` and JSON.
fn report_write(verb: &str, entry: &RenderedEntry, display: &DisplayArgs) -> Result<()> {
    if !display.html && display.format == OutputFormat::Human {
        println!("{}: {}", verb, entry.title);
        return Ok(());
    }
    print_entry(entry, display)
}

pub fn handle_new(args: &NewArgs, store_config: &StoreConfig) -> Result<()> {
    let title = parse_title(&args.title)?;
    let body = read_body(&args.body, std::io::stdin().lock())?;

    let mut wiki = open_wiki(&store_config.clone().create_missing(true))?;

    match wiki.create(&title, &body) {
        Ok(entry) => report_write("Created", &entry, &args.display),
        Err(WikiError::Duplicate { title }) => {
            bail!(
                "entry already exists: '{}' (use `wiki edit` or `wiki save` to change it)",
                title
            )
        }
        Err(e) => Err(e.into()),
    }
}

pub fn handle_save(args: &SaveArgs, store_config: &StoreConfig) -> Result<()> {
    let title = parse_title(&args.title)?;
    let body = read_body(&args.body, std::io::stdin().lock())?;

    let mut wiki = open_wiki(&store_config.clone().create_missing(true))?;
    let entry = wiki.save_edit(&title, &body)?;

    report_write("Saved", &entry, &args.display)
}

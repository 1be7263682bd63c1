//! Show and Random command handlers.

use anyhow::{Context, Result, bail};

use super::{open_wiki, parse_title, print_entry};
use crate::cli::{RandomArgs, ShowArgs};
use crate::store::StoreConfig;
use crate::wiki::WikiError;

pub fn handle_show(args: &ShowArgs, store_config: &StoreConfig) -> Result<()> {
    let wiki = open_wiki(store_config)?;
    let title = parse_title(&args.title)?;

    match wiki
        .entry(&title)
        .with_context(|| format!("failed to read entry '{}'", title))?
    {
        Some(entry) => print_entry(&entry, &args.display),
        None => bail!("entry not found: '{}'", title),
    }
}

pub fn handle_random(args: &RandomArgs, store_config: &StoreConfig) -> Result<()> {
    let wiki = open_wiki(store_config)?;

    match wiki.random_entry() {
        Ok(entry) => print_entry(&entry, &args.display),
        Err(WikiError::EmptyStore) => bail!("no entries yet; create one with `wiki new`"),
        Err(e) => Err(e).context("failed to pick a random entry"),
    }
}

//! List command handler.

use anyhow::{Context, Result};

use super::{open_wiki, print_titles};
use crate::cli::ListArgs;
use crate::store::StoreConfig;

pub fn handle_list(args: &ListArgs, store_config: &StoreConfig) -> Result<()> {
    let wiki = open_wiki(store_config)?;
    let titles = wiki.index().context("failed to list entries")?;

    print_titles(&titles, args.format, "No entries yet.")
}

//! Delete command handler.

use anyhow::{Context, Result};

use super::{open_wiki, parse_title, print_titles};
use crate::cli::DeleteArgs;
use crate::cli::output::{DeleteListing, Output, OutputFormat};
use crate::store::StoreConfig;

pub fn handle_delete(args: &DeleteArgs, store_config: &StoreConfig) -> Result<()> {
    let mut wiki = open_wiki(store_config)?;
    let title = parse_title(&args.title)?;

    let remaining = wiki
        .delete(&title)
        .with_context(|| format!("failed to delete entry '{}'", title))?;

    match args.format {
        OutputFormat::Human => {
            println!("Deleted: {}", title);
            println!();
            print_titles(&remaining, OutputFormat::Human, "No entries left.")?;
        }
        OutputFormat::Json => {
            let listing = DeleteListing {
                deleted: &title,
                entries: &remaining,
            };
            println!("{}", serde_json::to_string_pretty(&Output::new(listing))?);
        }
    }
    Ok(())
}

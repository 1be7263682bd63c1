//! Search command handler.

use anyhow::{Context, Result};

use super::{open_wiki, print_entry};
use crate::cli::SearchArgs;
use crate::cli::output::{EntryListing, Output, OutputFormat, SearchListing};
use crate::domain::Title;
use crate::render::markdown_to_html;
use crate::store::StoreConfig;
use crate::wiki::{RenderedEntry, SearchOutcome};

pub fn handle_search(args: &SearchArgs, store_config: &StoreConfig) -> Result<()> {
    let wiki = open_wiki(store_config)?;

    let outcome = wiki
        .lookup_or_suggest(&args.query)
        .with_context(|| format!("search failed for query: {}", args.query))?;

    match outcome {
        SearchOutcome::Exact { title, body } => {
            let entry = RenderedEntry {
                html: markdown_to_html(&body),
                title,
                body,
            };
            if args.display.format == OutputFormat::Json && !args.display.html {
                let listing = SearchListing::Exact {
                    entry: EntryListing {
                        title: &entry.title,
                        body: &entry.body,
                        html: &entry.html,
                    },
                };
                println!("{}", serde_json::to_string_pretty(&Output::new(listing))?);
                Ok(())
            } else {
                print_entry(&entry, &args.display)
            }
        }
        SearchOutcome::Suggestions(titles) => {
            format_suggestions(&args.query, &titles, args.display.format)
        }
    }
}

/// Print the suggestion list for a query with no exact match.
fn format_suggestions(query: &str, titles: &[Title], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if titles.is_empty() {
                println!("No matching entries found.");
            } else {
                println!("No entry titled '{}'. Did you mean:", query);
                for title in titles {
                    println!("  {}", title);
                }
            }
        }
        OutputFormat::Json => {
            let listing = SearchListing::Suggestions {
                query,
                suggestions: titles,
            };
            println!("{}", serde_json::to_string_pretty(&Output::new(listing))?);
        }
    }
    Ok(())
}

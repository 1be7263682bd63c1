//! Export command handlers.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::{open_wiki, parse_title};
use crate::cli::config::Config;
use crate::cli::{ExportArgs, SiteArgs};
use crate::render::{PageOptions, SiteConfig, generate_site, render_entry_page};
use crate::store::StoreConfig;

pub fn handle_export(args: &ExportArgs, store_config: &StoreConfig, config: &Config) -> Result<()> {
    let wiki = open_wiki(store_config)?;
    let title = parse_title(&args.title)?;

    let Some(entry) = wiki
        .entry(&title)
        .with_context(|| format!("failed to read entry '{}'", title))?
    else {
        bail!("entry not found: '{}'", title);
    };

    let options = PageOptions {
        template_path: args.template.as_deref().or(config.template.as_deref()),
        theme: args.theme.as_deref().or(config.theme.as_deref()),
        home: None,
    };
    let page = render_entry_page(title.as_str(), &entry.html, &options)?;

    match &args.output {
        Some(path) => {
            write_output(path, &page)?;
            println!("Exported: {} -> {}", title, path.display());
        }
        None => print!("{}", page),
    }
    Ok(())
}

pub fn handle_site(args: &SiteArgs, store_config: &StoreConfig, config: &Config) -> Result<()> {
    let wiki = open_wiki(store_config)?;

    let site_config = SiteConfig {
        site_title: &args.title,
        theme: args.theme.as_deref().or(config.theme.as_deref()),
        entry_template: args.template.as_deref().or(config.template.as_deref()),
    };
    let result = generate_site(wiki.store(), &args.output, &site_config)?;

    println!(
        "Exported {} entr{} to {}",
        result.entries_exported,
        if result.entries_exported == 1 { "y" } else { "ies" },
        args.output.display()
    );
    Ok(())
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        bail!("output directory does not exist: {}", parent.display());
    }
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

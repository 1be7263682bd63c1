//! Static site generation: one HTML page per entry plus an index.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::render::html::markdown_to_html;
use crate::render::template::{IndexLink, PageOptions, render_entry_page, render_index_page};
use crate::store::EntryStore;

/// Configuration for site generation.
pub struct SiteConfig<'a> {
    /// Title of the index page.
    pub site_title: &'a str,
    /// Theme name or path to a CSS file.
    pub theme: Option<&'a str>,
    /// Custom template for entry pages.
    pub entry_template: Option<&'a Path>,
}

impl Default for SiteConfig<'_> {
    fn default() -> Self {
        Self {
            site_title: "Encyclopedia",
            theme: None,
            entry_template: None,
        }
    }
}

/// Result of site generation.
#[derive(Debug)]
pub struct SiteResult {
    /// Number of entry pages written.
    pub entries_exported: usize,
    /// Path of the generated index page.
    pub index_path: PathBuf,
}

/// Converts a title to a file-name-safe slug.
///
/// Lowercases, keeps alphanumerics (including non-ASCII letters), and turns
/// every other run of characters into a single hyphen.
pub fn page_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        "entry".to_string()
    } else {
        slug
    }
}

/// Picks a slug not yet in `taken`, appending `-2`, `-3`, ... on collision.
fn unique_slug(title: &str, taken: &mut HashSet<String>) -> String {
    let base = page_slug(title);
    let mut candidate = base.clone();
    let mut n = 2;
    while taken.contains(&candidate) {
        candidate = format!("{}-{}", base, n);
        n += 1;
    }
    taken.insert(candidate.clone());
    candidate
}

/// Renders every entry in the store into `out_dir`.
///
/// Writes `index.html` and one `<slug>.html` per entry. The output directory
/// is created if needed; existing files with the same names are overwritten.
pub fn generate_site<S: EntryStore>(
    store: &S,
    out_dir: &Path,
    config: &SiteConfig,
) -> Result<SiteResult> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory: {}", out_dir.display()))?;

    let titles = store.list_entries().context("failed to list entries")?;
    let mut taken = HashSet::from(["index".to_string()]);
    let mut links = Vec::with_capacity(titles.len());

    let page_options = PageOptions {
        template_path: config.entry_template,
        theme: config.theme,
        home: Some("index.html"),
    };

    for title in &titles {
        // An entry deleted mid-export is skipped.
        let Some(body) = store
            .get_entry(title)
            .with_context(|| format!("failed to read entry '{}'", title))?
            .into_option()
        else {
            debug!(%title, "entry vanished during export");
            continue;
        };

        let slug = unique_slug(title.as_str(), &mut taken);
        let href = format!("{}.html", slug);
        let page = render_entry_page(title.as_str(), &markdown_to_html(&body), &page_options)?;
        let path = out_dir.join(&href);
        fs::write(&path, page).with_context(|| format!("failed to write {}", path.display()))?;

        links.push(IndexLink {
            title: title.to_string(),
            href,
        });
    }

    let index_path = out_dir.join("index.html");
    let index = render_index_page(config.site_title, &links, config.theme)?;
    fs::write(&index_path, index)
        .with_context(|| format!("failed to write {}", index_path.display()))?;

    info!(entries = links.len(), dir = %out_dir.display(), "generated site");

    Ok(SiteResult {
        entries_exported: links.len(),
        index_path,
    })
}

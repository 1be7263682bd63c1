//! HTML page templates for rendered entries.

use std::path::Path;

use anyhow::{Context, Result};
use minijinja::{Environment, context};
use serde::Serialize;

use crate::render::theme::get_theme_css;

/// Default template for a single entry page.
///
/// Variables: `title`, `content` (already-rendered HTML), `theme_css`, and
/// optionally `home` (link back to the index).
pub const DEFAULT_ENTRY_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{ title }}</title>
    <style>{{ theme_css|safe }}</style>
</head>
<body>
    {% if home %}
    <nav class="wiki"><a href="{{ home }}">All Pages</a></nav>
    {% endif %}
    <article>
        <main>{{ content|safe }}</main>
    </article>
</body>
</html>"##;

/// Default template for the list of all entries.
pub const DEFAULT_INDEX_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{ site_title }}</title>
    <style>{{ theme_css|safe }}</style>
</head>
<body>
    <header>
        <h1>All Pages</h1>
        <p>{{ entries|length }} entr{% if entries|length == 1 %}y{% else %}ies{% endif %}</p>
    </header>
    <main>
        <ul class="entries">
        {% for entry in entries %}
            <li><a href="{{ entry.href }}">{{ entry.title }}</a></li>
        {% endfor %}
        </ul>
    </main>
</body>
</html>"##;

/// Options for rendering a page.
#[derive(Default)]
pub struct PageOptions<'a> {
    /// Path to a custom entry template.
    pub template_path: Option<&'a Path>,
    /// Theme name or path to a CSS file.
    pub theme: Option<&'a str>,
    /// Link back to the index page, if any.
    pub home: Option<&'a str>,
}

/// A link in the index page.
#[derive(Debug, Clone, Serialize)]
pub struct IndexLink {
    pub title: String,
    pub href: String,
}

fn render_template(name: &str, source: &str, ctx: minijinja::Value) -> Result<String> {
    let mut env = Environment::new();
    env.add_template(name, source)
        .with_context(|| format!("invalid template '{}'", name))?;
    let tmpl = env.get_template(name)?;
    let html = tmpl
        .render(ctx)
        .with_context(|| format!("failed to render template '{}'", name))?;
    Ok(html)
}

/// Wraps rendered entry HTML into a complete HTML document.
///
/// Templates are auto-escaped; use `|safe` on `content` in custom templates.
pub fn render_entry_page(title: &str, content: &str, options: &PageOptions) -> Result<String> {
    let theme_css = get_theme_css(options.theme)?;

    let template_str = match options.template_path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read template: {}", p.display()))?,
        None => DEFAULT_ENTRY_TEMPLATE.to_string(),
    };

    render_template(
        "entry.html",
        &template_str,
        context! {
            title => title,
            content => content,
            theme_css => theme_css,
            home => options.home,
        },
    )
}

/// Renders the page listing every entry.
pub fn render_index_page(
    site_title: &str,
    entries: &[IndexLink],
    theme: Option<&str>,
) -> Result<String> {
    let theme_css = get_theme_css(theme)?;
    render_template(
        "index.html",
        DEFAULT_INDEX_TEMPLATE,
        context! {
            site_title => site_title,
            entries => entries,
            theme_css => theme_css,
        },
    )
}

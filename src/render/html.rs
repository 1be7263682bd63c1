//! Markdown to HTML conversion.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, html};

fn markdown_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Converts an entry body to HTML.
///
/// Pure and deterministic. Malformed markup never fails; it is rendered
/// best-effort the way CommonMark prescribes.
///
/// # Example
///
/// ```
/// use encyclopedia::render::markdown_to_html;
///
/// let html = markdown_to_html("# Title\n**bold**");
/// assert_eq!(html, "<h1>Title</h1>\n<p><strong>bold</strong></p>\n");
/// ```
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, markdown_options());
    let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut html_output, parser);
    html_output
}

/// Renders a freshly created entry: an `<h1>` with the title, then the body.
///
/// The title is escaped as text.
pub fn render_with_heading(title: &str, markdown: &str) -> String {
    let heading = [
        Event::Start(Tag::Heading(HeadingLevel::H1, None, Vec::new())),
        Event::Text(title.into()),
        Event::End(Tag::Heading(HeadingLevel::H1, None, Vec::new())),
    ];

    let mut html_output = String::new();
    html::push_html(&mut html_output, heading.into_iter());
    html_output.push_str(&markdown_to_html(markdown));
    html_output
}

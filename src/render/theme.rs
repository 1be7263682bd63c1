//! Stylesheets for rendered pages.

use std::path::Path;

use anyhow::{Context, Result, anyhow};

/// Default light stylesheet.
pub const THEME_LIGHT: &str = r#"
body {
    font-family: Georgia, 'Times New Roman', serif;
    line-height: 1.6;
    max-width: 860px;
    margin: 0 auto;
    padding: 2rem;
    color: #202122;
    background: #fff;
}
nav.wiki { font-family: system-ui, sans-serif; font-size: 0.9em; margin-bottom: 1.5rem; }
nav.wiki a { margin-right: 1rem; }
h1 { border-bottom: 1px solid #a2a9b1; padding-bottom: 0.25rem; font-weight: normal; }
h2 { border-bottom: 1px solid #eaecf0; font-weight: normal; }
a { color: #3366cc; text-decoration: none; }
a:hover { text-decoration: underline; }
pre { background: #f8f9fa; border: 1px solid #eaecf0; padding: 1rem; overflow-x: auto; }
code { font-family: Menlo, Consolas, monospace; font-size: 0.9em; }
blockquote { border-left: 3px solid #c8ccd1; margin-left: 0; padding-left: 1rem; color: #54595d; }
table { border-collapse: collapse; }
th, td { border: 1px solid #a2a9b1; padding: 0.3rem 0.6rem; }
th { background: #eaecf0; }
img { max-width: 100%; height: auto; }
ul.entries { columns: 2; }
"#;

/// Dark stylesheet.
pub const THEME_DARK: &str = r#"
body {
    font-family: Georgia, 'Times New Roman', serif;
    line-height: 1.6;
    max-width: 860px;
    margin: 0 auto;
    padding: 2rem;
    color: #eaecf0;
    background: #101418;
}
nav.wiki { font-family: system-ui, sans-serif; font-size: 0.9em; margin-bottom: 1.5rem; }
nav.wiki a { margin-right: 1rem; }
h1 { border-bottom: 1px solid #54595d; padding-bottom: 0.25rem; font-weight: normal; }
h2 { border-bottom: 1px solid #303438; font-weight: normal; }
a { color: #88a3e8; text-decoration: none; }
a:hover { text-decoration: underline; }
pre { background: #1b1f23; border: 1px solid #303438; padding: 1rem; overflow-x: auto; }
code { font-family: Menlo, Consolas, monospace; font-size: 0.9em; }
blockquote { border-left: 3px solid #54595d; margin-left: 0; padding-left: 1rem; color: #a2a9b1; }
table { border-collapse: collapse; }
th, td { border: 1px solid #54595d; padding: 0.3rem 0.6rem; }
th { background: #202122; }
img { max-width: 100%; height: auto; }
ul.entries { columns: 2; }
"#;

/// Resolves a theme name or CSS file path to stylesheet text.
///
/// `None`, `"light"` and `"default"` select [`THEME_LIGHT`]; `"dark"` selects
/// [`THEME_DARK`]. Anything ending in `.css` is read from disk.
pub fn get_theme_css(theme: Option<&str>) -> Result<String> {
    match theme {
        None | Some("light") | Some("default") => Ok(THEME_LIGHT.to_string()),
        Some("dark") => Ok(THEME_DARK.to_string()),
        Some(path) if path.ends_with(".css") => std::fs::read_to_string(Path::new(path))
            .with_context(|| format!("failed to read stylesheet: {}", path)),
        Some(other) => Err(anyhow!(
            "unknown theme '{}': use 'light', 'dark', or a path to a .css file",
            other
        )),
    }
}

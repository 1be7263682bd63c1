//! Rendering: markdown to HTML, full pages, and static site export.

mod html;
pub mod site;
pub mod template;
mod theme;

pub use html::{markdown_to_html, render_with_heading};
pub use site::{SiteConfig, SiteResult, generate_site};
pub use template::{DEFAULT_ENTRY_TEMPLATE, PageOptions, render_entry_page};
pub use theme::{THEME_DARK, THEME_LIGHT, get_theme_css};

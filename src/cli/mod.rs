//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod logging;
pub mod output;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// wiki - a flat-file encyclopedia of markdown entries
#[derive(Parser, Debug)]
#[command(name = "wiki", version, about, long_about = None)]
pub struct Cli {
    /// Entries directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all entries
    #[command(name = "ls")]
    List(ListArgs),

    /// Show an entry
    Show(ShowArgs),

    /// Open an entry by exact title, or suggest titles containing the query
    Search(SearchArgs),

    /// Create a new entry (fails if the title exists)
    New(NewArgs),

    /// Edit an entry in your editor
    Edit(EditArgs),

    /// Overwrite an entry with new content
    Save(SaveArgs),

    /// Show a random entry
    Random(RandomArgs),

    /// Delete an entry
    #[command(name = "rm")]
    Delete(DeleteArgs),

    /// Export an entry as a standalone HTML page
    Export(ExportArgs),

    /// Export every entry as a static HTML site
    Site(SiteArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// How an entry is displayed.
#[derive(Args, Debug, Clone, Default)]
pub struct DisplayArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Print the rendered HTML instead of the markdown source
    #[arg(long, conflicts_with = "format")]
    pub html: bool,
}

/// Where a new body comes from. Reads stdin when neither is given.
#[derive(Args, Debug, Clone, Default)]
pub struct BodyArgs {
    /// Entry content as markdown
    #[arg(short, long, conflicts_with = "file")]
    pub body: Option<String>,

    /// Read entry content from a file
    #[arg(short = 'F', long)]
    pub file: Option<PathBuf>,
}

/// Arguments for the `ls` command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Entry title (case-sensitive)
    pub title: String,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Exact title or substring to search for
    pub query: String,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Entry title
    pub title: String,

    #[command(flatten)]
    pub body: BodyArgs,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Entry title
    pub title: String,
}

/// Arguments for the `save` command
#[derive(Parser, Debug)]
pub struct SaveArgs {
    /// Entry title
    pub title: String,

    #[command(flatten)]
    pub body: BodyArgs,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Arguments for the `random` command
#[derive(Parser, Debug)]
pub struct RandomArgs {
    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Entry title
    pub title: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `export` command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Entry title
    pub title: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Custom entry template (minijinja)
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Theme: light, dark, or path to a .css file
    #[arg(long)]
    pub theme: Option<String>,
}

/// Arguments for the `site` command
#[derive(Parser, Debug)]
pub struct SiteArgs {
    /// Output directory
    pub output: PathBuf,

    /// Title for the index page
    #[arg(long, default_value = "Encyclopedia")]
    pub title: String,

    /// Custom entry template (minijinja)
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Theme: light, dark, or path to a .css file
    #[arg(long)]
    pub theme: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

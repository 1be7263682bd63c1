//! encyclopedia - a flat-file wiki of markdown entries

pub mod cli;
pub mod domain;
pub mod render;
pub mod store;
pub mod wiki;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_delete, handle_edit, handle_export, handle_list, handle_new, handle_random,
        handle_save, handle_search, handle_show, handle_site,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    cli::logging::init(cli.verbose);

    let config = Config::load()?;
    let store_config = config.store_config(cli.dir.as_ref());
    tracing::debug!(dir = %store_config.entries_dir.display(), "using entries directory");

    match &cli.command {
        Command::List(args) => handle_list(args, &store_config),
        Command::Show(args) => handle_show(args, &store_config),
        Command::Search(args) => handle_search(args, &store_config),
        Command::New(args) => handle_new(args, &store_config),
        Command::Edit(args) => handle_edit(args, &store_config, &config),
        Command::Save(args) => handle_save(args, &store_config),
        Command::Random(args) => handle_random(args, &store_config),
        Command::Delete(args) => handle_delete(args, &store_config),
        Command::Export(args) => handle_export(args, &store_config, &config),
        Command::Site(args) => handle_site(args, &store_config, &config),
        Command::Completions(args) => {
            clap_complete::generate(
                args.shell,
                &mut Cli::command(),
                "wiki",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}

//! notebook - short categorized notes kept in one JSON file

pub mod cli;
pub mod commands;
pub mod domain;
pub mod infra;

use anyhow::Result;
use clap::Parser;
use log::debug;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_archive, handle_completions, handle_delete, handle_edit, handle_list,
        handle_search, handle_show, handle_tags, handle_unarchive,
    },
    logging,
};
use commands::NoteCommands;
use infra::NoteStore;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let _logger = logging::init(cli.verbose)?;

    if let Command::Completions(args) = &cli.command {
        return handle_completions(args);
    }

    let config = Config::load()?;
    let notes_file = config.notes_file(cli.file.as_ref());
    let policy = config.load_policy(cli.strict);
    debug!("using notes file {} ({:?})", notes_file.display(), policy);

    let commands = NoteCommands::new(NoteStore::new(notes_file).with_policy(policy));

    match &cli.command {
        Command::Add(args) => handle_add(args, &commands),
        Command::List(args) => handle_list(args, &commands),
        Command::Search(args) => handle_search(args, &commands),
        Command::Show(args) => handle_show(args, &commands),
        Command::Edit(args) => handle_edit(args, &commands),
        Command::Delete(args) => handle_delete(args, &commands),
        Command::Archive(args) => handle_archive(args, &commands),
        Command::Unarchive(args) => handle_unarchive(args, &commands),
        Command::Tags => handle_tags(&commands),
        Command::Completions(args) => handle_completions(args),
    }
}

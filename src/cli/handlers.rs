//! Command handlers: translate parsed arguments into note operations and
//! print the resulting message.

use anyhow::{Context, Result};
use clap::CommandFactory;
use std::io;

use super::{AddArgs, Cli, CompletionsArgs, EditArgs, IdArgs, ListArgs, SearchArgs};
use crate::commands::{ListFilter, NewNote, NoteCommands, NoteEdit};

pub fn handle_add(args: &AddArgs, commands: &NoteCommands) -> Result<()> {
    let new = NewNote {
        title: args.title.clone(),
        content: args.content.clone(),
        category: args.category.clone(),
        priority: args.priority.clone(),
        tags: args.tags.clone(),
    };
    print_outcome(commands.add(new), "add")
}

pub fn handle_list(args: &ListArgs, commands: &NoteCommands) -> Result<()> {
    let filter = ListFilter {
        category: args.category.clone(),
        priority: args.priority.clone(),
        status: (!args.all).then(|| args.status.clone()),
        show_content: args.content,
    };
    print_outcome(commands.list(filter), "ls")
}

pub fn handle_search(args: &SearchArgs, commands: &NoteCommands) -> Result<()> {
    print_outcome(commands.search(&args.term, &args.scope), "search")
}

pub fn handle_show(args: &IdArgs, commands: &NoteCommands) -> Result<()> {
    print_outcome(commands.show(args.id), "show")
}

pub fn handle_edit(args: &EditArgs, commands: &NoteCommands) -> Result<()> {
    let edit = NoteEdit {
        title: args.title.clone(),
        content: args.content.clone(),
        category: args.category.clone(),
        priority: args.priority.clone(),
        tags: args.tag_change(),
    };
    print_outcome(commands.edit(args.id, edit), "edit")
}

pub fn handle_delete(args: &IdArgs, commands: &NoteCommands) -> Result<()> {
    print_outcome(commands.delete(args.id), "rm")
}

pub fn handle_archive(args: &IdArgs, commands: &NoteCommands) -> Result<()> {
    print_outcome(commands.archive(args.id), "archive")
}

pub fn handle_unarchive(args: &IdArgs, commands: &NoteCommands) -> Result<()> {
    print_outcome(commands.unarchive(args.id), "unarchive")
}

pub fn handle_tags(commands: &NoteCommands) -> Result<()> {
    print_outcome(commands.list_tags(), "tags")
}

pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(args.shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

fn print_outcome<E>(outcome: Result<String, E>, command: &str) -> Result<()>
where
    E: std::error::Error + Send + Sync + 'static,
{
    let message = outcome.with_context(|| format!("{} failed", command))?;
    println!("{}", message);
    Ok(())
}

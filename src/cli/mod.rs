//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod logging;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::NoteId;

/// notebook - short categorized notes in a single JSON file
#[derive(Parser, Debug)]
#[command(name = "notebook", version, about, long_about = None)]
pub struct Cli {
    /// Notes file (overrides config file; default: ./notes.json)
    #[arg(short = 'f', long, global = true)]
    pub file: Option<PathBuf>,

    /// Fail on unreadable notes files instead of treating them as empty
    #[arg(long, global = true)]
    pub strict: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new note
    Add(AddArgs),

    /// List notes, optionally filtered by category, priority, and status
    #[command(name = "ls")]
    List(ListArgs),

    /// Case-insensitive search in titles, content, and tags
    Search(SearchArgs),

    /// Show a single note in full
    Show(IdArgs),

    /// Edit fields of an existing note
    Edit(EditArgs),

    /// Delete a note
    #[command(name = "rm")]
    Delete(IdArgs),

    /// Move a note to the archive
    Archive(IdArgs),

    /// Return an archived note to the active list
    Unarchive(IdArgs),

    /// List all tags with note counts
    Tags,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Note title
    pub title: String,

    /// Note text
    pub content: String,

    /// Category (work, personal, study, shopping, ideas, other)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Priority (low, medium, high)
    #[arg(short, long)]
    pub priority: Option<String>,

    /// Tag for the note (can be specified multiple times)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Filter by category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Filter by priority
    #[arg(short, long)]
    pub priority: Option<String>,

    /// Filter by status (active, archived)
    #[arg(short, long, default_value = "active")]
    pub status: String,

    /// List notes of every status
    #[arg(short = 'a', long, conflicts_with = "status")]
    pub all: bool,

    /// Print the full text of long notes
    #[arg(long)]
    pub content: bool,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Text to look for
    pub term: String,

    /// Where to look
    #[arg(
        short = 'i',
        long = "in",
        default_value = "all",
        value_parser = ["title", "content", "tags", "all"],
        ignore_case = true
    )]
    pub scope: String,
}

/// Arguments for commands that take a single note id
#[derive(Parser, Debug)]
pub struct IdArgs {
    /// Note ID (e.g. 3 or #3)
    pub id: NoteId,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note ID (e.g. 3 or #3)
    pub id: NoteId,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New text
    #[arg(long)]
    pub content: Option<String>,

    /// New category
    #[arg(short, long)]
    pub category: Option<String>,

    /// New priority
    #[arg(short, long)]
    pub priority: Option<String>,

    /// Replace tags (can be specified multiple times)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,

    /// Remove all tags from the note
    #[arg(long, conflicts_with = "tags")]
    pub clear_tags: bool,
}

impl EditArgs {
    /// Tags to set: `None` when neither `--tag` nor `--clear-tags` was given.
    pub fn tag_change(&self) -> Option<Vec<String>> {
        if self.clear_tags {
            Some(Vec::new())
        } else if self.tags.is_empty() {
            None
        } else {
            Some(self.tags.clone())
        }
    }
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("notebook").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn ls_defaults_to_active_status() {
        match parse(&["ls"]).command {
            Command::List(args) => {
                assert_eq!(args.status, "active");
                assert!(!args.all);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn ls_all_conflicts_with_explicit_status() {
        let result = Cli::try_parse_from(["notebook", "ls", "--all", "--status", "archived"]);
        assert!(result.is_err());
    }

    #[test]
    fn ids_accept_hash_prefix() {
        match parse(&["rm", "#4"]).command {
            Command::Delete(args) => assert_eq!(args.id.get(), 4),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn zero_id_is_rejected() {
        assert!(Cli::try_parse_from(["notebook", "archive", "0"]).is_err());
    }

    #[test]
    fn edit_tag_change_distinguishes_absent_from_cleared() {
        let edit = |args: &[&str]| match parse(args).command {
            Command::Edit(args) => args.tag_change(),
            other => panic!("unexpected command: {:?}", other),
        };
        assert_eq!(edit(&["edit", "1"]), None);
        assert_eq!(edit(&["edit", "1", "--clear-tags"]), Some(Vec::new()));
        assert_eq!(
            edit(&["edit", "1", "-t", "a", "-t", "b"]),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn search_scope_is_case_insensitive() {
        match parse(&["search", "milk", "--in", "TITLE"]).command {
            Command::Search(args) => assert_eq!(args.scope.to_lowercase(), "title"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_file_option_works_after_subcommand() {
        let cli = parse(&["tags", "--file", "/tmp/x.json"]);
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/x.json")));
    }
}

//! Note operations over a [`NoteStore`].
//!
//! Every operation runs one load → validate → (mutate → save) cycle and
//! returns a single message meant for direct display. Invalid input and
//! unknown ids are reported inside that message (prefixed `Error: `) and never
//! cause a write; only storage failures come back as `Err`.

mod add;
mod list;
mod modify;
mod search;
mod show;
mod tags;


use log::{debug, info};
use std::cmp::Reverse;
use thiserror::Error;

use crate::domain::{Note, NoteField, NoteId, ParseFieldError, ParseNoteError};
use crate::infra::{NoteStore, StoreError};

pub use add::NewNote;
pub use list::ListFilter;
pub use modify::NoteEdit;
pub use search::SearchScope;

/// Message returned when the store holds no notes at all.
pub const NO_NOTES: &str = "No notes";

const SEPARATOR_WIDTH: usize = 50;

/// Why an operation did not complete.
#[derive(Debug, Error)]
enum CommandError {
    #[error(transparent)]
    InvalidField(#[from] ParseFieldError),

    #[error(transparent)]
    InvalidNote(#[from] ParseNoteError),

    #[error("note #{0} not found")]
    NotFound(NoteId),

    #[error(transparent)]
    Store(#[from] StoreError),
}

type Outcome = Result<String, CommandError>;

/// Runs note operations against one store.
#[derive(Debug, Clone)]
pub struct NoteCommands {
    store: NoteStore,
}

impl NoteCommands {
    pub fn new(store: NoteStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Loads the collection and returns it with the position of `id`.
    fn load_with(&self, id: NoteId) -> Result<(Vec<Note>, usize), CommandError> {
        let notes = self.store.load_all()?;
        let index = notes
            .iter()
            .position(|n| n.id() == id)
            .ok_or(CommandError::NotFound(id))?;
        Ok((notes, index))
    }
}

/// Turns an operation outcome into display text, passing storage errors on.
fn respond(operation: &str, outcome: Outcome) -> Result<String, StoreError> {
    match outcome {
        Ok(message) => {
            debug!("{}: {}", operation, message);
            Ok(message)
        }
        Err(CommandError::Store(err)) => Err(err),
        Err(rejection) => {
            info!("{} rejected: {}", operation, rejection);
            Ok(format!("Error: {}", rejection))
        }
    }
}

/// Parses an optional user-supplied field value.
fn parse_optional<F: NoteField>(value: Option<&str>) -> Result<Option<F>, ParseFieldError> {
    value.map(F::parse_loose).transpose()
}

/// Sorts newest first by creation time; equal times keep their order.
fn sort_newest_first(notes: &mut [Note]) {
    notes.sort_by_key(|n| Reverse(n.created_at()));
}

/// Formats a header followed by each rendered note behind a separator.
fn render_listing(header: String, notes: &[Note], show_content: bool) -> String {
    let separator = "─".repeat(SEPARATOR_WIDTH);
    let mut lines = vec![header];
    for note in notes {
        lines.push(separator.clone());
        lines.push(note.to_string());
        if show_content && note.is_truncated() {
            lines.push(format!("   Full text: {}", note.content()));
        }
    }
    lines.join("\n")
}

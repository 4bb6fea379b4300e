//! Add operation.

use super::{NoteCommands, Outcome, parse_optional, respond};
use crate::domain::{Category, Note, Priority};
use crate::infra::StoreError;

/// Input for [`NoteCommands::add`].
///
/// `category` and `priority` are raw user input, matched case-insensitively;
/// `None` selects the field default.
#[derive(Debug, Clone, Default)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub tags: Vec<String>,
}

impl NewNote {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }
}

impl NoteCommands {
    /// Appends a new note with the next free id.
    pub fn add(&self, new: NewNote) -> Result<String, StoreError> {
        respond("add", self.try_add(new))
    }

    fn try_add(&self, new: NewNote) -> Outcome {
        let mut notes = self.store.load_all()?;

        let category: Category = parse_optional(new.category.as_deref())?.unwrap_or_default();
        let priority: Priority = parse_optional(new.priority.as_deref())?.unwrap_or_default();

        let id = self.store.next_id()?;
        let note = Note::builder(id, new.title, new.content)
            .category(category)
            .priority(priority)
            .tags(new.tags)
            .build()?;

        let message = format!("Note added (ID: {}): {}", note.id(), note.title());
        notes.push(note);
        self.store.save_all(&notes)?;
        Ok(message)
    }
}

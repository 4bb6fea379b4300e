//! Operations that change or remove an existing note.

use super::{NoteCommands, Outcome, parse_optional, respond};
use crate::domain::{Category, NoteId, NoteUpdate, Priority, Status};
use crate::infra::StoreError;

/// Input for [`NoteCommands::edit`]. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct NoteEdit {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl NoteCommands {
    /// Removes the note with `id`.
    pub fn delete(&self, id: NoteId) -> Result<String, StoreError> {
        respond("delete", self.try_delete(id))
    }

    fn try_delete(&self, id: NoteId) -> Outcome {
        let (mut notes, index) = self.load_with(id)?;
        let removed = notes.remove(index);
        self.store.save_all(&notes)?;
        Ok(format!("Note deleted: #{} - {}", id, removed.title()))
    }

    /// Moves an active note to the archive.
    pub fn archive(&self, id: NoteId) -> Result<String, StoreError> {
        respond("archive", self.try_set_status(id, Status::Archived))
    }

    /// Returns an archived note to the active set.
    pub fn unarchive(&self, id: NoteId) -> Result<String, StoreError> {
        respond("unarchive", self.try_set_status(id, Status::Active))
    }

    fn try_set_status(&self, id: NoteId, status: Status) -> Outcome {
        let (mut notes, index) = self.load_with(id)?;
        let note = &mut notes[index];

        if note.status() == status {
            return Ok(match status {
                Status::Archived => format!("Note #{} is already archived", id),
                Status::Active => format!("Note #{} is not archived", id),
            });
        }

        note.set_status(status);
        let message = match status {
            Status::Archived => format!("Note archived: #{} - {}", id, note.title()),
            Status::Active => format!("Note restored: #{} - {}", id, note.title()),
        };
        self.store.save_all(&notes)?;
        Ok(message)
    }

    /// Applies the supplied fields to the note with `id`.
    pub fn edit(&self, id: NoteId, edit: NoteEdit) -> Result<String, StoreError> {
        respond("edit", self.try_edit(id, edit))
    }

    fn try_edit(&self, id: NoteId, edit: NoteEdit) -> Outcome {
        let (mut notes, index) = self.load_with(id)?;

        let category: Option<Category> = parse_optional(edit.category.as_deref())?;
        let priority: Option<Priority> = parse_optional(edit.priority.as_deref())?;

        let note = &mut notes[index];
        note.update(NoteUpdate {
            title: edit.title,
            content: edit.content,
            category,
            priority,
            tags: edit.tags,
        })?;

        let message = format!("Note updated: #{} - {}", id, note.title());
        self.store.save_all(&notes)?;
        Ok(message)
    }
}

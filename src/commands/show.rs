//! Show operation.

use super::{NoteCommands, Outcome, SEPARATOR_WIDTH, respond};
use crate::domain::NoteId;
use crate::infra::StoreError;

impl NoteCommands {
    /// Full detail view of one note: the listing form, then the untruncated
    /// content and all metadata.
    pub fn show(&self, id: NoteId) -> Result<String, StoreError> {
        respond("show", self.try_show(id))
    }

    fn try_show(&self, id: NoteId) -> Outcome {
        let (notes, index) = self.load_with(id)?;
        let note = &notes[index];
        let separator = "─".repeat(SEPARATOR_WIDTH);

        let tags = if note.tags().is_empty() {
            "-".to_string()
        } else {
            note.tags().join(", ")
        };

        Ok([
            note.to_string(),
            separator.clone(),
            note.content().to_string(),
            separator,
            format!(
                "Category: {} | Priority: {} | Status: {}",
                note.category(),
                note.priority(),
                note.status()
            ),
            format!("Tags: {}", tags),
            format!("Created: {}", note.created_at()),
            format!("Updated: {}", note.updated_at()),
        ]
        .join("\n"))
    }
}

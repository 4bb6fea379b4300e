//! List operation.

use super::{NO_NOTES, NoteCommands, Outcome, parse_optional, render_listing, respond, sort_newest_first};
use crate::domain::{Category, Priority, Status};
use crate::infra::StoreError;

/// Filters for [`NoteCommands::list`].
///
/// Each `Some` value must name a member of its field (case-insensitive);
/// `None` disables that filter. The default keeps only active notes.
#[derive(Debug, Clone)]
pub struct ListFilter {
    pub category: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    /// Append the full text of notes whose preview was truncated.
    pub show_content: bool,
}

impl Default for ListFilter {
    fn default() -> Self {
        Self {
            category: None,
            priority: None,
            status: Some(Status::Active.to_string()),
            show_content: false,
        }
    }
}

impl NoteCommands {
    /// Lists notes matching every supplied filter, newest first.
    pub fn list(&self, filter: ListFilter) -> Result<String, StoreError> {
        respond("list", self.try_list(filter))
    }

    fn try_list(&self, filter: ListFilter) -> Outcome {
        let mut notes = self.store.load_all()?;
        if notes.is_empty() {
            return Ok(NO_NOTES.to_string());
        }

        let category: Option<Category> = parse_optional(filter.category.as_deref())?;
        let priority: Option<Priority> = parse_optional(filter.priority.as_deref())?;
        let status: Option<Status> = parse_optional(filter.status.as_deref())?;

        if let Some(category) = category {
            notes.retain(|n| n.category() == category);
        }
        if let Some(priority) = priority {
            notes.retain(|n| n.priority() == priority);
        }
        if let Some(status) = status {
            notes.retain(|n| n.status() == status);
        }

        if notes.is_empty() {
            return Ok("No notes matched the given filters".to_string());
        }

        sort_newest_first(&mut notes);

        Ok(render_listing(
            format!("=== Notes found: {} ===", notes.len()),
            &notes,
            filter.show_content,
        ))
    }
}

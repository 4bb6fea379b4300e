//! Tag listing.

use super::{NoteCommands, Outcome, respond};
use crate::infra::StoreError;

impl NoteCommands {
    /// Lists every tag with the number of notes carrying it.
    pub fn list_tags(&self) -> Result<String, StoreError> {
        respond("tags", self.try_list_tags())
    }

    fn try_list_tags(&self) -> Outcome {
        let tags = self.store.all_tags()?;
        if tags.is_empty() {
            return Ok("No tags found".to_string());
        }

        let notes = self.store.load_all()?;
        let mut lines = vec!["=== All tags ===".to_string()];
        for tag in &tags {
            let count = notes.iter().filter(|n| n.has_tag(tag)).count();
            lines.push(format!("#{} ({} notes)", tag, count));
        }
        Ok(lines.join("\n"))
    }
}

//! Builder for test notes with sensible defaults.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use notebook::domain::{Category, Note, NoteId, Priority, Status, Timestamp};

/// Builder for creating test notes with sensible defaults.
///
/// Every note is created on a fixed day so ordering and rendered
/// dates are predictable.
#[derive(Debug)]
pub struct TestNote {
    id: u64,
    title: String,
    content: String,
    category: Category,
    priority: Priority,
    tags: Vec<String>,
    status: Status,
    day: u32,
}

impl TestNote {
    /// Creates a new test note with the given ID and title.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: String::new(),
            category: Category::default(),
            priority: Priority::default(),
            tags: Vec::new(),
            status: Status::default(),
            day: 1,
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn archived(mut self) -> Self {
        self.status = Status::Archived;
        self
    }

    /// Sets the creation day in March 2024 (UTC noon).
    pub fn on_day(mut self, day: u32) -> Self {
        self.day = day;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Converts this TestNote to a domain Note.
    pub fn to_note(&self) -> Note {
        let created = Timestamp::from_datetime(
            Utc.with_ymd_and_hms(2024, 3, self.day, 12, 0, 0)
                .single()
                .expect("valid test date"),
        );
        Note::builder(
            NoteId::new(self.id).expect("TestNote id must be positive"),
            &self.title,
            &self.content,
        )
        .category(self.category)
        .priority(self.priority)
        .tags(self.tags.clone())
        .status(self.status)
        .timestamps(created, created)
        .build()
        .expect("TestNote should always produce valid Note")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_defaults() {
        let note = TestNote::new(1, "Plain").to_note();
        assert_eq!(note.category(), Category::Other);
        assert_eq!(note.priority(), Priority::Medium);
        assert_eq!(note.status(), Status::Active);
        assert!(note.tags().is_empty());
    }

    #[test]
    fn test_note_builder_fluent() {
        let note = TestNote::new(7, "Buy milk")
            .content("2 liters")
            .category(Category::Shopping)
            .priority(Priority::High)
            .tag("errand")
            .archived()
            .to_note();

        assert_eq!(note.id().get(), 7);
        assert_eq!(note.content(), "2 liters");
        assert_eq!(note.category(), Category::Shopping);
        assert_eq!(note.priority(), Priority::High);
        assert_eq!(note.tags(), ["errand"]);
        assert_eq!(note.status(), Status::Archived);
    }

    #[test]
    fn test_note_days_order_creation() {
        let early = TestNote::new(1, "a").on_day(1).to_note();
        let late = TestNote::new(2, "b").on_day(2).to_note();
        assert!(early.created_at() < late.created_at());
    }
}

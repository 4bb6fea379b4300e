//! Note struct and its structured (JSON object) representation.

use crate::domain::{Category, NoteId, Priority, Status, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Error returned when constructing an invalid note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseNoteError {
    EmptyTitle,
}

impl fmt::Display for ParseNoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseNoteError::EmptyTitle => write!(f, "title cannot be empty"),
        }
    }
}

impl std::error::Error for ParseNoteError {}

/// Error returned when a structured record cannot be turned into a note.
#[derive(Debug, Clone)]
pub struct MalformedRecord {
    reason: String,
}

impl MalformedRecord {
    fn new(reason: impl fmt::Display) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }

    /// Returns a description of what was wrong with the record.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed note record: {}", self.reason)
    }
}

impl std::error::Error for MalformedRecord {}

/// A single user-authored note.
///
/// # Required Fields
/// - `id`: Unique positive identifier
/// - `title`: Human-readable title (non-empty)
/// - `content`: Free text body, any length
///
/// # Defaulted Fields
/// - `category`: [`Category::Other`]
/// - `priority`: [`Priority::Medium`]
/// - `tags`: empty; order, case, and duplicates are preserved
/// - `status`: [`Status::Active`]
/// - `created_at` / `updated_at`: the time of construction
///
/// # Examples
///
/// ```
/// use notebook::domain::{Note, NoteId, Priority};
///
/// let note = Note::builder(NoteId::FIRST, "Buy milk", "2% milk, eggs")
///     .priority(Priority::Low)
///     .build()
///     .unwrap();
/// assert_eq!(note.title(), "Buy milk");
/// assert_eq!(note.created_at(), note.updated_at());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    id: NoteId,
    title: String,
    content: String,
    category: Category,
    priority: Priority,
    tags: Vec<String>,
    status: Status,
    created_at: Timestamp,
    updated_at: Timestamp,
}

/// Field changes applied by [`Note::update`].
///
/// `None` means "not provided" and leaves the field untouched; `Some` with an
/// empty value (e.g. `tags: Some(vec![])`) is a real change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<Category>,
    pub priority: Option<Priority>,
    pub tags: Option<Vec<String>>,
}

impl Note {
    /// Creates a new Note with default category, priority, tags, and status.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError::EmptyTitle` if the title is empty or
    /// whitespace-only.
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, ParseNoteError> {
        Self::builder(id, title, content).build()
    }

    /// Creates a builder for constructing a Note with optional fields.
    pub fn builder(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> NoteBuilder {
        NoteBuilder::new(id, title, content)
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Returns true if any tag equals `tag` exactly.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Applies the supplied fields and refreshes `updated_at`.
    ///
    /// `updated_at` always moves strictly forward, even when nothing else
    /// changes.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError::EmptyTitle` if a supplied title is empty. No
    /// field is modified in that case.
    pub fn update(&mut self, changes: NoteUpdate) -> Result<(), ParseNoteError> {
        if let Some(title) = &changes.title {
            if title.trim().is_empty() {
                return Err(ParseNoteError::EmptyTitle);
            }
        }

        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        if let Some(priority) = changes.priority {
            self.priority = priority;
        }
        if let Some(tags) = changes.tags {
            self.tags = tags;
        }

        self.touch();
        Ok(())
    }

    /// Sets the status and refreshes `updated_at`.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now_after(self.updated_at);
    }

    /// Converts the note into its flat key/value form.
    ///
    /// Enum fields are emitted as their lowercase string values, timestamps as
    /// RFC 3339 strings.
    pub fn to_structured(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("id".into(), Value::from(self.id.get()));
        map.insert("title".into(), Value::from(self.title.as_str()));
        map.insert("content".into(), Value::from(self.content.as_str()));
        map.insert("category".into(), Value::from(self.category.to_string()));
        map.insert("priority".into(), Value::from(self.priority.to_string()));
        map.insert(
            "tags".into(),
            Value::Array(self.tags.iter().map(|t| Value::from(t.as_str())).collect()),
        );
        map.insert("status".into(), Value::from(self.status.to_string()));
        map.insert("created_at".into(), Value::from(self.created_at.to_string()));
        map.insert("updated_at".into(), Value::from(self.updated_at.to_string()));
        map
    }

    /// Rebuilds a note from its flat key/value form.
    ///
    /// `tags`, `created_at`, and `updated_at` may be absent or null; missing
    /// tags become empty and missing timestamps become the current time.
    ///
    /// # Errors
    ///
    /// Returns `MalformedRecord` if the value is not an object, a required key
    /// is missing or mistyped, the id is not positive, the title is empty, an
    /// enum value is not an exact member of its set, or a timestamp cannot be
    /// parsed.
    pub fn from_structured(data: &Value) -> Result<Self, MalformedRecord> {
        #[derive(Deserialize)]
        struct NoteRecord {
            id: NoteId,
            title: String,
            content: String,
            category: Category,
            priority: Priority,
            status: Status,
            #[serde(default)]
            tags: Option<Vec<String>>,
            #[serde(default)]
            created_at: Option<Timestamp>,
            #[serde(default)]
            updated_at: Option<Timestamp>,
        }

        if !data.is_object() {
            return Err(MalformedRecord::new("expected an object"));
        }

        let record = NoteRecord::deserialize(data).map_err(MalformedRecord::new)?;
        let now = Timestamp::now();

        Note::builder(record.id, record.title, record.content)
            .category(record.category)
            .priority(record.priority)
            .status(record.status)
            .tags(record.tags.unwrap_or_default())
            .timestamps(
                record.created_at.unwrap_or(now),
                record.updated_at.unwrap_or(now),
            )
            .build()
            .map_err(MalformedRecord::new)
    }
}

impl Serialize for Note {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_structured().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Note {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Note::from_structured(&value).map_err(serde::de::Error::custom)
    }
}

/// Builder for constructing a Note with optional fields.
pub struct NoteBuilder {
    id: NoteId,
    title: String,
    content: String,
    category: Category,
    priority: Priority,
    tags: Vec<String>,
    status: Status,
    timestamps: Option<(Timestamp, Timestamp)>,
}

impl NoteBuilder {
    fn new(id: NoteId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            category: Category::default(),
            priority: Priority::default(),
            tags: Vec::new(),
            status: Status::default(),
            timestamps: None,
        }
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the note's tags as given; no normalization or de-duplication.
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Sets explicit creation and modification times.
    ///
    /// Without this call both are set to the time of `build`.
    pub fn timestamps(mut self, created_at: Timestamp, updated_at: Timestamp) -> Self {
        self.timestamps = Some((created_at, updated_at));
        self
    }

    /// Builds the Note.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError::EmptyTitle` if the title is empty or
    /// whitespace-only.
    pub fn build(self) -> Result<Note, ParseNoteError> {
        if self.title.trim().is_empty() {
            return Err(ParseNoteError::EmptyTitle);
        }

        let (created_at, updated_at) = self.timestamps.unwrap_or_else(|| {
            let now = Timestamp::now();
            (now, now)
        });

        Ok(Note {
            id: self.id,
            title: self.title,
            content: self.content,
            category: self.category,
            priority: self.priority,
            tags: self.tags,
            status: self.status,
            created_at,
            updated_at,
        })
    }
}

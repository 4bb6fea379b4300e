//! Core types: Note, NoteId, Timestamp, and the closed-set note fields

mod fields;
mod note;
mod note_id;
mod render;
mod timestamp;

pub use fields::{Category, NoteField, ParseFieldError, Priority, Status};
pub use note::{MalformedRecord, Note, NoteBuilder, NoteUpdate, ParseNoteError};
pub use note_id::{NoteId, ParseNoteIdError};
pub use render::PREVIEW_CHARS;
pub use timestamp::{ParseTimestampError, Timestamp};

//! Note file persistence

mod store;

pub use store::{DEFAULT_NOTES_FILE, LoadPolicy, NoteStore, StoreError};

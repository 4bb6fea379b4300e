//! Positive integer note identifier with parsing and serde support.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

/// A unique, positive identifier for a note.
///
/// Ids are assigned by the store as one greater than the largest id already
/// persisted, so they grow monotonically with insertion history. They are
/// never reused while a note holding them still exists.
///
/// # Examples
///
/// ```
/// use notebook::domain::NoteId;
///
/// let id: NoteId = "#7".parse().unwrap();
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.next().map(NoteId::get), Some(8));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteId(NonZeroU64);

impl NoteId {
    /// The id given to the first note of an empty collection.
    pub const FIRST: NoteId = NoteId(NonZeroU64::MIN);

    /// Creates a NoteId from a raw integer.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteIdError` if `value` is zero.
    pub fn new(value: u64) -> Result<Self, ParseNoteIdError> {
        NonZeroU64::new(value)
            .map(Self)
            .ok_or_else(|| ParseNoteIdError {
                value: value.to_string(),
                reason: "ids start at 1".to_string(),
            })
    }

    /// Returns the raw integer value.
    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// Returns the id that follows this one, or `None` past `u64::MAX`.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId({})", self.0)
    }
}

/// Error returned when parsing an invalid note id.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
    reason: String,
}

impl ParseNoteIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    /// Parses a decimal id, with or without a leading `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let value: u64 = digits.parse().map_err(|e: std::num::ParseIntError| ParseNoteIdError {
            value: s.to_string(),
            reason: e.to_string(),
        })?;
        Self::new(value).map_err(|mut err| {
            err.value = s.to_string();
            err
        })
    }
}

impl Serialize for NoteId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.get())
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u64::deserialize(deserializer)?;
        NoteId::new(value).map_err(serde::de::Error::custom)
    }
}

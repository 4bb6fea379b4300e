//! JSON-file note collection with whole-file atomic writes.

use crate::domain::{MalformedRecord, Note, NoteId};
use log::{debug, warn};
use serde_json::Value;
use std::collections::BTreeSet;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// File name used when no notes file is configured.
pub const DEFAULT_NOTES_FILE: &str = "notes.json";

/// Errors during note store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse notes file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("record {index} in {path} is invalid: {source}")]
    Malformed {
        path: PathBuf,
        index: usize,
        #[source]
        source: MalformedRecord,
    },

    #[error("no note id left after {max} in {path}")]
    IdsExhausted { path: PathBuf, max: NoteId },

    #[error("failed to serialize notes for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => StoreError::PermissionDenied { path: path.into() },
            _ => StoreError::Io {
                path: path.into(),
                source: error,
            },
        }
    }

    /// Returns true for errors caused by unreadable file contents rather
    /// than by the filesystem.
    pub fn is_corruption(&self) -> bool {
        matches!(self, StoreError::Parse { .. } | StoreError::Malformed { .. })
    }
}

/// What `load_all` does with a file it cannot decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Treat the whole collection as empty and log a warning.
    #[default]
    Lenient,
    /// Return the decoding error to the caller.
    Strict,
}

/// Persistent collection of notes stored as one JSON array.
///
/// Every operation reads or writes the whole file; there is no caching and
/// no locking. Two processes interleaving load/save cycles can lose updates.
#[derive(Debug, Clone)]
pub struct NoteStore {
    path: PathBuf,
    policy: LoadPolicy,
}

impl NoteStore {
    /// Creates a store bound to `path` with the lenient load policy.
    ///
    /// Nothing touches the filesystem until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            policy: LoadPolicy::default(),
        }
    }

    /// Sets the policy applied when the file cannot be decoded.
    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    /// Loads every note in file order.
    ///
    /// A missing file is created holding an empty array. Under
    /// [`LoadPolicy::Lenient`] a file that is not a JSON array, or that holds
    /// any invalid record, yields an empty collection; the file itself is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns I/O errors in all policies, and `Parse`/`Malformed` errors
    /// under [`LoadPolicy::Strict`].
    pub fn load_all(&self) -> Result<Vec<Note>, StoreError> {
        self.ensure_file_exists()?;

        let bytes = std::fs::read(&self.path).map_err(|e| StoreError::from_io(&self.path, e))?;

        match self.decode(&bytes) {
            Ok(notes) => Ok(notes),
            Err(err) if err.is_corruption() && self.policy == LoadPolicy::Lenient => {
                warn!("{}; treating the collection as empty", err);
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<Note>, StoreError> {
        let records: Vec<Value> = serde_json::from_slice(bytes).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            source: e,
        })?;

        records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                Note::from_structured(record).map_err(|e| StoreError::Malformed {
                    path: self.path.clone(),
                    index,
                    source: e,
                })
            })
            .collect()
    }

    /// Replaces the file contents with exactly `notes`.
    ///
    /// Writes to a temporary file in the same directory and renames it over
    /// the target, so readers see either the old or the new collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AtomicWrite` if the rename fails, or an I/O error
    /// if the temporary file cannot be written.
    pub fn save_all(&self, notes: &[Note]) -> Result<(), StoreError> {
        let records: Vec<Value> = notes
            .iter()
            .map(|n| Value::Object(n.to_structured()))
            .collect();
        let mut content =
            serde_json::to_string_pretty(&records).map_err(|e| StoreError::Serialize {
                path: self.path.clone(),
                source: e,
            })?;
        content.push('\n');

        self.write_atomically(&content)?;
        debug!("saved {} note(s) to {}", notes.len(), self.path.display());
        Ok(())
    }

    /// Returns one more than the largest stored id, or 1 for an empty store.
    ///
    /// The id is not reserved; calling this twice without a save in between
    /// returns the same value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IdsExhausted` if the largest stored id is
    /// `u64::MAX`.
    pub fn next_id(&self) -> Result<NoteId, StoreError> {
        let notes = self.load_all()?;
        match notes.iter().map(Note::id).max() {
            None => Ok(NoteId::FIRST),
            Some(max) => max.next().ok_or_else(|| StoreError::IdsExhausted {
                path: self.path.clone(),
                max,
            }),
        }
    }

    /// Returns every distinct tag across the collection, sorted.
    pub fn all_tags(&self) -> Result<Vec<String>, StoreError> {
        let notes = self.load_all()?;
        let tags: BTreeSet<&str> = notes
            .iter()
            .flat_map(|n| n.tags().iter().map(String::as_str))
            .collect();
        Ok(tags.into_iter().map(str::to_string).collect())
    }

    fn ensure_file_exists(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }
        debug!("creating empty notes file at {}", self.path.display());
        self.write_atomically("[]")
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn write_atomically(&self, content: &str) -> Result<(), StoreError> {
        let parent = self.parent_dir();
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::from_io(parent, e))?;
        }

        let mut temp =
            NamedTempFile::new_in(parent).map_err(|e| StoreError::from_io(&self.path, e))?;

        temp.write_all(content.as_bytes())
            .map_err(|e| StoreError::from_io(&self.path, e))?;

        temp.persist(&self.path)
            .map_err(|e| StoreError::AtomicWrite {
                path: self.path.clone(),
                source: e.error,
            })?;

        Ok(())
    }
}

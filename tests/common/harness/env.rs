//! Isolated test environment with a temporary notes file.

#![allow(dead_code)]

use super::{NotebookCommand, TestNote};
use notebook::domain::Note;
use notebook::infra::NoteStore;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a notes file in a temporary directory.
///
/// The directory is cleaned up on drop. The notes file itself is not
/// created until a note is added or a command touches it.
pub struct TestEnv {
    _temp_dir: TempDir,
    notes_file: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let notes_file = temp_dir.path().join("notes.json");
        Self {
            _temp_dir: temp_dir,
            notes_file,
        }
    }

    /// Returns the path to the notes file.
    pub fn notes_file(&self) -> &Path {
        &self.notes_file
    }

    /// Returns a store over this environment's notes file.
    pub fn store(&self) -> NoteStore {
        NoteStore::new(&self.notes_file)
    }

    /// Appends test notes to the notes file.
    pub fn add_notes(&self, notes: &[TestNote]) {
        let mut stored = self.notes();
        stored.extend(notes.iter().map(TestNote::to_note));
        self.store()
            .save_all(&stored)
            .expect("Failed to write test notes");
    }

    /// Reads all notes currently in the notes file.
    pub fn notes(&self) -> Vec<Note> {
        self.store().load_all().expect("Failed to read notes file")
    }

    /// Overwrites the notes file with raw text.
    pub fn write_raw(&self, content: &str) {
        std::fs::write(&self.notes_file, content).expect("Failed to write notes file");
    }

    /// Returns the notes file's raw text.
    pub fn read_raw(&self) -> String {
        std::fs::read_to_string(&self.notes_file).expect("Failed to read notes file")
    }

    /// Creates a NotebookCommand configured for this test environment.
    pub fn cmd(&self) -> NotebookCommand {
        NotebookCommand::new().file(&self.notes_file)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_cleanup_on_drop() {
        let dir = {
            let env = TestEnv::new();
            env.notes_file().parent().unwrap().to_path_buf()
        };
        assert!(!dir.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_add_notes_persists() {
        let env = TestEnv::new();
        env.add_notes(&[TestNote::new(1, "First"), TestNote::new(2, "Second")]);

        let notes = env.notes();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[1].title(), "Second");
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--file");
        assert_eq!(args[1], env.notes_file().to_string_lossy());
    }
}

//! Fluent wrapper around assert_cmd::Command.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `notebook` binary.
pub struct NotebookCommand {
    args: Vec<String>,
}

impl NotebookCommand {
    /// Creates a new command for the `notebook` binary.
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Sets the `--file` option to point at a notes file.
    pub fn file(mut self, path: &Path) -> Self {
        self.args.push("--file".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    ///
    /// The config directory is redirected so a user's own config file
    /// never leaks into a test run.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("notebook").expect("Failed to find notebook binary");
        cmd.env("XDG_CONFIG_HOME", std::env::temp_dir().join("notebook-tests-no-config"))
            .env_remove("RUST_LOG")
            .args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `add` command.
    pub fn add(self, title: &str, content: &str) -> Self {
        self.args(["add", title, content])
    }

    /// Configures for the `ls` command.
    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    /// Configures for the `search` command with a term.
    pub fn search(self, term: &str) -> Self {
        self.args(["search", term])
    }

    /// Configures for the `show` command with an ID.
    pub fn show(self, id: &str) -> Self {
        self.args(["show", id])
    }

    /// Configures for the `edit` command with an ID.
    pub fn edit(self, id: &str) -> Self {
        self.args(["edit", id])
    }

    /// Configures for the `rm` command with an ID.
    pub fn rm(self, id: &str) -> Self {
        self.args(["rm", id])
    }

    /// Configures for the `archive` command with an ID.
    pub fn archive(self, id: &str) -> Self {
        self.args(["archive", id])
    }

    /// Configures for the `unarchive` command with an ID.
    pub fn unarchive(self, id: &str) -> Self {
        self.args(["unarchive", id])
    }

    /// Configures for the `tags` command.
    pub fn tags(self) -> Self {
        self.args(["tags"])
    }

    /// Adds `--strict` to the command.
    pub fn strict(self) -> Self {
        self.args(["--strict"])
    }
}

impl Default for NotebookCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_command_runs_binary() {
        NotebookCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.json");
        let cmd = NotebookCommand::new().file(&path);
        let args = cmd.get_args();
        assert_eq!(args[0], "--file");
        assert_eq!(args[1], path.to_string_lossy());
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = NotebookCommand::new().strict().search("milk");
        assert_eq!(cmd.get_args(), ["--strict", "search", "milk"]);
    }
}

//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::infra::{DEFAULT_NOTES_FILE, LoadPolicy};

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default notes file
    pub file: Option<PathBuf>,

    /// Refuse to treat unreadable notes files as empty
    #[serde(default)]
    pub strict: bool,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/notebook/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("notebook")
            .join("config.toml")
    }

    /// Resolve the notes file, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--file` argument
    /// 2. Config file `file` setting
    /// 3. `notes.json` in the current working directory
    pub fn notes_file(&self, cli_file: Option<&PathBuf>) -> PathBuf {
        cli_file
            .cloned()
            .or_else(|| self.file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_NOTES_FILE))
    }

    /// Resolve the load policy; `--strict` on the command line wins.
    pub fn load_policy(&self, cli_strict: bool) -> LoadPolicy {
        if cli_strict || self.strict {
            LoadPolicy::Strict
        } else {
            LoadPolicy::Lenient
        }
    }
}

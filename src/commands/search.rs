//! Search operation.

use std::fmt;
use std::str::FromStr;

use super::{NO_NOTES, NoteCommands, Outcome, render_listing, respond, sort_newest_first};
use crate::domain::{Note, ParseFieldError};
use crate::infra::StoreError;

/// Which note fields a search looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchScope {
    Title,
    Content,
    Tags,
    #[default]
    All,
}

impl SearchScope {
    pub const ALL: [SearchScope; 4] = [
        SearchScope::Title,
        SearchScope::Content,
        SearchScope::Tags,
        SearchScope::All,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SearchScope::Title => "title",
            SearchScope::Content => "content",
            SearchScope::Tags => "tags",
            SearchScope::All => "all",
        }
    }

    fn covers(self, other: SearchScope) -> bool {
        self == SearchScope::All || self == other
    }

    /// Returns true if `needle` (already lowercased) occurs in a field this
    /// scope covers, ignoring case.
    pub fn matches(self, note: &Note, needle: &str) -> bool {
        (self.covers(SearchScope::Title) && note.title().to_lowercase().contains(needle))
            || (self.covers(SearchScope::Content) && note.content().to_lowercase().contains(needle))
            || (self.covers(SearchScope::Tags)
                && note.tags().iter().any(|t| t.to_lowercase().contains(needle)))
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchScope {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|scope| scope.as_str() == lower)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|scope| scope.as_str()).collect();
                ParseFieldError::new("search scope", s, valid.join(", "))
            })
    }
}

impl NoteCommands {
    /// Case-insensitive substring search within `scope`
    /// (`title`, `content`, `tags`, or `all`).
    pub fn search(&self, term: &str, scope: &str) -> Result<String, StoreError> {
        respond("search", self.try_search(term, scope))
    }

    fn try_search(&self, term: &str, scope: &str) -> Outcome {
        let scope: SearchScope = scope.parse()?;
        let notes = self.store.load_all()?;
        if notes.is_empty() {
            return Ok(NO_NOTES.to_string());
        }

        let needle = term.to_lowercase();
        let mut found: Vec<_> = notes
            .into_iter()
            .filter(|n| scope.matches(n, &needle))
            .collect();

        if found.is_empty() {
            return Ok(format!("No notes found for query '{}'", term));
        }

        sort_newest_first(&mut found);

        Ok(render_listing(
            format!("=== Search results: '{}' ({} found) ===", term, found.len()),
            &found,
            false,
        ))
    }
}

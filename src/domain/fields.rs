//! Closed-set note fields: category, priority, and status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A note field restricted to a fixed set of lowercase string values.
///
/// Persisted records must carry the exact lowercase value (serde enforces
/// this). User input goes through [`NoteField::parse_loose`], which matches
/// case-insensitively.
pub trait NoteField: Copy + Sized + 'static {
    /// Field name used in error messages.
    const NAME: &'static str;

    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// The stored string value.
    fn as_str(self) -> &'static str;

    /// Display icon used by the note rendering.
    fn icon(self) -> &'static str;

    /// Comma-separated list of the valid values.
    fn valid_values() -> String {
        Self::ALL
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Case-insensitive reverse lookup from user input.
    ///
    /// # Errors
    ///
    /// Returns `ParseFieldError` naming the field, the input, and the valid
    /// values when nothing matches.
    fn parse_loose(s: &str) -> Result<Self, ParseFieldError> {
        let lower = s.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == lower)
            .ok_or_else(|| ParseFieldError {
                field: Self::NAME,
                value: s.to_string(),
                valid: Self::valid_values(),
            })
    }
}

/// Error returned when user input is not a member of a field's value set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFieldError {
    field: &'static str,
    value: String,
    valid: String,
}

impl ParseFieldError {
    /// Creates an error for an arbitrary closed set (e.g. search scopes).
    pub fn new(field: &'static str, value: impl Into<String>, valid: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            valid: valid.into(),
        }
    }

    /// Returns the name of the field that failed to parse.
    pub fn field(&self) -> &str {
        self.field
    }

    /// Returns the rejected input.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid {} '{}'. Valid values: {}",
            self.field, self.value, self.valid
        )
    }
}

impl std::error::Error for ParseFieldError {}

/// Topic bucket a note belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Personal,
    Study,
    Shopping,
    Ideas,
    #[default]
    Other,
}

impl NoteField for Category {
    const NAME: &'static str = "category";
    const ALL: &'static [Self] = &[
        Category::Work,
        Category::Personal,
        Category::Study,
        Category::Shopping,
        Category::Ideas,
        Category::Other,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Study => "study",
            Category::Shopping => "shopping",
            Category::Ideas => "ideas",
            Category::Other => "other",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Category::Work => "💼",
            Category::Personal => "👤",
            Category::Study => "📚",
            Category::Shopping => "🛒",
            Category::Ideas => "💡",
            Category::Other => "📄",
        }
    }
}

/// How urgent a note is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl NoteField for Priority {
    const NAME: &'static str = "priority";
    const ALL: &'static [Self] = &[Priority::Low, Priority::Medium, Priority::High];

    fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Priority::Low => "⬇",
            Priority::Medium => "●",
            Priority::High => "⬆",
        }
    }
}

/// Lifecycle state of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Archived,
}

impl NoteField for Status {
    const NAME: &'static str = "status";
    const ALL: &'static [Self] = &[Status::Active, Status::Archived];

    fn as_str(self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Archived => "archived",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Status::Active => "📝",
            Status::Archived => "📁",
        }
    }
}

macro_rules! impl_display_from_str {
    ($($ty:ty),*) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseFieldError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse_loose(s)
            }
        }
    )*};
}

impl_display_from_str!(Category, Priority, Status);

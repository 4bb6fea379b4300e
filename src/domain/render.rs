//! Human-readable note rendering with status, priority, and category icons.
//!
//! Rendering is one-way: the output drops information (truncated content,
//! day-precision dates) and must never be parsed back into a [`Note`].

use crate::domain::{Note, NoteField};
use std::fmt;

/// Content longer than this many characters is truncated in listings.
pub const PREVIEW_CHARS: usize = 100;

impl Note {
    /// Returns true if the content does not fit in a listing preview.
    pub fn is_truncated(&self) -> bool {
        self.content().chars().count() > PREVIEW_CHARS
    }

    /// Returns the first [`PREVIEW_CHARS`] characters of the content, with
    /// `...` appended when something was cut.
    pub fn preview(&self) -> String {
        let head: String = self.content().chars().take(PREVIEW_CHARS).collect();
        if self.is_truncated() {
            format!("{}...", head)
        } else {
            head
        }
    }
}

/// Three-line listing form:
///
/// ```text
/// 📝 [⬇] 🛒 #1: Buy milk
///    Created: 15.01.2024 | Tags: errand
///    2% milk, eggs
/// ```
impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} [{}] {} #{}: {}",
            self.status().icon(),
            self.priority().icon(),
            self.category().icon(),
            self.id(),
            self.title()
        )?;

        write!(
            f,
            "   Created: {}",
            self.created_at().local().format("%d.%m.%Y")
        )?;
        if !self.tags().is_empty() {
            write!(f, " | Tags: {}", self.tags().join(", "))?;
        }
        writeln!(f)?;

        write!(f, "   {}", self.preview())
    }
}

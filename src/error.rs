//! Error type for buffer and placement operations
//!
//! Movement clamps and insertion extends the buffer, so the only failures the
//! engine reports are out-of-range deletes and cross-buffer line bindings.

use std::fmt;

use crate::editable::BufferId;

/// Errors raised by [`TextBuffer`](crate::editable::TextBuffer) and
/// [`Placement`](crate::placement::Placement) operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// A line ordinal past the end of the buffer
    LineOutOfRange { line: usize, line_count: usize },
    /// A character offset outside `[0, line_len]`
    CharacterOutOfRange {
        line: usize,
        character: usize,
        line_len: usize,
    },
    /// A line handle that belongs to a different buffer
    IdentityMismatch { expected: BufferId, found: BufferId },
}

impl EditError {
    /// True for either out-of-range variant
    pub fn is_range(&self) -> bool {
        matches!(
            self,
            Self::LineOutOfRange { .. } | Self::CharacterOutOfRange { .. }
        )
    }
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LineOutOfRange { line, line_count } => {
                write!(f, "line {} out of range (buffer has {} lines)", line, line_count)
            }
            Self::CharacterOutOfRange {
                line,
                character,
                line_len,
            } => write!(
                f,
                "character {} out of range on line {} (length {})",
                character, line, line_len
            ),
            Self::IdentityMismatch { expected, found } => write!(
                f,
                "line belongs to buffer {} but placement is bound to buffer {}",
                found, expected
            ),
        }
    }
}

impl std::error::Error for EditError {}

//! Logical (line, character) coordinates.

use serde::{Deserialize, Serialize};

/// A position in the document (line and character, both 0-indexed).
///
/// Ordered by line first, then character. Characters count Unicode scalar
/// values, not bytes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TextIndex {
    pub line: usize,
    pub character: usize,
}

impl TextIndex {
    /// Line 0, character 0
    pub const START: TextIndex = TextIndex::new(0, 0);

    pub const fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }

    /// Offset both components. `None` if either would go negative.
    pub fn offset(self, lines: isize, characters: isize) -> Option<TextIndex> {
        Some(TextIndex {
            line: self.line.checked_add_signed(lines)?,
            character: self.character.checked_add_signed(characters)?,
        })
    }

    pub fn offset_line(self, lines: isize) -> Option<TextIndex> {
        self.offset(lines, 0)
    }

    pub fn offset_character(self, characters: isize) -> Option<TextIndex> {
        self.offset(0, characters)
    }

    /// Same line, different character
    pub const fn with_character(self, character: usize) -> Self {
        Self {
            line: self.line,
            character,
        }
    }
}

impl From<(usize, usize)> for TextIndex {
    fn from((line, character): (usize, usize)) -> Self {
        Self::new(line, character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_ordering() {
        let a = TextIndex::new(0, 5);
        let b = TextIndex::new(1, 0);
        let c = TextIndex::new(1, 3);

        assert!(a < b);
        assert!(b < c);
        assert!(a < c);
        assert_eq!(a.min(b), a);
        assert_eq!(c.max(b), c);
    }

    #[test]
    fn test_offset_is_pure() {
        let idx = TextIndex::new(2, 4);
        assert_eq!(idx.offset(1, -2), Some(TextIndex::new(3, 2)));
        assert_eq!(idx.offset_line(-2), Some(TextIndex::new(0, 4)));
        assert_eq!(idx, TextIndex::new(2, 4));
    }

    #[test]
    fn test_offset_below_zero() {
        assert_eq!(TextIndex::START.offset_character(-1), None);
        assert_eq!(TextIndex::new(0, 3).offset_line(-1), None);
    }
}

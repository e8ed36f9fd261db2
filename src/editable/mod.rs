//! Text model for the editing engine.
//!
//! This module provides the logical side of editing, independent of any
//! rendering surface:
//!
//! - [`TextIndex`]: ordered (line, character) coordinate
//! - [`TextBuffer`] / [`Line`]: never-empty sequence of lines with stable [`LineId`]s
//! - [`Cursor`]: caret + anchor state machine with movement and edit operations
//! - [`SelectionSpan`]: per-line geometry of a selection
//!
//! # Example
//!
//! ```
//! use tedit::editable::{Cursor, TextBuffer, TextIndex};
//!
//! let mut buffer = TextBuffer::from_text("hello");
//! let mut cursor = Cursor::collapsed(TextIndex::new(0, 5));
//! cursor.insert_text(&mut buffer, " world");
//!
//! assert_eq!(buffer.full_text(), "hello world");
//! assert_eq!(cursor.caret, TextIndex::new(0, 11));
//! ```

mod buffer;
mod cursor;
mod index;
mod selection;

pub use buffer::{
    normalize_newlines, BufferId, Line, LineHandle, LineId, TextBuffer, LINE_SEPARATOR,
};
pub use cursor::{Cursor, Direction};
pub use index::TextIndex;
pub use selection::{selection_spans, SelectionSpan, SpanKind};

//! Line-oriented text buffer.
//!
//! The buffer is an ordered sequence of [`Line`]s that is never empty: an
//! empty document is a single empty line. Each line carries a stable
//! [`LineId`] so that cursors and placements can refer to a line without
//! holding a reference into the buffer. A line's ordinal position is kept in
//! an index that is refreshed on every structural mutation.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::ops::Range;
use std::sync::atomic::{AtomicU64, Ordering};

use super::index::TextIndex;
use crate::error::EditError;

/// The single line separator used inside the buffer
pub const LINE_SEPARATOR: char = '\n';

static NEXT_BUFFER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a [`TextBuffer`], unique for the lifetime of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId(u64);

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Stable identity of a line within its buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(u64);

/// A line identity qualified by the buffer that owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineHandle {
    pub buffer: BufferId,
    pub line: LineId,
}

/// Normalize `\r\n` and lone `\r` to [`LINE_SEPARATOR`]
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// One line of text (without its separator)
#[derive(Debug, Clone)]
pub struct Line {
    id: LineId,
    text: String,
    /// Length in characters
    len: usize,
}

impl Line {
    fn new(id: LineId, text: String) -> Self {
        let len = char_count(&text);
        Self { id, text, len }
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Character at a character offset
    pub fn char_at(&self, character: usize) -> Option<char> {
        if self.len == self.text.len() {
            return self.text.as_bytes().get(character).map(|&b| b as char);
        }
        self.text.chars().nth(character)
    }

    /// Text before `character` (clamped to the line)
    pub fn prefix(&self, character: usize) -> &str {
        &self.text[..self.byte_offset(character)]
    }

    /// Text from `character` to the end (clamped to the line)
    pub fn suffix(&self, character: usize) -> &str {
        &self.text[self.byte_offset(character)..]
    }

    /// Text in the character range `[start, end)` (clamped to the line)
    pub fn slice(&self, start: usize, end: usize) -> &str {
        let start_byte = self.byte_offset(start);
        let end_byte = self.byte_offset(end.max(start));
        &self.text[start_byte..end_byte]
    }

    /// Convert a character offset to a byte offset, clamping to the line end
    fn byte_offset(&self, character: usize) -> usize {
        if character >= self.len {
            return self.text.len();
        }
        if self.len == self.text.len() {
            return character;
        }
        self.text
            .char_indices()
            .nth(character)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn insert_str(&mut self, character: usize, text: &str) {
        let byte = self.byte_offset(character);
        self.text.insert_str(byte, text);
        self.len += char_count(text);
    }

    fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
        self.len += char_count(text);
    }

    /// Cut the line at `character`, returning the removed tail
    fn split_off(&mut self, character: usize) -> String {
        let byte = self.byte_offset(character);
        let tail = self.text.split_off(byte);
        self.len -= char_count(&tail);
        tail
    }

    fn remove_range(&mut self, start: usize, end: usize) {
        let start_byte = self.byte_offset(start);
        let end_byte = self.byte_offset(end);
        self.text.replace_range(start_byte..end_byte, "");
        self.len = char_count(&self.text);
    }
}

/// Ordered, never-empty sequence of lines
#[derive(Debug)]
pub struct TextBuffer {
    id: BufferId,
    lines: Vec<Line>,
    /// Ordinal of every live line, kept current on structural mutation
    ordinals: HashMap<LineId, usize>,
    next_line: u64,
}

impl TextBuffer {
    /// Create a buffer holding one empty line
    pub fn new() -> Self {
        let mut buffer = Self {
            id: BufferId(NEXT_BUFFER_ID.fetch_add(1, Ordering::Relaxed)),
            lines: Vec::new(),
            ordinals: HashMap::new(),
            next_line: 0,
        };
        let line = buffer.alloc_line(String::new());
        buffer.lines.push(line);
        buffer.reindex_from(0);
        buffer
    }

    /// Create a buffer from a string slice
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.set_full_text(text);
        buffer
    }

    pub fn id(&self) -> BufferId {
        self.id
    }

    /// Number of lines (always >= 1)
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, line: usize) -> Option<&Line> {
        self.lines.get(line)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Length of a line in characters, 0 if the line does not exist
    pub fn line_len(&self, line: usize) -> usize {
        self.lines.get(line).map(Line::len).unwrap_or(0)
    }

    /// Handle for the line at an ordinal
    pub fn handle(&self, line: usize) -> Option<LineHandle> {
        self.lines.get(line).map(|l| LineHandle {
            buffer: self.id,
            line: l.id,
        })
    }

    /// Ordinal position of a line, `None` once the line has been removed
    pub fn ordinal(&self, line: LineId) -> Option<usize> {
        self.ordinals.get(&line).copied()
    }

    /// Line by identity
    pub fn line_by_id(&self, line: LineId) -> Option<&Line> {
        self.ordinal(line).and_then(|n| self.lines.get(n))
    }

    /// True if the handle names a live line of this buffer
    pub fn contains(&self, handle: LineHandle) -> bool {
        handle.buffer == self.id && self.ordinals.contains_key(&handle.line)
    }

    /// Index just past the last character of the document
    pub fn end(&self) -> TextIndex {
        let last = self.lines.len() - 1;
        TextIndex::new(last, self.lines[last].len())
    }

    /// Clamp an index to an existing line and a character within it
    pub fn clamp(&self, index: TextIndex) -> TextIndex {
        let line = index.line.min(self.lines.len() - 1);
        TextIndex::new(line, index.character.min(self.lines[line].len()))
    }

    /// Get the line at `line`, extending the buffer with empty lines up to and
    /// including it when it does not exist yet.
    pub fn resolve_line(&mut self, line: usize) -> &Line {
        self.resolve_line_mut(line)
    }

    fn resolve_line_mut(&mut self, line: usize) -> &mut Line {
        if line >= self.lines.len() {
            let old_len = self.lines.len();
            tracing::debug!(from = old_len, to = line + 1, "extending buffer");
            let blanks: Vec<Line> = (old_len..=line)
                .map(|_| self.alloc_line(String::new()))
                .collect();
            self.lines.extend(blanks);
            self.reindex_from(old_len);
        }
        &mut self.lines[line]
    }

    /// Insert text at `pos` and return the index just past the inserted text.
    ///
    /// Platform newlines are normalized first. A character offset past the
    /// end of its line is clamped to the line end; a line past the end of the
    /// buffer is created.
    pub fn insert(&mut self, pos: TextIndex, text: &str) -> TextIndex {
        let text = normalize_newlines(text);
        if text.len() == 1 && text.starts_with(LINE_SEPARATOR) {
            return self.split_line(pos);
        }

        if !text.contains(LINE_SEPARATOR) {
            let line = self.resolve_line_mut(pos.line);
            let character = pos.character.min(line.len());
            line.insert_str(character, &text);
            return TextIndex::new(pos.line, character + char_count(&text));
        }

        let segments: Vec<&str> = text.split(LINE_SEPARATOR).collect();
        let first = segments[0];
        let last = segments[segments.len() - 1];
        let middle = &segments[1..segments.len() - 1];

        let remainder = {
            let line = self.resolve_line_mut(pos.line);
            let character = pos.character.min(line.len());
            let remainder = line.split_off(character);
            line.push_str(first);
            remainder
        };

        let mut new_lines: Vec<Line> = middle
            .iter()
            .map(|segment| self.alloc_line((*segment).to_string()))
            .collect();
        let mut tail = String::with_capacity(last.len() + remainder.len());
        tail.push_str(last);
        tail.push_str(&remainder);
        new_lines.push(self.alloc_line(tail));

        let inserted = new_lines.len();
        self.insert_lines(pos.line + 1, new_lines);
        tracing::trace!(line = pos.line, inserted, "multi-line insert");
        TextIndex::new(pos.line + inserted, char_count(last))
    }

    /// Split the line at `pos`; returns the start of the new second line
    pub fn split_line(&mut self, pos: TextIndex) -> TextIndex {
        let tail = {
            let line = self.resolve_line_mut(pos.line);
            let character = pos.character.min(line.len());
            line.split_off(character)
        };
        let new_line = self.alloc_line(tail);
        self.insert_lines(pos.line + 1, vec![new_line]);
        TextIndex::new(pos.line + 1, 0)
    }

    /// Delete the text between two indices (in either order).
    ///
    /// Unlike [`insert`](Self::insert), nothing is clamped or extended: an
    /// index outside the buffer is rejected.
    pub fn delete(&mut self, a: TextIndex, b: TextIndex) -> Result<(), EditError> {
        let start = a.min(b);
        let end = a.max(b);
        self.check_index(start)?;
        self.check_index(end)?;

        if start.line == end.line {
            self.lines[start.line].remove_range(start.character, end.character);
            return Ok(());
        }

        let suffix = self.lines[end.line].suffix(end.character).to_string();
        let first = &mut self.lines[start.line];
        first.split_off(start.character);
        first.push_str(&suffix);
        self.remove_lines(start.line + 1..end.line + 1);
        tracing::trace!(from = start.line, to = end.line, "multi-line delete");
        Ok(())
    }

    /// Text between two indices (in either order), joined with the line
    /// separator. Indices are clamped to the buffer.
    pub fn get_text(&self, a: TextIndex, b: TextIndex) -> String {
        let start = self.clamp(a.min(b));
        let end = self.clamp(a.max(b));

        if start.line == end.line {
            return self.lines[start.line]
                .slice(start.character, end.character)
                .to_string();
        }

        let mut parts: Vec<&str> = Vec::with_capacity(end.line - start.line + 1);
        parts.push(self.lines[start.line].suffix(start.character));
        parts.extend(
            self.lines[start.line + 1..end.line]
                .iter()
                .map(Line::text),
        );
        parts.push(self.lines[end.line].prefix(end.character));
        parts.join("\n")
    }

    /// Whole document joined with the line separator
    pub fn full_text(&self) -> String {
        self.lines
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Replace the whole document. Every previous line handle becomes stale.
    pub fn set_full_text(&mut self, text: &str) {
        let text = normalize_newlines(text);
        let lines: Vec<Line> = text
            .split(LINE_SEPARATOR)
            .map(|segment| self.alloc_line(segment.to_string()))
            .collect();
        self.lines = lines;
        self.ordinals.clear();
        self.reindex_from(0);
        tracing::debug!(lines = self.lines.len(), "buffer reset");
    }

    fn check_index(&self, index: TextIndex) -> Result<(), EditError> {
        let line = self
            .lines
            .get(index.line)
            .ok_or(EditError::LineOutOfRange {
                line: index.line,
                line_count: self.lines.len(),
            })?;
        if index.character > line.len() {
            return Err(EditError::CharacterOutOfRange {
                line: index.line,
                character: index.character,
                line_len: line.len(),
            });
        }
        Ok(())
    }

    fn alloc_line(&mut self, text: String) -> Line {
        let id = LineId(self.next_line);
        self.next_line += 1;
        Line::new(id, text)
    }

    fn insert_lines(&mut self, at: usize, lines: Vec<Line>) {
        self.lines.splice(at..at, lines);
        self.reindex_from(at);
    }

    fn remove_lines(&mut self, range: Range<usize>) {
        let start = range.start;
        for line in self.lines.drain(range) {
            self.ordinals.remove(&line.id);
        }
        self.reindex_from(start);
    }

    fn reindex_from(&mut self, start: usize) {
        for (n, line) in self.lines.iter().enumerate().skip(start) {
            self.ordinals.insert(line.id, n);
        }
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

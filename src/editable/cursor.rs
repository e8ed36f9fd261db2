//! Caret and selection-anchor state machine.
//!
//! The cursor holds two logical indices and never a reference into the
//! buffer; every operation borrows the buffer it works on.

use super::buffer::TextBuffer;
use super::index::TextIndex;
use super::selection::{selection_spans, SelectionSpan};
use crate::error::EditError;
use crate::util::{char_class, CharClass};

/// Direction for word skipping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

/// Caret plus selection anchor. No selection when `caret == anchor`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Where edits happen (moving point)
    pub caret: TextIndex,
    /// Fixed end of an in-progress selection
    pub anchor: TextIndex,
}

impl Cursor {
    pub const fn new(caret: TextIndex, anchor: TextIndex) -> Self {
        Self { caret, anchor }
    }

    /// Cursor with no selection
    pub const fn collapsed(at: TextIndex) -> Self {
        Self {
            caret: at,
            anchor: at,
        }
    }

    pub fn has_selection(&self) -> bool {
        self.caret != self.anchor
    }

    /// Start of the selection (minimum of caret and anchor)
    pub fn start(&self) -> TextIndex {
        self.caret.min(self.anchor)
    }

    /// End of the selection (maximum of caret and anchor)
    pub fn end(&self) -> TextIndex {
        self.caret.max(self.anchor)
    }

    /// Check if the caret sits before the anchor
    pub fn is_reversed(&self) -> bool {
        self.caret < self.anchor
    }

    fn collapse_to(&mut self, at: TextIndex) {
        self.caret = at;
        self.anchor = at;
    }

    /// Keep the anchor when extending, otherwise collapse onto the caret
    fn settle(&mut self, extend_selection: bool) {
        if !extend_selection {
            self.anchor = self.caret;
        }
    }

    /// Move the caret to an index, clamped to the buffer
    pub fn move_to(&mut self, buffer: &TextBuffer, index: TextIndex, extend_selection: bool) {
        self.caret = buffer.clamp(index);
        self.settle(extend_selection);
    }

    /// Move the caret by `delta` characters, wrapping onto adjacent lines.
    ///
    /// Moving before the start of a line lands at the end of the previous
    /// line; moving past the end lands at the start of the next. At the very
    /// start the caret clamps to `(0, 0)`; at the very end this is a no-op.
    pub fn move_char(&mut self, buffer: &TextBuffer, delta: isize, extend_selection: bool) {
        let caret = buffer.clamp(self.caret);
        let target = caret.character as isize + delta;

        let next = if target < 0 {
            match caret.line.checked_sub(1) {
                Some(prev) => TextIndex::new(prev, buffer.line_len(prev)),
                None => TextIndex::START,
            }
        } else if target as usize > buffer.line_len(caret.line) {
            if caret.line + 1 >= buffer.line_count() {
                return;
            }
            TextIndex::new(caret.line + 1, 0)
        } else {
            caret.with_character(target as usize)
        };

        self.caret = next;
        self.settle(extend_selection);
    }

    /// Move the caret by `delta` lines. The character is clamped to the
    /// target line; the column is not remembered across moves. Moving outside
    /// the buffer is a no-op.
    pub fn move_line(&mut self, buffer: &TextBuffer, delta: isize, extend_selection: bool) {
        let Some(line) = self.caret.line.checked_add_signed(delta) else {
            return;
        };
        if line >= buffer.line_count() {
            return;
        }

        self.caret = TextIndex::new(line, self.caret.character.min(buffer.line_len(line)));
        self.settle(extend_selection);
    }

    /// Move the caret to the start of its line
    pub fn move_line_start(&mut self, buffer: &TextBuffer, extend_selection: bool) {
        let caret = buffer.clamp(self.caret);
        self.caret = caret.with_character(0);
        self.settle(extend_selection);
    }

    /// Move the caret to the end of its line
    pub fn move_line_end(&mut self, buffer: &TextBuffer, extend_selection: bool) {
        let caret = buffer.clamp(self.caret);
        self.caret = caret.with_character(buffer.line_len(caret.line));
        self.settle(extend_selection);
    }

    /// Skip to the next word boundary in `direction`.
    ///
    /// The scan passes over leading stop characters, then over a word, and
    /// lands between that word and the first stop after it. Without such a
    /// boundary the caret lands at the line start or end; already being there
    /// degrades to a single character move.
    pub fn skip_word(&mut self, buffer: &TextBuffer, direction: Direction, extend_selection: bool) {
        let caret = buffer.clamp(self.caret);
        let Some(line) = buffer.line(caret.line) else {
            return;
        };
        let len = line.len();

        let landing = match direction {
            Direction::Left => {
                if caret.character == 0 {
                    self.move_char(buffer, -1, extend_selection);
                    return;
                }
                let mut seen_word = false;
                let mut landing = 0;
                for k in (0..caret.character).rev() {
                    let class = line.char_at(k).map(char_class);
                    if class == Some(CharClass::Stop) {
                        if seen_word {
                            landing = k + 1;
                            break;
                        }
                    } else {
                        seen_word = true;
                    }
                }
                landing
            }
            Direction::Right => {
                if caret.character >= len {
                    self.move_char(buffer, 1, extend_selection);
                    return;
                }
                let mut seen_word = false;
                let mut landing = len;
                for k in caret.character..len {
                    let class = line.char_at(k).map(char_class);
                    if class == Some(CharClass::Stop) {
                        if seen_word {
                            landing = k;
                            break;
                        }
                    } else {
                        seen_word = true;
                    }
                }
                landing
            }
        };

        self.caret = caret.with_character(landing);
        self.settle(extend_selection);
    }

    /// Select the whole document: anchor at the start, caret at the end
    pub fn select_all(&mut self, buffer: &TextBuffer) {
        self.anchor = TextIndex::START;
        self.caret = buffer.end();
    }

    /// Insert text at the caret and collapse onto the end of the insertion.
    /// An active selection is not replaced.
    pub fn insert_text(&mut self, buffer: &mut TextBuffer, text: &str) -> TextIndex {
        let end = buffer.insert(self.caret, text);
        self.collapse_to(end);
        end
    }

    /// Delete the selection, or the character before the caret. At the start
    /// of a line the line is joined onto the previous one.
    pub fn backspace(&mut self, buffer: &mut TextBuffer) -> Result<(), EditError> {
        if self.has_selection() {
            return self.delete_selection(buffer);
        }

        let caret = buffer.clamp(self.caret);
        if caret.character == 0 {
            let Some(prev) = caret.line.checked_sub(1) else {
                return Ok(());
            };
            let join = TextIndex::new(prev, buffer.line_len(prev));
            buffer.delete(join, caret)?;
            self.collapse_to(join);
            return Ok(());
        }

        let before = caret.with_character(caret.character - 1);
        buffer.delete(before, caret)?;
        self.collapse_to(before);
        Ok(())
    }

    /// Delete the text between caret and anchor and collapse onto its start
    pub fn delete_selection(&mut self, buffer: &mut TextBuffer) -> Result<(), EditError> {
        let start = self.start();
        buffer.delete(self.caret, self.anchor)?;
        self.collapse_to(start);
        Ok(())
    }

    /// Text between caret and anchor
    pub fn selected_text(&self, buffer: &TextBuffer) -> String {
        buffer.get_text(self.caret, self.anchor)
    }

    /// Per-line spans covered by the selection
    pub fn selection_spans(&self, buffer: &TextBuffer) -> Vec<SelectionSpan> {
        selection_spans(buffer, self.caret, self.anchor)
    }
}

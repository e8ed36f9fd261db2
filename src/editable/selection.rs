//! Selection geometry: the per-line spans covered by a selection.

use super::buffer::TextBuffer;
use super::index::TextIndex;

/// Which part of a selection a span represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Selection starts and ends on this line
    Single,
    /// First line of a multi-line selection, to the end of the line
    Leading,
    /// A line strictly inside a multi-line selection, covered fully
    Middle,
    /// Last line of a multi-line selection, from the start of the line
    Trailing,
}

/// A character range `[start, end)` on one line that is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionSpan {
    pub line: usize,
    pub start: usize,
    pub end: usize,
    pub kind: SpanKind,
}

impl SelectionSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if a character on this span's line is covered (end exclusive)
    pub fn contains(&self, character: usize) -> bool {
        character >= self.start && character < self.end
    }
}

/// Spans covered by the selection between `a` and `b`, in document order.
///
/// A collapsed selection yields no spans, a same-line selection one span, and
/// a selection touching `k` lines exactly `k` spans.
pub fn selection_spans(buffer: &TextBuffer, a: TextIndex, b: TextIndex) -> Vec<SelectionSpan> {
    let start = buffer.clamp(a.min(b));
    let end = buffer.clamp(a.max(b));

    if start == end {
        return Vec::new();
    }

    if start.line == end.line {
        return vec![SelectionSpan {
            line: start.line,
            start: start.character,
            end: end.character,
            kind: SpanKind::Single,
        }];
    }

    let mut spans = Vec::with_capacity(end.line - start.line + 1);
    spans.push(SelectionSpan {
        line: start.line,
        start: start.character,
        end: buffer.line_len(start.line),
        kind: SpanKind::Leading,
    });
    for line in start.line + 1..end.line {
        spans.push(SelectionSpan {
            line,
            start: 0,
            end: buffer.line_len(line),
            kind: SpanKind::Middle,
        });
    }
    spans.push(SelectionSpan {
        line: end.line,
        start: 0,
        end: end.character,
        kind: SpanKind::Trailing,
    });
    spans
}

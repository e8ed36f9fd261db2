//! Tab alignment
//!
//! The rendering primitive expands tabs to its own fixed width. To make tabs
//! line up on the configured tab stops instead, every run of text after a tab
//! is translated horizontally by a per-segment shift. Each tab produces one
//! [`TabSegment`] covering the tab itself up to the next tab (or line end).

use std::collections::HashMap;
use std::ops::{Range, RangeInclusive};

use crate::editable::{LineId, TextBuffer};
use crate::measure::TextMeasurer;

/// Horizontal correction for the characters following one tab
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabSegment {
    /// Character offset of the tab
    pub start: usize,
    /// Characters from the tab up to the next tab or the line end
    pub length: usize,
    /// Pixels to translate the shifted range by (usually negative)
    pub shift: f32,
}

impl TabSegment {
    /// Characters the shift applies to: after the tab, up to the next tab
    pub fn shifted_range(&self) -> Range<usize> {
        self.start + 1..self.start + self.length
    }
}

/// Compute the tab segments of one line of text
pub fn tab_segments(text: &str, measurer: &dyn TextMeasurer) -> Vec<TabSegment> {
    let tab_width = measurer.options().tab_size.max(1) as isize;

    // (character offset, byte offset) of every tab
    let tabs: Vec<(usize, usize)> = text
        .char_indices()
        .enumerate()
        .filter(|(_, (_, ch))| *ch == '\t')
        .map(|(n, (byte, _))| (n, byte))
        .collect();
    if tabs.is_empty() {
        return Vec::new();
    }
    let total = text.chars().count();

    let mut segments = Vec::with_capacity(tabs.len());
    for (i, &(t, byte)) in tabs.iter().enumerate() {
        let through_tab = &text[..byte + 1];

        // Undo the native tab width, then apply the desired one
        let mut shift =
            measurer.measure(through_tab, true) - measurer.measure(through_tab, false);

        // Correct the overshoot left by compounding earlier tabs
        let t = t as isize;
        let boundary = (t + tab_width - 1) / tab_width * tab_width;
        let mut e = boundary - t + i as isize;
        if e == 0 {
            e = tab_width;
        }
        let spaces = (tab_width - e.max(0)).max(0) as usize;
        shift -= measurer.measure(&" ".repeat(spaces), false);

        let next = tabs.get(i + 1).map(|&(n, _)| n).unwrap_or(total);
        segments.push(TabSegment {
            start: t as usize,
            length: next - t as usize,
            shift,
        });
    }
    segments
}

/// Tab segments per line, recomputed for the lines an edit touches
#[derive(Debug, Default)]
pub struct TabLayout {
    segments: HashMap<LineId, Vec<TabSegment>>,
}

impl TabLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Segments for a line (empty when the line has no tabs)
    pub fn segments(&self, line: LineId) -> &[TabSegment] {
        self.segments.get(&line).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of lines that currently carry segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Recompute the lines in `lines` (ordinals, clamped to the buffer)
    pub fn refresh_lines(
        &mut self,
        buffer: &TextBuffer,
        lines: RangeInclusive<usize>,
        measurer: &dyn TextMeasurer,
    ) {
        let last = buffer.line_count() - 1;
        let (start, end) = (*lines.start(), (*lines.end()).min(last));
        for line in buffer.lines().iter().take(end + 1).skip(start) {
            let segments = tab_segments(line.text(), measurer);
            if segments.is_empty() {
                self.segments.remove(&line.id());
            } else {
                self.segments.insert(line.id(), segments);
            }
        }
    }

    /// Drop entries for lines that are no longer in the buffer
    pub fn prune(&mut self, buffer: &TextBuffer) {
        self.segments.retain(|id, _| buffer.ordinal(*id).is_some());
    }

    /// Recompute every line
    pub fn rebuild(&mut self, buffer: &TextBuffer, measurer: &dyn TextMeasurer) {
        self.segments.clear();
        self.refresh_lines(buffer, 0..=buffer.line_count() - 1, measurer);
        tracing::trace!(lines = self.segments.len(), "tab layout rebuilt");
    }
}

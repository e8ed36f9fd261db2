//! Editing surface state
//!
//! [`Editor`] owns the buffer, the cursor, the measurer and every visual
//! placement. Editing and movement only touch logical state; the host calls
//! [`Editor::sync_placements`] afterwards to re-anchor the caret and the
//! selection rectangles on its rendering surface.

use anyhow::Result;

use crate::clipboard::Clipboard;
use crate::editable::{Cursor, Direction, SpanKind, TextBuffer, TextIndex};
use crate::error::EditError;
use crate::measure::{character_at_pixel, TextMeasurer};
use crate::placement::{
    Extent, PlaceContext, Placement, RenderSurface, SurfaceObserver, VisualId, VisualKind,
};
use crate::tabs::{TabLayout, TabSegment};

/// Default caret width in pixels
pub const DEFAULT_CARET_WIDTH: f32 = 1.0;

pub struct Editor {
    buffer: TextBuffer,
    cursor: Cursor,
    measurer: Box<dyn TextMeasurer>,
    tabs: TabLayout,
    caret: Placement,
    selection: Vec<Placement>,
    /// `(line, kind)` of each selection placement, in order
    selection_shape: Vec<(usize, SpanKind)>,
    caret_visible: bool,
    next_visual: u64,
}

impl Editor {
    /// Create an editor over an empty document
    pub fn new(measurer: Box<dyn TextMeasurer>) -> Self {
        Self::with_text("", measurer)
    }

    /// Create an editor over `text`
    pub fn with_text(text: &str, measurer: Box<dyn TextMeasurer>) -> Self {
        let buffer = TextBuffer::from_text(text);
        let caret = Placement::new(
            VisualId(1),
            VisualKind::Caret,
            &buffer,
            Extent::Fixed(DEFAULT_CARET_WIDTH),
        );
        let mut tabs = TabLayout::new();
        tabs.rebuild(&buffer, measurer.as_ref());

        Self {
            buffer,
            cursor: Cursor::default(),
            measurer,
            tabs,
            caret,
            selection: Vec::new(),
            selection_shape: Vec::new(),
            caret_visible: true,
            next_visual: 2,
        }
    }

    pub fn with_caret_width(mut self, width: f32) -> Self {
        self.caret.set_extent(Extent::Fixed(width));
        self
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn measurer(&self) -> &dyn TextMeasurer {
        self.measurer.as_ref()
    }

    pub fn tab_layout(&self) -> &TabLayout {
        &self.tabs
    }

    /// Tab segments of the line at `line` (ordinal)
    pub fn tab_segments(&self, line: usize) -> &[TabSegment] {
        match self.buffer.handle(line) {
            Some(handle) => self.tabs.segments(handle.line),
            None => &[],
        }
    }

    pub fn caret_placement(&self) -> &Placement {
        &self.caret
    }

    pub fn selection_placements(&self) -> &[Placement] {
        &self.selection
    }

    pub fn text(&self) -> String {
        self.buffer.full_text()
    }

    // =========================================================================
    // Document
    // =========================================================================

    /// Replace the document and put the caret at the start.
    ///
    /// Every previous line handle is stale afterwards; the surface is expected
    /// to discard its containers and report an items reset.
    pub fn set_text(&mut self, text: &str) {
        self.buffer.set_full_text(text);
        self.cursor = Cursor::default();
        self.tabs.rebuild(&self.buffer, self.measurer.as_ref());
        tracing::debug!(lines = self.buffer.line_count(), "document replaced");
    }

    /// Change the tab width and recompute every line's tab segments
    pub fn set_tab_size(&mut self, tab_size: usize) {
        self.measurer.set_tab_size(tab_size.max(1));
        self.tabs.rebuild(&self.buffer, self.measurer.as_ref());
    }

    // =========================================================================
    // Movement
    // =========================================================================

    pub fn move_char(&mut self, delta: isize, extend_selection: bool) {
        self.cursor.move_char(&self.buffer, delta, extend_selection);
    }

    pub fn move_line(&mut self, delta: isize, extend_selection: bool) {
        self.cursor.move_line(&self.buffer, delta, extend_selection);
    }

    pub fn move_line_start(&mut self, extend_selection: bool) {
        self.cursor.move_line_start(&self.buffer, extend_selection);
    }

    pub fn move_line_end(&mut self, extend_selection: bool) {
        self.cursor.move_line_end(&self.buffer, extend_selection);
    }

    pub fn skip_word(&mut self, direction: Direction, extend_selection: bool) {
        self.cursor.skip_word(&self.buffer, direction, extend_selection);
    }

    pub fn select_all(&mut self) {
        self.cursor.select_all(&self.buffer);
    }

    /// Move the caret to `index` (clamped to the document)
    pub fn set_caret(&mut self, index: TextIndex, extend_selection: bool) {
        self.cursor.move_to(&self.buffer, index, extend_selection);
    }

    /// Place caret and anchor at the character nearest to `x` on `line`
    pub fn click_at(&mut self, line: usize, x: f32) {
        let index = self.hit_test(line, x);
        self.cursor.move_to(&self.buffer, index, false);
    }

    /// Move only the caret to the character nearest to `x` on `line`
    pub fn drag_to(&mut self, line: usize, x: f32) {
        let index = self.hit_test(line, x);
        self.cursor.move_to(&self.buffer, index, true);
    }

    fn hit_test(&self, line: usize, x: f32) -> TextIndex {
        let line = line.min(self.buffer.line_count() - 1);
        let text = self.buffer.line(line).map(|l| l.text()).unwrap_or_default();
        TextIndex::new(line, character_at_pixel(self.measurer.as_ref(), text, x))
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Insert at the caret; returns the index just past the inserted text
    pub fn insert_text(&mut self, text: &str) -> TextIndex {
        let first = self.cursor.caret.line;
        let end = self.cursor.insert_text(&mut self.buffer, text);
        self.refresh_tabs(first, end.line);
        end
    }

    pub fn backspace(&mut self) -> Result<(), EditError> {
        self.cursor.backspace(&mut self.buffer)?;
        let line = self.cursor.caret.line;
        self.refresh_tabs(line, line);
        Ok(())
    }

    pub fn delete_selection(&mut self) -> Result<(), EditError> {
        self.cursor.delete_selection(&mut self.buffer)?;
        let line = self.cursor.caret.line;
        self.refresh_tabs(line, line);
        Ok(())
    }

    fn refresh_tabs(&mut self, first: usize, last: usize) {
        self.tabs.prune(&self.buffer);
        self.tabs
            .refresh_lines(&self.buffer, first..=last, self.measurer.as_ref());
    }

    // =========================================================================
    // Clipboard
    // =========================================================================

    /// Copy the selection. Nothing happens without a selection.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard) -> Result<()> {
        if !self.cursor.has_selection() {
            return Ok(());
        }
        clipboard.set_text(&self.cursor.selected_text(&self.buffer))
    }

    /// Copy the selection, then delete it. Nothing happens without a selection.
    pub fn cut(&mut self, clipboard: &mut dyn Clipboard) -> Result<()> {
        if !self.cursor.has_selection() {
            return Ok(());
        }
        let text = self.cursor.selected_text(&self.buffer);
        clipboard.set_text(&text)?;
        self.delete_selection()?;
        tracing::debug!(chars = text.chars().count(), "cut");
        Ok(())
    }

    /// Insert the clipboard text at the caret
    pub fn paste(&mut self, clipboard: &mut dyn Clipboard) -> Result<()> {
        match clipboard.get_text()? {
            Some(text) if !text.is_empty() => {
                self.insert_text(&text);
            }
            _ => {}
        }
        Ok(())
    }

    // =========================================================================
    // Caret visibility
    // =========================================================================

    pub fn caret_visible(&self) -> bool {
        self.caret_visible
    }

    /// Flip caret visibility (one blink period elapsed)
    pub fn blink(&mut self) {
        self.caret_visible = !self.caret_visible;
    }

    pub fn show_caret(&mut self) {
        self.caret_visible = true;
    }

    // =========================================================================
    // Placement
    // =========================================================================

    /// Re-anchor the caret and selection visuals on `surface`.
    ///
    /// Selection placements are recreated when the selection covers a
    /// different set of lines than before; otherwise they are moved.
    pub fn sync_placements(&mut self, surface: &mut dyn RenderSurface) {
        let ctx = PlaceContext::new(&self.buffer, self.measurer.as_ref());

        if !self.caret.is_placed() {
            self.caret.set_placed(ctx, surface, true);
        }
        let caret = self.buffer.clamp(self.cursor.caret);
        if let Err(e) = self.caret.set_position(ctx, surface, caret) {
            tracing::warn!("caret placement failed: {}", e);
        }
        surface.set_visible(self.caret.visual(), self.caret_visible);

        let spans = self.cursor.selection_spans(&self.buffer);
        let shape: Vec<(usize, SpanKind)> = spans.iter().map(|s| (s.line, s.kind)).collect();

        if shape != self.selection_shape {
            for mut placement in self.selection.drain(..) {
                placement.set_placed(ctx, surface, false);
            }
            for _ in &spans {
                let visual = VisualId(self.next_visual);
                self.next_visual += 1;
                let mut placement = Placement::new(
                    visual,
                    VisualKind::Selection,
                    &self.buffer,
                    Extent::UntilCharacter(0),
                );
                placement.set_placed(ctx, surface, true);
                self.selection.push(placement);
            }
            tracing::trace!(spans = spans.len(), "selection placements recreated");
            self.selection_shape = shape;
        }

        for (placement, span) in self.selection.iter_mut().zip(&spans) {
            placement.set_extent(Extent::UntilCharacter(span.end));
            let start = TextIndex::new(span.line, span.start);
            if let Err(e) = placement.set_position(ctx, surface, start) {
                tracing::warn!("selection placement failed: {}", e);
            }
        }
    }

    /// Detach every visual from the surface
    pub fn unmount(&mut self, surface: &mut dyn RenderSurface) {
        let ctx = PlaceContext::new(&self.buffer, self.measurer.as_ref());
        self.caret.set_placed(ctx, surface, false);
        for mut placement in self.selection.drain(..) {
            placement.set_placed(ctx, surface, false);
        }
        self.selection_shape.clear();
    }
}

impl SurfaceObserver for Editor {
    fn containers_generated(&mut self, surface: &mut dyn RenderSurface) {
        let ctx = PlaceContext::new(&self.buffer, self.measurer.as_ref());
        self.caret.place(ctx, surface);
        for placement in &mut self.selection {
            placement.place(ctx, surface);
        }
    }

    fn items_reset(&mut self, surface: &mut dyn RenderSurface) {
        let ctx = PlaceContext::new(&self.buffer, self.measurer.as_ref());
        self.caret.reset(ctx, surface);
        for placement in &mut self.selection {
            placement.reset(ctx, surface);
        }
        tracing::debug!("placements reset to document start");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::measure::{MeasureOptions, MonospaceMeasurer};
    use crate::placement::HeadlessSurface;

    fn editor(text: &str) -> Editor {
        let measurer = MonospaceMeasurer::with_advance(MeasureOptions::default(), 10.0);
        Editor::with_text(text, Box::new(measurer))
    }

    #[test]
    fn test_click_and_drag_select() {
        let mut ed = editor("hello world");
        ed.click_at(0, 21.0);
        ed.drag_to(0, 49.0);
        assert_eq!(ed.cursor().anchor, TextIndex::new(0, 2));
        assert_eq!(ed.cursor().caret, TextIndex::new(0, 5));
    }

    #[test]
    fn test_click_below_last_line_clamps() {
        let mut ed = editor("ab\ncd");
        ed.click_at(9, 500.0);
        assert_eq!(ed.cursor().caret, TextIndex::new(1, 2));
    }

    #[test]
    fn test_cut_without_selection_is_noop() {
        let mut ed = editor("abc");
        let mut clipboard = MemoryClipboard::with_text("keep");
        ed.cut(&mut clipboard).unwrap();
        assert_eq!(ed.text(), "abc");
        assert_eq!(clipboard.text(), Some("keep"));
    }

    #[test]
    fn test_tab_segments_follow_edits() {
        let mut ed = editor("ab");
        assert!(ed.tab_segments(0).is_empty());
        ed.set_caret(TextIndex::new(0, 1), false);
        ed.insert_text("\t");
        assert_eq!(ed.tab_segments(0).len(), 1);
        ed.backspace().unwrap();
        assert!(ed.tab_segments(0).is_empty());
    }

    #[test]
    fn test_selection_placements_track_shape() {
        let mut ed = editor("abc\ndef\nghi");
        let mut surface = HeadlessSurface::new(10);
        surface.realize(ed.buffer());

        ed.set_caret(TextIndex::new(0, 1), false);
        ed.set_caret(TextIndex::new(2, 1), true);
        ed.sync_placements(&mut surface);
        assert_eq!(ed.selection_placements().len(), 3);
        assert_eq!(surface.attached_count(VisualKind::Selection), 3);

        ed.move_char(1, false);
        ed.sync_placements(&mut surface);
        assert!(ed.selection_placements().is_empty());
        assert_eq!(surface.attached_count(VisualKind::Selection), 0);
    }

    #[test]
    fn test_unmount_detaches_everything() {
        let mut ed = editor("abc\ndef");
        let mut surface = HeadlessSurface::new(10);
        surface.realize(ed.buffer());
        ed.select_all();
        ed.sync_placements(&mut surface);
        assert_eq!(surface.attached_count(VisualKind::Caret), 1);

        ed.unmount(&mut surface);
        assert_eq!(surface.attached_count(VisualKind::Caret), 0);
        assert_eq!(surface.attached_count(VisualKind::Selection), 0);
        assert!(!ed.caret_placement().is_placed());
    }
}

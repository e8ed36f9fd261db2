//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use tedit::clipboard::MemoryClipboard;
use tedit::editable::TextIndex;
use tedit::editor::Editor;
use tedit::measure::{MeasureOptions, MonospaceMeasurer};
use tedit::placement::HeadlessSurface;
use tedit::runtime::Runtime;

/// Advance of every character in test measurements
pub const ADVANCE: f32 = 10.0;

/// Monospace measurer: 10px per character, tab width 4, native tab width 8
pub fn measurer() -> MonospaceMeasurer {
    MonospaceMeasurer::with_advance(MeasureOptions::default(), ADVANCE)
}

/// Create a test editor with given text and caret position
pub fn test_editor(text: &str, line: usize, character: usize) -> Editor {
    let mut editor = Editor::with_text(text, Box::new(measurer()));
    editor.set_caret(TextIndex::new(line, character), false);
    editor
}

/// Create a test editor with a selection (anchor to caret)
pub fn test_editor_with_selection(
    text: &str,
    anchor: (usize, usize),
    caret: (usize, usize),
) -> Editor {
    let mut editor = test_editor(text, anchor.0, anchor.1);
    editor.set_caret(TextIndex::new(caret.0, caret.1), true);
    editor
}

/// Runtime over a headless surface with `rows` materialized lines
pub fn test_runtime(text: &str, rows: usize) -> Runtime {
    test_runtime_with_clipboard(text, rows, MemoryClipboard::new())
}

pub fn test_runtime_with_clipboard(text: &str, rows: usize, clipboard: MemoryClipboard) -> Runtime {
    let editor = Editor::with_text(text, Box::new(measurer()));
    Runtime::new(editor, HeadlessSurface::new(rows), Box::new(clipboard))
}

/// `n` numbered lines: "line 0", "line 1", ...
pub fn numbered_lines(n: usize) -> String {
    (0..n)
        .map(|i| format!("line {}", i))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn at(line: usize, character: usize) -> TextIndex {
    TextIndex::new(line, character)
}

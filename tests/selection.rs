//! Selection tests - extending, spans, deleting and replacing selections

mod common;

use common::{at, test_editor, test_editor_with_selection};
use tedit::editable::{Direction, SpanKind};

#[test]
fn test_shift_right_extends_from_anchor() {
    let mut editor = test_editor("hello", 0, 1);
    editor.move_char(1, true);
    editor.move_char(1, true);
    assert_eq!(editor.cursor().anchor, at(0, 1));
    assert_eq!(editor.cursor().caret, at(0, 3));
    assert_eq!(editor.cursor().selected_text(editor.buffer()), "el");
}

#[test]
fn test_plain_move_collapses_selection() {
    let mut editor = test_editor_with_selection("hello", (0, 1), (0, 4));
    editor.move_char(1, false);
    assert!(!editor.cursor().has_selection());
    assert_eq!(editor.cursor().caret, at(0, 5));
}

#[test]
fn test_reversed_selection_text() {
    let editor = test_editor_with_selection("abc\ndef", (1, 2), (0, 1));
    assert!(editor.cursor().is_reversed());
    assert_eq!(editor.cursor().selected_text(editor.buffer()), "bc\nde");
}

#[test]
fn test_select_all() {
    let mut editor = test_editor("abc\ndef", 0, 1);
    editor.select_all();
    assert_eq!(editor.cursor().anchor, at(0, 0));
    assert_eq!(editor.cursor().caret, at(1, 3));
    assert_eq!(editor.cursor().selected_text(editor.buffer()), "abc\ndef");
}

#[test]
fn test_word_select_with_shift() {
    let mut editor = test_editor("hello world", 0, 0);
    editor.skip_word(Direction::Right, true);
    assert_eq!(editor.cursor().selected_text(editor.buffer()), "hello");
}

// ========================================================================
// Spans
// ========================================================================

#[test]
fn test_spans_cover_each_line_once() {
    let editor = test_editor_with_selection("abc\ndef\nghi\njkl", (0, 1), (3, 2));
    let spans = editor.cursor().selection_spans(editor.buffer());
    let kinds: Vec<SpanKind> = spans.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SpanKind::Leading,
            SpanKind::Middle,
            SpanKind::Middle,
            SpanKind::Trailing
        ]
    );
    assert_eq!((spans[0].start, spans[0].end), (1, 3));
    assert_eq!((spans[1].start, spans[1].end), (0, 3));
    assert_eq!((spans[3].start, spans[3].end), (0, 2));
}

#[test]
fn test_collapsed_selection_has_no_spans() {
    let editor = test_editor("abc", 0, 1);
    assert!(editor.cursor().selection_spans(editor.buffer()).is_empty());
}

// ========================================================================
// Editing with a selection
// ========================================================================

#[test]
fn test_delete_selection_across_lines() {
    let mut editor = test_editor_with_selection("abc\ndef\nghi", (2, 1), (0, 2));
    editor.delete_selection().unwrap();
    assert_eq!(editor.text(), "abhi");
    assert_eq!(editor.cursor().caret, at(0, 2));
    assert!(!editor.cursor().has_selection());
}

#[test]
fn test_backspace_deletes_selection() {
    let mut editor = test_editor_with_selection("hello world", (0, 5), (0, 11));
    editor.backspace().unwrap();
    assert_eq!(editor.text(), "hello");
}

#[test]
fn test_insert_collapses_but_keeps_selected_text() {
    let mut editor = test_editor_with_selection("abcd", (0, 1), (0, 3));
    editor.insert_text("X");
    assert_eq!(editor.text(), "abcXd");
    assert!(!editor.cursor().has_selection());
    assert_eq!(editor.cursor().caret, at(0, 4));
}

#[test]
fn test_backspace_at_line_start_joins_lines() {
    let mut editor = test_editor("abc\ndef", 1, 0);
    editor.backspace().unwrap();
    assert_eq!(editor.text(), "abcdef");
    assert_eq!(editor.cursor().caret, at(0, 3));
}

#[test]
fn test_backspace_at_document_start_is_noop() {
    let mut editor = test_editor("abc", 0, 0);
    editor.backspace().unwrap();
    assert_eq!(editor.text(), "abc");
}

#[test]
fn test_drag_extends_from_click_point() {
    let mut editor = test_editor("hello\nworld", 0, 0);
    editor.click_at(0, 10.0);
    editor.drag_to(1, 31.0);
    assert_eq!(editor.cursor().anchor, at(0, 1));
    assert_eq!(editor.cursor().caret, at(1, 3));
    assert_eq!(editor.cursor().selected_text(editor.buffer()), "ello\nwor");
}

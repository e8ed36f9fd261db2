//! Monkey tests - long pseudo-random sequences of edits, moves and clicks
//!
//! Each sequence is driven by a fixed seed so failures reproduce.

mod common;

use common::{numbered_lines, test_runtime};
use tedit::editable::Direction as WordDirection;
use tedit::messages::{Direction, DocumentMsg, EditorMsg, Msg, UiMsg};
use tedit::placement::VisualId;
use tedit::runtime::Runtime;

const CARET: VisualId = VisualId(1);

/// Linear congruential step; good enough to shuffle operations
fn next(state: &mut u64) -> usize {
    *state = state
        .wrapping_mul(6_364_136_223_846_793_005)
        .wrapping_add(1_442_695_040_888_963_407);
    (*state >> 33) as usize
}

fn direction(n: usize) -> Direction {
    [Direction::Up, Direction::Down, Direction::Left, Direction::Right][n % 4]
}

fn word_direction(n: usize) -> WordDirection {
    if n % 2 == 0 {
        WordDirection::Left
    } else {
        WordDirection::Right
    }
}

fn random_msg(state: &mut u64) -> Msg {
    let n = next(state);
    match n % 16 {
        0 => Msg::Editor(EditorMsg::MoveCursor(direction(n / 16))),
        1 => Msg::Editor(EditorMsg::MoveCursorWithSelection(direction(n / 16))),
        2 => Msg::Editor(EditorMsg::MoveCursorWord(word_direction(n / 16))),
        3 => Msg::Editor(EditorMsg::MoveCursorWordWithSelection(word_direction(n / 16))),
        4 => Msg::Editor(EditorMsg::MoveCursorLineEnd),
        5 => Msg::Editor(EditorMsg::MoveCursorLineStartWithSelection),
        6 => Msg::Editor(EditorMsg::SelectAll),
        7 => Msg::Editor(EditorMsg::Click {
            line: n / 16 % 40,
            x: (n / 640 % 300) as f32,
        }),
        8 => Msg::Editor(EditorMsg::Drag {
            line: n / 16 % 40,
            x: (n / 640 % 300) as f32,
        }),
        9 => Msg::Document(DocumentMsg::InsertChar(['a', 'é', ' ', '.'][n / 16 % 4])),
        10 => Msg::Document(DocumentMsg::InsertText(
            ["x\ny", "\r\n", "\tz", "", "a\n\nb\n"][n / 16 % 5].to_string(),
        )),
        11 => Msg::Document(DocumentMsg::InsertNewline),
        12 => Msg::Document(DocumentMsg::InsertTab),
        13 => Msg::Document(DocumentMsg::DeleteBackward),
        14 => Msg::Document(DocumentMsg::DeleteSelection),
        _ => Msg::Ui(UiMsg::BlinkCaret),
    }
}

fn assert_consistent(runtime: &Runtime, seed: u64, step: usize) {
    let editor = runtime.editor();
    let buffer = editor.buffer();
    let cursor = editor.cursor();

    assert!(buffer.line_count() >= 1, "seed {} step {}", seed, step);
    assert_eq!(
        buffer.clamp(cursor.caret),
        cursor.caret,
        "caret outside buffer, seed {} step {}",
        seed,
        step
    );
    assert_eq!(
        buffer.clamp(cursor.anchor),
        cursor.anchor,
        "anchor outside buffer, seed {} step {}",
        seed,
        step
    );
    assert!(runtime.surface().containers_holding(CARET) <= 1);
}

#[test]
fn test_random_operations_keep_buffer_and_cursor_valid() {
    for seed in 0..20u64 {
        let mut state = seed;
        let mut runtime = test_runtime(&numbered_lines(5), 8);
        for step in 0..300 {
            runtime.dispatch(random_msg(&mut state));
            assert_consistent(&runtime, seed, step);
        }
    }
}

#[test]
fn test_deleting_everything_repeatedly_leaves_one_line() {
    let mut runtime = test_runtime(&numbered_lines(30), 8);
    for _ in 0..3 {
        runtime.dispatch(Msg::Editor(EditorMsg::SelectAll));
        runtime.dispatch(Msg::Document(DocumentMsg::DeleteSelection));
        runtime.dispatch(Msg::Document(DocumentMsg::DeleteBackward));
        assert_eq!(runtime.editor().buffer().line_count(), 1);
        assert_eq!(runtime.editor().text(), "");
    }
    runtime.dispatch(Msg::Document(DocumentMsg::SetText(String::new())));
    assert_eq!(runtime.editor().buffer().line_count(), 1);
}

#[test]
fn test_backspace_through_whole_document() {
    let mut runtime = test_runtime("ab\n\tc\n\né", 8);
    runtime.dispatch(Msg::Editor(EditorMsg::SelectAll));
    runtime.dispatch(Msg::Editor(EditorMsg::MoveCursorLineEnd));
    for _ in 0..20 {
        runtime.dispatch(Msg::Document(DocumentMsg::DeleteBackward));
    }
    assert_eq!(runtime.editor().text(), "");
    assert_eq!(runtime.editor().cursor().caret, runtime.editor().buffer().end());
}

//! Editor update functions for cursor movement and selection.

use crate::commands::Cmd;
use crate::editable::TextIndex;
use crate::editor::Editor;
use crate::messages::{Direction, EditorMsg};

/// Handle editor messages (cursor movement, selection, mouse)
pub fn update_editor(editor: &mut Editor, msg: EditorMsg) -> Option<Cmd> {
    match msg {
        EditorMsg::MoveCursor(direction) => move_cursor(editor, direction, false),
        EditorMsg::MoveCursorWithSelection(direction) => move_cursor(editor, direction, true),

        EditorMsg::MoveCursorLineStart => editor.move_line_start(false),
        EditorMsg::MoveCursorLineStartWithSelection => editor.move_line_start(true),
        EditorMsg::MoveCursorLineEnd => editor.move_line_end(false),
        EditorMsg::MoveCursorLineEndWithSelection => editor.move_line_end(true),

        EditorMsg::MoveCursorWord(direction) => editor.skip_word(direction, false),
        EditorMsg::MoveCursorWordWithSelection(direction) => editor.skip_word(direction, true),

        EditorMsg::SetCursorPosition { line, column } => {
            editor.set_caret(TextIndex::new(line, column), false)
        }

        EditorMsg::SelectAll => editor.select_all(),

        EditorMsg::Click { line, x } => editor.click_at(line, x),
        EditorMsg::Drag { line, x } => editor.drag_to(line, x),
    }

    Some(Cmd::Redraw)
}

fn move_cursor(editor: &mut Editor, direction: Direction, extend_selection: bool) {
    match direction {
        Direction::Up => editor.move_line(-1, extend_selection),
        Direction::Down => editor.move_line(1, extend_selection),
        Direction::Left => editor.move_char(-1, extend_selection),
        Direction::Right => editor.move_char(1, extend_selection),
    }
}

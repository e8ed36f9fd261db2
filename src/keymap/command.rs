//! Command enum representing all executable editor actions
//!
//! Commands are the bridge between keybindings and the message system.
//! Each command maps to one or more `Msg` values for the Elm-style update loop.

use crate::editable::Direction as WordDirection;
use crate::messages::{Direction, DocumentMsg, EditorMsg, Msg};

/// All editor commands that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ========================================================================
    // Cursor Movement (no selection)
    // ========================================================================
    MoveCursorUp,
    MoveCursorDown,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorLineStart,
    MoveCursorLineEnd,
    MoveCursorWordLeft,
    MoveCursorWordRight,

    // ========================================================================
    // Selection Movement (extend selection)
    // ========================================================================
    MoveCursorUpWithSelection,
    MoveCursorDownWithSelection,
    MoveCursorLeftWithSelection,
    MoveCursorRightWithSelection,
    MoveCursorLineStartWithSelection,
    MoveCursorLineEndWithSelection,
    MoveCursorWordLeftWithSelection,
    MoveCursorWordRightWithSelection,

    /// Select all text in document
    SelectAll,

    // ========================================================================
    // Text Editing
    // ========================================================================
    /// Insert a newline at cursor
    InsertNewline,
    /// Insert a tab character
    InsertTab,
    /// Delete selection or character before cursor (backspace)
    DeleteBackward,
    /// Delete the selection
    DeleteSelection,

    // ========================================================================
    // Clipboard
    // ========================================================================
    Copy,
    Cut,
    Paste,
}

impl Command {
    /// Convert this command to message(s) for the Elm update loop
    pub fn to_msgs(self) -> Vec<Msg> {
        use Command::*;

        let msg = match self {
            // Cursor movement
            MoveCursorUp => Msg::Editor(EditorMsg::MoveCursor(Direction::Up)),
            MoveCursorDown => Msg::Editor(EditorMsg::MoveCursor(Direction::Down)),
            MoveCursorLeft => Msg::Editor(EditorMsg::MoveCursor(Direction::Left)),
            MoveCursorRight => Msg::Editor(EditorMsg::MoveCursor(Direction::Right)),
            MoveCursorLineStart => Msg::Editor(EditorMsg::MoveCursorLineStart),
            MoveCursorLineEnd => Msg::Editor(EditorMsg::MoveCursorLineEnd),
            MoveCursorWordLeft => Msg::Editor(EditorMsg::MoveCursorWord(WordDirection::Left)),
            MoveCursorWordRight => Msg::Editor(EditorMsg::MoveCursorWord(WordDirection::Right)),

            // Selection movement
            MoveCursorUpWithSelection => {
                Msg::Editor(EditorMsg::MoveCursorWithSelection(Direction::Up))
            }
            MoveCursorDownWithSelection => {
                Msg::Editor(EditorMsg::MoveCursorWithSelection(Direction::Down))
            }
            MoveCursorLeftWithSelection => {
                Msg::Editor(EditorMsg::MoveCursorWithSelection(Direction::Left))
            }
            MoveCursorRightWithSelection => {
                Msg::Editor(EditorMsg::MoveCursorWithSelection(Direction::Right))
            }
            MoveCursorLineStartWithSelection => {
                Msg::Editor(EditorMsg::MoveCursorLineStartWithSelection)
            }
            MoveCursorLineEndWithSelection => Msg::Editor(EditorMsg::MoveCursorLineEndWithSelection),
            MoveCursorWordLeftWithSelection => Msg::Editor(
                EditorMsg::MoveCursorWordWithSelection(WordDirection::Left),
            ),
            MoveCursorWordRightWithSelection => Msg::Editor(
                EditorMsg::MoveCursorWordWithSelection(WordDirection::Right),
            ),

            SelectAll => Msg::Editor(EditorMsg::SelectAll),

            // Text editing
            InsertNewline => Msg::Document(DocumentMsg::InsertNewline),
            InsertTab => Msg::Document(DocumentMsg::InsertTab),
            DeleteBackward => Msg::Document(DocumentMsg::DeleteBackward),
            DeleteSelection => Msg::Document(DocumentMsg::DeleteSelection),

            // Clipboard
            Copy => Msg::Document(DocumentMsg::Copy),
            Cut => Msg::Document(DocumentMsg::Cut),
            Paste => Msg::Document(DocumentMsg::Paste),
        };

        vec![msg]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_commands_map_to_word_messages() {
        assert_eq!(
            Command::MoveCursorWordLeftWithSelection.to_msgs(),
            vec![Msg::Editor(EditorMsg::MoveCursorWordWithSelection(
                WordDirection::Left
            ))]
        );
    }

    #[test]
    fn test_paste_maps_to_document_paste() {
        assert_eq!(
            Command::Paste.to_msgs(),
            vec![Msg::Document(DocumentMsg::Paste)]
        );
    }
}

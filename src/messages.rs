//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::editable::Direction as WordDirection;
use crate::placement::SurfaceEvent;

/// Direction for cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Cursor movement and selection messages
#[derive(Debug, Clone, PartialEq)]
pub enum EditorMsg {
    // === Basic Movement ===
    /// Move caret one character or line
    MoveCursor(Direction),
    /// Move caret to start of line (Home key)
    MoveCursorLineStart,
    /// Move caret to end of line (End key)
    MoveCursorLineEnd,
    /// Skip to the next word boundary (Ctrl+Left/Right)
    MoveCursorWord(WordDirection),
    /// Set caret to a specific position
    SetCursorPosition { line: usize, column: usize },

    // === Selection Movement (Shift+key) ===
    MoveCursorWithSelection(Direction),
    MoveCursorLineStartWithSelection,
    MoveCursorLineEndWithSelection,
    MoveCursorWordWithSelection(WordDirection),

    // === Selection ===
    /// Select the whole document (Ctrl+A)
    SelectAll,

    // === Mouse ===
    /// Mouse press at a horizontal pixel offset on a line
    Click { line: usize, x: f32 },
    /// Mouse drag to a horizontal pixel offset on a line
    Drag { line: usize, x: f32 },
}

/// Document editing messages
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentMsg {
    /// Insert a character at the caret
    InsertChar(char),
    /// Insert a string at the caret
    InsertText(String),
    /// Insert the line separator (Enter)
    InsertNewline,
    /// Insert a tab character (Tab)
    InsertTab,
    /// Delete the selection or the character before the caret
    DeleteBackward,
    /// Delete the selection
    DeleteSelection,
    Copy,
    Cut,
    Paste,
    /// Replace the whole document
    SetText(String),
    /// Change the tab width
    SetTabSize(usize),
}

/// UI state messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMsg {
    /// Caret blink period elapsed
    BlinkCaret,
}

/// Top-level message
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Editor(EditorMsg),
    Document(DocumentMsg),
    /// Layout notification from the rendering surface
    Surface(SurfaceEvent),
    Ui(UiMsg),
}

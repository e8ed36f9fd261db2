//! Document update functions for text editing and clipboard

use crate::clipboard::Clipboard;
use crate::commands::Cmd;
use crate::editable::LINE_SEPARATOR;
use crate::editor::Editor;
use crate::messages::DocumentMsg;

/// Handle document messages (editing, clipboard, whole-document changes)
pub fn update_document(
    editor: &mut Editor,
    clipboard: &mut dyn Clipboard,
    msg: DocumentMsg,
) -> Option<Cmd> {
    match msg {
        DocumentMsg::InsertChar(ch) => {
            let mut buf = [0u8; 4];
            editor.insert_text(ch.encode_utf8(&mut buf));
        }
        DocumentMsg::InsertText(text) => {
            editor.insert_text(&text);
        }
        DocumentMsg::InsertNewline => {
            let mut buf = [0u8; 4];
            editor.insert_text(LINE_SEPARATOR.encode_utf8(&mut buf));
        }
        DocumentMsg::InsertTab => {
            editor.insert_text("\t");
        }

        DocumentMsg::DeleteBackward => {
            if let Err(e) = editor.backspace() {
                tracing::warn!("backspace failed: {}", e);
            }
        }
        DocumentMsg::DeleteSelection => {
            if let Err(e) = editor.delete_selection() {
                tracing::warn!("delete selection failed: {}", e);
            }
        }

        DocumentMsg::Copy => {
            if let Err(e) = editor.copy(clipboard) {
                tracing::warn!("copy failed: {:#}", e);
            }
        }
        DocumentMsg::Cut => {
            if let Err(e) = editor.cut(clipboard) {
                tracing::warn!("cut failed: {:#}", e);
            }
        }
        DocumentMsg::Paste => {
            if let Err(e) = editor.paste(clipboard) {
                tracing::warn!("paste failed: {:#}", e);
            }
        }

        DocumentMsg::SetText(text) => {
            editor.set_text(&text);
            return Some(Cmd::batch(vec![Cmd::ResetSurface, Cmd::Redraw]));
        }
        DocumentMsg::SetTabSize(tab_size) => {
            editor.set_tab_size(tab_size);
        }
    }

    Some(Cmd::Redraw)
}

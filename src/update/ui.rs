//! UI message handlers (caret blink)

use crate::commands::Cmd;
use crate::editor::Editor;
use crate::messages::UiMsg;
use crate::placement::RenderSurface;

/// Handle UI messages
pub fn update_ui(editor: &mut Editor, surface: &mut dyn RenderSurface, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::BlinkCaret => {
            editor.blink();
            surface.set_visible(editor.caret_placement().visual(), editor.caret_visible());
            Some(Cmd::Redraw)
        }
    }
}

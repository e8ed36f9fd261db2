//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod document;
mod editor;
mod ui;

use crate::clipboard::Clipboard;
use crate::commands::Cmd;
use crate::editable::Cursor;
use crate::editor::Editor;
use crate::messages::Msg;
use crate::placement::{RenderSurface, SurfaceObserver};

#[cfg(debug_assertions)]
use crate::tracing::CursorSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use document::update_document;
pub use editor::update_editor;
pub use ui::update_ui;

/// Collaborators an update may touch besides the editor
pub struct Env<'a> {
    pub clipboard: &'a mut dyn Clipboard,
    pub surface: &'a mut dyn RenderSurface,
}

impl<'a> Env<'a> {
    pub fn new(clipboard: &'a mut dyn Clipboard, surface: &'a mut dyn RenderSurface) -> Self {
        Self { clipboard, surface }
    }
}

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(editor: &mut Editor, env: &mut Env<'_>, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(editor, env, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(editor, env, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(editor: &mut Editor, env: &mut Env<'_>, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Editor(m) => {
            let before = *editor.cursor();
            let cmd = editor::update_editor(editor, m);
            after_cursor_change(editor, env, before, cmd)
        }
        Msg::Document(m) => {
            let before = *editor.cursor();
            let cmd = document::update_document(editor, env.clipboard, m);
            after_cursor_change(editor, env, before, cmd)
        }
        Msg::Surface(event) => {
            editor.on_surface_event(event, env.surface);
            Some(Cmd::Redraw)
        }
        Msg::Ui(m) => ui::update_ui(editor, env.surface, m),
    }
}

/// Re-anchor visuals after a logical change. A moved caret or anchor forces
/// the caret visible, restarts the blink period and scrolls the caret line
/// into view.
fn after_cursor_change(
    editor: &mut Editor,
    env: &mut Env<'_>,
    before: Cursor,
    cmd: Option<Cmd>,
) -> Option<Cmd> {
    let mut cmds: Vec<Cmd> = cmd.map(Cmd::into_vec).unwrap_or_default();

    if *editor.cursor() != before {
        editor.show_caret();
        cmds.push(Cmd::ResetBlink);
        cmds.push(Cmd::ScrollIntoView(editor.cursor().caret.line));
    }
    editor.sync_placements(env.surface);

    match cmds.len() {
        0 => None,
        1 => cmds.pop(),
        _ => Some(Cmd::batch(cmds)),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after cursor state and logs diffs for debugging.
/// Filters out noisy messages like BlinkCaret from logging.
#[cfg(debug_assertions)]
fn update_traced(editor: &mut Editor, env: &mut Env<'_>, msg: Msg) -> Option<Cmd> {
    use crate::messages::UiMsg;

    // Skip logging for noisy periodic messages
    let is_noisy = matches!(&msg, Msg::Ui(UiMsg::BlinkCaret));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = CursorSnapshot::from_editor(editor);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(editor, env, msg);

    let after = CursorSnapshot::from_editor(editor);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "cursor", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Editor(m) => format!("Editor::{:?}", m),
        Msg::Document(m) => format!("Document::{:?}", m),
        Msg::Surface(m) => format!("Surface::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
    }
}

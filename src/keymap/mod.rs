//! Keyboard mapping
//!
//! Maps keystrokes to editor commands, with platform-specific modifier
//! handling (Cmd on macOS, Ctrl elsewhere).
//!
//! ```text
//! Keystroke → Keymap::lookup() → Command → Vec<Msg>
//! ```
//!
//! Unbound keystrokes that carry a printable character insert it.

mod binding;
mod command;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use binding::Keybinding;
pub use command::Command;
pub use defaults::default_bindings;
pub use keymap::Keymap;
pub use types::{KeyCode, Keystroke, Modifiers};

use crate::messages::{DocumentMsg, Msg};

/// Messages a keystroke produces: its bound command, or the typed character
pub fn keystroke_to_msgs(keymap: &Keymap, keystroke: &Keystroke) -> Vec<Msg> {
    if let Some(command) = keymap.lookup(keystroke) {
        return command.to_msgs();
    }
    keystroke
        .typed_char()
        .map(|c| vec![Msg::Document(DocumentMsg::InsertChar(c))])
        .unwrap_or_default()
}

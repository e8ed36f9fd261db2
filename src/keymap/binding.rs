//! Keystroke to command pairing

use super::command::Command;
use super::types::Keystroke;

/// One entry of a [`Keymap`](super::Keymap)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keybinding {
    pub keystroke: Keystroke,
    pub command: Command,
}

impl Keybinding {
    pub fn new(keystroke: Keystroke, command: Command) -> Self {
        Self { keystroke, command }
    }
}

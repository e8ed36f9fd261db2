//! Built-in keybindings

use super::binding::Keybinding;
use super::command::Command;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Arrow, Home and End keys with the command they run bare and with Shift held
const CARET_KEYS: [(KeyCode, Command, Command); 6] = [
    (KeyCode::Up, Command::MoveCursorUp, Command::MoveCursorUpWithSelection),
    (KeyCode::Down, Command::MoveCursorDown, Command::MoveCursorDownWithSelection),
    (KeyCode::Left, Command::MoveCursorLeft, Command::MoveCursorLeftWithSelection),
    (KeyCode::Right, Command::MoveCursorRight, Command::MoveCursorRightWithSelection),
    (KeyCode::Home, Command::MoveCursorLineStart, Command::MoveCursorLineStartWithSelection),
    (KeyCode::End, Command::MoveCursorLineEnd, Command::MoveCursorLineEndWithSelection),
];

/// Bindings for the current platform
///
/// Clipboard and select-all use the platform command modifier; word
/// movement uses Ctrl everywhere.
pub fn default_bindings() -> Vec<Keybinding> {
    let cmd = Modifiers::cmd();
    let ctrl = Modifiers::CTRL;
    let ctrl_shift = Modifiers::CTRL | Modifiers::SHIFT;

    let mut bindings: Vec<Keybinding> = CARET_KEYS
        .iter()
        .flat_map(|&(key, plain, extend)| {
            [
                bind(key, Modifiers::NONE, plain),
                bind(key, Modifiers::SHIFT, extend),
            ]
        })
        .collect();

    bindings.extend([
        bind(KeyCode::Left, ctrl, Command::MoveCursorWordLeft),
        bind(KeyCode::Right, ctrl, Command::MoveCursorWordRight),
        bind(KeyCode::Left, ctrl_shift, Command::MoveCursorWordLeftWithSelection),
        bind(KeyCode::Right, ctrl_shift, Command::MoveCursorWordRightWithSelection),
        bind(KeyCode::Char('a'), cmd, Command::SelectAll),
        bind(KeyCode::Char('c'), cmd, Command::Copy),
        bind(KeyCode::Char('x'), cmd, Command::Cut),
        bind(KeyCode::Char('v'), cmd, Command::Paste),
        bind(KeyCode::Enter, Modifiers::NONE, Command::InsertNewline),
        bind(KeyCode::Tab, Modifiers::NONE, Command::InsertTab),
        bind(KeyCode::Backspace, Modifiers::NONE, Command::DeleteBackward),
        bind(KeyCode::Delete, Modifiers::NONE, Command::DeleteSelection),
    ]);
    bindings
}

fn bind(key: KeyCode, mods: Modifiers, command: Command) -> Keybinding {
    Keybinding::new(Keystroke::new(key, mods), command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_caret_key_has_a_shift_variant() {
        let bindings = default_bindings();
        for (key, _, extend) in CARET_KEYS {
            let stroke = Keystroke::new(key, Modifiers::SHIFT);
            assert!(bindings
                .iter()
                .any(|b| b.keystroke == stroke && b.command == extend));
        }
    }
}

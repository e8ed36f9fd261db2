//! Keystroke lookup table

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::types::Keystroke;

/// Ordered bindings plus an index of the winning binding per keystroke
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<Keybinding>,
    // later bindings shadow earlier ones
    active: HashMap<Keystroke, Command>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        bindings.into_iter().fold(Self::new(), |mut keymap, binding| {
            keymap.add_binding(binding);
            keymap
        })
    }

    pub fn add_binding(&mut self, binding: Keybinding) {
        if let Some(previous) = self.active.insert(binding.keystroke, binding.command) {
            tracing::debug!(
                keystroke = %binding.keystroke,
                ?previous,
                command = ?binding.command,
                "keystroke rebound"
            );
        }
        self.bindings.push(binding);
    }

    pub fn lookup(&self, keystroke: &Keystroke) -> Option<Command> {
        self.active.get(keystroke).copied()
    }

    /// Every binding in registration order, shadowed ones included
    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }

    /// First registered binding for `command`
    pub fn binding_for(&self, command: Command) -> Option<&Keybinding> {
        self.bindings.iter().find(|b| b.command == command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::types::{KeyCode, Modifiers};

    fn ctrl_c() -> Keystroke {
        Keystroke::new(KeyCode::Char('c'), Modifiers::CTRL)
    }

    #[test]
    fn test_lookup_respects_modifiers() {
        let keymap = Keymap::with_bindings(vec![Keybinding::new(ctrl_c(), Command::Copy)]);

        assert_eq!(keymap.lookup(&ctrl_c()), Some(Command::Copy));
        assert_eq!(keymap.lookup(&Keystroke::char('c')), None);
    }

    #[test]
    fn test_rebinding_shadows_but_keeps_history() {
        let keymap = Keymap::with_bindings(vec![
            Keybinding::new(ctrl_c(), Command::Copy),
            Keybinding::new(ctrl_c(), Command::Cut),
        ]);
        assert_eq!(keymap.lookup(&ctrl_c()), Some(Command::Cut));
        assert_eq!(keymap.bindings().len(), 2);
        assert_eq!(
            keymap.binding_for(Command::Copy).map(|b| b.keystroke),
            Some(ctrl_c())
        );
    }
}

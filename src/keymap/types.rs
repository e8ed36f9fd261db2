//! Keystroke, Modifiers and KeyCode

use std::fmt;
use std::ops::BitOr;

/// Held modifier keys, one bit each
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(1);
    pub const SHIFT: Modifiers = Modifiers(1 << 1);
    pub const ALT: Modifiers = Modifiers(1 << 2);
    /// Cmd on macOS, Win elsewhere
    pub const META: Modifiers = Modifiers(1 << 3);

    const NAMES: [(Modifiers, &'static str); 4] = [
        (Modifiers::CTRL, "Ctrl"),
        (Modifiers::SHIFT, "Shift"),
        (Modifiers::ALT, "Alt"),
        (Modifiers::META, "Meta"),
    ];

    /// Cmd on macOS, Ctrl elsewhere
    pub fn cmd() -> Modifiers {
        if cfg!(target_os = "macos") {
            Modifiers::META
        } else {
            Modifiers::CTRL
        }
    }

    pub const fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Any modifier that turns a character key into a shortcut
    pub const fn is_chord(self) -> bool {
        self.0 & (Self::CTRL.0 | Self::ALT.0 | Self::META.0) != 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Self::NAMES
            .iter()
            .filter(|(m, _)| self.contains(*m))
            .map(|(_, name)| *name)
            .collect();
        f.write_str(&names.join("+"))
    }
}

/// Logical key the editor reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key, stored lowercase
    Char(char),
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyCode::Char(c) => return write!(f, "{}", c.to_uppercase()),
            KeyCode::Enter => "Enter",
            KeyCode::Escape => "Escape",
            KeyCode::Tab => "Tab",
            KeyCode::Backspace => "Backspace",
            KeyCode::Delete => "Delete",
            KeyCode::Up => "Up",
            KeyCode::Down => "Down",
            KeyCode::Left => "Left",
            KeyCode::Right => "Right",
            KeyCode::Home => "Home",
            KeyCode::End => "End",
        };
        f.write_str(name)
    }
}

/// A key pressed with a set of modifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keystroke {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl Keystroke {
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    pub const fn key(key: KeyCode) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    pub fn char(c: char) -> Self {
        Self::char_with_mods(c, Modifiers::NONE)
    }

    pub fn char_with_mods(c: char, mods: Modifiers) -> Self {
        Self::new(KeyCode::Char(c.to_ascii_lowercase()), mods)
    }

    /// Text this keystroke types when no binding claims it
    pub fn typed_char(&self) -> Option<char> {
        match self.key {
            KeyCode::Char(c) if !self.mods.is_chord() => {
                if self.mods.contains(Modifiers::SHIFT) {
                    Some(c.to_ascii_uppercase())
                } else {
                    Some(c)
                }
            }
            _ => None,
        }
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mods.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.mods, self.key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chord_detection() {
        assert!(!Modifiers::SHIFT.is_chord());
        assert!((Modifiers::SHIFT | Modifiers::ALT).is_chord());
        assert!(Modifiers::cmd().is_chord());
    }

    #[test]
    fn test_display_lists_modifiers_in_order() {
        let stroke = Keystroke::new(KeyCode::Left, Modifiers::SHIFT | Modifiers::CTRL);
        assert_eq!(stroke.to_string(), "Ctrl+Shift+Left");
    }

    #[test]
    fn test_char_keys_normalized() {
        assert_eq!(Keystroke::char('A'), Keystroke::char('a'));
    }

    #[test]
    fn test_typed_char() {
        assert_eq!(Keystroke::char('x').typed_char(), Some('x'));
        assert_eq!(
            Keystroke::char_with_mods('x', Modifiers::SHIFT).typed_char(),
            Some('X')
        );
        assert_eq!(
            Keystroke::char_with_mods('x', Modifiers::CTRL).typed_char(),
            None
        );
        assert_eq!(Keystroke::key(KeyCode::Enter).typed_char(), None);
    }
}

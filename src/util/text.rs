//! Character classification for word navigation

/// ASCII symbols that end a word as whitespace does
const WORD_STOPS: &str = "/:,.-(){}[];\"'<>=+*&|!@#$%^~`\\?";

pub fn is_punctuation(ch: char) -> bool {
    ch.is_ascii() && WORD_STOPS.contains(ch)
}

/// How word skipping treats a character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Whitespace or punctuation: ends a word
    Stop,
    /// Part of a word
    Word,
}

pub fn char_class(ch: char) -> CharClass {
    if is_word_boundary(ch) {
        CharClass::Stop
    } else {
        CharClass::Word
    }
}

pub fn is_word_boundary(ch: char) -> bool {
    ch.is_whitespace() || is_punctuation(ch)
}

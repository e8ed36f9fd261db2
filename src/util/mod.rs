//! Utility modules

pub mod text;

pub use text::{char_class, is_punctuation, is_word_boundary, CharClass};

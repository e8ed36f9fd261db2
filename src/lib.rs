//! tedit - embeddable plain-text editing engine
//!
//! This crate provides a line-oriented text model, a caret/selection state
//! machine, tab alignment against a renderer's native tab stops, and
//! placement of caret and selection visuals onto a virtualized rendering
//! surface. State changes flow through the Elm-style `Msg` → `update` → `Cmd`
//! loop.

pub mod blink;
pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod editor;
pub mod error;
pub mod keymap;
pub mod measure;
pub mod messages;
pub mod placement;
pub mod runtime;
pub mod tabs;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use editable::{Cursor, TextBuffer, TextIndex};
pub use editor::Editor;
pub use error::EditError;
pub use measure::{MonospaceMeasurer, TextMeasurer};
pub use messages::Msg;
pub use runtime::Runtime;

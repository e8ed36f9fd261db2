//! Debug tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=cursor=debug,message=debug` - scoped filtering
//! - `RUST_LOG=tedit::placement=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/tedit/logs/tedit.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editable::TextIndex;
use crate::editor::Editor;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// `~/.config/tedit/logs/tedit.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(
                logs_dir,
                crate::config_paths::LOG_FILE_NAME,
            );
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {:#}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of caret/anchor state for diffing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorSnapshot {
    pub caret: TextIndex,
    pub anchor: TextIndex,
    pub selection_empty: bool,
}

impl CursorSnapshot {
    pub fn from_editor(editor: &Editor) -> Self {
        let cursor = editor.cursor();
        Self {
            caret: cursor.caret,
            anchor: cursor.anchor,
            selection_empty: !cursor.has_selection(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &CursorSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.caret != other.caret {
            changes.push(format!(
                "caret: ({},{}) → ({},{})",
                self.caret.line, self.caret.character, other.caret.line, other.caret.character
            ));
        }
        if self.anchor != other.anchor {
            changes.push(format!(
                "anchor: ({},{}) → ({},{})",
                self.anchor.line, self.anchor.character, other.anchor.line, other.anchor.character
            ));
        }
        if self.selection_empty != other.selection_empty {
            let status = if other.selection_empty {
                "cleared"
            } else {
                "active"
            };
            changes.push(format!("selection {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_diff() {
        let before = CursorSnapshot {
            caret: TextIndex::new(0, 0),
            anchor: TextIndex::new(0, 0),
            selection_empty: true,
        };
        assert_eq!(before.diff(&before), None);

        let after = CursorSnapshot {
            caret: TextIndex::new(0, 3),
            anchor: TextIndex::new(0, 0),
            selection_empty: false,
        };
        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("caret: (0,0) → (0,3)"));
        assert!(diff.contains("selection active"));
        assert!(!diff.contains("anchor"));
    }
}

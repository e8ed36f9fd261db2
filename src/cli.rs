//! Command-line argument parsing for the headless editor
//!
//! Loads a file into an editor, optionally applies an edit at a position,
//! and prints the resulting document (and its tab layout).

use clap::Parser;
use std::path::PathBuf;

/// Headless plain-text editing engine
#[derive(Parser, Debug)]
#[command(name = "tedit", version, about = "Headless plain-text editing engine")]
pub struct CliArgs {
    /// File to load (empty document when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Tab width in columns (overrides config)
    #[arg(long, value_name = "N")]
    pub tab_size: Option<usize>,

    /// TTF/OTF font used for measurement (overrides config)
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Go to line N before editing (1-indexed)
    #[arg(long, value_name = "N")]
    pub line: Option<usize>,

    /// Go to column N (used with --line, 1-indexed)
    #[arg(long, value_name = "N")]
    pub column: Option<usize>,

    /// Text to insert at the caret
    #[arg(long, value_name = "TEXT")]
    pub insert: Option<String>,

    /// Paste the system clipboard at the caret
    #[arg(long)]
    pub paste: bool,

    /// Print the tab segments of every line
    #[arg(long)]
    pub tabs: bool,

    /// Rows the headless surface keeps materialized
    #[arg(long, value_name = "N", default_value_t = 40)]
    pub rows: usize,
}

impl CliArgs {
    /// Initial caret position, converted to 0-indexed
    pub fn initial_position(&self) -> Option<(usize, usize)> {
        self.line.map(|line| {
            let column = self.column.unwrap_or(1);
            (line.saturating_sub(1), column.saturating_sub(1))
        })
    }
}

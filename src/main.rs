use anyhow::{Context, Result};
use clap::Parser;

use tedit::cli::CliArgs;
use tedit::clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
use tedit::config::EditorConfig;
use tedit::editor::Editor;
use tedit::messages::{DocumentMsg, EditorMsg, Msg};
use tedit::placement::HeadlessSurface;
use tedit::runtime::Runtime;

fn main() -> Result<()> {
    tedit::tracing::init();

    let args = CliArgs::parse();

    let mut config = EditorConfig::load();
    if let Some(tab_size) = args.tab_size {
        config.tab_size = tab_size.max(1);
    }
    if let Some(font) = &args.font {
        config.font_path = Some(font.clone());
    }

    let measurer = config.measurer()?;

    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => String::new(),
    };

    let editor = Editor::with_text(&text, measurer).with_caret_width(config.caret_width);
    let mut runtime = Runtime::new(editor, HeadlessSurface::new(args.rows), clipboard(&args));
    if let Err(e) = runtime.start_blink(config.blink_interval()) {
        tracing::warn!("Caret will not blink: {:#}", e);
    }

    if let Some((line, column)) = args.initial_position() {
        runtime.dispatch(Msg::Editor(EditorMsg::SetCursorPosition { line, column }));
    }
    if let Some(insert) = &args.insert {
        runtime.dispatch(Msg::Document(DocumentMsg::InsertText(insert.clone())));
    }
    if args.paste {
        runtime.dispatch(Msg::Document(DocumentMsg::Paste));
    }

    let editor = runtime.editor();
    print!("{}", editor.text());
    if !editor.text().ends_with('\n') {
        println!();
    }

    if args.tabs {
        for (ordinal, line) in editor.buffer().lines().iter().enumerate() {
            for segment in editor.tab_segments(ordinal) {
                let shifted = segment.shifted_range();
                println!(
                    "line {} tab at {}: shift {:.2} over chars {}..{} ({:?})",
                    ordinal + 1,
                    segment.start,
                    segment.shift,
                    shifted.start,
                    shifted.end,
                    line.text(),
                );
            }
        }
    }

    let caret = editor.cursor().caret;
    tracing::info!(line = caret.line, character = caret.character, "final caret");
    runtime.stop_blink();

    Ok(())
}

fn clipboard(args: &CliArgs) -> Box<dyn Clipboard> {
    if !args.paste {
        return Box::new(MemoryClipboard::new());
    }
    match SystemClipboard::new() {
        Ok(clipboard) => Box::new(clipboard),
        Err(e) => {
            tracing::warn!("System clipboard unavailable, pasting nothing: {:#}", e);
            Box::new(MemoryClipboard::new())
        }
    }
}

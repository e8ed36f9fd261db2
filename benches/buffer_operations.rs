//! Benchmarks for text buffer, tab alignment and placement hot paths
//!
//! Run with: cargo bench buffer_operations

use tedit::clipboard::MemoryClipboard;
use tedit::editable::{TextBuffer, TextIndex};
use tedit::editor::Editor;
use tedit::measure::{MeasureOptions, MonospaceMeasurer};
use tedit::messages::{Direction, EditorMsg, Msg};
use tedit::placement::HeadlessSurface;
use tedit::runtime::Runtime;
use tedit::tabs::tab_segments;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn measurer() -> MonospaceMeasurer {
    MonospaceMeasurer::with_advance(MeasureOptions::default(), 10.0)
}

// ============================================================================
// Insert operations
// ============================================================================

#[divan::bench(args = [1_000, 10_000])]
fn insert_line_middle(bencher: divan::Bencher, lines: usize) {
    let text = "foo bar baz\n".repeat(lines);
    bencher
        .with_inputs(|| TextBuffer::from_text(&text))
        .bench_local_values(|mut buffer| {
            buffer.insert(TextIndex::new(lines / 2, 4), divan::black_box("inserted\n"));
            buffer
        });
}

#[divan::bench(args = [1_000, 10_000])]
fn insert_char_end(bencher: divan::Bencher, lines: usize) {
    let text = "foo bar baz\n".repeat(lines);
    bencher
        .with_inputs(|| TextBuffer::from_text(&text))
        .bench_local_values(|mut buffer| {
            let end = buffer.end();
            buffer.insert(end, divan::black_box("x"));
            buffer
        });
}

// ============================================================================
// Delete operations
// ============================================================================

#[divan::bench(args = [1_000, 10_000])]
fn delete_many_lines(bencher: divan::Bencher, lines: usize) {
    let text = "foo bar baz\n".repeat(lines);
    bencher
        .with_inputs(|| TextBuffer::from_text(&text))
        .bench_local_values(|mut buffer| {
            let _ = buffer.delete(TextIndex::new(1, 2), TextIndex::new(lines / 2, 3));
            buffer
        });
}

// ============================================================================
// Text extraction
// ============================================================================

#[divan::bench(args = [1_000, 10_000])]
fn full_text(bencher: divan::Bencher, lines: usize) {
    let buffer = TextBuffer::from_text(&"foo bar baz\n".repeat(lines));
    bencher.bench_local(|| divan::black_box(&buffer).full_text());
}

// ============================================================================
// Tab alignment
// ============================================================================

#[divan::bench]
fn tab_segments_indented_line() {
    let m = measurer();
    tab_segments(divan::black_box("\t\t\tlet x = foo(\ta,\tb);"), &m);
}

#[divan::bench]
fn editor_with_tabbed_document() -> Editor {
    let text = "\tfn body() {\n\t\tcall();\n\t}\n".repeat(1_000);
    Editor::with_text(divan::black_box(&text), Box::new(measurer()))
}

// ============================================================================
// Placement
// ============================================================================

#[divan::bench]
fn scroll_caret_through_document(bencher: divan::Bencher) {
    let text = "foo bar baz\n".repeat(1_000);
    bencher
        .with_inputs(|| {
            let editor = Editor::with_text(&text, Box::new(measurer()));
            Runtime::new(
                editor,
                HeadlessSurface::new(50),
                Box::new(MemoryClipboard::new()),
            )
        })
        .bench_local_values(|mut runtime| {
            for _ in 0..200 {
                runtime.dispatch(Msg::Editor(EditorMsg::MoveCursor(Direction::Down)));
            }
            runtime
        });
}

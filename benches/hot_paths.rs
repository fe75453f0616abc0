//! Benchmarks for the per-keystroke hot paths
//!
//! - typing into a line (insert + cursor move)
//! - keyword classification of a single line
//! - building the colored render sequence
//!
//! Run with: cargo bench hot_paths

use quill::messages::{EditCommand, Msg};
use quill::model::{AppModel, Cursor, EditorState};
use quill::render_feed::render_feed;
use quill::syntax::{classify_line, default_keywords};
use quill::theme::ColorScheme;
use quill::update::update;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const SAMPLE_LINE: &str = "for (unsigned int i = 0; i < n; i++) { char c = buf[i]; printf(c); }";

fn long_line(repeats: usize) -> String {
    SAMPLE_LINE.repeat(repeats)
}

// ============================================================================
// Editing
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn type_chars(bencher: divan::Bencher, count: usize) {
    bencher
        .with_inputs(AppModel::default)
        .bench_local_values(|mut model| {
            for _ in 0..count {
                update(&mut model, Msg::Edit(EditCommand::InsertChar('x')));
            }
            divan::black_box(model)
        });
}

#[divan::bench(args = [100, 1000])]
fn split_and_join(bencher: divan::Bencher, lines: usize) {
    let text = vec![SAMPLE_LINE; lines].join("\n");
    bencher
        .with_inputs(|| EditorState::with_text(&text, Cursor::new(lines / 2, 20)))
        .bench_local_values(|mut editor| {
            editor.new_line();
            editor.delete_before();
            divan::black_box(editor)
        });
}

// ============================================================================
// Classification and rendering
// ============================================================================

#[divan::bench(args = [1, 10, 100])]
fn classify(bencher: divan::Bencher, repeats: usize) {
    let line = long_line(repeats);
    let keywords = default_keywords();
    bencher.bench_local(|| divan::black_box(classify_line(line.as_bytes(), &keywords)));
}

#[divan::bench(args = [1, 10, 100])]
fn render_sequence(bencher: divan::Bencher, repeats: usize) {
    let line = long_line(repeats);
    let keywords = default_keywords();
    let scheme = ColorScheme::default();
    let spans = classify_line(line.as_bytes(), &keywords);
    bencher.bench_local(|| divan::black_box(render_feed(line.as_bytes(), &spans, &scheme)));
}

#[divan::bench]
fn current_line_after_edit(bencher: divan::Bencher) {
    let mut model = AppModel::default();
    model.editor = EditorState::with_text(&long_line(10), Cursor::new(0, 0));
    bencher.bench_local(|| {
        update(&mut model, Msg::Edit(EditCommand::MoveRight));
        divan::black_box(model.current_line_render_sequence())
    });
}

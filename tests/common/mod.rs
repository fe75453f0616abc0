//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use quill::config::EditorConfig;
use quill::messages::{EditCommand, Msg};
use quill::model::{AppModel, Cursor, EditorState};
use quill::theme::ColorScheme;
use quill::update::update;
use quill::Cmd;

/// Create a test model with given text and cursor position
pub fn test_model(text: &str, row: usize, col: usize) -> AppModel {
    let mut model = AppModel::new(EditorConfig::default(), ColorScheme::default(), (800, 600));
    model.editor = EditorState::with_text(text, Cursor::new(row, col));
    model
}

/// Helper to get buffer content as string
pub fn buffer_to_string(model: &AppModel) -> String {
    model.editor.buffer.to_string()
}

pub fn cursor(model: &AppModel) -> (usize, usize) {
    model.cursor_position()
}

/// Apply one edit command through the update loop
pub fn apply(model: &mut AppModel, command: EditCommand) -> Option<Cmd> {
    update(model, Msg::Edit(command))
}

/// Type a string one character at a time (`\n` becomes NewLine)
pub fn type_text(model: &mut AppModel, text: &str) {
    for ch in text.chars() {
        let command = if ch == '\n' {
            EditCommand::NewLine
        } else {
            EditCommand::InsertChar(ch)
        };
        apply(model, command);
    }
}

/// Assert the buffer/cursor invariants hold
pub fn assert_valid(model: &AppModel) {
    let editor = &model.editor;
    assert!(editor.buffer.line_count() >= 1, "buffer lost its last line");
    assert!(
        editor.cursor.is_valid_in(&editor.buffer),
        "cursor {:?} invalid for buffer {:?}",
        editor.cursor,
        buffer_to_string(model)
    );
}

/// Every valid cursor position in `text`
pub fn all_positions(text: &str) -> Vec<(usize, usize)> {
    text.split('\n')
        .enumerate()
        .flat_map(|(row, line)| (0..=line.len()).map(move |col| (row, col)))
        .collect()
}

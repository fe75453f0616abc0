//! Editor state - the buffer, its cursor, and the edit operations over both
//!
//! Every edit is built from the buffer primitives plus cursor navigation.
//! Preconditions for the primitives are checked here, so the buffer never
//! sees an out-of-range position.

use super::buffer::{Buffer, Line};
use super::cursor::Cursor;

/// Default number of spaces inserted by a tab
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// True if `ch` can be stored in a line (single-byte, non-NUL)
#[inline]
pub fn is_representable(ch: char) -> bool {
    ch.is_ascii() && ch != '\0'
}

/// Editing session state: one buffer and the cursor moving through it
#[derive(Debug, Clone)]
pub struct EditorState {
    pub buffer: Buffer,
    pub cursor: Cursor,
    /// Tracked and toggled, but not applied to inserted characters
    pub caps_lock: bool,
    pub tab_width: usize,
}

impl EditorState {
    /// Create an editor with one empty line and the cursor at (0, 0)
    pub fn new() -> Self {
        Self::with_tab_width(DEFAULT_TAB_WIDTH)
    }

    pub fn with_tab_width(tab_width: usize) -> Self {
        Self {
            buffer: Buffer::new(),
            cursor: Cursor::zero(),
            caps_lock: false,
            tab_width,
        }
    }

    /// Create an editor over existing text with the cursor at `cursor`.
    ///
    /// The cursor is clamped into the buffer.
    pub fn with_text(text: &str, cursor: Cursor) -> Self {
        let buffer = Buffer::from_text(text);
        let row = cursor.row.min(buffer.line_count() - 1);
        let col = cursor.col.min(buffer.line_length(row));
        Self {
            buffer,
            cursor: Cursor::new(row, col),
            caps_lock: false,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    /// Current cursor position as (row, col)
    #[inline]
    pub fn cursor_position(&self) -> (usize, usize) {
        (self.cursor.row, self.cursor.col)
    }

    /// Character codes of the line holding the cursor
    pub fn current_line_text(&self) -> &[u8] {
        self.buffer
            .line(self.cursor.row)
            .map(Line::as_bytes)
            .unwrap_or_default()
    }

    pub fn move_up(&mut self) {
        self.cursor.move_up(&self.buffer);
    }

    pub fn move_down(&mut self) {
        self.cursor.move_down(&self.buffer);
    }

    pub fn move_left(&mut self) {
        self.cursor.move_left(&self.buffer);
    }

    pub fn move_right(&mut self) {
        self.cursor.move_right(&self.buffer);
    }

    /// Insert `ch` before the cursor and advance past it.
    ///
    /// Returns false (and changes nothing) if `ch` is not representable.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if !is_representable(ch) {
            tracing::trace!(?ch, "ignoring unrepresentable character");
            return false;
        }
        self.buffer.insert_at(self.cursor.row, self.cursor.col, ch as u8);
        self.move_right();
        true
    }

    /// Delete the character before the cursor (Backspace).
    ///
    /// At column 0 the line is joined onto the previous one and the cursor
    /// lands on the join point. At (0, 0) nothing happens.
    pub fn delete_before(&mut self) {
        let Cursor { row, col } = self.cursor;
        if col > 0 {
            self.buffer.delete_at(row, col);
            self.move_left();
        } else if row > 0 {
            let prev_len = self.buffer.line_length(row - 1);
            self.buffer.join_with_previous(row);
            self.move_up();
            self.cursor.col = prev_len;
        }
    }

    /// Split the line at the cursor and move to the start of the new line
    pub fn new_line(&mut self) {
        self.buffer.split_at(self.cursor.row, self.cursor.col);
        self.move_down();
        self.cursor.col = 0;
    }

    /// Insert `tab_width` spaces
    pub fn insert_tab(&mut self) {
        for _ in 0..self.tab_width {
            self.insert_char(' ');
        }
    }

    pub fn toggle_caps_lock(&mut self) {
        self.caps_lock = !self.caps_lock;
    }

    /// Assert buffer/cursor invariants (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        debug_assert!(self.buffer.line_count() >= 1, "Buffer must keep one line");
        debug_assert!(
            self.cursor.is_valid_in(&self.buffer),
            "Cursor {:?} out of bounds (lines: {}, line length: {})",
            self.cursor,
            self.buffer.line_count(),
            self.buffer.line_length(self.cursor.row)
        );
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

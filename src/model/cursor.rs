//! Cursor position and navigation
//!
//! All cursor movement goes through the four `move_*` transitions, which are
//! total: at a buffer edge they leave the cursor unchanged.

use super::buffer::Buffer;

/// An edit position (row and column, both 0-indexed).
///
/// `col` may equal the line length, meaning "after the last character".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const fn zero() -> Self {
        Self { row: 0, col: 0 }
    }

    /// True if the cursor addresses a valid position in `buffer`
    pub fn is_valid_in(&self, buffer: &Buffer) -> bool {
        self.row < buffer.line_count() && self.col <= buffer.line_length(self.row)
    }

    /// Clamp the column to the current line's length
    fn clamp_col(&mut self, buffer: &Buffer) {
        self.col = self.col.min(buffer.line_length(self.row));
    }

    /// Move to the next row, keeping the column where the line allows
    pub fn move_down(&mut self, buffer: &Buffer) {
        if self.row + 1 < buffer.line_count() {
            self.row += 1;
            self.clamp_col(buffer);
        }
    }

    /// Move to the previous row, keeping the column where the line allows
    pub fn move_up(&mut self, buffer: &Buffer) {
        if self.row > 0 {
            self.row -= 1;
            self.clamp_col(buffer);
        }
    }

    /// Move one character right; at line end, fall through to `move_down`
    pub fn move_right(&mut self, buffer: &Buffer) {
        if self.col < buffer.line_length(self.row) {
            self.col += 1;
        } else {
            self.move_down(buffer);
        }
    }

    /// Move one character left; at column 0, wrap to the end of the previous line
    pub fn move_left(&mut self, buffer: &Buffer) {
        if self.col > 0 {
            self.col -= 1;
        } else {
            let old_row = self.row;
            self.move_up(buffer);
            if self.row != old_row {
                self.col = buffer.line_length(self.row);
            }
        }
    }
}

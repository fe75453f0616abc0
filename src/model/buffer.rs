//! Line-oriented character buffer
//!
//! A `Buffer` is an ordered list of `Line`s, each an ordered list of single-byte
//! character codes. The buffer always holds at least one line.
//!
//! The four primitive mutators (`insert_at`, `delete_at`, `split_at`,
//! `join_with_previous`) do not clamp their arguments. Callers validate
//! positions first; see `EditorState` for the edit operations built on them.

use std::fmt;

use super::editor::is_representable;

/// One row of text as single-byte character codes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    chars: Vec<u8>,
}

impl Line {
    pub fn new() -> Self {
        Self { chars: Vec::new() }
    }

    /// Create a line from raw character codes
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            chars: bytes.to_vec(),
        }
    }

    /// Number of characters in the line
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character codes in visual left-to-right order
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }

}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &code in &self.chars {
            write!(f, "{}", char::from(code))?;
        }
        Ok(())
    }
}

/// Ordered sequence of lines; index is the row number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<Line>,
}

impl Buffer {
    /// Create a buffer holding a single empty line
    pub fn new() -> Self {
        Self {
            lines: vec![Line::new()],
        }
    }

    /// Build a buffer from text, one line per `\n`-separated segment.
    ///
    /// An empty string yields one empty line. Characters the editor cannot
    /// insert (non-ASCII, NUL) are dropped.
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|segment| {
                let bytes: Vec<u8> = segment
                    .chars()
                    .filter(|&ch| is_representable(ch))
                    .map(|ch| ch as u8)
                    .collect();
                Line::from_bytes(&bytes)
            })
            .collect();
        Self { lines }
    }

    /// Number of lines (always >= 1)
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Line at `row`, None if out of bounds
    pub fn line(&self, row: usize) -> Option<&Line> {
        self.lines.get(row)
    }

    /// Length of the line at `row`, 0 if out of bounds
    pub fn line_length(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, Line::len)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Total number of characters across all lines (line breaks excluded)
    pub fn char_count(&self) -> usize {
        self.lines.iter().map(Line::len).sum()
    }

    /// Insert `ch` into line `row` at index `col`.
    ///
    /// Requires `col <= line_length(row)`.
    pub fn insert_at(&mut self, row: usize, col: usize, ch: u8) {
        self.lines[row].chars.insert(col, ch);
    }

    /// Remove the character immediately before index `col` in line `row`.
    ///
    /// Requires `1 <= col <= line_length(row)`.
    pub fn delete_at(&mut self, row: usize, col: usize) {
        self.lines[row].chars.remove(col - 1);
    }

    /// Move `line[row][col..]` onto a new line inserted after `row`.
    pub fn split_at(&mut self, row: usize, col: usize) {
        let suffix = self.lines[row].chars.split_off(col);
        self.lines.insert(row + 1, Line { chars: suffix });
    }

    /// Append line `row` to line `row - 1` and remove it. Requires `row >= 1`.
    pub fn join_with_previous(&mut self, row: usize) {
        let removed = self.lines.remove(row);
        self.lines[row - 1].chars.extend_from_slice(&removed.chars);
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

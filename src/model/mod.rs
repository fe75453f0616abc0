//! Application model - the complete state of the editor
//!
//! The model owns the single editing session, the color scheme loaded at
//! startup, and the configuration. It is only mutated through `update`.

pub mod buffer;
pub mod cursor;
pub mod editor;

pub use buffer::{Buffer, Line};
pub use cursor::Cursor;
pub use editor::{is_representable, EditorState, DEFAULT_TAB_WIDTH};

use crate::config::EditorConfig;
use crate::render_feed::{render_feed, EditorChar};
use crate::syntax::classify_line;
use crate::theme::ColorScheme;

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    pub editor: EditorState,
    /// Read-only after startup
    pub scheme: ColorScheme,
    pub config: EditorConfig,
    /// Window size in physical pixels
    pub window_size: (u32, u32),
}

impl AppModel {
    /// Create a model with an empty buffer
    pub fn new(config: EditorConfig, scheme: ColorScheme, window_size: (u32, u32)) -> Self {
        Self {
            editor: EditorState::with_tab_width(config.tab_width),
            scheme,
            config,
            window_size,
        }
    }

    /// Replace the window size
    pub fn resize(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
    }

    /// Cursor position as (row, col), for caret rendering
    pub fn cursor_position(&self) -> (usize, usize) {
        self.editor.cursor_position()
    }

    /// Colored characters of the line at `row` (empty if out of bounds)
    pub fn line_render_sequence(&self, row: usize) -> Vec<EditorChar> {
        let Some(line) = self.editor.buffer.line(row) else {
            return Vec::new();
        };
        let text = line.as_bytes();
        let spans = classify_line(text, &self.config.keywords);
        render_feed(text, &spans, &self.scheme)
    }

    /// Colored characters of the line holding the cursor
    pub fn current_line_render_sequence(&self) -> Vec<EditorChar> {
        self.line_render_sequence(self.editor.cursor.row)
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(EditorConfig::default(), ColorScheme::default(), (800, 600))
    }
}

//! Resolve tagged spans into colored characters for the renderer

use crate::syntax::TaggedSpan;
use crate::theme::{Color, ColorScheme};

/// A character paired with its display color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorChar {
    pub ch: u8,
    pub color: Color,
}

impl EditorChar {
    pub const fn new(ch: u8, color: Color) -> Self {
        Self { ch, color }
    }
}

/// Color every character of `text` by the span covering it.
///
/// Columns not covered by any span get the plain text color, so the output
/// always has one entry per character of `text`.
pub fn render_feed(text: &[u8], spans: &[TaggedSpan], scheme: &ColorScheme) -> Vec<EditorChar> {
    let plain = scheme.editor.foreground;
    let mut chars: Vec<EditorChar> = text.iter().map(|&ch| EditorChar::new(ch, plain)).collect();

    for span in spans {
        let color = scheme.color_for_role(span.kind.role());
        let end = span.end.min(chars.len());
        let start = span.start.min(end);
        for editor_char in &mut chars[start..end] {
            editor_char.color = color;
        }
    }

    chars
}

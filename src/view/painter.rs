//! Glyph rasterization onto a canvas

use fontdue::Font;

use quill::canvas::Canvas;
use quill::render_feed::EditorChar;

use super::GlyphCache;

/// Text rendering context wrapping font and glyph cache.
pub struct TextPainter<'a> {
    font: &'a Font,
    glyph_cache: &'a mut GlyphCache,
    font_size: f32,
    ascent: f32,
    char_width: f32,
}

impl<'a> TextPainter<'a> {
    pub fn new(
        font: &'a Font,
        glyph_cache: &'a mut GlyphCache,
        font_size: f32,
        ascent: f32,
        char_width: f32,
    ) -> Self {
        Self {
            font,
            glyph_cache,
            font_size,
            ascent,
            char_width,
        }
    }

    /// Draw colored characters on one monospace row starting at (x, y)
    pub fn draw_chars(&mut self, canvas: &mut Canvas, x: usize, y: usize, chars: &[EditorChar]) {
        let baseline = y as f32 + self.ascent;

        for (col, editor_char) in chars.iter().enumerate() {
            let ch = char::from(editor_char.ch);
            let color = editor_char.color.to_argb_u32();
            let key = (ch, self.font_size.to_bits());

            let (metrics, bitmap) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| self.font.rasterize(ch, self.font_size));

            let glyph_left = x as f32 + col as f32 * self.char_width + metrics.xmin as f32;
            let glyph_top = baseline - metrics.height as f32 - metrics.ymin as f32;

            for bitmap_y in 0..metrics.height {
                for bitmap_x in 0..metrics.width {
                    let alpha = bitmap[bitmap_y * metrics.width + bitmap_x];
                    if alpha > 0 {
                        canvas.blend_pixel(
                            (glyph_left + bitmap_x as f32) as isize,
                            (glyph_top + bitmap_y as f32) as isize,
                            color,
                            alpha as f32 / 255.0,
                        );
                    }
                }
            }
        }
    }
}

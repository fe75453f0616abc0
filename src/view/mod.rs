//! Window rendering with softbuffer and fontdue
//!
//! Every line is classified and colored through the model's render sequence,
//! painted into a `Canvas`, then copied to the window surface.

mod painter;

use std::collections::HashMap;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{anyhow, Context as _, Result};
use fontdue::{Font, FontSettings, Metrics};
use softbuffer::{Context, Surface};
use winit::window::Window;

use quill::canvas::Canvas;
use quill::model::AppModel;

use painter::TextPainter;

// Glyph cache key: (character, font_size as bits)
type GlyphCacheKey = (char, u32);
pub(crate) type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

/// Left/top padding around the text area (pixels)
const TEXT_PADDING_PX: usize = 8;
/// Width of the caret bar (pixels)
const CARET_WIDTH_PX: usize = 2;

/// Monospace fonts tried when no font is configured
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu-sans-mono-fonts/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/System/Library/Fonts/Menlo.ttc",
    "/System/Library/Fonts/Monaco.ttf",
    "C:\\Windows\\Fonts\\consola.ttf",
];

/// Load the configured font, or the first system candidate that parses
fn load_font(configured: Option<&Path>) -> Result<Font> {
    let candidates: Vec<PathBuf> = match configured {
        Some(path) => vec![path.to_path_buf()],
        None => FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
    };

    for path in &candidates {
        let Ok(bytes) = std::fs::read(path) else {
            continue;
        };
        match Font::from_bytes(bytes, FontSettings::default()) {
            Ok(font) => {
                tracing::info!("Loaded font from {}", path.display());
                return Ok(font);
            }
            Err(e) => tracing::warn!("Failed to parse font {}: {}", path.display(), e),
        }
    }

    Err(anyhow!(
        "No usable font found (tried: {})",
        candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    ))
}

pub struct Renderer {
    font: Font,
    surface: Surface<Rc<Window>, Rc<Window>>,
    /// Persistent back buffer; softbuffer does not preserve surface contents
    canvas: Canvas,
    font_size: f32,
    ascent: f32,
    line_height: usize,
    char_width: f32,
    glyph_cache: GlyphCache,
}

impl Renderer {
    /// Create the surface, back buffer and font for `window`
    pub fn new(
        window: Rc<Window>,
        context: &Context<Rc<Window>>,
        model: &AppModel,
    ) -> Result<Self> {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();

        let surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create surface: {}", e))?;

        let font = load_font(model.config.font_path.as_deref())?;
        let font_size = model.config.font_size * scale_factor as f32;

        let line_metrics = font
            .horizontal_line_metrics(font_size)
            .context("Font missing horizontal line metrics")?;
        let (metrics, _) = font.rasterize('M', font_size);

        let mut renderer = Self {
            font,
            surface,
            canvas: Canvas::new(size.width.max(1), size.height.max(1))?,
            font_size,
            ascent: line_metrics.ascent,
            line_height: line_metrics.new_line_size.ceil() as usize,
            char_width: metrics.advance_width,
            glyph_cache: HashMap::new(),
        };
        renderer.resize(size.width, size.height)?;
        Ok(renderer)
    }

    /// Resize the surface and replace the back buffer
    ///
    /// Zero dimensions (minimized windows) are treated as 1x1.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let width = NonZeroU32::new(width).unwrap_or(NonZeroU32::MIN);
        let height = NonZeroU32::new(height).unwrap_or(NonZeroU32::MIN);

        self.surface
            .resize(width, height)
            .map_err(|e| anyhow!("Failed to resize surface: {}", e))?;
        self.canvas = self.canvas.resize(width.get(), height.get())?;
        tracing::debug!("Resized canvas to {}x{}", width, height);
        Ok(())
    }

    /// Paint the model and present it
    pub fn render(&mut self, model: &AppModel) -> Result<()> {
        let scheme = &model.scheme;
        let (cursor_row, cursor_col) = model.cursor_position();
        let line_height = self.line_height.max(1);

        self.canvas.clear(scheme.editor.background.to_argb_u32());

        let visible_lines = self.canvas.height().saturating_sub(TEXT_PADDING_PX) / line_height;
        // Keep the cursor row on screen
        let top_row = (cursor_row + 1).saturating_sub(visible_lines.max(1));

        {
            let mut painter = TextPainter::new(
                &self.font,
                &mut self.glyph_cache,
                self.font_size,
                self.ascent,
                self.char_width,
            );

            let rows = top_row..model.editor.buffer.line_count().min(top_row + visible_lines + 1);
            for (screen_row, row) in rows.enumerate() {
                let y = TEXT_PADDING_PX + screen_row * line_height;

                if row == cursor_row {
                    self.canvas.fill_rect(
                        0,
                        y,
                        self.canvas.width(),
                        line_height,
                        scheme.editor.current_line_background.to_argb_u32(),
                    );
                }

                let chars = model.line_render_sequence(row);
                painter.draw_chars(&mut self.canvas, TEXT_PADDING_PX, y, &chars);

                if row == cursor_row {
                    let caret_x =
                        TEXT_PADDING_PX + (cursor_col as f32 * self.char_width).round() as usize;
                    self.canvas.fill_rect(
                        caret_x,
                        y,
                        CARET_WIDTH_PX,
                        line_height,
                        scheme.editor.cursor.to_argb_u32(),
                    );
                }
            }
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow!("Failed to get surface buffer: {}", e))?;
        let len = buffer.len().min(self.canvas.pixels().len());
        buffer[..len].copy_from_slice(&self.canvas.pixels()[..len]);
        buffer
            .present()
            .map_err(|e| anyhow!("Failed to present buffer: {}", e))?;

        Ok(())
    }
}

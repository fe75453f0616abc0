//! Pixel back buffer for drawing
//!
//! A `Canvas` owns an ARGB (0xAARRGGBB) pixel buffer. Resizing produces a new
//! canvas; there is no shared surface state. Drawing outside the canvas is
//! clipped.

use anyhow::{bail, Result};

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Returns the blended color with full opacity (alpha = 0xFF).
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// An owned pixel buffer with fixed dimensions
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: Vec<u32>,
    width: usize,
    height: usize,
}

impl Canvas {
    /// Allocate a canvas of `width` x `height` pixels, cleared to black.
    ///
    /// Fails for zero-sized or overflowing dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            bail!("Cannot create a {}x{} canvas", width, height);
        }
        let (width, height) = (width as usize, height as usize);
        let Some(len) = width.checked_mul(height) else {
            bail!("Canvas size {}x{} overflows", width, height);
        };
        Ok(Self {
            pixels: vec![0xFF000000; len],
            width,
            height,
        })
    }

    /// A fresh canvas with new dimensions; this one is left untouched
    pub fn resize(&self, width: u32, height: u32) -> Result<Canvas> {
        Canvas::new(width, height)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Fill a rectangle specified by pixel coordinates
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        let x0 = x.min(self.width);
        let y0 = y.min(self.height);
        let x1 = x.saturating_add(w).min(self.width);
        let y1 = y.saturating_add(h).min(self.height);

        for py in y0..y1 {
            let row_start = py * self.width;
            self.pixels[row_start + x0..row_start + x1].fill(color);
        }
    }

    /// Get pixel color at (x, y); 0 if out of bounds
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x]
        } else {
            0
        }
    }

    /// Blend `color` onto the pixel at (x, y) with coverage `alpha` (0.0..=1.0)
    #[inline]
    pub fn blend_pixel(&mut self, x: isize, y: isize, color: u32, alpha: f32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            let idx = y * self.width + x;
            self.pixels[idx] = blend_colors(self.pixels[idx], color, alpha);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_fails() {
        assert!(Canvas::new(0, 10).is_err());
        assert!(Canvas::new(10, 0).is_err());
    }

    #[test]
    fn test_resize_returns_new_canvas() {
        let canvas = Canvas::new(4, 4).unwrap();
        let resized = canvas.resize(8, 2).unwrap();
        assert_eq!((resized.width(), resized.height()), (8, 2));
        assert_eq!(resized.pixels().len(), 16);
        assert_eq!((canvas.width(), canvas.height()), (4, 4));
        assert!(canvas.resize(0, 0).is_err());
    }

    #[test]
    fn test_fill_rect_is_clipped() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.fill_rect(2, 2, 10, 10, 0xFFFFFFFF);
        assert_eq!(canvas.get_pixel(3, 3), 0xFFFFFFFF);
        assert_eq!(canvas.get_pixel(1, 1), 0xFF000000);
    }

    #[test]
    fn test_blend_pixel() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.blend_pixel(0, 0, 0xFFFFFFFF, 1.0);
        assert_eq!(canvas.get_pixel(0, 0), 0xFFFFFFFF);
        canvas.blend_pixel(-1, 0, 0xFFFFFFFF, 1.0);
        canvas.blend_pixel(5, 5, 0xFFFFFFFF, 1.0);
    }

    #[test]
    fn test_blend_colors_half() {
        let blended = blend_colors(0xFF000000, 0xFFFEFEFE, 0.5);
        assert_eq!(blended, 0xFF7F7F7F);
    }
}

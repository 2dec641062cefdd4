//! Low-level drawing primitives.
//!
//! Provides the [`Renderer`] struct which owns the color buffer and implements
//! basic drawing operations like pixels, rectangles, lines and gradients.

use crate::colors;

pub struct Renderer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND_TOP; size],
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let size = (width * height) as usize;
        self.color_buffer = vec![colors::BACKGROUND_TOP; size];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = (y as u32 * self.width + x as u32) as usize;
            self.color_buffer[index] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// Paint `color` over the existing pixel at the given opacity.
    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: u32, alpha: f32) {
        if let Some(dst) = self.get_pixel(x, y) {
            self.set_pixel(x, y, colors::blend(dst, color, alpha));
        }
    }

    #[inline]
    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) {
        for dy in 0..height {
            for dx in 0..width {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Horizontal span `[x0, x1)` on row `y`.
    #[inline]
    pub fn draw_hline(&mut self, x0: i32, x1: i32, y: i32, color: u32) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(self.width as i32);
        if x0 >= x1 {
            return;
        }
        let row = (y as u32 * self.width) as usize;
        self.color_buffer[row + x0 as usize..row + x1 as usize].fill(color);
    }

    /// Full-width translucent line, used for the reference grid.
    pub fn blend_hline(&mut self, y: i32, color: u32, alpha: f32) {
        for x in 0..self.width as i32 {
            self.blend_pixel(x, y, color, alpha);
        }
    }

    /// Fill the whole buffer with a top-to-bottom gradient.
    pub fn fill_vertical_gradient(&mut self, top: u32, bottom: u32) {
        let span = self.height.saturating_sub(1).max(1) as f32;
        for y in 0..self.height as i32 {
            let color = colors::lerp(top, bottom, y as f32 / span);
            self.draw_hline(0, self.width as i32, y, color);
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.color_buffer
    }

    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and u8 has alignment 1; the slice covers
        // exactly the buffer's bytes and borrows self.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut renderer = Renderer::new(4, 4);
        renderer.clear(0);
        renderer.set_pixel(-1, 0, 1);
        renderer.set_pixel(4, 0, 1);
        renderer.draw_hline(-5, 10, 9, 1);
        assert!(renderer.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn hline_is_clipped() {
        let mut renderer = Renderer::new(4, 2);
        renderer.clear(0);
        renderer.draw_hline(-2, 2, 1, 7);
        assert_eq!(renderer.pixels(), &[0, 0, 0, 0, 7, 7, 0, 0]);
    }

    #[test]
    fn gradient_spans_both_colors() {
        let mut renderer = Renderer::new(2, 3);
        renderer.fill_vertical_gradient(colors::BACKGROUND_TOP, colors::BACKGROUND_BOTTOM);
        assert_eq!(renderer.get_pixel(0, 0), Some(colors::BACKGROUND_TOP));
        assert_eq!(renderer.get_pixel(1, 2), Some(colors::BACKGROUND_BOTTOM));
    }

    #[test]
    fn bytes_cover_whole_buffer() {
        let renderer = Renderer::new(3, 2);
        assert_eq!(renderer.as_bytes().len(), 3 * 2 * 4);
    }
}

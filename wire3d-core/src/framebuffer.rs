/// Pixel sink abstraction and an in-memory framebuffer
use crate::color::Color;

/// The rectangular pixel destination the rasterizer writes into. Origin is
/// the top-left corner with y growing downward; the background color is the
/// blend target for anti-aliased writes.
pub trait PixelSink {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn set_pixel(&mut self, x: usize, y: usize, color: Color);
    fn get_pixel(&self, x: usize, y: usize) -> Color;
    fn background(&self) -> Color;
}

/// A plain RGBA framebuffer. How (or whether) it reaches a display or a
/// file is up to the caller.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    background: Color,
    pixels: Vec<Color>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_background(width, height, Color::BLACK)
    }

    pub fn with_background(width: usize, height: usize, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            pixels: vec![background; width * height],
        }
    }

    /// Reset every pixel to the background color.
    pub fn clear(&mut self) {
        self.pixels.fill(self.background);
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }
}

impl PixelSink for FrameBuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    fn get_pixel(&self, x: usize, y: usize) -> Color {
        self.pixels[self.index(x, y)]
    }

    fn background(&self) -> Color {
        self.background
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_background_colored() {
        let fb = FrameBuffer::with_background(4, 3, Color::BLUE);
        assert_eq!(fb.width(), 4);
        assert_eq!(fb.height(), 3);
        assert_eq!(fb.get_pixel(0, 0), Color::BLUE);
        assert_eq!(fb.get_pixel(3, 2), Color::BLUE);
        assert_eq!(fb.background(), Color::BLUE);
    }

    #[test]
    fn test_set_get_round_trip_and_clear() {
        let mut fb = FrameBuffer::new(8, 8);
        fb.set_pixel(5, 2, Color::RED);
        assert_eq!(fb.get_pixel(5, 2), Color::RED);
        fb.clear();
        assert_eq!(fb.get_pixel(5, 2), Color::BLACK);
    }
}

//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a view into the color buffer that only writes inside one
//! viewport rectangle, plus the mapping from the screen-centred y-up system
//! to device pixels.

use crate::math::Vec2;

/// A rectangle of device pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ViewRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Pixel bounds as `(min_x, min_y, max_x, max_y)`, max inclusive.
    pub fn bounds(&self) -> (i32, i32, i32, i32) {
        let min_x = self.x as i32;
        let min_y = self.y as i32;
        (
            min_x,
            min_y,
            min_x + self.width as i32 - 1,
            min_y + self.height as i32 - 1,
        )
    }

    /// Maps a screen-centred, y-up point to device pixel coordinates.
    #[inline]
    pub fn to_pixel(&self, point: Vec2) -> (f32, f32) {
        let middle_x = self.x as f32 + self.width as f32 / 2.0;
        let middle_y = self.y as f32 + self.height as f32 / 2.0;
        (middle_x + point.x, middle_y - point.y)
    }
}

/// A view into a color buffer restricted to one viewport.
///
/// Wraps a 1D slice with width/height metadata to enable safe 2D pixel access.
/// This is a borrowed view, not an owning type; it's meant to be created
/// temporarily for one viewport of one frame.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [u32],
    width: u32,
    viewport: ViewRect,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view.
    ///
    /// The viewport is intersected with the buffer, so writes never land
    /// outside either.
    ///
    /// # Panics
    /// Panics in debug builds if the buffer length doesn't match width * height
    pub fn new(color_buffer: &'a mut [u32], width: u32, height: u32, viewport: ViewRect) -> Self {
        debug_assert_eq!(
            color_buffer.len(),
            (width * height) as usize,
            "Color buffer size doesn't match dimensions"
        );
        let x = viewport.x.min(width);
        let y = viewport.y.min(height);
        let viewport = ViewRect {
            x,
            y,
            width: viewport.width.min(width - x),
            height: viewport.height.min(height - y),
        };
        Self {
            color_buffer,
            width,
            viewport,
        }
    }

    pub fn viewport(&self) -> ViewRect {
        self.viewport
    }

    #[inline]
    fn contains(&self, x: i32, y: i32) -> bool {
        let (min_x, min_y, max_x, max_y) = self.viewport.bounds();
        x >= min_x && x <= max_x && y >= min_y && y <= max_y
    }

    /// Set a pixel. Silently ignores coordinates outside the viewport.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if self.contains(x, y) {
            self.color_buffer[(y as u32 * self.width + x as u32) as usize] = color;
        }
    }

    /// Fill the pixels `x_start..x_end` of row `y`, clamped to the viewport.
    #[inline]
    pub fn fill_span(&mut self, y: i32, x_start: i32, x_end: i32, color: u32) {
        let (min_x, min_y, max_x, max_y) = self.viewport.bounds();
        if y < min_y || y > max_y {
            return;
        }
        let start = x_start.max(min_x);
        let end = x_end.min(max_x + 1);
        if start >= end {
            return;
        }
        let row = (y as u32 * self.width) as usize;
        self.color_buffer[row + start as usize..row + end as usize].fill(color);
    }

    /// Get the color at (x, y), or None if outside the viewport.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if self.contains(x, y) {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }
}

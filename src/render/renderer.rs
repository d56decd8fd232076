//! Low-level rendering primitives.
//!
//! Provides the [`Renderer`] struct which owns the color buffer and draws
//! projected [`Frame`]s into rectangular viewports of it.

use std::path::Path;

use log::debug;

use super::framebuffer::{FrameBuffer, ViewRect};
use super::raster;
use crate::colors::{self, Color};
use crate::engine::Frame;
use crate::error::Result;

pub struct Renderer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND; size],
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let size = (width * height) as usize;
        self.color_buffer = vec![colors::BACKGROUND; size];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The whole buffer as one viewport.
    pub fn full_rect(&self) -> ViewRect {
        ViewRect::new(0, 0, self.width, self.height)
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    pub fn pixels(&self) -> &[u32] {
        &self.color_buffer
    }

    pub fn as_bytes(&self) -> &[u8] {
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Get a mutable FrameBuffer view restricted to `rect`.
    pub fn as_framebuffer(&mut self, rect: ViewRect) -> FrameBuffer<'_> {
        FrameBuffer::new(&mut self.color_buffer, self.width, self.height, rect)
    }

    /// Draws `frame` into `rect`: sky and ground first, then polygons, line
    /// segments and dots, each in frame order. Later primitives overwrite
    /// earlier ones; there is no depth test.
    pub fn draw_frame(&mut self, frame: &Frame, rect: ViewRect, dot_color: Color) {
        let mut fb = self.as_framebuffer(rect);

        if let Some(horizon) = &frame.horizon {
            raster::fill_polygon(&mut fb, &horizon.sky.points, horizon.sky.color.to_argb());
            raster::fill_polygon(&mut fb, &horizon.ground.points, horizon.ground.color.to_argb());
        }

        for polygon in &frame.polygons {
            raster::fill_polygon(&mut fb, &polygon.points, polygon.color.to_argb());
        }

        for segment in &frame.segments {
            raster::draw_line(&mut fb, segment.start, segment.end, segment.color.to_argb());
        }

        // Dots are single pixels.
        let dot = dot_color.to_argb();
        let viewport = fb.viewport();
        let (min_x, min_y, max_x, max_y) = viewport.bounds();
        for &point in &frame.dots {
            let (x, y) = viewport.to_pixel(point);
            let (x, y) = (x.floor(), y.floor());
            // Reject off-viewport dots before the integer cast; NaN fails too.
            let inside_x = x >= min_x as f32 && x <= max_x as f32;
            let inside_y = y >= min_y as f32 && y <= max_y as f32;
            if inside_x && inside_y {
                fb.set_pixel(x as i32, y as i32, dot);
            }
        }
    }

    /// Writes the color buffer to `path` as an opaque image. The format is
    /// picked from the file extension.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let image = image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let argb = self.color_buffer[(y * self.width + x) as usize];
            image::Rgba([(argb >> 16) as u8, (argb >> 8) as u8, argb as u8, 0xFF])
        });
        image.save(path)?;
        debug!("wrote {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

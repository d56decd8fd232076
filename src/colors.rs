//! Colors carried alongside scene geometry.
//!
//! The projection pipeline never looks inside a [`Color`]; only the raster
//! backend converts it to a packed ARGB8888 pixel.

use serde::{Deserialize, Serialize};

/// An opaque RGB triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs the color as an opaque ARGB8888 pixel.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        0xFF00_0000 | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

pub const SKY_BLUE: Color = Color::rgb(135, 206, 235);
pub const LAKE_BLUE: Color = Color::rgb(0x5e, 0x8f, 0xc7);
pub const GRASS_GREEN: Color = Color::rgb(72, 111, 56);
pub const WHITE_STRIPE: Color = Color::rgb(200, 200, 200);
pub const DARK_GRAY: Color = Color::rgb(50, 50, 50);
pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const WHITE: Color = Color::rgb(255, 255, 255);

/// Background used to clear the color buffer before each frame.
pub const BACKGROUND: u32 = 0xFF1E1E1E;

//! Runtime configuration.
//!
//! Every field has a default, so a config file only needs to name what it
//! changes. Validation happens once, at setup; a [`Config`] that passed
//! [`Config::validate`] never causes a per-frame failure.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::camera::DEFAULT_FOCAL_PLANE;
use crate::colors::{self, Color};
use crate::error::{Error, Result};
use crate::viewport::ViewAngle;

/// Projection parameters shared by every viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Distance to the projection plane, in pixels per camera-space unit.
    pub zoom: f32,
    /// Near-clip distance.
    pub focal_plane: f32,
    /// Height of the eye above the aircraft position, in metres.
    pub eye_height: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            zoom: 500.0,
            focal_plane: DEFAULT_FOCAL_PLANE,
            eye_height: 3.0,
        }
    }
}

/// Flat colors for the fills and the scene content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub sky: Color,
    pub ground: Color,
    pub lake: Color,
    pub runway: Color,
    pub stripe: Color,
    pub building: Color,
    pub dot: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            sky: colors::SKY_BLUE,
            ground: colors::GRASS_GREEN,
            lake: colors::LAKE_BLUE,
            runway: colors::DARK_GRAY,
            stripe: colors::WHITE_STRIPE,
            building: colors::BLACK,
            dot: colors::WHITE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            fps: 60,
        }
    }
}

/// A rectangle of the window showing one view angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportConfig {
    #[serde(default)]
    pub angle: ViewAngle,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ViewportConfig {
    /// A viewport covering the whole display.
    pub fn full(angle: ViewAngle, display: &DisplayConfig) -> Self {
        Self {
            angle,
            x: 0,
            y: 0,
            width: display.width,
            height: display.height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub projection: ProjectionConfig,
    pub palette: Palette,
    pub display: DisplayConfig,
    /// Empty means a single forward view filling the display.
    pub viewports: Vec<ViewportConfig>,
}

impl Config {
    /// Reads, parses and validates a JSON config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading config from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// The viewports to render, falling back to one full-size forward view.
    pub fn viewports(&self) -> Vec<ViewportConfig> {
        if self.viewports.is_empty() {
            vec![ViewportConfig::full(ViewAngle::Forward, &self.display)]
        } else {
            self.viewports.clone()
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.projection.validate()?;

        let DisplayConfig { width, height, fps } = self.display;
        if width == 0 || height == 0 {
            return Err(Error::InvalidConfig(format!(
                "display must be non-empty, got {width}x{height}"
            )));
        }
        if fps == 0 {
            return Err(Error::InvalidConfig("fps must be positive".to_string()));
        }

        for (i, vp) in self.viewports.iter().enumerate() {
            if vp.width == 0 || vp.height == 0 {
                return Err(Error::InvalidConfig(format!("viewport {i} is empty")));
            }
            let right = vp.x as u64 + vp.width as u64;
            let bottom = vp.y as u64 + vp.height as u64;
            if right > width as u64 || bottom > height as u64 {
                return Err(Error::InvalidConfig(format!(
                    "viewport {i} ({}x{} at {},{}) extends past the {width}x{height} display",
                    vp.width, vp.height, vp.x, vp.y
                )));
            }
        }
        Ok(())
    }
}

impl ProjectionConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.zoom.is_finite() && self.zoom > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "zoom must be positive, got {}",
                self.zoom
            )));
        }
        if !(self.focal_plane.is_finite() && self.focal_plane > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "focal plane must be positive, got {}",
                self.focal_plane
            )));
        }
        if !self.eye_height.is_finite() {
            return Err(Error::InvalidConfig("eye height must be finite".to_string()));
        }
        Ok(())
    }
}

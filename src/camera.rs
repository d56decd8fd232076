//! Camera pose and the per-frame orientation cache.
//!
//! # Coordinate System
//!
//! World points are (north, east, up). Camera space is reached by
//! translating by the camera position and then rotating by:
//! - **Heading**: `-heading` about the vertical axis
//! - **Pitch**: `-pitch` about the lateral axis
//! - **Roll**: `-roll` about the forward axis
//!
//! applied in that order. In camera space `x` is depth (forward), `y` is
//! right and `z` is up, so the perspective divide is `(zoom*y/x, zoom*z/x)`.

use crate::math::{SinCos, Vec2, Vec3};
use crate::scene::Point3;

/// The conventional near-clip distance, one projection-plane unit.
pub const DEFAULT_FOCAL_PLANE: f32 = 1.0;

/// Roll, pitch and heading, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Attitude {
    pub roll: f32,
    pub pitch: f32,
    pub heading: f32,
}

impl Attitude {
    pub const LEVEL: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(roll: f32, pitch: f32, heading: f32) -> Self {
        Self {
            roll,
            pitch,
            heading,
        }
    }

    pub fn from_degrees(roll: f32, pitch: f32, heading: f32) -> Self {
        Self::new(roll.to_radians(), pitch.to_radians(), heading.to_radians())
    }
}

/// Where the camera is and how it looks at the world for one frame.
///
/// `position` already includes the eye height above the aircraft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Point3,
    pub attitude: Attitude,
    /// Distance to the projection plane, in screen units per camera-space unit.
    pub zoom: f32,
    /// Near-clip distance along the forward axis.
    pub focal_plane: f32,
}

impl CameraPose {
    pub fn new(position: Point3, attitude: Attitude, zoom: f32) -> Self {
        Self {
            position,
            attitude,
            zoom,
            focal_plane: DEFAULT_FOCAL_PLANE,
        }
    }

    pub fn with_focal_plane(mut self, focal_plane: f32) -> Self {
        self.focal_plane = focal_plane;
        self
    }
}

/// Trigonometry cache for one frame's camera orientation.
///
/// Built once per frame and then shared, read-only, by every projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    roll: SinCos,
    pitch: SinCos,
    heading: SinCos,
    zoom: f32,
    focal_plane: f32,
}

impl CameraState {
    pub fn new(attitude: Attitude, zoom: f32, focal_plane: f32) -> Self {
        debug_assert!(zoom > 0.0, "zoom must be positive");
        debug_assert!(focal_plane > 0.0, "focal plane must be positive");
        Self {
            roll: SinCos::new(-attitude.roll),
            pitch: SinCos::new(-attitude.pitch),
            heading: SinCos::new(-attitude.heading),
            zoom,
            focal_plane,
        }
    }

    pub fn from_pose(pose: &CameraPose) -> Self {
        Self::new(pose.attitude, pose.zoom, pose.focal_plane)
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn focal_plane(&self) -> f32 {
        self.focal_plane
    }

    /// Full rotation of a camera-relative offset: heading, then pitch, then roll.
    #[inline]
    pub fn rotate(&self, offset: Vec3) -> Vec3 {
        self.rotate_level(offset.rotate_z(self.heading))
    }

    /// Pitch and roll only. Used for the horizon, which does not depend on
    /// heading.
    #[inline]
    pub fn rotate_level(&self, offset: Vec3) -> Vec3 {
        offset.rotate_y(self.pitch).rotate_x(self.roll)
    }

    /// True when a camera-space point lies strictly beyond the focal plane.
    #[inline]
    pub fn is_inside(&self, point: Vec3) -> bool {
        point.x > self.focal_plane
    }

    /// Perspective divide of a camera-space point in front of the focal plane.
    #[inline]
    pub fn perspective(&self, point: Vec3) -> Vec2 {
        Vec2::new(self.zoom * point.y / point.x, self.zoom * point.z / point.x)
    }
}

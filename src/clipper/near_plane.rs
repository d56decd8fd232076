//! Intersection of a camera-space segment with the focal (near) plane.

use crate::camera::CameraState;
use crate::math::{Vec2, Vec3};

/// Returns the point where the segment `last -> current` crosses the plane
/// `x = focal_plane`.
///
/// The two endpoints must lie on opposite sides of the plane, which also
/// guarantees their depths differ.
pub fn intersect(last: Vec3, current: Vec3, focal_plane: f32) -> Vec3 {
    debug_assert!(
        (last.x > focal_plane) != (current.x > focal_plane),
        "segment does not straddle the focal plane: {} -> {}",
        last.x,
        current.x
    );
    let delta = current - last;
    let ratio = (focal_plane - last.x) / delta.x;
    Vec3::new(
        focal_plane,
        last.y + ratio * delta.y,
        last.z + ratio * delta.z,
    )
}

/// Projects the focal-plane crossing of `last -> current` to the screen.
#[inline]
pub fn clip(last: Vec3, current: Vec3, camera: &CameraState) -> Vec2 {
    camera.perspective(intersect(last, current, camera.focal_plane()))
}

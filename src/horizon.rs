//! Sky and ground fill from the projected horizon line.
//!
//! The horizon is found by projecting two distant points in
//! [`ProjectionMode::Horizon`], so only pitch and roll move it. The resulting
//! screen segment is stretched and extruded into two huge quads, one up for
//! the sky and one down for the ground.

use crate::clipper::FilledPolygon;
use crate::colors::Color;
use crate::math::Vec2;
use crate::projection::{ProjectionMode, Projector};
use crate::scene::Point3;

/// Range of the two points that stand in for the horizon at infinity.
pub const HORIZON_RANGE: f32 = 100_000.0;

/// How far, in screen units, the fill quads reach past the horizon segment.
pub const FILL_EXTENT: f32 = 10_000.0;

/// Sky and ground quads for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizonFill {
    pub sky: FilledPolygon,
    pub ground: FilledPolygon,
}

/// Projects the horizon line, left end first.
///
/// Returns `None` when either end falls behind the focal plane, e.g. when the
/// camera looks straight up or down.
pub fn horizon_line(projector: &Projector) -> Option<(Vec2, Vec2)> {
    let left = Point3::new(HORIZON_RANGE, -HORIZON_RANGE, 0.0);
    let right = Point3::new(HORIZON_RANGE, HORIZON_RANGE, 0.0);
    let left = projector.project_point(left, ProjectionMode::Horizon)?;
    let right = projector.project_point(right, ProjectionMode::Horizon)?;
    Some((left, right))
}

/// Builds the quad with one side along `start -> end` (stretched by
/// [`FILL_EXTENT`] both ways) and the opposite side `offset` screen units away
/// along the left-hand normal. A negative `offset` extrudes to the right.
pub fn extrude(start: Vec2, end: Vec2, offset: f32) -> Option<[Vec2; 4]> {
    let delta = end - start;
    let length = delta.magnitude();
    if length <= f32::EPSILON || !length.is_finite() {
        return None;
    }
    let direction = delta * (1.0 / length);
    let normal = direction.perpendicular() * offset;
    let a = start - direction * FILL_EXTENT;
    let b = end + direction * FILL_EXTENT;
    Some([a, b, b + normal, a + normal])
}

/// Computes the sky and ground fill for the projector's camera.
pub fn fill(projector: &Projector, sky: Color, ground: Color) -> Option<HorizonFill> {
    let (start, end) = horizon_line(projector)?;
    let sky_quad = extrude(start, end, FILL_EXTENT)?;
    let ground_quad = extrude(start, end, -FILL_EXTENT)?;
    Some(HorizonFill {
        sky: FilledPolygon {
            color: sky,
            points: sky_quad.to_vec(),
        },
        ground: FilledPolygon {
            color: ground,
            points: ground_quad.to_vec(),
        },
    })
}

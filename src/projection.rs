//! World to screen projection with near-plane clipping.
//!
//! [`Projector`] turns one world point into camera space and, when it is in
//! front of the focal plane, into screen coordinates. Clipping a shape needs
//! to know where the previous vertex ended up, so every call takes the
//! shape's [`ClipState`] explicitly. [`Projector::project_all`] wraps that
//! into an iterator that owns a fresh state for one shape.

use crate::camera::{CameraPose, CameraState};
use crate::clipper::near_plane;
use crate::math::{Vec2, Vec3};
use crate::scene::Point3;

/// How a world point is brought into camera space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    /// Translate by the camera position, then heading, pitch and roll.
    #[default]
    World,
    /// No translation and no heading: pitch and roll only. Locates the
    /// horizon, which sits at infinite range.
    Horizon,
}

/// Clipping memory for the traversal of a single shape.
///
/// A fresh state has no previous point and counts as outside, so the first
/// vertex of a shape never produces a clip point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClipState {
    last: Option<Vec3>,
    inside: bool,
}

impl ClipState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Camera-space position of the previously projected vertex.
    pub fn last(&self) -> Option<Vec3> {
        self.last
    }

    /// Whether the previously projected vertex was in front of the focal plane.
    pub fn is_inside(&self) -> bool {
        self.inside
    }
}

/// Result of projecting one vertex, relative to the vertex before it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projected {
    /// In front of the focal plane, as was the previous vertex (or there was
    /// no previous vertex).
    Inside(Vec2),
    /// In front of the focal plane after an outside vertex. `clip` is where
    /// the segment enters the view.
    Entered { clip: Vec2, point: Vec2 },
    /// Behind the focal plane after an inside vertex. The payload is where
    /// the segment leaves the view.
    Exited(Vec2),
    /// Behind the focal plane, as was the previous vertex.
    Outside,
}

impl Projected {
    /// The projected vertex itself, if it is visible.
    pub fn point(&self) -> Option<Vec2> {
        match *self {
            Projected::Inside(point) | Projected::Entered { point, .. } => Some(point),
            Projected::Exited(_) | Projected::Outside => None,
        }
    }

    pub fn is_inside(&self) -> bool {
        self.point().is_some()
    }
}

/// Projects world points for one camera pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    camera: CameraState,
    position: Point3,
}

impl Projector {
    pub fn new(pose: &CameraPose) -> Self {
        Self {
            camera: CameraState::from_pose(pose),
            position: pose.position,
        }
    }

    /// Brings a world point into camera space.
    #[inline]
    pub fn to_camera_space(&self, point: Point3, mode: ProjectionMode) -> Vec3 {
        match mode {
            ProjectionMode::World => self.camera.rotate(point - self.position),
            ProjectionMode::Horizon => self.camera.rotate_level(Vec3::from(point)),
        }
    }

    /// Projects `point`, clipping against the vertex previously recorded in
    /// `state`, and records `point` as the new previous vertex.
    pub fn project(&self, point: Point3, mode: ProjectionMode, state: &mut ClipState) -> Projected {
        let current = self.to_camera_space(point, mode);
        let previous = state.last.replace(current);
        let was_inside = state.inside;

        if self.camera.is_inside(current) {
            state.inside = true;
            let point = self.camera.perspective(current);
            match previous {
                Some(last) if !was_inside => Projected::Entered {
                    clip: near_plane::clip(last, current, &self.camera),
                    point,
                },
                _ => Projected::Inside(point),
            }
        } else {
            state.inside = false;
            match previous {
                Some(last) if was_inside => {
                    Projected::Exited(near_plane::clip(last, current, &self.camera))
                }
                _ => Projected::Outside,
            }
        }
    }

    /// Projects a lone point with no clipping context.
    pub fn project_point(&self, point: Point3, mode: ProjectionMode) -> Option<Vec2> {
        self.project(point, mode, &mut ClipState::new()).point()
    }

    /// Lazily projects an ordered vertex sequence, threading one fresh
    /// [`ClipState`] through it.
    pub fn project_all<'a, I>(&'a self, vertices: I) -> ClippedVertices<'a, I::IntoIter>
    where
        I: IntoIterator<Item = &'a Point3>,
    {
        ClippedVertices {
            projector: self,
            vertices: vertices.into_iter(),
            state: ClipState::new(),
        }
    }
}

/// Iterator over the projections of one shape's vertices.
pub struct ClippedVertices<'a, I> {
    projector: &'a Projector,
    vertices: I,
    state: ClipState,
}

impl<'a, I> ClippedVertices<'a, I> {
    pub fn state(&self) -> &ClipState {
        &self.state
    }
}

impl<'a, I> Iterator for ClippedVertices<'a, I>
where
    I: Iterator<Item = &'a Point3>,
{
    type Item = Projected;

    fn next(&mut self) -> Option<Self::Item> {
        let point = self.vertices.next()?;
        Some(
            self.projector
                .project(*point, ProjectionMode::World, &mut self.state),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.vertices.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Attitude;
    use approx::assert_relative_eq;

    fn level_projector() -> Projector {
        Projector::new(&CameraPose::new(Point3::ORIGIN, Attitude::LEVEL, 1.0))
    }

    #[test]
    fn projects_point_in_front_of_level_camera() {
        let projector = level_projector();
        let mut state = ClipState::new();
        let point = Point3::new(10.0, 5.0, 0.0);
        let projected = projector.project(point, ProjectionMode::World, &mut state);
        assert_eq!(projected, Projected::Inside(Vec2::new(0.5, 0.0)));
        assert!(state.is_inside());
        assert_eq!(state.last(), Some(Vec3::new(10.0, 5.0, 0.0)));
    }

    #[test]
    fn translates_by_camera_position() {
        let pose = CameraPose::new(Point3::new(100.0, 50.0, 10.0), Attitude::LEVEL, 2.0);
        let projector = Projector::new(&pose);
        let p = projector
            .project_point(Point3::new(104.0, 51.0, 8.0), ProjectionMode::World)
            .unwrap();
        assert_relative_eq!(p.x, 0.5);
        assert_relative_eq!(p.y, -1.0);
    }

    #[test]
    fn projection_matches_hand_rotation() {
        let attitude = Attitude::new(0.3, -0.2, 0.7);
        let pose = CameraPose::new(Point3::new(1.0, 2.0, 3.0), attitude, 400.0);
        let projector = Projector::new(&pose);
        let world = Point3::new(60.0, 20.0, 5.0);

        let offset = Vec3::new(59.0, 18.0, 2.0);
        let (sh, ch) = (-attitude.heading).sin_cos();
        let h = Vec3::new(offset.x * ch - offset.y * sh, offset.x * sh + offset.y * ch, offset.z);
        let (sp, cp) = (-attitude.pitch).sin_cos();
        let p = Vec3::new(h.x * cp + h.z * sp, h.y, -h.x * sp + h.z * cp);
        let (sr, cr) = (-attitude.roll).sin_cos();
        let r = Vec3::new(p.x, p.y * cr - p.z * sr, p.y * sr + p.z * cr);

        let projected = projector.project_point(world, ProjectionMode::World).unwrap();
        assert_relative_eq!(projected.x, 400.0 * r.y / r.x, epsilon = 1e-3);
        assert_relative_eq!(projected.y, 400.0 * r.z / r.x, epsilon = 1e-3);
    }

    #[test]
    fn first_vertex_behind_is_plain_outside() {
        let projector = level_projector();
        let mut state = ClipState::new();
        let behind = Point3::new(0.5, 0.0, 0.0);
        let projected = projector.project(behind, ProjectionMode::World, &mut state);
        assert_eq!(projected, Projected::Outside);
        assert!(!state.is_inside());
        assert!(state.last().is_some());
    }

    #[test]
    fn point_on_focal_plane_is_outside() {
        let projector = level_projector();
        assert_eq!(
            projector.project_point(Point3::new(1.0, 0.0, 0.0), ProjectionMode::World),
            None
        );
    }

    #[test]
    fn exit_clip_lies_on_focal_plane() {
        let projector = level_projector();
        let mut state = ClipState::new();
        projector.project(Point3::new(5.0, 0.0, 0.0), ProjectionMode::World, &mut state);
        let behind = Point3::new(-5.0, 2.0, 0.0);
        let exited = projector.project(behind, ProjectionMode::World, &mut state);
        // crossing at camera-space (1.0, 0.8, 0.0)
        match exited {
            Projected::Exited(clip) => {
                assert_relative_eq!(clip.x, 0.8, epsilon = 1e-6);
                assert_relative_eq!(clip.y, 0.0);
            }
            other => panic!("expected exit clip, got {other:?}"),
        }
        assert!(!state.is_inside());
        assert_eq!(state.last(), Some(Vec3::new(-5.0, 2.0, 0.0)));
    }

    #[test]
    fn leaving_then_reentering_yields_two_distinct_clips() {
        let projector = level_projector();
        let mut state = ClipState::new();
        let results: Vec<Projected> = [
            Point3::new(5.0, 0.0, 0.0),
            Point3::new(-5.0, 2.0, 0.0),
            Point3::new(5.0, 4.0, 0.0),
        ]
        .into_iter()
        .map(|p| projector.project(p, ProjectionMode::World, &mut state))
        .collect();

        let exit = match results[1] {
            Projected::Exited(clip) => clip,
            other => panic!("expected exit, got {other:?}"),
        };
        let (entry, point) = match results[2] {
            Projected::Entered { clip, point } => (clip, point),
            other => panic!("expected entry, got {other:?}"),
        };
        assert!(exit.is_finite() && entry.is_finite());
        assert_ne!(exit, entry);
        // entry crossing at camera-space (1.0, 3.2, 0.0)
        assert_relative_eq!(entry.x, 3.2, epsilon = 1e-5);
        assert_relative_eq!(point.x, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn consecutive_outside_points_do_not_clip() {
        let projector = level_projector();
        let mut state = ClipState::new();
        projector.project(Point3::new(-1.0, 0.0, 0.0), ProjectionMode::World, &mut state);
        let behind = Point3::new(-2.0, 3.0, 0.0);
        let second = projector.project(behind, ProjectionMode::World, &mut state);
        assert_eq!(second, Projected::Outside);
        assert_eq!(state.last(), Some(Vec3::new(-2.0, 3.0, 0.0)));
    }

    #[test]
    fn fresh_state_gives_identical_results() {
        let pose = CameraPose::new(
            Point3::new(3.0, -2.0, 50.0),
            Attitude::new(0.1, 0.05, 2.0),
            300.0,
        );
        let projector = Projector::new(&pose);
        let point = Point3::new(-40.0, 80.0, 0.0);
        let a = projector.project(point, ProjectionMode::World, &mut ClipState::new());
        let b = projector.project(point, ProjectionMode::World, &mut ClipState::new());
        assert_eq!(a, b);
    }

    #[test]
    fn horizon_mode_ignores_position_and_heading() {
        let pose = CameraPose::new(
            Point3::new(5000.0, -300.0, 900.0),
            Attitude::new(0.0, 0.0, 1.0),
            1.0,
        );
        let projector = Projector::new(&pose);
        let p = projector
            .project_point(Point3::new(100.0, 50.0, 0.0), ProjectionMode::Horizon)
            .unwrap();
        assert_relative_eq!(p.x, 0.5);
        assert_relative_eq!(p.y, 0.0);
    }

    #[test]
    fn project_all_uses_fresh_state_per_shape() {
        let projector = level_projector();
        let inside = [Point3::new(5.0, 0.0, 0.0)];
        let behind = [Point3::new(-5.0, 0.0, 0.0)];

        let mut first = projector.project_all(&inside);
        assert!(matches!(first.next(), Some(Projected::Inside(_))));
        assert!(first.state().is_inside());

        // A new traversal must not inherit the inside flag and clip.
        let second: Vec<Projected> = projector.project_all(&behind).collect();
        assert_eq!(second, vec![Projected::Outside]);
    }
}

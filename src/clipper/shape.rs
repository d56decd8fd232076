//! Per-shape clipping: turns a polyline or polygon into screen primitives.
//!
//! Both variants walk the vertices in order through
//! [`Projector::project_all`], so every shape starts from a fresh clip state.
//! The synthetic clip points are inserted exactly once per frustum entry or
//! exit.

use crate::colors::Color;
use crate::math::Vec2;
use crate::projection::{Projected, Projector};
use crate::scene::{Polygon, Polyline};

/// A screen-space line segment ready to rasterize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub color: Color,
    pub start: Vec2,
    pub end: Vec2,
}

/// A screen-space polygon ready to fill.
#[derive(Debug, Clone, PartialEq)]
pub struct FilledPolygon {
    pub color: Color,
    pub points: Vec<Vec2>,
}

/// Clips a polyline, appending its visible segments to `out`.
///
/// Returns the number of segments appended.
pub fn clip_polyline(
    projector: &Projector,
    polyline: &Polyline,
    out: &mut Vec<LineSegment>,
) -> usize {
    let color = polyline.color();
    let before = out.len();
    // Last visible screen point, if the previous vertex was inside.
    let mut previous: Option<Vec2> = None;

    for projected in projector.project_all(polyline.points()) {
        match projected {
            Projected::Inside(point) => {
                if let Some(start) = previous {
                    out.push(LineSegment {
                        color,
                        start,
                        end: point,
                    });
                }
                previous = Some(point);
            }
            Projected::Entered { clip, point } => {
                out.push(LineSegment {
                    color,
                    start: clip,
                    end: point,
                });
                previous = Some(point);
            }
            Projected::Exited(clip) => {
                if let Some(start) = previous.take() {
                    out.push(LineSegment {
                        color,
                        start,
                        end: clip,
                    });
                }
            }
            Projected::Outside => {}
        }
    }

    out.len() - before
}

/// Builds the clipped outline of a polygon, in traversal order.
///
/// The result may hold fewer than three points when little or nothing of the
/// polygon is in front of the focal plane.
pub fn polygon_outline(projector: &Projector, polygon: &Polygon) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(polygon.vertices().len() + 2);

    for projected in projector.project_all(polygon.vertices()) {
        match projected {
            Projected::Inside(point) => points.push(point),
            Projected::Entered { clip, point } => {
                points.push(clip);
                points.push(point);
            }
            Projected::Exited(clip) => points.push(clip),
            Projected::Outside => {}
        }
    }

    points
}

/// Clips a polygon, returning it only if enough remains to be filled.
pub fn clip_polygon(projector: &Projector, polygon: &Polygon) -> Option<FilledPolygon> {
    let points = polygon_outline(projector, polygon);
    if points.len() < 3 {
        return None;
    }
    Some(FilledPolygon {
        color: polygon.color(),
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{Attitude, CameraPose};
    use crate::colors;
    use crate::scene::Point3;
    use approx::assert_relative_eq;

    fn level_projector() -> Projector {
        Projector::new(&CameraPose::new(Point3::ORIGIN, Attitude::LEVEL, 1.0))
    }

    fn polyline(points: &[(f32, f32, f32)]) -> Polyline {
        Polyline::new(
            colors::WHITE_STRIPE,
            points.iter().map(|&(n, e, u)| Point3::new(n, e, u)).collect(),
        )
        .unwrap()
    }

    fn polygon(points: &[(f32, f32, f32)]) -> Polygon {
        Polygon::from_ring(
            colors::LAKE_BLUE,
            points.iter().map(|&(n, e, u)| Point3::new(n, e, u)).collect(),
        )
        .unwrap()
    }

    #[test]
    fn polyline_fully_inside_draws_every_segment() {
        let mut out = Vec::new();
        let line = polyline(&[(5.0, -1.0, 0.0), (5.0, 1.0, 0.0), (10.0, 1.0, 0.0)]);
        assert_eq!(clip_polyline(&level_projector(), &line, &mut out), 2);
        assert_eq!(out[0].start, Vec2::new(-0.2, 0.0));
        assert_eq!(out[0].end, Vec2::new(0.2, 0.0));
        assert_eq!(out[1].start, out[0].end);
        assert_eq!(out[1].color, colors::WHITE_STRIPE);
    }

    #[test]
    fn polyline_entering_view_starts_at_clip_point() {
        let mut out = Vec::new();
        let line = polyline(&[(0.5, 1.0, 0.0), (5.0, 1.0, 0.0)]);
        assert_eq!(clip_polyline(&level_projector(), &line, &mut out), 1);
        // The raw first vertex would project to (2.0, 0.0); the clip point is
        // at depth 1.0 instead.
        assert_relative_eq!(out[0].start.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(out[0].start.y, 0.0);
        assert_relative_eq!(out[0].end.x, 0.2, epsilon = 1e-6);
    }

    #[test]
    fn polyline_from_behind_on_axis() {
        let mut out = Vec::new();
        let line = polyline(&[(0.5, 0.0, 0.0), (5.0, 0.0, 0.0)]);
        assert_eq!(clip_polyline(&level_projector(), &line, &mut out), 1);
        assert_eq!(out[0].start, Vec2::ZERO);
        assert_eq!(out[0].end, Vec2::ZERO);
    }

    #[test]
    fn polyline_leaving_view_ends_at_clip_point() {
        let mut out = Vec::new();
        let line = polyline(&[(5.0, 0.0, 0.0), (-5.0, 2.0, 0.0)]);
        assert_eq!(clip_polyline(&level_projector(), &line, &mut out), 1);
        assert_eq!(out[0].start, Vec2::ZERO);
        assert_relative_eq!(out[0].end.x, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn polyline_out_and_back_in_draws_two_segments() {
        let mut out = Vec::new();
        let line = polyline(&[(5.0, 0.0, 0.0), (-5.0, 2.0, 0.0), (5.0, 4.0, 0.0)]);
        assert_eq!(clip_polyline(&level_projector(), &line, &mut out), 2);
        assert_relative_eq!(out[0].end.x, 0.8, epsilon = 1e-6);
        assert_relative_eq!(out[1].start.x, 3.2, epsilon = 1e-5);
        assert_relative_eq!(out[1].end.x, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn polyline_behind_camera_draws_nothing() {
        let mut out = Vec::new();
        let line = polyline(&[(-5.0, 0.0, 0.0), (0.0, 2.0, 0.0), (-1.0, -3.0, 4.0)]);
        assert_eq!(clip_polyline(&level_projector(), &line, &mut out), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn polygon_in_front_keeps_every_vertex() {
        let square = polygon(&[
            (5.0, -2.0, 0.0),
            (5.0, 2.0, 0.0),
            (2.0, 2.0, 0.0),
            (2.0, -2.0, 0.0),
        ]);
        let outline = polygon_outline(&level_projector(), &square);
        assert_eq!(outline.len(), square.vertices().len());
        assert_relative_eq!(outline[0].x, -0.4);
        assert_relative_eq!(outline[0].y, 0.0);
        assert_relative_eq!(outline[1].x, 0.4);
        assert_relative_eq!(outline[2].x, 1.0);
        assert_relative_eq!(outline[3].x, -1.0);
        assert_eq!(outline.first(), outline.last());
    }

    #[test]
    fn polygon_behind_camera_yields_no_points() {
        let square = polygon(&[
            (-5.0, -2.0, 0.0),
            (-5.0, 2.0, 0.0),
            (-2.0, 2.0, 0.0),
            (-2.0, -2.0, 0.0),
        ]);
        assert!(polygon_outline(&level_projector(), &square).is_empty());
        assert!(clip_polygon(&level_projector(), &square).is_none());
    }

    #[test]
    fn polygon_straddling_focal_plane_gets_one_clip_per_crossing() {
        // Vertices at depth 5, 5, -3, -3: one exit and one entry.
        let quad = polygon(&[
            (5.0, -2.0, -1.0),
            (5.0, 2.0, -1.0),
            (-3.0, 2.0, -1.0),
            (-3.0, -2.0, -1.0),
        ]);
        let outline = polygon_outline(&level_projector(), &quad);
        // 2 inside vertices + exit clip + entry clip + the closing vertex
        assert_eq!(outline.len(), 5);
        for clip in [outline[2], outline[3]] {
            assert_relative_eq!(clip.y, -1.0, epsilon = 1e-6);
        }
        assert_relative_eq!(outline[2].x, 2.0, epsilon = 1e-6);
        assert_relative_eq!(outline[3].x, -2.0, epsilon = 1e-6);

        let filled = clip_polygon(&level_projector(), &quad).unwrap();
        assert_eq!(filled.color, colors::LAKE_BLUE);
        assert_eq!(filled.points, outline);
    }

    #[test]
    fn polygon_with_one_vertex_in_front_is_still_filled() {
        let tri = polygon(&[(1.5, 0.0, 0.0), (-3.0, 1.0, 0.0), (-3.0, -1.0, 0.0)]);
        let outline = polygon_outline(&level_projector(), &tri);
        // first vertex, exit clip, entry clip, closing vertex
        assert_eq!(outline.len(), 4);
        assert!(clip_polygon(&level_projector(), &tri).is_some());
    }

    #[test]
    fn polygon_entirely_behind_is_not_filled() {
        let tri = polygon(&[(-1.0, 0.0, 0.0), (-3.0, 1.0, 0.0), (-3.0, -1.0, 0.0)]);
        assert!(clip_polygon(&level_projector(), &tri).is_none());
    }
}

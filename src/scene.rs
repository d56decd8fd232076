//! World geometry consumed by the projection engine.
//!
//! A [`Scene`] is built once at startup and then only read. Insertion order is
//! draw order; nothing is depth sorted.

use std::ops::Sub;

use crate::colors::Color;
use crate::error::{Error, Result};
use crate::math::Vec3;

/// A world-frame point: north, east, up, in metres.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub north: f32,
    pub east: f32,
    pub up: f32,
}

impl Point3 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(north: f32, east: f32, up: f32) -> Self {
        Self { north, east, up }
    }
}

/// The offset between two world points, laid out as (north, east, up).
impl Sub<Point3> for Point3 {
    type Output = Vec3;

    fn sub(self, rhs: Point3) -> Self::Output {
        Vec3::new(self.north - rhs.north, self.east - rhs.east, self.up - rhs.up)
    }
}

impl From<Point3> for Vec3 {
    fn from(p: Point3) -> Self {
        Vec3::new(p.north, p.east, p.up)
    }
}

/// An open chain of segments. Never closed back to its first point.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    color: Color,
    points: Vec<Point3>,
}

impl Polyline {
    /// Creates a polyline. At least two points are required.
    pub fn new(color: Color, points: Vec<Point3>) -> Result<Self> {
        if points.len() < 2 {
            return Err(Error::InvalidGeometry(format!(
                "polyline needs at least 2 points, got {}",
                points.len()
            )));
        }
        Ok(Self { color, points })
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }
}

/// A filled ring.
///
/// Rings are stored pre-closed: the last vertex repeats the first, so the
/// closing edge is clipped like every other edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    color: Color,
    vertices: Vec<Point3>,
}

impl Polygon {
    /// Creates a polygon from an already closed ring.
    ///
    /// Fails unless there are at least three distinct vertices plus the
    /// repeated first vertex at the end.
    pub fn new(color: Color, vertices: Vec<Point3>) -> Result<Self> {
        if vertices.len() < 4 {
            return Err(Error::InvalidGeometry(format!(
                "closed polygon needs at least 4 vertices, got {}",
                vertices.len()
            )));
        }
        if vertices.first() != vertices.last() {
            return Err(Error::InvalidGeometry(
                "polygon ring is not closed: last vertex must repeat the first".to_string(),
            ));
        }
        Ok(Self { color, vertices })
    }

    /// Creates a polygon from an open ring, appending the first vertex if the
    /// ring is not already closed.
    pub fn from_ring(color: Color, mut vertices: Vec<Point3>) -> Result<Self> {
        if let (Some(&first), Some(&last)) = (vertices.first(), vertices.last()) {
            if first != last || vertices.len() == 1 {
                vertices.push(first);
            }
        }
        Self::new(color, vertices)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }
}

/// Everything drawn in the world, in draw order.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    polylines: Vec<Polyline>,
    polygons: Vec<Polygon>,
    dots: Vec<Point3>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_polyline(&mut self, polyline: Polyline) {
        self.polylines.push(polyline);
    }

    pub fn add_polygon(&mut self, polygon: Polygon) {
        self.polygons.push(polygon);
    }

    pub fn add_dot(&mut self, dot: Point3) {
        self.dots.push(dot);
    }

    /// Appends all shapes of `other` after the ones already present.
    pub fn extend(&mut self, other: Scene) {
        self.polylines.extend(other.polylines);
        self.polygons.extend(other.polygons);
        self.dots.extend(other.dots);
    }

    pub fn polylines(&self) -> &[Polyline] {
        &self.polylines
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn dots(&self) -> &[Point3] {
        &self.dots
    }

    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty() && self.polygons.is_empty() && self.dots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;

    #[test]
    fn polyline_needs_two_points() {
        let err = Polyline::new(colors::BLACK, vec![Point3::ORIGIN]);
        assert!(matches!(err, Err(Error::InvalidGeometry(_))));
        let two = vec![Point3::ORIGIN, Point3::new(1.0, 0.0, 0.0)];
        assert!(Polyline::new(colors::BLACK, two).is_ok());
    }

    #[test]
    fn polygon_must_be_closed() {
        let open = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        assert!(Polygon::new(colors::LAKE_BLUE, open.clone()).is_err());

        let closed = Polygon::from_ring(colors::LAKE_BLUE, open).unwrap();
        assert_eq!(closed.vertices().len(), 5);
        assert_eq!(closed.vertices().first(), closed.vertices().last());
    }

    #[test]
    fn from_ring_keeps_already_closed_ring() {
        let ring = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
        ];
        let polygon = Polygon::from_ring(colors::LAKE_BLUE, ring).unwrap();
        assert_eq!(polygon.vertices().len(), 4);
    }

    #[test]
    fn from_ring_rejects_too_few_vertices() {
        let ring = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        assert!(Polygon::from_ring(colors::LAKE_BLUE, ring).is_err());
    }

    #[test]
    fn point_difference_is_north_east_up() {
        let d = Point3::new(10.0, 5.0, 3.0) - Point3::new(1.0, 1.0, 1.0);
        assert_eq!(d, Vec3::new(9.0, 4.0, 2.0));
    }

    #[test]
    fn extend_preserves_insertion_order() {
        let mut a = Scene::new();
        a.add_dot(Point3::new(1.0, 0.0, 0.0));
        let mut b = Scene::new();
        b.add_dot(Point3::new(2.0, 0.0, 0.0));
        a.extend(b);
        assert_eq!(a.dots()[0].north, 1.0);
        assert_eq!(a.dots()[1].north, 2.0);
    }
}

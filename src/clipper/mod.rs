//! Near-plane clipping.
//!
//! Only the focal (near) plane is clipped against. Anything that survives is
//! handed to the raster backend, which trims to the viewport rectangle.
//!
//! - [`near_plane`]: exact crossing of one camera-space segment with the plane.
//! - [`shape`]: polyline and polygon traversal built on [`crate::projection::Projector`].

pub mod near_plane;
pub mod shape;

pub use shape::{clip_polygon, clip_polyline, polygon_outline, FilledPolygon, LineSegment};

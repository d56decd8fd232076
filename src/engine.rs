//! Per-frame projection of a whole scene.
//!
//! The [`Engine`] owns the immutable [`Scene`] and the validated projection
//! settings. Each call to [`Engine::project`] walks every polyline, then every
//! polygon, then every dot, and returns a [`Frame`] of screen-space primitives
//! in the screen-centred, y-up system. Rasterizing the frame is left to the
//! caller (see [`crate::render::Renderer`]).

use log::{info, trace, warn};

use crate::camera::CameraPose;
use crate::clipper::{self, FilledPolygon, LineSegment};
use crate::config::{Config, Palette, ProjectionConfig};
use crate::error::Result;
use crate::horizon::{self, HorizonFill};
use crate::math::Vec2;
use crate::projection::{ProjectionMode, Projector};
use crate::scene::Scene;
use crate::viewport::{AircraftPose, ViewAngle};

/// Screen-space output of one frame, in draw order within each list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    /// Sky and ground fill, absent when the horizon is out of view.
    pub horizon: Option<HorizonFill>,
    pub polygons: Vec<FilledPolygon>,
    pub segments: Vec<LineSegment>,
    /// Dots in front of the focal plane; the rest are omitted.
    pub dots: Vec<Vec2>,
}

impl Frame {
    pub fn is_empty(&self) -> bool {
        self.horizon.is_none()
            && self.polygons.is_empty()
            && self.segments.is_empty()
            && self.dots.is_empty()
    }
}

pub struct Engine {
    scene: Scene,
    projection: ProjectionConfig,
    palette: Palette,
}

impl Engine {
    /// Creates an engine for `scene`, rejecting invalid projection settings.
    pub fn new(scene: Scene, config: &Config) -> Result<Self> {
        config.projection.validate()?;
        if scene.is_empty() {
            warn!("engine built with an empty scene; only the horizon will be drawn");
        }
        info!(
            "engine ready: {} polylines, {} polygons, {} dots",
            scene.polylines().len(),
            scene.polygons().len(),
            scene.dots().len()
        );
        Ok(Self {
            scene,
            projection: config.projection,
            palette: config.palette,
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn projection(&self) -> &ProjectionConfig {
        &self.projection
    }

    /// Changes the zoom. Non-positive or non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f32) {
        if zoom.is_finite() && zoom > 0.0 {
            self.projection.zoom = zoom;
        }
    }

    /// Camera pose for looking out of the aircraft in direction `view`.
    pub fn camera_pose(&self, aircraft: &AircraftPose, view: ViewAngle) -> CameraPose {
        aircraft.camera_pose(
            view,
            self.projection.eye_height,
            self.projection.zoom,
            self.projection.focal_plane,
        )
    }

    /// Projects the scene as seen from the aircraft in direction `view`.
    pub fn render_view(&self, aircraft: &AircraftPose, view: ViewAngle) -> Frame {
        self.project(&self.camera_pose(aircraft, view))
    }

    /// Projects the whole scene for one camera pose.
    pub fn project(&self, pose: &CameraPose) -> Frame {
        let projector = Projector::new(pose);
        let mut frame = Frame {
            horizon: horizon::fill(&projector, self.palette.sky, self.palette.ground),
            ..Frame::default()
        };

        for polyline in self.scene.polylines() {
            clipper::clip_polyline(&projector, polyline, &mut frame.segments);
        }

        frame.polygons = self
            .scene
            .polygons()
            .iter()
            .filter_map(|polygon| clipper::clip_polygon(&projector, polygon))
            .collect();

        frame.dots = self
            .scene
            .dots()
            .iter()
            .filter_map(|&dot| projector.project_point(dot, ProjectionMode::World))
            .collect();

        trace!(
            "frame: horizon={} segments={} polygons={} dots={}",
            frame.horizon.is_some(),
            frame.segments.len(),
            frame.polygons.len(),
            frame.dots.len()
        );
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Attitude;
    use crate::colors;
    use crate::error::Error;
    use crate::scene::{Point3, Polygon, Polyline};
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    fn test_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add_polyline(
            Polyline::new(
                colors::WHITE_STRIPE,
                vec![Point3::new(0.5, 0.0, 0.0), Point3::new(5.0, 0.0, 0.0)],
            )
            .unwrap(),
        );
        scene.add_polygon(
            Polygon::from_ring(
                colors::LAKE_BLUE,
                vec![
                    Point3::new(5.0, -2.0, 0.0),
                    Point3::new(5.0, 2.0, 0.0),
                    Point3::new(2.0, 2.0, 0.0),
                    Point3::new(2.0, -2.0, 0.0),
                ],
            )
            .unwrap(),
        );
        scene.add_polygon(
            Polygon::from_ring(
                colors::DARK_GRAY,
                vec![
                    Point3::new(-5.0, -2.0, 0.0),
                    Point3::new(-5.0, 2.0, 0.0),
                    Point3::new(-2.0, 2.0, 0.0),
                ],
            )
            .unwrap(),
        );
        scene.add_dot(Point3::new(10.0, 5.0, 0.0));
        scene.add_dot(Point3::new(-10.0, 5.0, 0.0));
        scene
    }

    fn level_pose() -> CameraPose {
        CameraPose::new(Point3::ORIGIN, Attitude::LEVEL, 1.0)
    }

    #[test]
    fn rejects_invalid_projection() {
        let mut config = Config::default();
        config.projection.zoom = -1.0;
        assert!(matches!(Engine::new(Scene::new(), &config), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn projects_every_kind_of_shape() {
        let engine = Engine::new(test_scene(), &Config::default()).unwrap();
        let frame = engine.project(&level_pose());

        assert!(frame.horizon.is_some());
        assert_eq!(frame.segments.len(), 1);
        // The polygon behind the camera is dropped.
        assert_eq!(frame.polygons.len(), 1);
        assert_eq!(frame.polygons[0].points.len(), 5);
        assert_relative_eq!(frame.polygons[0].points[0].x, -0.4);
        // Only the dot in front survives.
        assert_eq!(frame.dots, vec![Vec2::new(0.5, 0.0)]);
    }

    #[test]
    fn shapes_do_not_share_clip_state() {
        // A shape ending inside must not make the next shape's first vertex
        // look like a frustum exit.
        let mut scene = Scene::new();
        scene.add_polyline(
            Polyline::new(
                colors::BLACK,
                vec![Point3::new(5.0, 0.0, 0.0), Point3::new(6.0, 0.0, 0.0)],
            )
            .unwrap(),
        );
        scene.add_polyline(
            Polyline::new(
                colors::BLACK,
                vec![Point3::new(-5.0, 0.0, 0.0), Point3::new(-6.0, 1.0, 0.0)],
            )
            .unwrap(),
        );
        let engine = Engine::new(scene, &Config::default()).unwrap();
        let frame = engine.project(&level_pose());
        assert_eq!(frame.segments.len(), 1);
    }

    #[test]
    fn rear_view_sees_what_is_behind() {
        let engine = Engine::new(test_scene(), &Config::default()).unwrap();
        let aircraft = AircraftPose::new(Point3::new(0.0, 0.0, -3.0), Attitude::new(0.0, 0.0, PI));
        let rear = engine.render_view(&aircraft, ViewAngle::Rear);
        let forward = engine.project(&level_pose());
        assert_eq!(rear.polygons.len(), forward.polygons.len());
        assert_eq!(rear.dots.len(), 1);
    }

    #[test]
    fn camera_pose_applies_eye_height_and_zoom() {
        let engine = Engine::new(Scene::new(), &Config::default()).unwrap();
        let aircraft = AircraftPose::new(Point3::new(0.0, 0.0, 100.0), Attitude::LEVEL);
        let pose = engine.camera_pose(&aircraft, ViewAngle::Forward);
        assert_eq!(pose.position.up, 103.0);
        assert_eq!(pose.zoom, engine.projection().zoom);
    }

    #[test]
    fn set_zoom_ignores_invalid_values() {
        let mut engine = Engine::new(Scene::new(), &Config::default()).unwrap();
        engine.set_zoom(0.0);
        assert_eq!(engine.projection().zoom, 500.0);
        engine.set_zoom(250.0);
        assert_eq!(engine.projection().zoom, 250.0);
    }

    #[test]
    fn empty_scene_looking_down_is_empty_frame() {
        let engine = Engine::new(Scene::new(), &Config::default()).unwrap();
        let pose = CameraPose::new(
            Point3::new(0.0, 0.0, 100.0),
            Attitude::new(0.0, PI / 2.0, 0.0),
            400.0,
        );
        assert!(engine.project(&pose).is_empty());
    }
}

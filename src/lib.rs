//! Camera-space projection and near-plane clipping for a synthetic
//! flight-sim world.
//!
//! World geometry (polylines, closed polygons, dots) is projected each frame
//! from an aircraft-mounted camera onto a screen-centred, y-up 2D plane.
//! Segments crossing the near ("focal") plane are clipped in 3D before the
//! perspective divide, and a sky/ground fill tracks the horizon. SDL2 is used
//! only for window management and display in the demo.
//!
//! # Quick Start
//!
//! ```ignore
//! use flightview::prelude::*;
//!
//! let config = Config::default();
//! let scene = content::demo_world(&config.palette, false)?;
//! let engine = Engine::new(scene, &config)?;
//! let aircraft = AircraftPose::new(Point3::new(-500.0, 0.0, 100.0), Attitude::LEVEL);
//! let frame = engine.render_view(&aircraft, ViewAngle::Forward);
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod clipper;
pub mod colors;
pub mod config;
pub mod content;
pub mod engine;
pub mod error;
pub mod flight;
pub mod horizon;
pub mod math;
pub mod projection;
pub mod render;
pub mod scene;
pub mod viewport;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use camera::{Attitude, CameraPose, CameraState};
pub use config::Config;
pub use engine::{Engine, Frame};
pub use error::{Error, Result};
pub use projection::{ClipState, ProjectionMode, Projected, Projector};
pub use scene::{Point3, Polygon, Polyline, Scene};
pub use viewport::{AircraftPose, ViewAngle};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use flightview::prelude::*;
/// ```
pub mod prelude {
    // Camera
    pub use crate::camera::{Attitude, CameraPose, CameraState};

    // Projection and clipping
    pub use crate::clipper::{FilledPolygon, LineSegment};
    pub use crate::projection::{ClipState, ProjectionMode, Projected, Projector};

    // Engine
    pub use crate::engine::{Engine, Frame};

    // Scene
    pub use crate::content;
    pub use crate::scene::{Point3, Polygon, Polyline, Scene};

    // Views
    pub use crate::viewport::{AircraftPose, ViewAngle};

    // Configuration
    pub use crate::colors::Color;
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};

    // Math
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;

    // Rendering
    pub use crate::render::{Renderer, ViewRect};

    // Window & Input
    pub use crate::flight::{Aircraft, FlightController};
    pub use crate::window::{FrameLimiter, InputState, Window, WindowEvent};
}

//! Cockpit "look around" view angles.
//!
//! Each [`ViewAngle`] maps the aircraft attitude to the attitude used for the
//! camera. The mapping is a fixed table rather than a composed 3D rotation:
//! sideways and rearward views swap or negate roll and pitch so that a banked
//! or pitched aircraft still tilts the horizon sensibly out of the side and
//! back windows.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::camera::{Attitude, CameraPose};
use crate::scene::Point3;

const THREE_QUARTER_PI: f32 = 3.0 * FRAC_PI_4;

/// Direction of view relative to the aircraft nose, in 45 degree steps.
/// Positive angles look to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewAngle {
    #[default]
    Forward,
    Right45,
    Right90,
    Right135,
    Rear,
    Left135,
    Left90,
    Left45,
}

impl ViewAngle {
    /// All angles, clockwise from the nose.
    pub const ALL: [ViewAngle; 8] = [
        ViewAngle::Forward,
        ViewAngle::Right45,
        ViewAngle::Right90,
        ViewAngle::Right135,
        ViewAngle::Rear,
        ViewAngle::Left135,
        ViewAngle::Left90,
        ViewAngle::Left45,
    ];

    /// Signed angle from the nose in degrees, right positive, in `-135..=180`.
    pub fn degrees(self) -> i32 {
        match self {
            ViewAngle::Forward => 0,
            ViewAngle::Right45 => 45,
            ViewAngle::Right90 => 90,
            ViewAngle::Right135 => 135,
            ViewAngle::Rear => 180,
            ViewAngle::Left135 => -135,
            ViewAngle::Left90 => -90,
            ViewAngle::Left45 => -45,
        }
    }

    pub fn from_degrees(degrees: i32) -> Option<Self> {
        let normalized = degrees.rem_euclid(360);
        Self::ALL
            .into_iter()
            .find(|angle| angle.degrees().rem_euclid(360) == normalized)
    }

    /// Applies this view's offset to the aircraft attitude.
    pub fn orient(self, aircraft: Attitude) -> Attitude {
        let Attitude {
            roll,
            pitch,
            heading,
        } = aircraft;
        match self {
            ViewAngle::Forward => Attitude::new(roll, pitch, heading),
            ViewAngle::Right45 => Attitude::new(roll, pitch, heading + FRAC_PI_4),
            ViewAngle::Right90 => Attitude::new(pitch, -roll, heading + FRAC_PI_2),
            ViewAngle::Right135 => Attitude::new(-roll, -pitch, heading + THREE_QUARTER_PI),
            ViewAngle::Rear => Attitude::new(-roll, -pitch, heading + PI),
            ViewAngle::Left135 => Attitude::new(-roll, -pitch, heading - THREE_QUARTER_PI),
            ViewAngle::Left90 => Attitude::new(-pitch, roll, heading - FRAC_PI_2),
            ViewAngle::Left45 => Attitude::new(roll, pitch, heading - FRAC_PI_4),
        }
    }
}

impl fmt::Display for ViewAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewAngle::Forward => "forward",
            ViewAngle::Right45 => "right45",
            ViewAngle::Right90 => "right90",
            ViewAngle::Right135 => "right135",
            ViewAngle::Rear => "rear",
            ViewAngle::Left135 => "left135",
            ViewAngle::Left90 => "left90",
            ViewAngle::Left45 => "left45",
        };
        f.write_str(name)
    }
}

impl FromStr for ViewAngle {
    type Err = String;

    /// Accepts the display names or a signed number of degrees.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_ascii_lowercase();
        if let Some(angle) = Self::ALL.into_iter().find(|a| a.to_string() == trimmed) {
            return Ok(angle);
        }
        trimmed
            .parse::<i32>()
            .ok()
            .and_then(Self::from_degrees)
            .ok_or_else(|| format!("unknown view angle '{s}'"))
    }
}

/// Aircraft position and attitude, as supplied by the flight model.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AircraftPose {
    pub position: Point3,
    pub attitude: Attitude,
}

impl AircraftPose {
    pub fn new(position: Point3, attitude: Attitude) -> Self {
        Self { position, attitude }
    }

    /// Camera pose for one viewport: eye raised by `eye_height` and attitude
    /// adjusted for `view`.
    pub fn camera_pose(
        &self,
        view: ViewAngle,
        eye_height: f32,
        zoom: f32,
        focal_plane: f32,
    ) -> CameraPose {
        let position = Point3::new(
            self.position.north,
            self.position.east,
            self.position.up + eye_height,
        );
        CameraPose::new(position, view.orient(self.attitude), zoom).with_focal_plane(focal_plane)
    }
}

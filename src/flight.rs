//! Kinematic aircraft for the interactive demo.
//!
//! This is not a flight model: the controls drive attitude rates directly and
//! the aircraft moves along its nose at the commanded speed.
//!
//! # Input Mapping
//! - Down/Up: nose up/down
//! - Left/Right: roll
//! - A/D: yaw
//! - W/S: speed up/down
//! - +/-: zoom in/out

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::camera::Attitude;
use crate::viewport::AircraftPose;
use crate::window::InputState;

/// The aircraft state the demo integrates each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aircraft {
    pub pose: AircraftPose,
    /// Forward speed in metres per second.
    pub speed: f32,
}

impl Aircraft {
    pub fn new(pose: AircraftPose, speed: f32) -> Self {
        Self { pose, speed }
    }

    /// Moves the aircraft along its nose for `delta_time` seconds.
    ///
    /// Positive pitch is nose down, so the aircraft climbs when pitch is
    /// negative. Altitude never goes below the ground.
    pub fn advance(&mut self, delta_time: f32) {
        let Attitude { pitch, heading, .. } = self.pose.attitude;
        let distance = self.speed * delta_time;
        let horizontal = distance * pitch.cos();
        let position = &mut self.pose.position;
        position.north += horizontal * heading.cos();
        position.east += horizontal * heading.sin();
        position.up = (position.up - distance * pitch.sin()).max(0.0);
    }
}

/// Turns held keys into attitude, speed and zoom changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightController {
    /// Radians per second.
    pub pitch_rate: f32,
    pub roll_rate: f32,
    pub yaw_rate: f32,
    /// Metres per second squared.
    pub acceleration: f32,
    pub max_speed: f32,
    /// Fractional zoom change per second.
    pub zoom_rate: f32,
}

impl Default for FlightController {
    fn default() -> Self {
        Self {
            pitch_rate: 0.5,
            roll_rate: 1.0,
            yaw_rate: 0.5,
            acceleration: 20.0,
            max_speed: 300.0,
            zoom_rate: 1.0,
        }
    }
}

impl FlightController {
    /// Applies one frame of input, then moves the aircraft. Returns the new
    /// zoom.
    pub fn update(
        &self,
        aircraft: &mut Aircraft,
        input: &InputState,
        zoom: f32,
        delta_time: f32,
    ) -> f32 {
        let axis = |positive: bool, negative: bool| (positive as i32 - negative as i32) as f32;

        let attitude = &mut aircraft.pose.attitude;
        attitude.pitch += axis(input.nose_down, input.nose_up) * self.pitch_rate * delta_time;
        attitude.pitch = attitude.pitch.clamp(-FRAC_PI_2, FRAC_PI_2);
        attitude.roll += axis(input.roll_right, input.roll_left) * self.roll_rate * delta_time;
        attitude.roll = wrap_angle(attitude.roll);
        attitude.heading += axis(input.yaw_right, input.yaw_left) * self.yaw_rate * delta_time;
        attitude.heading = attitude.heading.rem_euclid(TAU);

        let throttle = axis(input.throttle_up, input.throttle_down);
        aircraft.speed += throttle * self.acceleration * delta_time;
        aircraft.speed = aircraft.speed.clamp(0.0, self.max_speed);

        aircraft.advance(delta_time);

        let zoom_factor = 1.0 + axis(input.zoom_in, input.zoom_out) * self.zoom_rate * delta_time;
        zoom * zoom_factor.max(0.1)
    }
}

/// Wraps an angle into `-PI..PI`.
fn wrap_angle(angle: f32) -> f32 {
    (angle + std::f32::consts::PI).rem_euclid(TAU) - std::f32::consts::PI
}

//! Small vector types used by the projection pipeline.

pub mod vec2;
pub mod vec3;

pub use vec2::Vec2;
pub use vec3::{SinCos, Vec3};

use std::ops::{Add, Mul, Sub};

/// A camera-space vector.
///
/// After the full camera rotation `x` is the forward (depth) axis, `y` points
/// right and `z` points up. Before rotation the same slots hold the
/// north/east/up offsets of a world point from the camera.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A precomputed `(sin, cos)` pair for one rotation angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SinCos {
    pub sin: f32,
    pub cos: f32,
}

impl SinCos {
    pub fn new(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { sin, cos }
    }
}

impl Default for SinCos {
    fn default() -> Self {
        Self { sin: 0.0, cos: 1.0 }
    }
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Rotation about the forward (x) axis.
    #[inline]
    pub fn rotate_x(&self, rotation: SinCos) -> Self {
        let SinCos { sin, cos } = rotation;
        Self {
            x: self.x,
            y: self.y * cos - self.z * sin,
            z: self.y * sin + self.z * cos,
        }
    }

    /// Rotation about the lateral (y) axis.
    #[inline]
    pub fn rotate_y(&self, rotation: SinCos) -> Self {
        let SinCos { sin, cos } = rotation;
        Self {
            x: self.x * cos + self.z * sin,
            y: self.y,
            z: -self.x * sin + self.z * cos,
        }
    }

    /// Rotation about the vertical (z) axis.
    #[inline]
    pub fn rotate_z(&self, rotation: SinCos) -> Self {
        let SinCos { sin, cos } = rotation;
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
            z: self.z,
        }
    }

    pub fn magnitude(&self) -> f32 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
    }
}

/// Component-wise addition of two vectors.
impl Add<Vec3> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

/// Component-wise subtraction of two vectors.
impl Sub<Vec3> for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

/// Scalar multiplication of a vector.
impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

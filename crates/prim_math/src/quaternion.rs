//! Quaternion components (single precision)

use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

/// Rotation stored as x, y, z (vector part) and w (scalar part)
///
/// Only the squared magnitude lives here. Composition, conjugation and
/// normalization belong to whoever consumes the rotation.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quaternion {
    /// Create a new Quaternion from raw components
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Sum of the squared components
    #[inline]
    pub fn self_dot(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl From<[f32; 4]> for Quaternion {
    fn from(value: [f32; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}

impl From<Quaternion> for [f32; 4] {
    fn from(value: Quaternion) -> Self {
        [value.x, value.y, value.z, value.w]
    }
}

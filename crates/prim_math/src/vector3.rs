//! 3D Vector type (single precision) with a provenance index

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Deserialize};

use crate::error::MathError;
use crate::ordering::{compare_components, partial_lex_cmp, Lexicographic};

/// 3D mesh vertex: x, y, z position plus the index it came from
///
/// `index` is auxiliary data, typically the position of the vertex in the
/// source vertex array. It takes no part in equality, ordering or
/// arithmetic. Every arithmetic result is a fresh value with `index == 0`;
/// do not expect the tag to survive `+`, `-`, `*`, negation or [`cross`].
///
/// [`cross`]: Vector3::cross
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub index: usize,
}

impl Vector3 {
    /// Create a new Vector3 tagged with `index`
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, index: usize) -> Self {
        Self { x, y, z, index }
    }

    /// Untagged position (index 0)
    #[inline]
    const fn position_only(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 0)
    }

    /// Copy carrying a different provenance index
    #[inline]
    pub fn with_index(self, index: usize) -> Self {
        Self { index, ..self }
    }

    /// Position components as an array (for vertex buffers)
    #[inline]
    pub fn position(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Cross product
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::position_only(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Dot product
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Dot product with itself (squared length)
    #[inline]
    pub fn self_dot(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(&self) -> f32 {
        self.self_dot().sqrt()
    }

    /// Normalize to unit length in place
    ///
    /// A zero-length vector is left as it is. [`Vector4::normalize`] has
    /// no such guard and turns a zero vector into NaN.
    ///
    /// [`Vector4::normalize`]: crate::Vector4::normalize
    pub fn normalize(&mut self) {
        let len = self.length();
        if len != 0.0 {
            self.x /= len;
            self.y /= len;
            self.z /= len;
        }
    }

    /// Normalized copy, same policy as [`Vector3::normalize`]
    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Normalize in place, failing on zero or non-finite length
    pub fn try_normalize(&mut self) -> Result<(), MathError> {
        match MathError::check_length(f64::from(self.length())) {
            Some(err) => Err(err),
            None => {
                self.normalize();
                Ok(())
            }
        }
    }
}

/// Exact equality of x, y and z; `index` is ignored
impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl Lexicographic for Vector3 {
    fn lex_cmp(&self, other: &Self) -> Ordering {
        compare_components([(self.x, other.x), (self.y, other.y), (self.z, other.z)])
    }
}

impl PartialOrd for Vector3 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        partial_lex_cmp(self, other)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// Operator overloads

impl std::ops::Add for Vector3 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::position_only(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::position_only(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl std::ops::Mul<f32> for Vector3 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::position_only(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::position_only(-self.x, -self.y, -self.z)
    }
}

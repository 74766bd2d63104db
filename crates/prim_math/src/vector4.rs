//! 4D Vector type (double precision)

use std::cmp::Ordering;
use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::error::MathError;
use crate::ordering::{compare_components, partial_lex_cmp, Lexicographic};

/// 4D Vector with x, y, z, w components
///
/// General homogeneous-coordinate / 4D primitive. No invariants beyond
/// IEEE-754: division by zero and normalizing a zero vector produce
/// Inf/NaN components rather than an error.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vector4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Vector4 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0, w: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0, w: 0.0 };
    pub const W: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Create a new Vector4
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Reset every component to zero in place
    #[inline]
    pub fn zero(&mut self) {
        *self = Self::ZERO;
    }

    /// Dot product
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Dot product with itself (squared length)
    #[inline]
    pub fn self_dot(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(&self) -> f64 {
        self.self_dot().sqrt()
    }

    /// Normalize to unit length in place
    ///
    /// Skipped when the length is exactly 1. There is no zero guard: a zero
    /// vector becomes all NaN. This differs from [`Vector3::normalize`],
    /// which skips zero vectors instead.
    ///
    /// [`Vector3::normalize`]: crate::Vector3::normalize
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        if len != 1.0 {
            self.x /= len;
            self.y /= len;
            self.z /= len;
            self.w /= len;
        }
        self
    }

    /// Normalized copy, same policy as [`Vector4::normalize`]
    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Normalize in place, failing on zero or non-finite length
    ///
    /// The receiver is left untouched on error.
    pub fn try_normalize(&mut self) -> Result<&mut Self, MathError> {
        match MathError::check_length(self.length()) {
            Some(err) => Err(err),
            None => Ok(self.normalize()),
        }
    }

    /// Component-wise add in place, returning the receiver for chaining
    #[inline]
    pub fn add_mut(&mut self, other: Self) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
        self.w += other.w;
        self
    }

    /// Component-wise multiply in place, returning the receiver for chaining
    #[inline]
    pub fn mul_mut(&mut self, other: Self) -> &mut Self {
        self.x *= other.x;
        self.y *= other.y;
        self.z *= other.z;
        self.w *= other.w;
        self
    }

    /// Scale in place, returning the receiver for chaining
    #[inline]
    pub fn scale_mut(&mut self, scalar: f64) -> &mut Self {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
        self.w *= scalar;
        self
    }
}

impl Lexicographic for Vector4 {
    fn lex_cmp(&self, other: &Self) -> Ordering {
        compare_components([
            (self.x, other.x),
            (self.y, other.y),
            (self.z, other.z),
            (self.w, other.w),
        ])
    }
}

impl PartialOrd for Vector4 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        partial_lex_cmp(self, other)
    }
}

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl From<[f64; 4]> for Vector4 {
    fn from(value: [f64; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}

impl From<Vector4> for [f64; 4] {
    fn from(value: Vector4) -> Self {
        [value.x, value.y, value.z, value.w]
    }
}

// Operator overloads

impl std::ops::Add for Vector4 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl std::ops::AddAssign for Vector4 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.add_mut(other);
    }
}

impl std::ops::Sub for Vector4 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

/// Component-wise (Hadamard) product
impl std::ops::Mul for Vector4 {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self::new(
            self.x * other.x,
            self.y * other.y,
            self.z * other.z,
            self.w * other.w,
        )
    }
}

impl std::ops::MulAssign for Vector4 {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        self.mul_mut(other);
    }
}

impl std::ops::Mul<f64> for Vector4 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }
}

impl std::ops::MulAssign<f64> for Vector4 {
    #[inline]
    fn mul_assign(&mut self, scalar: f64) {
        self.scale_mut(scalar);
    }
}

impl std::ops::Neg for Vector4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl std::ops::Div<f64> for Vector4 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f64) -> Self {
        Self::new(
            self.x / scalar,
            self.y / scalar,
            self.z / scalar,
            self.w / scalar,
        )
    }
}

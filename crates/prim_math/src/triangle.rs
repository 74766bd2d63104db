//! Triangle built from three Vector3 corners
//!
//! Triangles are plain containers. Winding order is whatever the producer
//! wrote; nothing checks that the corners are distinct or non-collinear.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Serialize, Deserialize};

use crate::Vector3;

/// Three corners of a face, addressable as slots 0, 1 and 2
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub vertex: [Vector3; 3],
}

impl Triangle {
    /// Create a triangle from its corners in winding order
    #[inline]
    pub const fn new(a: Vector3, b: Vector3, c: Vector3) -> Self {
        Self { vertex: [a, b, c] }
    }

    /// Iterate over the three corners
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Vector3> {
        self.vertex.iter()
    }
}

impl From<[Vector3; 3]> for Triangle {
    fn from(vertex: [Vector3; 3]) -> Self {
        Self { vertex }
    }
}

impl Index<usize> for Triangle {
    type Output = Vector3;

    #[inline]
    fn index(&self, slot: usize) -> &Vector3 {
        &self.vertex[slot]
    }
}

impl IndexMut<usize> for Triangle {
    #[inline]
    fn index_mut(&mut self, slot: usize) -> &mut Vector3 {
        &mut self.vertex[slot]
    }
}

impl<'a> IntoIterator for &'a Triangle {
    type Item = &'a Vector3;
    type IntoIter = std::slice::Iter<'a, Vector3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.vertex[0], self.vertex[1], self.vertex[2])
    }
}

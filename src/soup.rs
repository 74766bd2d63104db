//! SoupBuilder - triangle soup construction
//!
//! A soup is an unindexed list of triangles: every triangle carries its own
//! copy of each corner, so shared corners appear several times. Each corner
//! is tagged with its position in the soup (`triangle * 3 + corner`).

use prim_math::{Triangle, Vector3};

/// Builder for triangle soups
///
/// # Example
/// ```
/// use prim::soup::SoupBuilder;
///
/// let soup = SoupBuilder::new().add_grid(2, 1, 1.0).build();
/// assert_eq!(soup.len(), 4);
/// ```
#[derive(Debug, Default)]
pub struct SoupBuilder {
    triangles: Vec<Triangle>,
}

impl SoupBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with room for `capacity` triangles
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    /// Append a single triangle; its corner indices are rewritten
    pub fn add_triangle(mut self, triangle: Triangle) -> Self {
        self.push(triangle);
        self
    }

    /// Append a `cols` x `rows` grid of square cells on the z = 0 plane
    ///
    /// Each cell is split into two counter-clockwise triangles (normal +z).
    pub fn add_grid(mut self, cols: usize, rows: usize, cell_size: f32) -> Self {
        self.triangles.reserve(cols * rows * 2);
        let corner = |col: usize, row: usize| {
            Vector3::new(col as f32 * cell_size, row as f32 * cell_size, 0.0, 0)
        };

        for row in 0..rows {
            for col in 0..cols {
                let p00 = corner(col, row);
                let p10 = corner(col + 1, row);
                let p11 = corner(col + 1, row + 1);
                let p01 = corner(col, row + 1);
                self.push(Triangle::new(p00, p10, p11));
                self.push(Triangle::new(p00, p11, p01));
            }
        }
        self
    }

    /// Number of triangles added so far
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// True when nothing has been added
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Finish building
    pub fn build(self) -> Vec<Triangle> {
        self.triangles
    }

    fn push(&mut self, mut triangle: Triangle) {
        let base = self.triangles.len() * 3;
        for (slot, vertex) in triangle.vertex.iter_mut().enumerate() {
            vertex.index = base + slot;
        }
        self.triangles.push(triangle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder() {
        let builder = SoupBuilder::new();
        assert!(builder.is_empty());
        assert!(builder.build().is_empty());
    }

    #[test]
    fn test_grid_triangle_count() {
        let builder = SoupBuilder::with_capacity(24).add_grid(3, 4, 1.0);
        assert_eq!(builder.len(), 24);
    }

    #[test]
    fn test_corner_provenance_indices() {
        let soup = SoupBuilder::new()
            .add_triangle(Triangle::default())
            .add_grid(1, 1, 2.0)
            .build();

        assert_eq!(soup.len(), 3);
        let indices: Vec<usize> = soup.iter().flat_map(|t| t.iter().map(|v| v.index)).collect();
        assert_eq!(indices, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_grid_winding_faces_up() {
        let soup = SoupBuilder::new().add_grid(2, 2, 0.5).build();
        for tri in &soup {
            let normal = (tri[1] - tri[0]).cross(&(tri[2] - tri[0]));
            assert!(normal.z > 0.0);
            assert_eq!(normal.x, 0.0);
            assert_eq!(normal.y, 0.0);
        }
    }

    #[test]
    fn test_grid_extent() {
        let soup = SoupBuilder::new().add_grid(2, 3, 0.5).build();
        let max_x = soup.iter().flat_map(|t| t.iter()).map(|v| v.x).fold(0.0, f32::max);
        let max_y = soup.iter().flat_map(|t| t.iter()).map(|v| v.y).fold(0.0, f32::max);
        assert_eq!(max_x, 1.0);
        assert_eq!(max_y, 1.5);
    }
}

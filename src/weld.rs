//! Vertex welding
//!
//! Collapses the duplicated corners of a triangle soup into a shared vertex
//! list plus index triples. Positions are keyed through [`Ordered`], so two
//! corners weld when x, y and z all compare equal (`-0.0` welds with `0.0`).

use std::collections::BTreeMap;

use prim_math::{Ordered, Triangle, Vector3};

/// Indexed mesh produced by [`weld`]
#[derive(Debug, Clone, Default)]
pub struct WeldedMesh {
    /// Unique vertices, in first-seen order; each keeps the provenance
    /// index of the soup corner that introduced it
    pub vertices: Vec<Vector3>,
    /// Three indices into `vertices` per face, winding preserved
    pub faces: Vec<[usize; 3]>,
}

/// Weld identical corner positions of a triangle soup
pub fn weld(triangles: &[Triangle]) -> WeldedMesh {
    let mut lookup: BTreeMap<Ordered<Vector3>, usize> = BTreeMap::new();
    let mut mesh = WeldedMesh {
        vertices: Vec::new(),
        faces: Vec::with_capacity(triangles.len()),
    };

    for triangle in triangles {
        let mut face = [0usize; 3];
        for (slot, corner) in triangle.iter().enumerate() {
            face[slot] = *lookup.entry(Ordered(*corner)).or_insert_with(|| {
                mesh.vertices.push(*corner);
                mesh.vertices.len() - 1
            });
        }
        mesh.faces.push(face);
    }

    log::debug!(
        "Welded {} corners into {} vertices ({} faces)",
        triangles.len() * 3,
        mesh.vertices.len(),
        mesh.faces.len()
    );

    mesh
}

impl WeldedMesh {
    /// Number of unique vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Rebuild the triangle for a face
    ///
    /// Returns `None` if `face` is out of range.
    pub fn triangle(&self, face: usize) -> Option<Triangle> {
        let [a, b, c] = *self.faces.get(face)?;
        Some(Triangle::new(self.vertices[a], self.vertices[b], self.vertices[c]))
    }

    /// Unit normal per face, following the face winding
    ///
    /// Degenerate faces get a zero normal: the cross product is zero and
    /// `Vector3::normalize` leaves zero vectors alone.
    pub fn face_normals(&self) -> Vec<Vector3> {
        self.faces
            .iter()
            .enumerate()
            .map(|(face, &[a, b, c])| {
                let origin = self.vertices[a];
                let normal = (self.vertices[b] - origin).cross(&(self.vertices[c] - origin));
                normal.normalized().with_index(face)
            })
            .collect()
    }

    /// Number of faces whose normal came out zero
    pub fn degenerate_face_count(&self) -> usize {
        self.face_normals()
            .iter()
            .filter(|n| n.self_dot() == 0.0)
            .count()
    }

    /// Vertex positions packed for a vertex buffer
    pub fn positions(&self) -> Vec<[f32; 3]> {
        self.vertices.iter().map(Vector3::position).collect()
    }

    /// Face indices packed for an index buffer
    ///
    /// Returns `None` if a vertex index does not fit in `u32`.
    pub fn indices_u32(&self) -> Option<Vec<u32>> {
        self.faces
            .iter()
            .flatten()
            .map(|&i| u32::try_from(i).ok())
            .collect()
    }
}

/// View packed positions as raw bytes
pub fn position_bytes(positions: &[[f32; 3]]) -> &[u8] {
    bytemuck::cast_slice(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soup::SoupBuilder;

    fn quad_soup() -> Vec<Triangle> {
        SoupBuilder::new().add_grid(1, 1, 1.0).build()
    }

    #[test]
    fn test_weld_quad() {
        let mesh = weld(&quad_soup());
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.faces[0], [0, 1, 2]);
        // p00 and p11 are shared with the first face
        assert_eq!(mesh.faces[1], [0, 2, 3]);
    }

    #[test]
    fn test_first_occurrence_keeps_provenance() {
        let mesh = weld(&quad_soup());
        let indices: Vec<usize> = mesh.vertices.iter().map(|v| v.index).collect();
        // Corner 5 (second face, slot 2) introduced p01
        assert_eq!(indices, vec![0, 1, 2, 5]);
    }

    #[test]
    fn test_grid_vertex_count() {
        let soup = SoupBuilder::new().add_grid(3, 2, 1.0).build();
        let mesh = weld(&soup);
        assert_eq!(mesh.vertex_count(), 4 * 3);
        assert_eq!(mesh.face_count(), 12);
    }

    #[test]
    fn test_signed_zero_welds() {
        let soup = SoupBuilder::new()
            .add_triangle(Triangle::new(
                Vector3::new(0.0, 0.0, 0.0, 0),
                Vector3::new(1.0, 0.0, 0.0, 0),
                Vector3::new(0.0, 1.0, 0.0, 0),
            ))
            .add_triangle(Triangle::new(
                Vector3::new(-0.0, 0.0, -0.0, 0),
                Vector3::new(0.0, 1.0, 0.0, 0),
                Vector3::new(1.0, 0.0, 0.0, 0),
            ))
            .build();
        let mesh = weld(&soup);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.faces[1], [0, 2, 1]);
    }

    #[test]
    fn test_triangle_roundtrip() {
        let soup = quad_soup();
        let mesh = weld(&soup);
        for (face, tri) in soup.iter().enumerate() {
            assert_eq!(mesh.triangle(face), Some(*tri));
        }
        assert_eq!(mesh.triangle(2), None);
    }

    #[test]
    fn test_face_normals() {
        let mesh = weld(&quad_soup());
        let normals = mesh.face_normals();
        assert_eq!(normals.len(), 2);
        for (face, n) in normals.iter().enumerate() {
            assert_eq!(n.position(), [0.0, 0.0, 1.0]);
            assert_eq!(n.index, face);
        }
        assert_eq!(mesh.degenerate_face_count(), 0);
    }

    #[test]
    fn test_degenerate_face_gets_zero_normal() {
        let p = Vector3::new(1.0, 1.0, 1.0, 0);
        let soup = SoupBuilder::new().add_triangle(Triangle::new(p, p, p)).build();
        let mesh = weld(&soup);
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.face_normals()[0].position(), [0.0, 0.0, 0.0]);
        assert_eq!(mesh.degenerate_face_count(), 1);
    }

    #[test]
    fn test_packed_buffers() {
        let mesh = weld(&quad_soup());
        let positions = mesh.positions();
        assert_eq!(positions[3], [0.0, 1.0, 0.0]);
        assert_eq!(position_bytes(&positions).len(), 4 * 3 * 4);
        assert_eq!(mesh.indices_u32(), Some(vec![0, 1, 2, 0, 2, 3]));
    }

    #[test]
    fn test_empty_soup() {
        let mesh = weld(&[]);
        assert_eq!(mesh.vertex_count(), 0);
        assert!(mesh.positions().is_empty());
    }
}

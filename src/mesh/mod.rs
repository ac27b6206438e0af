//! Mesh output and SDF polygonization
//!
//! - [`Mesh`]: positions, optional per-vertex normals and an index list
//!   interpreted by [`Topology`].
//! - [`marching_cubes`]: two-layer sliding marching cubes over an [`Aabb`].
//! - [`dichotomy`]: bisection refinement of a straddling lattice edge.
//!
//! [`Aabb`]: crate::types::Aabb

mod dichotomy;
mod marching_cubes;
mod tables;

pub use dichotomy::{dichotomy, DICHOTOMY_EPSILON};
pub use marching_cubes::{marching_cubes, marching_cubes_counted, MarchingCubesConfig};
pub use tables::{EDGE_CORNERS, EDGE_TABLE, TRI_TABLE};

use crate::types::Aabb;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// How a mesh's index list is read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Topology {
    /// Index triples
    #[default]
    Triangles,
    /// Index pairs
    Lines,
    /// Vertices only, in sampling order; no indices
    LineStrip,
}

/// Polygon mesh
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions
    pub vertices: Vec<Vec3>,
    /// Per-vertex normals, parallel to `vertices` or empty
    pub normals: Vec<Vec3>,
    /// Primitive indices into `vertices`
    pub indices: Vec<u32>,
    /// Interpretation of `indices`
    pub topology: Topology,
}

impl Mesh {
    /// Create an empty mesh
    pub fn new(topology: Topology) -> Self {
        Mesh {
            topology,
            ..Default::default()
        }
    }

    /// Get the number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles (zero unless `Topology::Triangles`)
    #[inline]
    pub fn triangle_count(&self) -> usize {
        match self.topology {
            Topology::Triangles => self.indices.len() / 3,
            _ => 0,
        }
    }

    /// Get the number of line segments (zero unless `Topology::Lines`)
    #[inline]
    pub fn line_count(&self) -> usize {
        match self.topology {
            Topology::Lines => self.indices.len() / 2,
            _ => 0,
        }
    }

    /// True when the mesh has no vertices
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// True when every vertex carries a normal
    #[inline]
    pub fn has_normals(&self) -> bool {
        !self.vertices.is_empty() && self.normals.len() == self.vertices.len()
    }

    /// Append a vertex, returning its index
    #[inline]
    pub fn push_vertex(&mut self, position: Vec3) -> u32 {
        self.vertices.push(position);
        (self.vertices.len() - 1) as u32
    }

    /// Append a vertex and its normal, returning the vertex index
    #[inline]
    pub fn push_vertex_with_normal(&mut self, position: Vec3, normal: Vec3) -> u32 {
        self.normals.push(normal);
        self.push_vertex(position)
    }

    /// Append a triangle over existing vertices
    #[inline]
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Append a line segment with two new vertices
    pub fn push_segment(&mut self, from: Vec3, to: Vec3) {
        let a = self.push_vertex(from);
        let b = self.push_vertex(to);
        self.indices.extend_from_slice(&[a, b]);
    }

    /// Remove all geometry, keeping the topology
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.normals.clear();
        self.indices.clear();
    }

    /// Bounding box of the vertices, `None` for an empty mesh
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(&self.vertices)
    }

    /// Iterate triangles as vertex-index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        let indices = match self.topology {
            Topology::Triangles => self.indices.as_slice(),
            _ => &[],
        };
        indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Signed volume enclosed by the triangles (divergence theorem)
    ///
    /// Negative when the triangles wind clockwise seen from outside, which
    /// is the orientation [`marching_cubes`] produces.
    pub fn signed_volume(&self) -> f32 {
        self.triangles()
            .map(|[a, b, c]| {
                let (a, b, c) = (
                    self.vertices[a as usize],
                    self.vertices[b as usize],
                    self.vertices[c as usize],
                );
                a.dot(b.cross(c))
            })
            .sum::<f32>()
            / 6.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tetrahedron() -> Mesh {
        let mut mesh = Mesh::new(Topology::Triangles);
        let o = mesh.push_vertex(Vec3::ZERO);
        let x = mesh.push_vertex(Vec3::X);
        let y = mesh.push_vertex(Vec3::Y);
        let z = mesh.push_vertex(Vec3::Z);
        // Counter-clockwise seen from outside
        mesh.push_triangle(o, y, x);
        mesh.push_triangle(o, x, z);
        mesh.push_triangle(o, z, y);
        mesh.push_triangle(x, y, z);
        mesh
    }

    #[test]
    fn test_counts() {
        let mesh = tetrahedron();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 4);
        assert_eq!(mesh.line_count(), 0);
        assert!(!mesh.has_normals());
    }

    #[test]
    fn test_signed_volume() {
        let mesh = tetrahedron();
        assert!((mesh.signed_volume() - 1.0 / 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_segments() {
        let mut mesh = Mesh::new(Topology::Lines);
        mesh.push_segment(Vec3::ZERO, Vec3::X);
        mesh.push_segment(Vec3::Y, Vec3::ONE);
        assert_eq!(mesh.line_count(), 2);
        assert_eq!(mesh.triangle_count(), 0);
        assert_eq!(mesh.indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_normals_and_clear() {
        let mut mesh = Mesh::default();
        let i = mesh.push_vertex_with_normal(Vec3::ONE, Vec3::Y);
        assert_eq!(i, 0);
        assert!(mesh.has_normals());
        mesh.clear();
        assert!(mesh.is_empty());
        assert!(mesh.normals.is_empty());
        assert_eq!(mesh.topology, Topology::Triangles);
    }

    #[test]
    fn test_bounds() {
        assert!(Mesh::default().bounds().is_none());
        let bounds = tetrahedron().bounds().unwrap();
        assert_eq!(bounds.min, Vec3::ZERO);
        assert_eq!(bounds.max, Vec3::ONE);
    }
}

//! Axis-aligned bounding box
//!
//! Used as the sampling domain of the polygonizer and as a generator of the
//! slicing wireframe shown while sculpting.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::mesh::{Mesh, Topology};

/// Vertex index pairs of the 12 box edges, see [`Aabb::vertex`]
const EDGE_VERTICES: [(usize, usize); 12] = [
    (0, 1),
    (2, 3),
    (4, 5),
    (6, 7),
    (0, 2),
    (1, 3),
    (4, 6),
    (5, 7),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Vertex order of the three slicing grids: the first four vertices span
/// the face the grid starts on, the last four the opposite face.
const GRID_X: [usize; 8] = [4, 0, 6, 2, 5, 1, 7, 3];
const GRID_Y: [usize; 8] = [2, 3, 6, 7, 0, 1, 4, 5];
const GRID_Z: [usize; 8] = [0, 1, 2, 3, 4, 5, 6, 7];

/// Axis-aligned bounding box
///
/// `min <= max` componentwise is the caller's responsibility; nothing here
/// enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Default for Aabb {
    /// The `[-1, 1]^3` cube
    fn default() -> Self {
        Aabb::cube(1.0)
    }
}

impl Aabb {
    /// Outward face normals: -X, -Y, -Z, +X, +Y, +Z
    pub const NORMALS: [Vec3; 6] = [
        Vec3::NEG_X,
        Vec3::NEG_Y,
        Vec3::NEG_Z,
        Vec3::X,
        Vec3::Y,
        Vec3::Z,
    ];

    /// Create a new AABB from two corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Aabb { min, max }
    }

    /// Create from center and half-extents
    pub fn from_center_extents(center: Vec3, half_extents: Vec3) -> Self {
        Aabb {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Cube around a center with the given half side length
    pub fn from_center_radius(center: Vec3, radius: f32) -> Self {
        Aabb::from_center_extents(center, Vec3::splat(radius))
    }

    /// Origin-centered cube with the given half side length
    pub fn cube(radius: f32) -> Self {
        Aabb::from_center_radius(Vec3::ZERO, radius)
    }

    /// Tightest box around a set of points, `None` when empty
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut aabb = Aabb::new(*first, *first);
        for p in rest {
            aabb.min = aabb.min.min(*p);
            aabb.max = aabb.max.max(*p);
        }
        Some(aabb)
    }

    /// Get center point
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Diagonal vector from `min` to `max`
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Length of the diagonal
    pub fn diagonal(&self) -> f32 {
        self.size().length()
    }

    /// Get half-extents
    pub fn half_extents(&self) -> Vec3 {
        self.size() * 0.5
    }

    /// Radius of the circumscribed sphere
    pub fn radius(&self) -> f32 {
        0.5 * self.diagonal()
    }

    /// Volume
    pub fn volume(&self) -> f32 {
        let s = self.size();
        s.x * s.y * s.z
    }

    /// Surface area
    pub fn area(&self) -> f32 {
        let s = self.size();
        2.0 * (s.x * s.y + s.y * s.z + s.z * s.x)
    }

    /// One of the 8 vertices: bit 0 of `k` selects max x, bit 1 max y,
    /// bit 2 max z
    pub fn vertex(&self, k: usize) -> Vec3 {
        Vec3::new(
            if k & 1 != 0 { self.max.x } else { self.min.x },
            if k & 2 != 0 { self.max.y } else { self.min.y },
            if k & 4 != 0 { self.max.z } else { self.min.z },
        )
    }

    /// End points of edge `k` (0..12)
    pub fn edge(&self, k: usize) -> (Vec3, Vec3) {
        let (a, b) = EDGE_VERTICES[k % 12];
        (self.vertex(a), self.vertex(b))
    }

    /// Outward normal of face `k` (0..6)
    pub fn normal(k: usize) -> Vec3 {
        Self::NORMALS[k % 6]
    }

    /// Check if point is inside or on the boundary
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Check if point is strictly inside
    pub fn inside(&self, point: Vec3) -> bool {
        point.cmpgt(self.min).all() && point.cmplt(self.max).all()
    }

    /// Check if another box lies strictly inside this one
    pub fn inside_box(&self, other: &Aabb) -> bool {
        other.min.cmpgt(self.min).all() && other.max.cmplt(self.max).all()
    }

    /// Expand to include another AABB
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Sub-box in octant `n`; bits select the upper half per axis like
    /// [`Aabb::vertex`]
    pub fn sub(&self, n: usize) -> Aabb {
        let c = self.center();
        let pick = |bit: usize, lo: f32, mid: f32, hi: f32| {
            if n & bit != 0 {
                (mid, hi)
            } else {
                (lo, mid)
            }
        };
        let (x0, x1) = pick(1, self.min.x, c.x, self.max.x);
        let (y0, y1) = pick(2, self.min.y, c.y, self.max.y);
        let (z0, z1) = pick(4, self.min.z, c.z, self.max.z);
        Aabb::new(Vec3::new(x0, y0, z0), Vec3::new(x1, y1, z1))
    }

    /// Translate in place
    pub fn translate(&mut self, offset: Vec3) {
        self.min += offset;
        self.max += offset;
    }

    /// Scale in place about the origin; negative factors swap the corners
    pub fn scale(&mut self, factor: f32) {
        self.min *= factor;
        self.max *= factor;
        if factor < 0.0 {
            std::mem::swap(&mut self.min, &mut self.max);
        }
    }

    /// Line mesh of three slicing grids
    ///
    /// Each grid has `resolution + 1` lines in both directions and spans
    /// the box across two axes. It is offset along the third axis by
    /// `slide / resolution` of the box extent: `slide_x` moves the grid
    /// lying in the YZ plane, and so on.
    pub fn get_box(&self, resolution: u32, slide_x: u32, slide_y: u32, slide_z: u32) -> Mesh {
        let mut mesh = Mesh::new(Topology::Lines);
        let n = resolution.max(1);
        self.push_grid(&mut mesh, n, slide_x, GRID_X);
        self.push_grid(&mut mesh, n, slide_y, GRID_Y);
        self.push_grid(&mut mesh, n, slide_z, GRID_Z);
        mesh
    }

    fn push_grid(&self, mesh: &mut Mesh, n: u32, slide: u32, order: [usize; 8]) {
        let v = order.map(|k| self.vertex(k));
        let offset = slide as f32 / n as f32;
        let a = v[0] + (v[4] - v[0]) * offset;
        let b = v[1] + (v[5] - v[1]) * offset;
        let c = v[2] + (v[6] - v[2]) * offset;
        let d = v[3] + (v[7] - v[3]) * offset;

        let step = 1.0 / n as f32;
        for i in 0..=n {
            let t = i as f32 * step;
            mesh.push_segment(a + (b - a) * t, c + (d - c) * t);
            mesh.push_segment(a + (c - a) * t, b + (d - b) * t);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit() -> Aabb {
        Aabb::new(Vec3::ZERO, Vec3::ONE)
    }

    #[test]
    fn test_derived_quantities() {
        let aabb = Aabb::new(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(1.0, 3.0, 3.0));
        assert_eq!(aabb.center(), Vec3::new(0.0, 1.5, 2.5));
        assert_eq!(aabb.size(), Vec3::new(2.0, 3.0, 1.0));
        assert_relative_eq!(aabb.volume(), 6.0);
        assert_relative_eq!(aabb.area(), 2.0 * (6.0 + 3.0 + 2.0));
        assert_relative_eq!(aabb.diagonal(), 14.0_f32.sqrt());
        assert_relative_eq!(aabb.radius(), 0.5 * 14.0_f32.sqrt());
    }

    #[test]
    fn test_vertices() {
        let aabb = unit();
        assert_eq!(aabb.vertex(0), Vec3::ZERO);
        assert_eq!(aabb.vertex(1), Vec3::X);
        assert_eq!(aabb.vertex(2), Vec3::Y);
        assert_eq!(aabb.vertex(4), Vec3::Z);
        assert_eq!(aabb.vertex(7), Vec3::ONE);
    }

    #[test]
    fn test_edges_are_unit_length() {
        let aabb = unit();
        for k in 0..12 {
            let (a, b) = aabb.edge(k);
            assert_relative_eq!((b - a).length(), 1.0);
        }
    }

    #[test]
    fn test_normals() {
        assert_eq!(Aabb::normal(0), Vec3::NEG_X);
        assert_eq!(Aabb::normal(5), Vec3::Z);
        let sum: Vec3 = Aabb::NORMALS.iter().copied().sum();
        assert_eq!(sum, Vec3::ZERO);
    }

    #[test]
    fn test_inside_is_strict() {
        let aabb = unit();
        assert!(aabb.inside(Vec3::splat(0.5)));
        assert!(!aabb.inside(Vec3::new(0.0, 0.5, 0.5)));
        assert!(aabb.contains(Vec3::new(0.0, 0.5, 0.5)));
        assert!(!aabb.contains(Vec3::new(2.0, 0.0, 0.0)));
        assert!(aabb.inside_box(&Aabb::new(Vec3::splat(0.25), Vec3::splat(0.75))));
        assert!(!aabb.inside_box(&unit()));
    }

    #[test]
    fn test_from_points() {
        assert!(Aabb::from_points(&[]).is_none());
        let aabb = Aabb::from_points(&[Vec3::new(1.0, -2.0, 0.0), Vec3::new(-1.0, 2.0, 5.0)]);
        assert_eq!(
            aabb,
            Some(Aabb::new(Vec3::new(-1.0, -2.0, 0.0), Vec3::new(1.0, 2.0, 5.0)))
        );
    }

    #[test]
    fn test_sub_octants_partition_volume() {
        let aabb = Aabb::cube(1.0);
        let total: f32 = (0..8).map(|n| aabb.sub(n).volume()).sum();
        assert_relative_eq!(total, aabb.volume());
        assert_eq!(aabb.sub(0), Aabb::new(Vec3::splat(-1.0), Vec3::ZERO));
        assert_eq!(aabb.sub(7), Aabb::new(Vec3::ZERO, Vec3::ONE));
    }

    #[test]
    fn test_translate_and_negative_scale() {
        let mut aabb = unit();
        aabb.translate(Vec3::X);
        assert_eq!(aabb.min, Vec3::X);
        aabb.scale(-2.0);
        assert_eq!(aabb.min, Vec3::new(-4.0, -2.0, -2.0));
        assert_eq!(aabb.max, Vec3::new(-2.0, 0.0, 0.0));
    }

    #[test]
    fn test_get_box_line_count() {
        let mesh = Aabb::cube(1.0).get_box(4, 0, 0, 0);
        assert_eq!(mesh.topology, Topology::Lines);
        // Three grids, two directions, five lines each
        assert_eq!(mesh.line_count(), 30);
        assert_eq!(mesh.vertex_count(), 60);
    }

    #[test]
    fn test_get_box_slides_along_axis() {
        let aabb = Aabb::cube(1.0);
        let mesh = aabb.get_box(4, 2, 0, 0);
        // The first grid is the X slice; halfway along X puts it at x = 0
        let x_grid = &mesh.vertices[..20];
        assert!(x_grid.iter().all(|p| p.x.abs() < 1e-6));
        // Every emitted point stays on or inside the box
        assert!(mesh.vertices.iter().all(|p| aabb.contains(*p)));
    }
}

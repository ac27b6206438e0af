//! Primitive constructors for SdfNode

use glam::Vec3;

use super::{NodeKind, SdfNode};

impl SdfNode {
    // === Primitive constructors ===

    /// Create a sphere
    #[must_use]
    #[inline]
    pub fn sphere(center: Vec3, radius: f32) -> Self {
        SdfNode::new(NodeKind::Sphere { center, radius })
    }

    /// Create an axis-aligned box from two opposite corners
    #[must_use]
    #[inline]
    pub fn box3d(min: Vec3, max: Vec3) -> Self {
        SdfNode::new(NodeKind::Box { min, max })
    }

    /// Create an axis-aligned box from its center and half extents
    #[must_use]
    #[inline]
    pub fn box_centered(center: Vec3, half_extents: Vec3) -> Self {
        SdfNode::box3d(center - half_extents, center + half_extents)
    }

    /// Create a torus in the XZ plane
    #[must_use]
    #[inline]
    pub fn torus(major_radius: f32, minor_radius: f32) -> Self {
        SdfNode::new(NodeKind::Torus {
            major_radius,
            minor_radius,
        })
    }

    /// Create an infinite plane `dot(p, normal) + height`
    #[must_use]
    #[inline]
    pub fn plane(normal: Vec3, height: f32) -> Self {
        SdfNode::new(NodeKind::Plane { normal, height })
    }

    /// Create a vertical capsule from y = 0 to y = height
    #[must_use]
    #[inline]
    pub fn capsule(radius: f32, height: f32) -> Self {
        SdfNode::new(NodeKind::Capsule { radius, height })
    }

    /// Create a capped cylinder spanning y in [-height, height]
    #[must_use]
    #[inline]
    pub fn cylinder(radius: f32, height: f32) -> Self {
        SdfNode::new(NodeKind::Cylinder { radius, height })
    }

    /// Create a capped cone spanning y in [-height, height]
    #[must_use]
    #[inline]
    pub fn cone(radius: f32, height: f32) -> Self {
        SdfNode::new(NodeKind::Cone { radius, height })
    }

    /// Create an ellipsoid with the given semi-axes
    #[must_use]
    #[inline]
    pub fn ellipsoid(radii: Vec3) -> Self {
        SdfNode::new(NodeKind::Ellipsoid { radii })
    }

    /// Create a regular octahedron
    #[must_use]
    #[inline]
    pub fn octahedron(size: f32) -> Self {
        SdfNode::new(NodeKind::Octahedron { size })
    }

    /// Create a square pyramid spanning y in [-height, height]
    #[must_use]
    #[inline]
    pub fn pyramid(height: f32) -> Self {
        SdfNode::new(NodeKind::Pyramid { height })
    }
}

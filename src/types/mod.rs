//! Core types for sdf-sculpt
//!
//! Defines the SdfNode tree structure, its type discriminator and the
//! evaluation root wrapper.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

mod aabb;
mod constructors;
mod containers;
mod operations;
mod transforms;
mod tree;

pub use aabb::Aabb;
pub use containers::{Hit, Ray};
pub use tree::SdfTree;

/// Shared handle to a node.
///
/// Children are immutable once shared; editing a shared child goes through
/// [`Arc::make_mut`], so a node can never become its own ancestor.
pub type SdfRef = Arc<SdfNode>;

/// How [`SdfNode::intersect`] walks along a ray
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IntersectMethod {
    /// Fixed steps of the caller-supplied epsilon
    #[default]
    RayMarching,
    /// Steps of `max(value, epsilon) / lambda`
    SphereTracing,
}

/// Category of an SDF node variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SdfCategory {
    /// The evaluation root wrapper
    Tree,
    /// Leaf geometry nodes (sphere, box, torus, ...)
    Primitive,
    /// Single-child operators that reshape the field (hull, repetition, ...)
    Unary,
    /// Single-child rigid or similarity transforms
    Transform,
    /// Hard boolean combinators
    Binary,
    /// Polynomial-blended boolean combinators
    SmoothBinary,
}

/// Payload-free discriminator of node kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SdfType {
    /// Evaluation root
    Tree,
    /// Sphere primitive
    Sphere,
    /// Axis-aligned box primitive
    Box,
    /// Torus primitive
    Torus,
    /// Cylinder primitive
    Cylinder,
    /// Cone primitive
    Cone,
    /// Plane primitive
    Plane,
    /// Capsule primitive
    Capsule,
    /// Ellipsoid primitive
    Ellipsoid,
    /// Octahedron primitive
    Octahedron,
    /// Pyramid primitive
    Pyramid,
    /// Shell operator
    Hull,
    /// Rounding operator
    Rounding,
    /// Elongation operator
    Elongation,
    /// Infinite repetition operator
    Repetition,
    /// Union
    Union,
    /// Smooth union
    SmoothUnion,
    /// Intersection
    Intersection,
    /// Symmetric difference
    Xor,
    /// Smooth intersection
    SmoothIntersection,
    /// Difference
    Substraction,
    /// Smooth difference
    SmoothSubstraction,
    /// Translation
    Translation,
    /// Rotation around an arbitrary axis
    Rotation,
    /// Rotation around X
    RotationX,
    /// Rotation around Y
    RotationY,
    /// Rotation around Z
    RotationZ,
    /// Uniform scale
    Scale,
}

impl SdfType {
    /// Every discriminator, in declaration order
    pub const ALL: [SdfType; 28] = [
        SdfType::Tree,
        SdfType::Sphere,
        SdfType::Box,
        SdfType::Torus,
        SdfType::Cylinder,
        SdfType::Cone,
        SdfType::Plane,
        SdfType::Capsule,
        SdfType::Ellipsoid,
        SdfType::Octahedron,
        SdfType::Pyramid,
        SdfType::Hull,
        SdfType::Rounding,
        SdfType::Elongation,
        SdfType::Repetition,
        SdfType::Union,
        SdfType::SmoothUnion,
        SdfType::Intersection,
        SdfType::Xor,
        SdfType::SmoothIntersection,
        SdfType::Substraction,
        SdfType::SmoothSubstraction,
        SdfType::Translation,
        SdfType::Rotation,
        SdfType::RotationX,
        SdfType::RotationY,
        SdfType::RotationZ,
        SdfType::Scale,
    ];

    /// Stable upper-case name, used by diagnostics and the tree listing
    pub fn as_str(self) -> &'static str {
        match self {
            SdfType::Tree => "TREE",
            SdfType::Sphere => "PRIMITIVE_SPHERE",
            SdfType::Box => "PRIMITIVE_BOX",
            SdfType::Torus => "PRIMITIVE_TORUS",
            SdfType::Cylinder => "PRIMITIVE_CYLINDER",
            SdfType::Cone => "PRIMITIVE_CONE",
            SdfType::Plane => "PRIMITIVE_PLANE",
            SdfType::Capsule => "PRIMITIVE_CAPSULE",
            SdfType::Ellipsoid => "PRIMITIVE_ELLIPSOID",
            SdfType::Octahedron => "PRIMITIVE_OCTAHEDRON",
            SdfType::Pyramid => "PRIMITIVE_PYRAMID",
            SdfType::Hull => "UNARY_OPERATOR_HULL",
            SdfType::Rounding => "UNARY_OPERATOR_ROUNDING",
            SdfType::Elongation => "UNARY_OPERATOR_ELONGATION",
            SdfType::Repetition => "UNARY_OPERATOR_REPETITION",
            SdfType::Union => "BINARY_OPERATOR_UNION",
            SdfType::SmoothUnion => "BINARY_OPERATOR_SMOOTH_UNION",
            SdfType::Intersection => "BINARY_OPERATOR_INTERSECTION",
            SdfType::Xor => "BINARY_OPERATOR_XOR",
            SdfType::SmoothIntersection => "BINARY_OPERATOR_SMOOTH_INTERSECTION",
            SdfType::Substraction => "BINARY_OPERATOR_SUBSTRACTION",
            SdfType::SmoothSubstraction => "BINARY_OPERATOR_SMOOTH_SUBSTRACTION",
            SdfType::Translation => "TRANSFORM_TRANSLATION",
            SdfType::Rotation => "TRANSFORM_ROTATION",
            SdfType::RotationX => "TRANSFORM_ROTATION_X",
            SdfType::RotationY => "TRANSFORM_ROTATION_Y",
            SdfType::RotationZ => "TRANSFORM_ROTATION_Z",
            SdfType::Scale => "TRANSFORM_SCALE",
        }
    }

    /// Category this discriminator belongs to
    pub fn category(self) -> SdfCategory {
        match self {
            SdfType::Tree => SdfCategory::Tree,
            SdfType::Sphere
            | SdfType::Box
            | SdfType::Torus
            | SdfType::Cylinder
            | SdfType::Cone
            | SdfType::Plane
            | SdfType::Capsule
            | SdfType::Ellipsoid
            | SdfType::Octahedron
            | SdfType::Pyramid => SdfCategory::Primitive,
            SdfType::Hull | SdfType::Rounding | SdfType::Elongation | SdfType::Repetition => {
                SdfCategory::Unary
            }
            SdfType::Translation
            | SdfType::Rotation
            | SdfType::RotationX
            | SdfType::RotationY
            | SdfType::RotationZ
            | SdfType::Scale => SdfCategory::Transform,
            SdfType::Union | SdfType::Intersection | SdfType::Substraction | SdfType::Xor => {
                SdfCategory::Binary
            }
            SdfType::SmoothUnion | SdfType::SmoothIntersection | SdfType::SmoothSubstraction => {
                SdfCategory::SmoothBinary
            }
        }
    }
}

impl fmt::Display for SdfType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant payload of an [`SdfNode`]
///
/// Editing tools match on this enum to reach per-variant parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NodeKind {
    // === Primitives ===
    /// Sphere
    Sphere {
        /// Center point
        center: Vec3,
        /// Radius
        radius: f32,
    },
    /// Axis-aligned box spanning two corners
    ///
    /// Distance is measured from the box center `(min + max) / 2`, so a box
    /// away from the origin stays where its corners put it.
    Box {
        /// Lower corner
        min: Vec3,
        /// Upper corner
        max: Vec3,
    },
    /// Torus lying in the XZ plane
    Torus {
        /// Distance from the center to the tube center
        major_radius: f32,
        /// Tube radius
        minor_radius: f32,
    },
    /// Infinite plane `dot(p, normal) + height`
    Plane {
        /// Plane normal (should be normalized)
        normal: Vec3,
        /// Signed offset along the normal
        height: f32,
    },
    /// Vertical capsule whose segment runs from y = 0 to y = height
    Capsule {
        /// Radius
        radius: f32,
        /// Segment length
        height: f32,
    },
    /// Capped vertical cylinder spanning y in [-height, height]
    Cylinder {
        /// Radius
        radius: f32,
        /// Half height
        height: f32,
    },
    /// Capped cone, base at y = -height and tip at y = height
    Cone {
        /// Base radius
        radius: f32,
        /// Half height
        height: f32,
    },
    /// Ellipsoid centered at the origin
    Ellipsoid {
        /// Semi-axes
        radii: Vec3,
    },
    /// Regular octahedron
    Octahedron {
        /// Distance from center to vertex
        size: f32,
    },
    /// Square pyramid with a unit base at y = -height
    Pyramid {
        /// Half height
        height: f32,
    },

    // === Unary operators ===
    /// Shell of the given thickness around the child's surface
    Hull {
        /// Child node
        child: SdfRef,
        /// Shell thickness
        thickness: f32,
    },
    /// Child inflated by a radius
    Rounding {
        /// Child node
        child: SdfRef,
        /// Rounding radius
        radius: f32,
    },
    /// Child stretched by inserting a slab of the given half extent
    Elongation {
        /// Child node
        child: SdfRef,
        /// Half extent of the inserted slab per axis
        extent: Vec3,
    },
    /// Infinite tiling of the child; zero components disable an axis
    Repetition {
        /// Child node
        child: SdfRef,
        /// Tile size per axis
        period: Vec3,
    },

    // === Binary operators ===
    /// min(A, B)
    Union {
        /// First child
        a: SdfRef,
        /// Second child
        b: SdfRef,
    },
    /// max(A, B)
    Intersection {
        /// First child
        a: SdfRef,
        /// Second child
        b: SdfRef,
    },
    /// max(A, -B)
    Substraction {
        /// First child
        a: SdfRef,
        /// Second child
        b: SdfRef,
    },
    /// max(min(A, B), -max(A, B))
    Xor {
        /// First child
        a: SdfRef,
        /// Second child
        b: SdfRef,
    },
    /// Polynomial smooth union
    SmoothUnion {
        /// First child
        a: SdfRef,
        /// Second child
        b: SdfRef,
        /// Blend radius
        k: f32,
    },
    /// Polynomial smooth intersection
    SmoothIntersection {
        /// First child
        a: SdfRef,
        /// Second child
        b: SdfRef,
        /// Blend radius
        k: f32,
    },
    /// Polynomial smooth difference
    SmoothSubstraction {
        /// First child
        a: SdfRef,
        /// Second child
        b: SdfRef,
        /// Blend radius
        k: f32,
    },

    // === Transforms ===
    /// Translation by an offset
    Translation {
        /// Child node
        child: SdfRef,
        /// Offset
        offset: Vec3,
    },
    /// Rotation around an arbitrary axis
    Rotation {
        /// Child node
        child: SdfRef,
        /// Rotation axis (normalized at evaluation time)
        axis: Vec3,
        /// Angle in radians
        angle: f32,
    },
    /// Rotation around the X axis
    RotationX {
        /// Child node
        child: SdfRef,
        /// Angle in radians
        angle: f32,
    },
    /// Rotation around the Y axis
    RotationY {
        /// Child node
        child: SdfRef,
        /// Angle in radians
        angle: f32,
    },
    /// Rotation around the Z axis
    RotationZ {
        /// Child node
        child: SdfRef,
        /// Angle in radians
        angle: f32,
    },
    /// Uniform scale
    Scale {
        /// Child node
        child: SdfRef,
        /// Scale factor
        factor: f32,
    },
}

fn default_lambda() -> f32 {
    1.0
}

/// Signed Distance Function Node
///
/// A variant payload plus the ray-intersection settings every node carries.
/// Nodes are built bottom-up with the builder methods and shared through
/// [`SdfRef`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SdfNode {
    /// Variant payload
    pub kind: NodeKind,
    /// Lipschitz factor used to divide sphere-tracing steps
    #[serde(default = "default_lambda")]
    pub lambda: f32,
    /// Ray intersection strategy
    #[serde(default)]
    pub intersect_method: IntersectMethod,
}

impl From<NodeKind> for SdfNode {
    fn from(kind: NodeKind) -> Self {
        SdfNode::new(kind)
    }
}

impl SdfNode {
    /// Wrap a payload with the default lambda (1.0) and ray marching
    #[inline]
    pub fn new(kind: NodeKind) -> Self {
        SdfNode {
            kind,
            lambda: default_lambda(),
            intersect_method: IntersectMethod::default(),
        }
    }

    /// Set the sphere-tracing lambda
    #[must_use]
    pub fn with_lambda(mut self, lambda: f32) -> Self {
        self.lambda = lambda;
        self
    }

    /// Set the ray intersection strategy
    #[must_use]
    pub fn with_intersect_method(mut self, method: IntersectMethod) -> Self {
        self.intersect_method = method;
        self
    }

    /// Move the node behind a shared handle
    #[inline]
    pub fn into_ref(self) -> SdfRef {
        Arc::new(self)
    }

    /// Discriminator of this node
    pub fn sdf_type(&self) -> SdfType {
        match &self.kind {
            NodeKind::Sphere { .. } => SdfType::Sphere,
            NodeKind::Box { .. } => SdfType::Box,
            NodeKind::Torus { .. } => SdfType::Torus,
            NodeKind::Plane { .. } => SdfType::Plane,
            NodeKind::Capsule { .. } => SdfType::Capsule,
            NodeKind::Cylinder { .. } => SdfType::Cylinder,
            NodeKind::Cone { .. } => SdfType::Cone,
            NodeKind::Ellipsoid { .. } => SdfType::Ellipsoid,
            NodeKind::Octahedron { .. } => SdfType::Octahedron,
            NodeKind::Pyramid { .. } => SdfType::Pyramid,
            NodeKind::Hull { .. } => SdfType::Hull,
            NodeKind::Rounding { .. } => SdfType::Rounding,
            NodeKind::Elongation { .. } => SdfType::Elongation,
            NodeKind::Repetition { .. } => SdfType::Repetition,
            NodeKind::Union { .. } => SdfType::Union,
            NodeKind::Intersection { .. } => SdfType::Intersection,
            NodeKind::Substraction { .. } => SdfType::Substraction,
            NodeKind::Xor { .. } => SdfType::Xor,
            NodeKind::SmoothUnion { .. } => SdfType::SmoothUnion,
            NodeKind::SmoothIntersection { .. } => SdfType::SmoothIntersection,
            NodeKind::SmoothSubstraction { .. } => SdfType::SmoothSubstraction,
            NodeKind::Translation { .. } => SdfType::Translation,
            NodeKind::Rotation { .. } => SdfType::Rotation,
            NodeKind::RotationX { .. } => SdfType::RotationX,
            NodeKind::RotationY { .. } => SdfType::RotationY,
            NodeKind::RotationZ { .. } => SdfType::RotationZ,
            NodeKind::Scale { .. } => SdfType::Scale,
        }
    }

    /// Category of this node
    #[inline]
    pub fn category(&self) -> SdfCategory {
        self.sdf_type().category()
    }

    /// First child: the only child of unary nodes, `a` of binary nodes
    pub fn left(&self) -> Option<&SdfRef> {
        match &self.kind {
            NodeKind::Hull { child, .. }
            | NodeKind::Rounding { child, .. }
            | NodeKind::Elongation { child, .. }
            | NodeKind::Repetition { child, .. }
            | NodeKind::Translation { child, .. }
            | NodeKind::Rotation { child, .. }
            | NodeKind::RotationX { child, .. }
            | NodeKind::RotationY { child, .. }
            | NodeKind::RotationZ { child, .. }
            | NodeKind::Scale { child, .. } => Some(child),
            NodeKind::Union { a, .. }
            | NodeKind::Intersection { a, .. }
            | NodeKind::Substraction { a, .. }
            | NodeKind::Xor { a, .. }
            | NodeKind::SmoothUnion { a, .. }
            | NodeKind::SmoothIntersection { a, .. }
            | NodeKind::SmoothSubstraction { a, .. } => Some(a),
            _ => None,
        }
    }

    /// Second child of binary nodes
    pub fn right(&self) -> Option<&SdfRef> {
        match &self.kind {
            NodeKind::Union { b, .. }
            | NodeKind::Intersection { b, .. }
            | NodeKind::Substraction { b, .. }
            | NodeKind::Xor { b, .. }
            | NodeKind::SmoothUnion { b, .. }
            | NodeKind::SmoothIntersection { b, .. }
            | NodeKind::SmoothSubstraction { b, .. } => Some(b),
            _ => None,
        }
    }

    /// Mutable access to the first child, cloning it first if it is shared
    pub fn left_mut(&mut self) -> Option<&mut SdfNode> {
        match &mut self.kind {
            NodeKind::Hull { child, .. }
            | NodeKind::Rounding { child, .. }
            | NodeKind::Elongation { child, .. }
            | NodeKind::Repetition { child, .. }
            | NodeKind::Translation { child, .. }
            | NodeKind::Rotation { child, .. }
            | NodeKind::RotationX { child, .. }
            | NodeKind::RotationY { child, .. }
            | NodeKind::RotationZ { child, .. }
            | NodeKind::Scale { child, .. } => Some(Arc::make_mut(child)),
            NodeKind::Union { a, .. }
            | NodeKind::Intersection { a, .. }
            | NodeKind::Substraction { a, .. }
            | NodeKind::Xor { a, .. }
            | NodeKind::SmoothUnion { a, .. }
            | NodeKind::SmoothIntersection { a, .. }
            | NodeKind::SmoothSubstraction { a, .. } => Some(Arc::make_mut(a)),
            _ => None,
        }
    }

    /// Mutable access to the second child, cloning it first if it is shared
    pub fn right_mut(&mut self) -> Option<&mut SdfNode> {
        match &mut self.kind {
            NodeKind::Union { b, .. }
            | NodeKind::Intersection { b, .. }
            | NodeKind::Substraction { b, .. }
            | NodeKind::Xor { b, .. }
            | NodeKind::SmoothUnion { b, .. }
            | NodeKind::SmoothIntersection { b, .. }
            | NodeKind::SmoothSubstraction { b, .. } => Some(Arc::make_mut(b)),
            _ => None,
        }
    }

    /// True for nodes without children
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left().is_none()
    }

    /// Visit the subtree in pre-order (node, left subtree, right subtree)
    ///
    /// The callback receives each node and its depth below `self`.
    pub fn visit<F: FnMut(&SdfNode, usize)>(&self, f: &mut F) {
        self.visit_at(0, f);
    }

    fn visit_at<F: FnMut(&SdfNode, usize)>(&self, depth: usize, f: &mut F) {
        f(self, depth);
        if let Some(left) = self.left() {
            left.visit_at(depth + 1, f);
        }
        if let Some(right) = self.right() {
            right.visit_at(depth + 1, f);
        }
    }

    /// Pre-order listing of node types in this subtree
    pub fn tree_type(&self) -> Vec<SdfType> {
        let mut types = Vec::new();
        self.visit(&mut |node, _| types.push(node.sdf_type()));
        types
    }

    /// Count nodes in this subtree, counting shared children once per use
    pub fn node_count(&self) -> u32 {
        1 + self.left().map_or(0, |n| n.node_count()) + self.right().map_or(0, |n| n.node_count())
    }

    /// Length of the longest root-to-leaf path
    pub fn depth(&self) -> u32 {
        1 + self
            .left()
            .map_or(0, |n| n.depth())
            .max(self.right().map_or(0, |n| n.depth()))
    }
}

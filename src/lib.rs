//! # sdf-sculpt
//!
//! Constructive signed-distance-field modeling with a marching-cubes
//! polygonizer, plus Bernstein curves and surfaces.
//!
//! ## Features
//!
//! - **Primitives**: Sphere, Box, Torus, Plane, Capsule, Cylinder, Cone,
//!   Ellipsoid, Octahedron, Pyramid
//! - **Operations**: Union, Intersection, Substraction, Xor (smooth variants)
//! - **Transforms**: Translation, Rotation (axis-angle, X/Y/Z), Scale
//! - **Unary operators**: Hull, Rounding, Elongation, Repetition
//! - **Polygonization**: two-layer marching cubes with bisection refinement
//! - **Ray queries**: fixed-step marching and sphere tracing
//! - **Parametric**: Bézier splines, surfaces of revolution, patches
//! - **File I/O**: JSON trees
//!
//! ## Example
//!
//! ```rust
//! use sdf_sculpt::prelude::*;
//!
//! // Sphere with a cylindrical hole
//! let shape = SdfNode::sphere(Vec3::ZERO, 1.0)
//!     .subtract(SdfNode::cylinder(0.4, 2.0));
//!
//! // Evaluate distance at a point
//! assert!(shape.value(Vec3::new(0.7, 0.0, 0.0)) < 0.0);
//! assert!(shape.value(Vec3::ZERO) > 0.0);
//!
//! // Convert to mesh
//! let tree = SdfTree::new(shape);
//! let mesh = tree.polygonize(32, &Aabb::cube(1.5));
//! assert!(mesh.triangle_count() > 0);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod eval;
pub mod io;
pub mod mesh;
pub mod modifiers;
pub mod operations;
pub mod parametric;
pub mod primitives;
pub mod raycast;
pub mod transforms;
pub mod types;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::error::{SdfError, SdfResult};
    pub use crate::eval::{
        eval, eval_batch, eval_batch_parallel, eval_counted, gradient, normal, EvalCounter,
        ScalarField,
    };
    pub use crate::io::{load, save};
    pub use crate::mesh::{dichotomy, marching_cubes, MarchingCubesConfig, Mesh, Topology};
    pub use crate::parametric::{BezierPatch, ControlGrid, Curve, Revolution, Spline};
    pub use crate::raycast::{intersect, raymarch, RaymarchConfig};
    pub use crate::types::{
        Aabb, Hit, IntersectMethod, NodeKind, Ray, SdfCategory, SdfNode, SdfRef, SdfTree, SdfType,
    };
    pub use glam::{DVec3, Quat, Vec3};
}

// Re-exports for convenience
pub use error::{SdfError, SdfResult};
pub use eval::{eval, ScalarField};
pub use io::{load, save};
pub use types::{SdfNode, SdfTree};

//! SDF evaluation
//!
//! Recursive tree evaluation, finite-difference gradients and the
//! [`ScalarField`] protocol shared by nodes and trees.

mod counter;
mod parallel;

pub use counter::EvalCounter;
pub use parallel::{eval_batch, eval_batch_parallel};

use crate::modifiers::*;
use crate::operations::*;
use crate::primitives::*;
use crate::transforms::*;
use crate::types::{NodeKind, SdfNode};
use glam::Vec3;

/// Step used by the central-difference gradient
pub const GRADIENT_EPSILON: f32 = 1e-4;

/// A scalar field whose negative region is the solid
///
/// Implemented by [`SdfNode`] and [`crate::types::SdfTree`]; the polygonizer
/// and the ray queries accept any implementor.
pub trait ScalarField {
    /// Field value at `point`, recording every node visit in `counter`
    fn value_with(&self, point: Vec3, counter: Option<&EvalCounter>) -> f32;

    /// Field value at `point`
    #[inline]
    fn value(&self, point: Vec3) -> f32 {
        self.value_with(point, None)
    }

    /// Field value at `point`, counting node visits
    #[inline]
    fn value_counted(&self, point: Vec3, counter: &EvalCounter) -> f32 {
        self.value_with(point, Some(counter))
    }

    /// True when `point` lies strictly inside the solid
    #[inline]
    fn inside(&self, point: Vec3) -> bool {
        self.value(point) < 0.0
    }

    /// Central-difference gradient with step [`GRADIENT_EPSILON`]
    fn gradient_with(&self, point: Vec3, counter: Option<&EvalCounter>) -> Vec3 {
        central_difference(|p| self.value_with(p, counter), point, GRADIENT_EPSILON)
    }

    /// Central-difference gradient with step [`GRADIENT_EPSILON`]
    #[inline]
    fn gradient(&self, point: Vec3) -> Vec3 {
        self.gradient_with(point, None)
    }

    /// Normalized gradient; `Vec3::Y` where the gradient vanishes
    #[inline]
    fn normal(&self, point: Vec3) -> Vec3 {
        self.gradient(point).try_normalize().unwrap_or(Vec3::Y)
    }
}

impl ScalarField for SdfNode {
    #[inline]
    fn value_with(&self, point: Vec3, counter: Option<&EvalCounter>) -> f32 {
        eval_node(self, point, counter)
    }
}

/// Evaluate an SDF tree at a single point
///
/// Recursively traverses the tree and computes the signed distance.
///
/// # Arguments
/// * `node` - The SDF tree root
/// * `point` - Point to evaluate
///
/// # Returns
/// Signed distance to the surface
#[inline]
pub fn eval(node: &SdfNode, point: Vec3) -> f32 {
    eval_node(node, point, None)
}

/// Evaluate like [`eval`], adding one to `counter` per node visited
#[inline]
pub fn eval_counted(node: &SdfNode, point: Vec3, counter: &EvalCounter) -> f32 {
    eval_node(node, point, Some(counter))
}

fn eval_node(node: &SdfNode, point: Vec3, counter: Option<&EvalCounter>) -> f32 {
    if let Some(counter) = counter {
        counter.record();
    }
    let child = |n: &SdfNode, p: Vec3| eval_node(n, p, counter);

    match &node.kind {
        // === Primitives ===
        NodeKind::Sphere { center, radius } => sdf_sphere_at(point, *center, *radius),
        NodeKind::Box { min, max } => sdf_box_corners(point, *min, *max),
        NodeKind::Torus {
            major_radius,
            minor_radius,
        } => sdf_torus(point, *major_radius, *minor_radius),
        NodeKind::Plane { normal, height } => sdf_plane(point, *normal, *height),
        NodeKind::Capsule { radius, height } => sdf_capsule_vertical(point, *radius, *height),
        NodeKind::Cylinder { radius, height } => sdf_cylinder(point, *radius, *height),
        NodeKind::Cone { radius, height } => sdf_cone(point, *radius, *height),
        NodeKind::Ellipsoid { radii } => sdf_ellipsoid(point, *radii),
        NodeKind::Octahedron { size } => sdf_octahedron(point, *size),
        NodeKind::Pyramid { height } => sdf_pyramid(point, *height),

        // === Unary operators ===
        NodeKind::Hull { child: c, thickness } => modifier_hull(child(c, point), *thickness),
        NodeKind::Rounding { child: c, radius } => modifier_round(child(c, point), *radius),
        NodeKind::Elongation { child: c, extent } => child(c, modifier_elongate(point, *extent)),
        NodeKind::Repetition { child: c, period } => {
            child(c, modifier_repeat_infinite(point, *period))
        }

        // === Binary operators ===
        NodeKind::Union { a, b } => sdf_union(child(a, point), child(b, point)),
        NodeKind::Intersection { a, b } => sdf_intersection(child(a, point), child(b, point)),
        NodeKind::Substraction { a, b } => sdf_subtraction(child(a, point), child(b, point)),
        NodeKind::Xor { a, b } => sdf_xor(child(a, point), child(b, point)),
        NodeKind::SmoothUnion { a, b, k } => {
            sdf_smooth_union(child(a, point), child(b, point), *k)
        }
        NodeKind::SmoothIntersection { a, b, k } => {
            sdf_smooth_intersection(child(a, point), child(b, point), *k)
        }
        NodeKind::SmoothSubstraction { a, b, k } => {
            sdf_smooth_subtraction(child(a, point), child(b, point), *k)
        }

        // === Transforms ===
        NodeKind::Translation { child: c, offset } => {
            child(c, transform_translate(point, *offset))
        }
        NodeKind::Rotation { child: c, axis, angle } => {
            child(c, transform_rotate(point, *axis, *angle))
        }
        NodeKind::RotationX { child: c, angle } => child(c, transform_rotate_x(point, *angle)),
        NodeKind::RotationY { child: c, angle } => child(c, transform_rotate_y(point, *angle)),
        NodeKind::RotationZ { child: c, angle } => child(c, transform_rotate_z(point, *angle)),
        NodeKind::Scale { child: c, factor } => {
            child(c, transform_scale(point, *factor)) * *factor
        }
    }
}

/// Central difference of `f` at `point` with step `epsilon` on each axis
pub(crate) fn central_difference<F: Fn(Vec3) -> f32>(f: F, point: Vec3, epsilon: f32) -> Vec3 {
    let ex = Vec3::new(epsilon, 0.0, 0.0);
    let ey = Vec3::new(0.0, epsilon, 0.0);
    let ez = Vec3::new(0.0, 0.0, epsilon);
    Vec3::new(
        f(point + ex) - f(point - ex),
        f(point + ey) - f(point - ey),
        f(point + ez) - f(point - ez),
    ) / (2.0 * epsilon)
}

/// Compute the gradient of the SDF at a point
///
/// Not normalized; see [`normal`].
#[inline]
pub fn gradient(node: &SdfNode, point: Vec3, epsilon: f32) -> Vec3 {
    central_difference(|p| eval(node, p), point, epsilon)
}

/// Compute the surface normal at a point using finite differences
///
/// # Arguments
/// * `node` - The SDF tree
/// * `point` - Point on or near the surface
/// * `epsilon` - Small offset for gradient estimation
///
/// # Returns
/// Normalized surface normal, `Vec3::Y` where the gradient vanishes
#[inline]
pub fn normal(node: &SdfNode, point: Vec3, epsilon: f32) -> Vec3 {
    gradient(node, point, epsilon)
        .try_normalize()
        .unwrap_or(Vec3::Y)
}

//! Ray intersection for SDFs
//!
//! Two families of queries:
//! - [`intersect`]: the boolean inside-test along a ray, either by fixed
//!   steps (`RayMarching`) or by adaptive steps scaled by a Lipschitz factor
//!   (`SphereTracing`). Bounded by [`S_LIMIT`] steps.
//! - [`raymarch`]: sphere tracing that reports the hit distance, point and
//!   normal.

mod march;

pub use march::{raymarch, raymarch_batch_parallel, RaymarchConfig};

use crate::eval::ScalarField;
use crate::types::{IntersectMethod, Ray, SdfNode, SdfTree};

/// Maximum number of steps taken by [`intersect`]
pub const S_LIMIT: u32 = 10_000;

/// Test whether a ray enters the solid within [`S_LIMIT`] steps
///
/// - `RayMarching` samples at `t = 0, eps, 2·eps, ...` and reports the first
///   sample with a negative value. Features thinner than `eps` can be missed.
/// - `SphereTracing` advances by `max(value, eps) / lambda`. `lambda` must
///   bound the field's Lipschitz constant or the march can tunnel through
///   the surface. A non-positive `lambda` is treated as 1.
pub fn intersect<F: ScalarField + ?Sized>(
    field: &F,
    ray: &Ray,
    eps: f32,
    method: IntersectMethod,
    lambda: f32,
) -> bool {
    match method {
        IntersectMethod::RayMarching => {
            let mut t = 0.0;
            for _ in 0..S_LIMIT {
                if field.value(ray.at(t)) < 0.0 {
                    return true;
                }
                t += eps;
            }
            false
        }
        IntersectMethod::SphereTracing => {
            let lambda = if lambda > 0.0 { lambda } else { 1.0 };
            let mut t = 0.0;
            for _ in 0..S_LIMIT {
                let v = field.value(ray.at(t));
                if v < 0.0 {
                    return true;
                }
                t += v.max(eps) / lambda;
            }
            false
        }
    }
}

impl SdfNode {
    /// Ray query using this node's `intersect_method` and `lambda`
    pub fn intersect(&self, ray: &Ray, eps: f32) -> bool {
        intersect(self, ray, eps, self.intersect_method, self.lambda)
    }
}

impl SdfTree {
    /// Ray query using the tree's `intersect_method` and `lambda`
    ///
    /// Always false for an empty tree.
    pub fn intersect(&self, ray: &Ray, eps: f32) -> bool {
        !self.is_empty() && intersect(self, ray, eps, self.intersect_method, self.lambda)
    }
}

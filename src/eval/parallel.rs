//! Batch SDF evaluation
//!
//! Evaluates a field at many points, sequentially or with rayon. The
//! polygonizer does not use these; they serve callers that probe a field in
//! bulk (picking, previews, benchmarks).

use super::ScalarField;
use glam::Vec3;
use rayon::prelude::*;

/// Evaluate a field at multiple points (single-threaded)
///
/// # Arguments
/// * `field` - Node or tree to evaluate
/// * `points` - Slice of points to evaluate
///
/// # Returns
/// Vector of distances, in the order of `points`
#[inline]
pub fn eval_batch<F: ScalarField + ?Sized>(field: &F, points: &[Vec3]) -> Vec<f32> {
    points.iter().map(|&p| field.value(p)).collect()
}

/// Evaluate a field at multiple points (parallel)
///
/// Uses rayon for parallel iteration over points. Output order matches
/// `points`.
#[inline]
pub fn eval_batch_parallel<F: ScalarField + Sync + ?Sized>(field: &F, points: &[Vec3]) -> Vec<f32> {
    points.par_iter().map(|&p| field.value(p)).collect()
}

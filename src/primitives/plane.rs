//! Plane primitive SDF

use glam::Vec3;

/// Signed distance to an infinite plane
///
/// # Arguments
/// * `point` - Point to evaluate
/// * `normal` - Plane normal (should be normalized)
/// * `height` - Offset added to the projection, the plane passes through
///   `-height * normal`
///
/// # Returns
/// Signed distance (negative below plane, positive above)
#[inline(always)]
pub fn sdf_plane(point: Vec3, normal: Vec3, height: f32) -> f32 {
    point.dot(normal) + height
}

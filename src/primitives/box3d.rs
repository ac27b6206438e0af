//! Box primitive SDF

use glam::Vec3;

/// Signed distance to an axis-aligned box centered at origin
///
/// # Arguments
/// * `point` - Point to evaluate
/// * `half_extents` - Half-size along each axis
///
/// # Returns
/// Signed distance (negative inside, positive outside)
#[inline(always)]
pub fn sdf_box3d(point: Vec3, half_extents: Vec3) -> f32 {
    let q = point.abs() - half_extents;
    q.max(Vec3::ZERO).length() + q.x.max(q.y.max(q.z)).min(0.0)
}

/// Signed distance to an axis-aligned box spanning two corners
#[inline(always)]
pub fn sdf_box_corners(point: Vec3, min: Vec3, max: Vec3) -> f32 {
    sdf_box3d(point - (min + max) * 0.5, (max - min) * 0.5)
}

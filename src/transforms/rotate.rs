//! Rotation transforms for SDFs
//!
//! Every function applies the inverse rotation to the query point, so the
//! child field appears rotated by `angle`.

use glam::{Quat, Vec3};

/// Inverse rotation around an arbitrary axis
///
/// A zero axis leaves the point unchanged.
#[inline(always)]
pub fn transform_rotate(point: Vec3, axis: Vec3, angle: f32) -> Vec3 {
    match axis.try_normalize() {
        Some(axis) => Quat::from_axis_angle(axis, -angle) * point,
        None => point,
    }
}

/// Inverse rotation around the X axis
#[inline(always)]
pub fn transform_rotate_x(point: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(point.x, c * point.y + s * point.z, -s * point.y + c * point.z)
}

/// Inverse rotation around the Y axis
#[inline(always)]
pub fn transform_rotate_y(point: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(c * point.x - s * point.z, point.y, s * point.x + c * point.z)
}

/// Inverse rotation around the Z axis
#[inline(always)]
pub fn transform_rotate_z(point: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(c * point.x + s * point.y, -s * point.x + c * point.y, point.z)
}

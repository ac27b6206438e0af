//! Repetition modifier for SDFs

use glam::Vec3;

#[inline(always)]
fn wrap(x: f32, spacing: f32) -> f32 {
    if spacing > 0.0 {
        x - spacing * (x / spacing).round()
    } else {
        x
    }
}

/// Infinite repetition along all axes
///
/// `p - s * round(p / s)` maps each coordinate into `[-s/2, s/2]`. Axes with
/// a non-positive spacing are left untouched.
#[inline(always)]
pub fn modifier_repeat_infinite(point: Vec3, spacing: Vec3) -> Vec3 {
    Vec3::new(
        wrap(point.x, spacing.x),
        wrap(point.y, spacing.y),
        wrap(point.z, spacing.z),
    )
}

//! Cone primitive SDF

use glam::Vec3;

/// Exact SDF for a capped cone along Y-axis
///
/// - Base circle at y = -half_height with given radius
/// - Tip at y = half_height
#[inline(always)]
pub fn sdf_cone(p: Vec3, radius: f32, half_height: f32) -> f32 {
    let q_x = (p.x * p.x + p.z * p.z).sqrt();
    let q_y = p.y;
    let h = half_height;

    // Mantle direction from the tip to the base rim
    let k2x = -radius;
    let k2y = 2.0 * h;

    // Closest point on the caps
    let ca_r = if q_y < 0.0 { radius } else { 0.0 };
    let ca_x = q_x - q_x.min(ca_r);
    let ca_y = q_y.abs() - h;

    // Closest point on the mantle
    let diff_x = -q_x;
    let diff_y = h - q_y;
    let t = ((diff_x * k2x + diff_y * k2y) / (k2x * k2x + k2y * k2y)).clamp(0.0, 1.0);
    let cb_x = q_x + k2x * t;
    let cb_y = q_y - h + k2y * t;

    let s = if cb_x < 0.0 && ca_y < 0.0 { -1.0 } else { 1.0 };
    let d2 = (ca_x * ca_x + ca_y * ca_y).min(cb_x * cb_x + cb_y * cb_y);

    s * d2.sqrt()
}

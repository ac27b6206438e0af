//! Capsule primitive SDF

use glam::Vec3;

/// Signed distance to a vertical capsule
///
/// The core segment runs from the origin to `(0, height, 0)`.
///
/// # Arguments
/// * `point` - Point to evaluate
/// * `radius` - Capsule radius
/// * `height` - Segment length
#[inline(always)]
pub fn sdf_capsule_vertical(point: Vec3, radius: f32, height: f32) -> f32 {
    let mut p = point;
    p.y -= p.y.clamp(0.0, height.max(0.0));
    p.length() - radius
}

/// Signed distance to a capsule between two points
#[inline(always)]
pub fn sdf_capsule(point: Vec3, a: Vec3, b: Vec3, radius: f32) -> f32 {
    let pa = point - a;
    let ba = b - a;
    let denom = ba.dot(ba);
    let h = if denom > 0.0 {
        (pa.dot(ba) / denom).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (pa - ba * h).length() - radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_capsule_axis() {
        assert!((sdf_capsule_vertical(Vec3::new(0.0, 0.5, 0.0), 0.25, 1.0) + 0.25).abs() < 0.0001);
        assert!(sdf_capsule_vertical(Vec3::new(0.25, 0.5, 0.0), 0.25, 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_vertical_capsule_caps() {
        assert!(sdf_capsule_vertical(Vec3::new(0.0, 1.25, 0.0), 0.25, 1.0).abs() < 0.0001);
        assert!(sdf_capsule_vertical(Vec3::new(0.0, -0.25, 0.0), 0.25, 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_capsule_matches_vertical() {
        let p = Vec3::new(0.3, 0.7, -0.2);
        let a = sdf_capsule(p, Vec3::ZERO, Vec3::Y, 0.1);
        let b = sdf_capsule_vertical(p, 0.1, 1.0);
        assert!((a - b).abs() < 0.0001);
    }

    #[test]
    fn test_degenerate_capsule_is_sphere() {
        let d = sdf_capsule(Vec3::new(2.0, 0.0, 0.0), Vec3::ZERO, Vec3::ZERO, 1.0);
        assert!((d - 1.0).abs() < 0.0001);
    }
}

//! Pyramid primitive SDF

use glam::Vec3;

/// SDF for a 4-sided pyramid centered at origin
///
/// - Square base (side = 1) at y = -half_height
/// - Tip at y = half_height
/// - Use a Scale node to change the base size
#[inline(always)]
pub fn sdf_pyramid(p: Vec3, half_height: f32) -> f32 {
    let h = half_height * 2.0;
    let m2 = h * h + 0.25;

    // Shift to base at y = 0
    let py = p.y + half_height;

    let mut px = p.x.abs();
    let mut pz = p.z.abs();
    if pz > px {
        std::mem::swap(&mut px, &mut pz);
    }
    px -= 0.5;
    pz -= 0.5;

    let qx = pz;
    let qy = h * py - 0.5 * px;
    let qz = h * px + 0.5 * py;

    let s = (-qx).max(0.0);
    let t = ((qy - 0.5 * pz) / (m2 + 0.25)).clamp(0.0, 1.0);

    let a = m2 * (qx + s) * (qx + s) + qy * qy;
    let b = m2 * (qx + 0.5 * t) * (qx + 0.5 * t) + (qy - m2 * t) * (qy - m2 * t);

    let d2 = if qy.min(-qx * m2 - qy * 0.5) > 0.0 {
        0.0
    } else {
        a.min(b)
    };

    ((d2 + qz * qz) / m2).sqrt() * qz.max(-py).signum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pyramid_inside() {
        assert!(sdf_pyramid(Vec3::ZERO, 0.5) < 0.0);
        assert!(sdf_pyramid(Vec3::new(0.0, -0.25, 0.0), 0.5) < 0.0);
    }

    #[test]
    fn test_pyramid_tip() {
        assert!(sdf_pyramid(Vec3::new(0.0, 0.5, 0.0), 0.5).abs() < 0.0001);
        let d = sdf_pyramid(Vec3::new(0.0, 2.0, 0.0), 0.5);
        assert!((d - 1.5).abs() < 0.0001);
    }

    #[test]
    fn test_pyramid_below_base() {
        assert!(sdf_pyramid(Vec3::new(0.0, -2.0, 0.0), 0.5) > 0.0);
    }
}

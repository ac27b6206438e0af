//! Torus primitive SDF

use glam::{Vec2, Vec3};

/// Signed distance to a torus in the XZ plane centered at origin
///
/// # Arguments
/// * `point` - Point to evaluate
/// * `major_radius` - Distance from center of torus to center of tube
/// * `minor_radius` - Radius of the tube
///
/// # Returns
/// Signed distance (negative inside, positive outside)
#[inline(always)]
pub fn sdf_torus(point: Vec3, major_radius: f32, minor_radius: f32) -> f32 {
    let q = Vec2::new(Vec2::new(point.x, point.z).length() - major_radius, point.y);
    q.length() - minor_radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_torus_tube_center() {
        let d = sdf_torus(Vec3::new(1.0, 0.0, 0.0), 1.0, 0.25);
        assert!((d + 0.25).abs() < 0.0001);
    }

    #[test]
    fn test_torus_hole_is_outside() {
        let d = sdf_torus(Vec3::ZERO, 1.0, 0.25);
        assert!((d - 0.75).abs() < 0.0001);
    }

    #[test]
    fn test_torus_surface() {
        assert!(sdf_torus(Vec3::new(0.0, 0.25, 1.0), 1.0, 0.25).abs() < 0.0001);
    }
}

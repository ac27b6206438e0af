//! Uniform scale transform for SDFs

use glam::Vec3;

/// Map a query point into the child's frame for a uniform scale
///
/// The child's distance must be multiplied by `factor` afterwards.
#[inline(always)]
pub fn transform_scale(point: Vec3, factor: f32) -> Vec3 {
    point / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale() {
        let p = transform_scale(Vec3::new(2.0, 4.0, 6.0), 2.0);
        assert_eq!(p, Vec3::new(1.0, 2.0, 3.0));
    }
}

//! Translation transform for SDFs

use glam::Vec3;

/// Map a query point into the frame of a child moved by `offset`
#[inline(always)]
pub fn transform_translate(point: Vec3, offset: Vec3) -> Vec3 {
    point - offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_moves_origin() {
        let offset = Vec3::new(1.0, -2.0, 0.5);
        assert_eq!(transform_translate(offset, offset), Vec3::ZERO);
        assert_eq!(
            transform_translate(Vec3::new(1.0, 2.0, 3.0), Vec3::ONE),
            Vec3::new(0.0, 1.0, 2.0)
        );
    }
}

//! Rounding modifier for SDFs

/// Inflate a shape by `radius`, rounding its edges
#[inline(always)]
pub fn modifier_round(distance: f32, radius: f32) -> f32 {
    distance - radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round() {
        assert_eq!(modifier_round(0.5, 0.25), 0.25);
    }
}

//! Hard boolean operators
//!
//! Each combines the two child distances at one point; the result is a
//! bound on the distance rather than an exact distance.

/// Union: inside either shape
#[inline(always)]
pub fn sdf_union(d1: f32, d2: f32) -> f32 {
    d1.min(d2)
}

/// Intersection: inside both shapes
#[inline(always)]
pub fn sdf_intersection(d1: f32, d2: f32) -> f32 {
    d1.max(d2)
}

/// Substraction: inside the first shape and outside the second
#[inline(always)]
pub fn sdf_subtraction(d1: f32, d2: f32) -> f32 {
    d1.max(-d2)
}

/// Symmetric difference: inside exactly one shape
///
/// `max(min(a, b), −max(a, b))`
#[inline(always)]
pub fn sdf_xor(a: f32, b: f32) -> f32 {
    a.min(b).max(-a.max(b))
}

//! Smooth CSG operations for SDFs
//!
//! Polynomial blending: with `h = max(k - |a - b|, 0)` the correction is
//! `h² / (4k)`. A blend radius of zero (or less) selects the hard operator
//! exactly.

/// Polynomial blend correction for two distances that differ by `diff`
#[inline(always)]
fn blend(diff: f32, k: f32) -> f32 {
    if k > 0.0 {
        let h = (k - diff.abs()).max(0.0);
        h * h * 0.25 / k
    } else {
        0.0
    }
}

/// Polynomial smooth minimum
#[inline(always)]
pub fn smooth_min(a: f32, b: f32, k: f32) -> f32 {
    a.min(b) - blend(a - b, k)
}

/// Polynomial smooth maximum
#[inline(always)]
pub fn smooth_max(a: f32, b: f32, k: f32) -> f32 {
    a.max(b) + blend(a - b, k)
}

/// Smooth union of two SDFs
#[inline(always)]
pub fn sdf_smooth_union(d1: f32, d2: f32, k: f32) -> f32 {
    smooth_min(d1, d2, k)
}

/// Smooth intersection of two SDFs
#[inline(always)]
pub fn sdf_smooth_intersection(d1: f32, d2: f32, k: f32) -> f32 {
    smooth_max(d1, d2, k)
}

/// Smooth subtraction of B from A
#[inline(always)]
pub fn sdf_smooth_subtraction(d1: f32, d2: f32, k: f32) -> f32 {
    smooth_max(d1, -d2, k)
}

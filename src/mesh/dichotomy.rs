//! Surface-point refinement on a straddling edge

use crate::eval::ScalarField;
use glam::Vec3;

/// Default length below which refinement stops
pub const DICHOTOMY_EPSILON: f32 = 1e-4;

/// Locate the zero crossing between `a` and `b`
///
/// `va` and `vb` are the field values at the endpoints and must differ in
/// sign (negative vs. non-negative). The first guess is the linear
/// interpolation of the two samples; bisection then keeps the half that
/// still straddles the surface, halving `length` each round until it drops
/// to `epsilon`.
///
/// # Arguments
/// * `field` - Field being polygonized
/// * `a`, `b` - Edge endpoints
/// * `va`, `vb` - Field values at `a` and `b`
/// * `length` - Initial edge length
/// * `epsilon` - Stopping length
pub fn dichotomy<F: ScalarField + ?Sized>(
    field: &F,
    mut a: Vec3,
    mut b: Vec3,
    va: f32,
    vb: f32,
    mut length: f32,
    epsilon: f32,
) -> Vec3 {
    let denom = vb - va;
    let mut c = if denom != 0.0 {
        (a * vb - b * va) / denom
    } else {
        (a + b) * 0.5
    };

    let ia = va < 0.0;
    while length > epsilon {
        let ic = field.value(c) < 0.0;
        if ia != ic {
            b = c;
        } else {
            a = c;
        }
        length *= 0.5;
        c = (a + b) * 0.5;
    }
    c
}

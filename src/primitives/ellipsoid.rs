//! Ellipsoid primitive SDF

use glam::Vec3;

/// Approximate SDF for an ellipsoid centered at origin
///
/// Uses Inigo Quilez's bound, exact on the axes and close elsewhere.
///
/// # Arguments
/// * `p` - Point to evaluate
/// * `radii` - Semi-axes lengths (x, y, z)
#[inline(always)]
pub fn sdf_ellipsoid(p: Vec3, radii: Vec3) -> f32 {
    // Zero radii would divide by zero below
    let safe_radii = radii.max(Vec3::splat(1e-10));
    let k0 = (p / safe_radii).length();
    let k1 = (p / (safe_radii * safe_radii)).length();
    if k1 < 1e-10 {
        return -safe_radii.min_element();
    }
    k0 * (k0 - 1.0) / k1
}

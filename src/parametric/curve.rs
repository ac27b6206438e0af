//! Parametric curves and their moving frame

use glam::DVec3;

/// Step of the finite-difference derivatives
pub const DERIVATIVE_EPSILON: f64 = 1e-4;

/// Tangents this close to world-up take world-Z as the normal reference
const PARALLEL_THRESHOLD: f64 = 0.999;

/// A curve parameterized over `[0, 1]`
///
/// Only [`Curve::point`] is required; the frame is derived from finite
/// differences.
pub trait Curve {
    /// Point at parameter `t`
    fn point(&self, t: f64) -> DVec3;

    /// Unit tangent (normalized central first derivative)
    fn tangent(&self, t: f64) -> DVec3 {
        first_derivative(self, t, DERIVATIVE_EPSILON).normalize_or_zero()
    }

    /// Unit normal: world-up made orthogonal to the tangent, or world-Z
    /// when the tangent is nearly vertical
    fn normal(&self, t: f64) -> DVec3 {
        let tangent = self.tangent(t);
        let reference = if tangent.dot(DVec3::Y).abs() > PARALLEL_THRESHOLD {
            DVec3::Z
        } else {
            DVec3::Y
        };
        (reference - tangent * tangent.dot(reference)).normalize_or_zero()
    }

    /// Unit binormal, `tangent × normal`
    fn binormal(&self, t: f64) -> DVec3 {
        self.tangent(t).cross(self.normal(t)).normalize_or_zero()
    }
}

/// Central difference `(c(t+e) − c(t−e)) / 2e`
pub fn first_derivative<C: Curve + ?Sized>(curve: &C, t: f64, e: f64) -> DVec3 {
    (curve.point(t + e) - curve.point(t - e)) / (2.0 * e)
}

/// Central second difference `(c(t+e) − 2c(t) + c(t−e)) / e²`
pub fn second_derivative<C: Curve + ?Sized>(curve: &C, t: f64, e: f64) -> DVec3 {
    (curve.point(t + e) - 2.0 * curve.point(t) + curve.point(t - e)) / (e * e)
}

//! Bernstein (Bézier) curves

use super::bernstein::bernstein;
use super::curve::Curve;
use super::sampling::curve_points;
use crate::error::{SdfError, SdfResult};
use crate::mesh::{Mesh, Topology};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Bézier curve over its control polygon
///
/// `point(t) = Σ P_k·B(t, k, N−1)` for `N` control points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spline {
    control_points: Vec<DVec3>,
}

impl Spline {
    /// Create a spline from its control points
    pub fn new(control_points: Vec<DVec3>) -> Self {
        Spline { control_points }
    }

    /// Control points in order
    #[inline]
    pub fn control_points(&self) -> &[DVec3] {
        &self.control_points
    }

    /// Mutable control points, for interactive editing
    #[inline]
    pub fn control_points_mut(&mut self) -> &mut Vec<DVec3> {
        &mut self.control_points
    }

    /// Number of control points
    #[inline]
    pub fn point_count(&self) -> usize {
        self.control_points.len()
    }

    /// Degree of the curve (`N − 1`)
    #[inline]
    pub fn degree(&self) -> usize {
        self.control_points.len().saturating_sub(1)
    }

    /// Reject meshing requests the curve cannot serve
    pub(crate) fn check_meshable(&self, resolution: usize) -> SdfResult<()> {
        SdfError::check_resolution(resolution, 3)?;
        if self.control_points.len() <= 1 {
            return Err(SdfError::NotEnoughControlPoints {
                got: self.control_points.len(),
                required: 1,
            });
        }
        Ok(())
    }

    /// Sample the curve as a line strip of `resolution` points
    pub fn polygonize(&self, resolution: usize) -> SdfResult<Mesh> {
        self.check_meshable(resolution)?;
        let mut mesh = Mesh::new(Topology::LineStrip);
        for p in curve_points(resolution, |t| self.point(t)) {
            mesh.push_vertex(p.as_vec3());
        }
        Ok(mesh)
    }
}

impl Curve for Spline {
    fn point(&self, t: f64) -> DVec3 {
        let degree = self.degree();
        self.control_points
            .iter()
            .enumerate()
            .map(|(k, &p)| p * bernstein(t, k, degree))
            .sum()
    }
}
